use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::models::non_empty;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    Completed,
    Failed,
}

/// Persisted payment document. Append-only: written once on submission,
/// never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRecord {
    pub service_number: String,
    pub consumer_name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub units: u64,
    pub amount: f64,
    pub transaction_id: String,
    pub status: PaymentStatus,
    pub created_at: DateTime<Utc>,
}

/// Raw `POST /api/payments` body. Every field is optional so a missing
/// value surfaces as a validation failure rather than a deserialization
/// rejection.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    pub service_number: Option<String>,
    pub consumer_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub units: Option<i64>,
    pub amount: Option<f64>,
}

/// A payment request that passed boundary validation.
#[derive(Debug, Clone)]
pub struct PaymentSubmission {
    pub service_number: String,
    pub consumer_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub units: u64,
    pub amount: Option<f64>,
}

impl PaymentRequest {
    /// serviceNumber, consumerName, email and units are required; email is
    /// lowercased and all strings trimmed before use.
    pub fn validate(self) -> Result<PaymentSubmission, ApiError> {
        let service_number = non_empty(self.service_number).ok_or_else(missing_fields)?;
        let consumer_name = non_empty(self.consumer_name).ok_or_else(missing_fields)?;
        let email = non_empty(self.email)
            .ok_or_else(missing_fields)?
            .to_lowercase();
        let units = self.units.ok_or_else(missing_fields)?;

        if units < 0 {
            return Err(ApiError::Validation(
                "Units consumed cannot be negative".to_string(),
            ));
        }

        if let Some(amount) = self.amount {
            if amount < 0.0 {
                return Err(ApiError::Validation(
                    "Amount cannot be negative".to_string(),
                ));
            }
        }

        Ok(PaymentSubmission {
            service_number,
            consumer_name,
            email,
            phone: non_empty(self.phone),
            units: units as u64,
            amount: self.amount,
        })
    }
}

fn missing_fields() -> ApiError {
    ApiError::Validation("Missing required fields".to_string())
}

/// Public fields echoed back on a successful submission.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentReceipt {
    pub transaction_id: String,
    pub amount: f64,
    pub service_number: String,
    pub consumer_name: String,
    pub units: u64,
    pub created_at: DateTime<Utc>,
}

impl From<&PaymentRecord> for PaymentReceipt {
    fn from(record: &PaymentRecord) -> Self {
        Self {
            transaction_id: record.transaction_id.clone(),
            amount: record.amount,
            service_number: record.service_number.clone(),
            consumer_name: record.consumer_name.clone(),
            units: record.units,
            created_at: record.created_at,
        }
    }
}
