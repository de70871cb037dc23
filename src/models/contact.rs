use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::models::non_empty;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContactStatus {
    New,
    InProgress,
    Resolved,
}

/// Persisted contact message. Append-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactRecord {
    pub id: String,
    pub name: String,
    pub email: String,
    pub message: String,
    pub status: ContactStatus,
    pub created_at: DateTime<Utc>,
}

/// Raw `POST /api/contact` body.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactRequest {
    pub fn validate(self) -> Result<ContactSubmission, ApiError> {
        let name = non_empty(self.name).ok_or_else(fields_required)?;
        let email = non_empty(self.email)
            .ok_or_else(fields_required)?
            .to_lowercase();
        let message = non_empty(self.message).ok_or_else(fields_required)?;

        Ok(ContactSubmission {
            name,
            email,
            message,
        })
    }
}

fn fields_required() -> ApiError {
    ApiError::Validation("All fields are required".to_string())
}

/// Identifier returned on a successful contact submission.
#[derive(Debug, Serialize, Deserialize)]
pub struct ContactReceipt {
    pub id: String,
}
