use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    error::ApiError,
    models::{
        ContactRecord, ContactRequest, ContactStatus, PaymentRecord, PaymentRequest,
        PaymentStatus,
    },
    services::store::{DocumentStore, CONTACTS, PAYMENTS},
    tariff,
};

/// How many records a payment listing returns.
const RECENT_LIMIT: usize = 10;

/// Accepts payment and contact submissions, validates them at the
/// boundary and persists one document per successful call.
pub struct RecordService {
    store: Arc<dyn DocumentStore>,
}

impl RecordService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Validates and persists one payment. When the client omits the
    /// amount it is computed from the submitted units with the slab
    /// tariff. Resubmission creates a new record; there is no
    /// deduplication.
    pub async fn submit_payment(
        &self,
        request: PaymentRequest,
    ) -> Result<PaymentRecord, ApiError> {
        let submission = request.validate()?;

        let amount = submission
            .amount
            .unwrap_or_else(|| tariff::bill_amount(submission.units));

        let record = PaymentRecord {
            service_number: submission.service_number,
            consumer_name: submission.consumer_name,
            email: submission.email,
            phone: submission.phone,
            units: submission.units,
            amount,
            transaction_id: new_transaction_id(),
            status: PaymentStatus::Completed,
            created_at: Utc::now(),
        };

        self.store
            .insert(PAYMENTS, serde_json::to_value(&record)?)
            .await?;

        tracing::info!(
            transaction_id = %record.transaction_id,
            units = record.units,
            amount = record.amount,
            "Payment recorded"
        );

        Ok(record)
    }

    pub async fn submit_contact(
        &self,
        request: ContactRequest,
    ) -> Result<ContactRecord, ApiError> {
        let submission = request.validate()?;

        let record = ContactRecord {
            id: Uuid::new_v4().to_string(),
            name: submission.name,
            email: submission.email,
            message: submission.message,
            status: ContactStatus::New,
            created_at: Utc::now(),
        };

        self.store
            .insert(CONTACTS, serde_json::to_value(&record)?)
            .await?;

        tracing::info!(id = %record.id, "Contact message recorded");

        Ok(record)
    }

    /// The ten most recent payments, newest first.
    pub async fn recent_payments(&self) -> Result<Vec<PaymentRecord>, ApiError> {
        let documents = self.store.recent(PAYMENTS, RECENT_LIMIT).await?;
        documents
            .into_iter()
            .map(|doc| serde_json::from_value(doc).map_err(ApiError::from))
            .collect()
    }
}

/// Millisecond timestamp plus a random hex suffix. Collisions would need
/// two submissions in the same millisecond drawing the same 32-bit
/// suffix; accepted as negligible for a demo ledger.
fn new_transaction_id() -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    format!("TXN{}{}", Utc::now().timestamp_millis(), &suffix[..8])
}
