use std::collections::HashSet;
use std::sync::Arc;

use crate::{
    error::ApiError,
    models::{AnalyticsOverview, PaymentRecord},
    services::store::{DocumentStore, PAYMENTS},
};

/// Read-only aggregate over the payments collection.
pub struct AnalyticsService {
    store: Arc<dyn DocumentStore>,
}

impl AnalyticsService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Folds every payment record into the overview: distinct service
    /// numbers, record count, revenue sum and average units. Zero-valued
    /// on an empty store.
    pub async fn summary(&self) -> Result<AnalyticsOverview, ApiError> {
        let documents = self.store.scan(PAYMENTS).await?;

        let records: Vec<PaymentRecord> = documents
            .into_iter()
            .map(|doc| serde_json::from_value(doc).map_err(ApiError::from))
            .collect::<Result<_, _>>()?;

        let mut consumers: HashSet<&str> = HashSet::new();
        let mut total_revenue = 0.0;
        let mut total_units = 0u64;

        for record in &records {
            consumers.insert(record.service_number.as_str());
            total_revenue += record.amount;
            total_units += record.units;
        }

        let total_payments = records.len() as u64;
        let average_units = if total_payments == 0 {
            0.0
        } else {
            total_units as f64 / total_payments as f64
        };

        Ok(AnalyticsOverview {
            total_consumers: consumers.len() as u64,
            total_payments,
            total_revenue: (total_revenue * 100.0).round() / 100.0,
            average_units,
        })
    }
}
