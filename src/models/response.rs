use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Success envelope shared by every endpoint: `message` is present on
/// mutations, absent on reads.
#[derive(Serialize, Deserialize, Debug)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data,
        }
    }

    pub fn created(message: &str, data: T) -> Self {
        Self {
            success: true,
            message: Some(message.to_string()),
            data,
        }
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct HealthStatus {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

/// Aggregate over the whole payments collection.
#[derive(Serialize, Deserialize, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsOverview {
    pub total_consumers: u64,
    pub total_payments: u64,
    pub total_revenue: f64,
    pub average_units: f64,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct AnalyticsSummary {
    pub overview: AnalyticsOverview,
}
