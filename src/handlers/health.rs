use axum::Json;
use chrono::Utc;

use crate::models::HealthStatus;

/// Liveness probe: fixed body, always 200.
pub async fn health_check() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "success".to_string(),
        message: "voltbill backend is running".to_string(),
        timestamp: Utc::now(),
    })
}
