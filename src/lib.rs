pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;
pub mod tariff;

use axum::{
    routing::{get, post},
    Router,
};

use handlers::AppState;

/// The full API surface. Built here so the integration tests serve the
/// same router as `main`.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(handlers::health_check))
        .route(
            "/api/payments",
            post(handlers::submit_payment).get(handlers::list_payments),
        )
        .route("/api/contact", post(handlers::submit_contact))
        .route("/api/analytics/summary", get(handlers::analytics_summary))
        .with_state(state)
}
