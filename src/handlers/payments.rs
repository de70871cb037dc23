use axum::{extract::State, http::StatusCode, Json};

use crate::{
    error::ApiError,
    handlers::AppState,
    models::{ApiResponse, PaymentReceipt, PaymentRecord, PaymentRequest},
};

pub async fn submit_payment(
    State(state): State<AppState>,
    Json(request): Json<PaymentRequest>,
) -> Result<(StatusCode, Json<ApiResponse<PaymentReceipt>>), ApiError> {
    let record = state.records.submit_payment(request).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::created(
            "Payment recorded successfully",
            PaymentReceipt::from(&record),
        )),
    ))
}

pub async fn list_payments(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<PaymentRecord>>>, ApiError> {
    let payments = state.records.recent_payments().await?;
    Ok(Json(ApiResponse::ok(payments)))
}
