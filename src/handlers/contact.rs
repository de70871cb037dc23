use axum::{extract::State, http::StatusCode, Json};

use crate::{
    error::ApiError,
    handlers::AppState,
    models::{ApiResponse, ContactReceipt, ContactRequest},
};

pub async fn submit_contact(
    State(state): State<AppState>,
    Json(request): Json<ContactRequest>,
) -> Result<(StatusCode, Json<ApiResponse<ContactReceipt>>), ApiError> {
    let record = state.records.submit_contact(request).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::created(
            "Message sent successfully",
            ContactReceipt { id: record.id },
        )),
    ))
}
