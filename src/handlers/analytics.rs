use axum::{extract::State, Json};

use crate::{
    error::ApiError,
    handlers::AppState,
    models::{AnalyticsSummary, ApiResponse},
};

pub async fn analytics_summary(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<AnalyticsSummary>>, ApiError> {
    let overview = state.analytics.summary().await?;
    Ok(Json(ApiResponse::ok(AnalyticsSummary { overview })))
}
