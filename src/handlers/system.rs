// Health, statistics and fallback handlers

use axum::Json;

use crate::{
    models::system::{HealthResponse, StatsResponse},
    utils::api_error::ApiError,
};

/// GET /api/health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

/// GET /api/stats
pub async fn get_stats() -> Json<StatsResponse> {
    Json(StatsResponse::default())
}

/// Any unmatched route
pub async fn not_found() -> ApiError {
    ApiError::NotFound
}
