// Library exports for the Phish-Sense API
// The binary and the integration tests both build the router from here

pub mod app;
pub mod app_config;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod utils;

use std::any::Any;

use axum::{
    extract::DefaultBodyLimit,
    response::{IntoResponse, Response},
    Router,
};
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

// Re-export commonly used types
pub use app::AppState;
pub use app_config::{AppConfig, ConfigError, Environment};
pub use models::{AnalysisResult, ImageAnalysisResult, RiskStatus, SecurityChecks, ThreatBreakdown};
pub use services::{ImageAnalyzer, UrlAnalyzer};
pub use utils::api_error::{ApiError, ApiResult};

/// Build the full application router
pub fn create_app(state: AppState) -> Router {
    let max_upload_bytes = state.config.max_upload_bytes;

    Router::new()
        .nest("/api", handlers::api_routes(state.config.enable_api_docs))
        .fallback(handlers::system::not_found)
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::cors_middleware,
        ))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Panic handler for `CatchPanicLayer`: logs the payload and answers with
/// the standard 500 body
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };

    tracing::error!("Handler panicked: {}", detail);
    ApiError::InternalError.into_response()
}
