// API Documentation handlers
pub mod endpoints;
pub mod schemas;

use crate::app::AppState;
use crate::app_config::AppConfig;
use crate::models::system::{API_VERSION, SERVICE_NAME};
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Serve the OpenAPI JSON document at /api/docs/openapi.json
pub async fn serve_openapi_spec(State(app_state): State<AppState>) -> Response {
    let spec = build_openapi_spec(app_state.config.as_ref());

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        serde_json::to_string(&spec).unwrap_or_default(),
    )
        .into_response()
}

/// Build the complete OpenAPI document
pub fn build_openapi_spec(config: &AppConfig) -> serde_json::Value {
    let api_url = format!("http://localhost:{}/api", config.port);

    json!({
        "openapi": "3.0.3",
        "info": {
            "title": format!("{} API", SERVICE_NAME),
            "description": "Heuristic phishing and malware risk scoring for URLs and images",
            "version": API_VERSION
        },
        "servers": [{
            "url": api_url,
            "description": format!("Current server ({})", config.environment)
        }],
        "tags": [
            { "name": "Analysis", "description": "URL risk scoring" },
            { "name": "Images", "description": "Image analysis and QR extraction" },
            { "name": "System", "description": "Health and statistics" }
        ],
        "paths": {
            "/analyze": endpoints::quick_check_endpoint(),
            "/analyze/url": endpoints::analyze_url_endpoint(),
            "/analyze/batch": endpoints::analyze_batch_endpoint(),
            "/analyze/image": endpoints::analyze_image_endpoint(),
            "/qr-scan": endpoints::qr_scan_endpoint(),
            "/health": endpoints::health_endpoint(),
            "/stats": endpoints::stats_endpoint(),
        },
        "components": {
            "schemas": schemas::all_schemas()
        }
    })
}
