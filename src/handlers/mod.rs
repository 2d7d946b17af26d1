// HTTP handlers for the Phish-Sense API

pub mod analysis;
pub mod docs;
pub mod image;
pub mod system;

use crate::app::AppState;
use axum::{
    routing::{get, post},
    Router,
};

// Routes mounted under /api
pub fn api_routes(enable_docs: bool) -> Router<AppState> {
    let router = Router::new()
        .route("/health", get(system::health_check))
        .route("/stats", get(system::get_stats))
        .route("/analyze", post(analysis::quick_check))
        .route("/analyze/url", post(analysis::analyze_url))
        .route("/analyze/batch", post(analysis::analyze_batch))
        .route("/analyze/image", post(image::analyze_image))
        .route("/qr-scan", post(image::qr_scan));

    if enable_docs {
        router.route("/docs/openapi.json", get(docs::serve_openapi_spec))
    } else {
        router
    }
}
