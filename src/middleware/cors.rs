use axum::{
    body::Body,
    extract::State,
    http::{
        header::{self, HeaderMap, HeaderValue},
        Method, Request, Response, StatusCode,
    },
    middleware::Next,
};
use tracing::debug;

use crate::app::AppState;

const ALLOWED_METHODS: &str = "GET, POST, OPTIONS";
const ALLOWED_HEADERS: &str = "content-type, accept, origin, x-requested-with";

/// CORS for everything under `/api/`.
///
/// A `*` entry in the configured origins allows any origin; otherwise the
/// request origin is echoed back only when it is on the whitelist.
/// Preflight requests are answered here and never reach the router.
pub async fn cors_middleware(
    State(state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Response<Body> {
    if !req.uri().path().starts_with("/api/") {
        return next.run(req).await;
    }

    let origin = req
        .headers()
        .get(header::ORIGIN)
        .and_then(|v| v.to_str().ok())
        .map(String::from);

    let allowed_origin = if state.config.allows_any_origin() {
        Some("*".to_string())
    } else {
        origin.and_then(|req_origin| {
            if state.config.cors_allowed_origins.contains(&req_origin) {
                debug!("CORS: Origin allowed from whitelist: {}", req_origin);
                Some(req_origin)
            } else {
                debug!("CORS: Origin not in whitelist: {}", req_origin);
                None
            }
        })
    };
    let reflects_origin = !state.config.allows_any_origin();

    // Handle preflight OPTIONS requests
    if req.method() == Method::OPTIONS {
        let mut response = Response::new(Body::empty());
        *response.status_mut() = StatusCode::OK;

        if let Some(allowed) = allowed_origin.as_deref() {
            let headers = response.headers_mut();
            insert_origin_headers(headers, allowed, reflects_origin);
            headers.insert(
                header::ACCESS_CONTROL_ALLOW_METHODS,
                HeaderValue::from_static(ALLOWED_METHODS),
            );
            headers.insert(
                header::ACCESS_CONTROL_ALLOW_HEADERS,
                HeaderValue::from_static(ALLOWED_HEADERS),
            );
            headers.insert(header::ACCESS_CONTROL_MAX_AGE, HeaderValue::from_static("3600"));
        }

        return response;
    }

    let mut response = next.run(req).await;

    if let Some(allowed) = allowed_origin.as_deref() {
        insert_origin_headers(response.headers_mut(), allowed, reflects_origin);
    }

    response
}

fn insert_origin_headers(headers: &mut HeaderMap, allowed: &str, reflects_origin: bool) {
    // Origins come from the request, so an invalid header value is skipped
    if let Ok(value) = HeaderValue::from_str(allowed) {
        headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, value);
    }
    if reflects_origin {
        headers.insert(header::VARY, HeaderValue::from_static("Origin"));
    }
}
