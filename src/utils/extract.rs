// Request extractors that reject with the API's JSON error body
use axum::extract::FromRequest;

use crate::utils::api_error::ApiError;

/// `axum::Json` whose rejections become `ApiError::BadRequest`
/// instead of axum's plain-text 400/415/422 responses.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);
