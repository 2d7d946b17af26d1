// Image upload endpoints

use axum::extract::{
    multipart::{Multipart, MultipartRejection},
    State,
};
use axum::Json;
use tracing::info;

use crate::{
    app::AppState,
    models::image::{ImageAnalysisResult, QrScanResponse},
    services::UploadedImage,
    utils::api_error::{ApiError, ApiResult},
};

/// Analyze an uploaded image (multipart field `file`)
/// POST /api/analyze/image
pub async fn analyze_image(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> ApiResult<Json<ImageAnalysisResult>> {
    let image = read_image_field(multipart?, "file")
        .await?
        .ok_or_else(|| ApiError::bad_request("No file provided"))?;

    if image.filename.is_empty() {
        return Err(ApiError::bad_request("No file selected"));
    }

    if !image.has_allowed_extension() {
        return Err(ApiError::bad_request("Invalid file format"));
    }

    let result = state.image_analyzer.analyze(&image);
    info!("Image analyzed: {} risk={}", result.filename, result.risk_score);
    Ok(Json(result))
}

/// Extract a URL from a QR code image (multipart field `image`)
/// POST /api/qr-scan
pub async fn qr_scan(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> ApiResult<Json<QrScanResponse>> {
    let image = read_image_field(multipart?, "image")
        .await?
        .ok_or_else(|| ApiError::bad_request("No image provided"))?;

    if image.filename.is_empty() {
        return Err(ApiError::bad_request("No image selected"));
    }

    let url = state
        .image_analyzer
        .extract_qr_code(&image)
        .ok_or_else(|| ApiError::bad_request("No QR code found in image"))?;

    Ok(Json(QrScanResponse {
        url,
        timestamp: chrono::Utc::now().to_rfc3339(),
    }))
}

/// Read the first part named `field_name`; other parts are skipped.
/// A part without a filename comes back with an empty one.
async fn read_image_field(
    mut multipart: Multipart,
    field_name: &str,
) -> ApiResult<Option<UploadedImage>> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(field_name) {
            continue;
        }

        let filename = field.file_name().unwrap_or_default().to_string();
        let content_type = field.content_type().map(str::to_string);
        let data = field.bytes().await?;

        return Ok(Some(UploadedImage {
            filename,
            content_type,
            data,
        }));
    }

    Ok(None)
}
