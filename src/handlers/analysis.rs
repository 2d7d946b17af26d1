// URL analysis endpoints

use axum::{extract::State, Json};
use tracing::info;
use validator::Validate;

use crate::{
    app::AppState,
    models::analysis::{
        AnalysisResult, AnalyzeBatchRequest, AnalyzeUrlRequest, BatchAnalysisResponse,
        QuickCheckResponse, MAX_BATCH_URLS,
    },
    services::quick_verdict,
    utils::{
        api_error::{ApiError, ApiResult},
        extract::ApiJson,
        validation::require_trimmed,
    },
};

/// Analyze a single URL
/// POST /api/analyze/url
pub async fn analyze_url(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<AnalyzeUrlRequest>,
) -> ApiResult<Json<AnalysisResult>> {
    request.validate()?;

    let url = require_trimmed(request.url.as_deref(), "URL is required", "URL cannot be empty")?;
    let result = state.url_analyzer.analyze(&url);

    info!(
        "URL analyzed: risk={} status={:?}",
        result.risk_score, result.status
    );
    Ok(Json(result))
}

/// Analyze up to ten URLs in one request
/// POST /api/analyze/batch
pub async fn analyze_batch(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<AnalyzeBatchRequest>,
) -> ApiResult<Json<BatchAnalysisResponse>> {
    let urls = request
        .urls
        .ok_or_else(|| ApiError::bad_request("URLs array is required"))?;

    if urls.is_empty() {
        return Err(ApiError::bad_request("URLs must be a non-empty array"));
    }

    if urls.len() > MAX_BATCH_URLS {
        return Err(ApiError::bad_request(format!(
            "Maximum {} URLs allowed per batch",
            MAX_BATCH_URLS
        )));
    }

    let results: Vec<AnalysisResult> = urls
        .iter()
        .map(|url| state.url_analyzer.analyze(url.trim()))
        .collect();

    info!("Batch analyzed: {} URLs", results.len());
    Ok(Json(BatchAnalysisResponse {
        count: results.len(),
        results,
        timestamp: chrono::Utc::now().to_rfc3339(),
    }))
}

/// Keyword-only phishing check kept for older web clients
/// POST /api/analyze
pub async fn quick_check(
    ApiJson(request): ApiJson<AnalyzeUrlRequest>,
) -> ApiResult<Json<QuickCheckResponse>> {
    let url = require_trimmed(
        request.url.as_deref(),
        "No URL provided for analysis.",
        "No URL provided for analysis.",
    )?;
    let verdict = quick_verdict(&url);

    info!("Quick check: is_phishing={}", verdict.is_phishing());
    Ok(Json(QuickCheckResponse {
        is_phishing: verdict.is_phishing(),
        status: verdict,
        url,
    }))
}
