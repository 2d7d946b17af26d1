pub mod analysis;
pub mod image;
pub mod system;

// Re-export common types
pub use analysis::{
    AnalysisResult, AnalyzeBatchRequest, AnalyzeUrlRequest, BatchAnalysisResponse, LinkVerdict,
    QuickCheckResponse, RiskStatus, SecurityChecks, ThreatBreakdown, MAX_BATCH_URLS,
    MAX_URL_LENGTH,
};
pub use image::{ImageAnalysisResult, QrScanResponse};
pub use system::{HealthResponse, StatsResponse, API_VERSION, SERVICE_NAME};
