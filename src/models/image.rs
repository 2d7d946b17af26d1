// Image and QR scan response models

use serde::{Deserialize, Serialize};

/// Result of analyzing an uploaded image
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageAnalysisResult {
    pub filename: String,
    pub risk_score: u8,
    pub threats: Vec<String>,
    pub details: String,
    pub timestamp: String,
}

/// Response of `POST /api/qr-scan` when a URL was decoded
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QrScanResponse {
    pub url: String,
    pub timestamp: String,
}
