// Health and statistics response models

use serde::{Deserialize, Serialize};

pub const SERVICE_NAME: &str = "Phish-Sense Backend";
pub const API_VERSION: &str = "1.0.0";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub timestamp: String,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            service: SERVICE_NAME.to_string(),
            version: API_VERSION.to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Headline numbers shown on the landing page
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub detection_rate: f64,
    pub response_time: String,
    pub sites_protected: u64,
    pub monitoring: String,
}

impl Default for StatsResponse {
    fn default() -> Self {
        Self {
            detection_rate: 99.9,
            response_time: "<1ms".to_string(),
            sites_protected: 50_000_000,
            monitoring: "24/7".to_string(),
        }
    }
}
