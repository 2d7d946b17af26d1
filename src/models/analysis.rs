// URL analysis request and response models

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Longest URL accepted for analysis
pub const MAX_URL_LENGTH: usize = 8192;

/// Most URLs accepted in one batch request
pub const MAX_BATCH_URLS: usize = 10;

// =============================================================================
// REQUEST MODELS
// =============================================================================

/// Body of `POST /api/analyze/url`
#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
pub struct AnalyzeUrlRequest {
    #[validate(length(max = "MAX_URL_LENGTH", message = "URL must be at most 8192 characters"))]
    pub url: Option<String>,
}

/// Body of `POST /api/analyze/batch`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AnalyzeBatchRequest {
    pub urls: Option<Vec<String>>,
}

// =============================================================================
// RESPONSE MODELS
// =============================================================================

/// Verdict derived from the aggregate risk score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskStatus {
    Safe,
    Suspicious,
    Dangerous,
}

impl RiskStatus {
    pub fn from_score(risk_score: u8) -> Self {
        match risk_score {
            70.. => RiskStatus::Dangerous,
            40..=69 => RiskStatus::Suspicious,
            _ => RiskStatus::Safe,
        }
    }

    /// Summary sentence shown to the user
    pub fn details(&self) -> &'static str {
        match self {
            RiskStatus::Dangerous => {
                "This URL shows multiple signs of phishing or malware. Do not visit."
            },
            RiskStatus::Suspicious => {
                "This URL has some suspicious characteristics. Proceed with caution."
            },
            RiskStatus::Safe => "This URL appears to be safe based on our analysis.",
        }
    }
}

/// The five sub-scores, each 0-100 where higher is riskier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityChecks {
    pub domain_reputation: u8,
    pub ssl_certificate: u8,
    pub url_pattern: u8,
    pub content_analysis: u8,
    pub visual_similarity: u8,
}

impl SecurityChecks {
    /// All five sub-scores set to the same value
    pub fn uniform(score: u8) -> Self {
        Self {
            domain_reputation: score,
            ssl_certificate: score,
            url_pattern: score,
            content_analysis: score,
            visual_similarity: score,
        }
    }

    /// Named sub-scores in response order
    pub fn as_array(&self) -> [(&'static str, u8); 5] {
        [
            ("domainReputation", self.domain_reputation),
            ("sslCertificate", self.ssl_certificate),
            ("urlPattern", self.url_pattern),
            ("contentAnalysis", self.content_analysis),
            ("visualSimilarity", self.visual_similarity),
        ]
    }
}

/// Threat category percentages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThreatBreakdown {
    pub phishing: u8,
    pub malware: u8,
    pub suspicious: u8,
    pub safe: u8,
}

impl ThreatBreakdown {
    pub fn total(&self) -> u32 {
        self.phishing as u32 + self.malware as u32 + self.suspicious as u32 + self.safe as u32
    }
}

/// Result of analyzing one URL
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub url: String,
    pub risk_score: u8,
    pub status: RiskStatus,
    pub checks: SecurityChecks,
    pub threats: ThreatBreakdown,
    pub details: String,
    pub timestamp: String,
}

/// Response of `POST /api/analyze/batch`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchAnalysisResponse {
    pub count: usize,
    pub results: Vec<AnalysisResult>,
    pub timestamp: String,
}

/// Verdict of the keyword-only quick check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LinkVerdict {
    #[serde(rename = "Phishing Link")]
    Phishing,
    #[serde(rename = "Safe Link")]
    Safe,
}

impl LinkVerdict {
    pub fn is_phishing(&self) -> bool {
        matches!(self, LinkVerdict::Phishing)
    }
}

/// Response of `POST /api/analyze`, the quick check used by older web clients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuickCheckResponse {
    pub url: String,
    pub status: LinkVerdict,
    pub is_phishing: bool,
}
