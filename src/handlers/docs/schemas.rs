// OpenAPI schema definitions

use serde_json::json;

use crate::models::analysis::{MAX_BATCH_URLS, MAX_URL_LENGTH};
use crate::services::ALLOWED_IMAGE_EXTENSIONS;

/// Return all schema definitions
pub fn all_schemas() -> serde_json::Value {
    json!({
        "AnalyzeUrlRequest": analyze_url_request_schema(),
        "AnalyzeBatchRequest": analyze_batch_request_schema(),
        "AnalysisResult": analysis_result_schema(),
        "SecurityChecks": security_checks_schema(),
        "ThreatBreakdown": threat_breakdown_schema(),
        "BatchAnalysisResponse": batch_response_schema(),
        "QuickCheckResponse": quick_check_response_schema(),
        "ImageAnalysisResult": image_result_schema(),
        "QrScanResponse": qr_scan_response_schema(),
        "HealthResponse": health_response_schema(),
        "StatsResponse": stats_response_schema(),
        "ErrorResponse": error_response_schema(),
    })
}

fn score(description: &str) -> serde_json::Value {
    json!({ "type": "integer", "minimum": 0, "maximum": 100, "description": description })
}

fn analyze_url_request_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "required": ["url"],
        "properties": {
            "url": { "type": "string", "maxLength": MAX_URL_LENGTH, "example": "https://example.com" }
        }
    })
}

fn analyze_batch_request_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "required": ["urls"],
        "properties": {
            "urls": {
                "type": "array",
                "minItems": 1,
                "maxItems": MAX_BATCH_URLS,
                "items": { "type": "string" }
            }
        }
    })
}

fn analysis_result_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "url": { "type": "string" },
            "riskScore": score("Aggregate risk, higher is riskier"),
            "status": { "type": "string", "enum": ["Safe", "Suspicious", "Dangerous"] },
            "checks": { "$ref": "#/components/schemas/SecurityChecks" },
            "threats": { "$ref": "#/components/schemas/ThreatBreakdown" },
            "details": { "type": "string" },
            "timestamp": { "type": "string", "format": "date-time" }
        }
    })
}

fn security_checks_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "domainReputation": score("65 when the host contains a phishing keyword"),
            "sslCertificate": score("70 unless the scheme is https"),
            "urlPattern": score("Structural penalties, capped at 100"),
            "contentAnalysis": score("Placeholder"),
            "visualSimilarity": score("Placeholder")
        }
    })
}

fn threat_breakdown_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "description": "Percentages summing to 100",
        "properties": {
            "phishing": score("Percent"),
            "malware": score("Percent"),
            "suspicious": score("Percent"),
            "safe": score("Percent")
        }
    })
}

fn batch_response_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "count": { "type": "integer" },
            "results": { "type": "array", "items": { "$ref": "#/components/schemas/AnalysisResult" } },
            "timestamp": { "type": "string", "format": "date-time" }
        }
    })
}

fn quick_check_response_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "url": { "type": "string" },
            "status": { "type": "string", "enum": ["Phishing Link", "Safe Link"] },
            "is_phishing": { "type": "boolean" }
        }
    })
}

fn image_result_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "description": format!("Accepted extensions: {}", ALLOWED_IMAGE_EXTENSIONS.join(", ")),
        "properties": {
            "filename": { "type": "string" },
            "riskScore": score("Image risk"),
            "threats": { "type": "array", "items": { "type": "string" } },
            "details": { "type": "string" },
            "timestamp": { "type": "string", "format": "date-time" }
        }
    })
}

fn qr_scan_response_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "url": { "type": "string" },
            "timestamp": { "type": "string", "format": "date-time" }
        }
    })
}

fn health_response_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "status": { "type": "string", "example": "healthy" },
            "service": { "type": "string" },
            "version": { "type": "string" },
            "timestamp": { "type": "string", "format": "date-time" }
        }
    })
}

fn stats_response_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "detectionRate": { "type": "number" },
            "responseTime": { "type": "string" },
            "sitesProtected": { "type": "integer" },
            "monitoring": { "type": "string" }
        }
    })
}

fn error_response_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "required": ["error"],
        "properties": {
            "error": { "type": "string" }
        }
    })
}
