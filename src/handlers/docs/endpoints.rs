// Endpoint documentation for the analysis, image and system routes

use serde_json::json;

fn error_response(description: &str, example: &str) -> serde_json::Value {
    json!({
        "description": description,
        "content": {
            "application/json": {
                "schema": { "$ref": "#/components/schemas/ErrorResponse" },
                "example": { "error": example }
            }
        }
    })
}

fn json_response(description: &str, schema: &str) -> serde_json::Value {
    json!({
        "description": description,
        "content": {
            "application/json": {
                "schema": { "$ref": format!("#/components/schemas/{}", schema) }
            }
        }
    })
}

fn multipart_body(field: &str) -> serde_json::Value {
    json!({
        "required": true,
        "content": {
            "multipart/form-data": {
                "schema": {
                    "type": "object",
                    "required": [field],
                    "properties": {
                        field: { "type": "string", "format": "binary" }
                    }
                }
            }
        }
    })
}

/// POST /analyze
pub fn quick_check_endpoint() -> serde_json::Value {
    json!({
        "post": {
            "tags": ["Analysis"],
            "summary": "Quick keyword check",
            "description": "Flags a URL that mentions login or verify, or does not mention secure. Kept for older web clients; prefer /analyze/url.",
            "operationId": "quickCheck",
            "requestBody": {
                "required": true,
                "content": {
                    "application/json": {
                        "schema": { "$ref": "#/components/schemas/AnalyzeUrlRequest" },
                        "example": { "url": "https://secure.example.com" }
                    }
                }
            },
            "responses": {
                "200": json_response("Quick verdict", "QuickCheckResponse"),
                "400": error_response("Missing or empty URL", "No URL provided for analysis.")
            }
        }
    })
}

/// POST /analyze/url
pub fn analyze_url_endpoint() -> serde_json::Value {
    json!({
        "post": {
            "tags": ["Analysis"],
            "summary": "Analyze a URL",
            "description": "Scores a URL from 0 (safe) to 100 (dangerous) using five weighted heuristics.",
            "operationId": "analyzeUrl",
            "requestBody": {
                "required": true,
                "content": {
                    "application/json": {
                        "schema": { "$ref": "#/components/schemas/AnalyzeUrlRequest" },
                        "example": { "url": "https://example.com" }
                    }
                }
            },
            "responses": {
                "200": json_response("Analysis result", "AnalysisResult"),
                "400": error_response("Missing, empty or malformed input", "URL is required"),
                "500": error_response("Unexpected failure", "Internal server error")
            }
        }
    })
}

/// POST /analyze/batch
pub fn analyze_batch_endpoint() -> serde_json::Value {
    json!({
        "post": {
            "tags": ["Analysis"],
            "summary": "Analyze up to 10 URLs",
            "operationId": "analyzeBatch",
            "requestBody": {
                "required": true,
                "content": {
                    "application/json": {
                        "schema": { "$ref": "#/components/schemas/AnalyzeBatchRequest" },
                        "example": { "urls": ["https://example.com", "http://192.168.1.1/login"] }
                    }
                }
            },
            "responses": {
                "200": json_response("One result per URL, in request order", "BatchAnalysisResponse"),
                "400": error_response("Missing, empty or oversized array", "Maximum 10 URLs allowed per batch")
            }
        }
    })
}

/// POST /analyze/image
pub fn analyze_image_endpoint() -> serde_json::Value {
    json!({
        "post": {
            "tags": ["Images"],
            "summary": "Analyze an image",
            "description": "Accepts png, jpg, jpeg, gif and bmp uploads.",
            "operationId": "analyzeImage",
            "requestBody": multipart_body("file"),
            "responses": {
                "200": json_response("Image analysis result", "ImageAnalysisResult"),
                "400": error_response("Missing file or unsupported format", "Invalid file format")
            }
        }
    })
}

/// POST /qr-scan
pub fn qr_scan_endpoint() -> serde_json::Value {
    json!({
        "post": {
            "tags": ["Images"],
            "summary": "Extract a URL from a QR code image",
            "operationId": "qrScan",
            "requestBody": multipart_body("image"),
            "responses": {
                "200": json_response("Decoded URL", "QrScanResponse"),
                "400": error_response("Missing image or no QR code found", "No QR code found in image")
            }
        }
    })
}

/// GET /health
pub fn health_endpoint() -> serde_json::Value {
    json!({
        "get": {
            "tags": ["System"],
            "summary": "Health check endpoint",
            "operationId": "healthCheck",
            "responses": {
                "200": json_response("Service is healthy", "HealthResponse")
            }
        }
    })
}

/// GET /stats
pub fn stats_endpoint() -> serde_json::Value {
    json!({
        "get": {
            "tags": ["System"],
            "summary": "Headline statistics",
            "operationId": "getStats",
            "responses": {
                "200": json_response("Statistics", "StatsResponse")
            }
        }
    })
}
