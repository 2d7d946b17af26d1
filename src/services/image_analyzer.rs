// Image analysis and QR extraction
// Content inspection is not implemented yet; results are placeholders

use axum::body::Bytes;
use tracing::debug;

use crate::models::image::ImageAnalysisResult;

/// File extensions accepted for upload
pub const ALLOWED_IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "bmp"];

/// An image received from a multipart upload
#[derive(Debug, Clone)]
pub struct UploadedImage {
    pub filename: String,
    pub content_type: Option<String>,
    pub data: Bytes,
}

impl UploadedImage {
    /// Extension after the last `.`, lowercased. A name without a dot is
    /// treated as its own extension.
    pub fn extension(&self) -> String {
        self.filename
            .rsplit('.')
            .next()
            .unwrap_or_default()
            .to_lowercase()
    }

    pub fn has_allowed_extension(&self) -> bool {
        let extension = self.extension();
        ALLOWED_IMAGE_EXTENSIONS.contains(&extension.as_str())
    }
}

#[derive(Debug, Clone, Default)]
pub struct ImageAnalyzer;

impl ImageAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Analyze an uploaded image.
    ///
    /// Content is not inspected yet, so every accepted upload (empty files
    /// included) gets the same low-risk result.
    pub fn analyze(&self, image: &UploadedImage) -> ImageAnalysisResult {
        debug!(
            "Analyzing image {} ({} bytes, {:?})",
            image.filename,
            image.data.len(),
            image.content_type
        );

        ImageAnalysisResult {
            filename: image.filename.clone(),
            risk_score: 15,
            threats: Vec::new(),
            details: "Image appears to be safe".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Extract a URL from a QR code in the image.
    ///
    /// No decoder is wired in, so this always returns `None`.
    pub fn extract_qr_code(&self, image: &UploadedImage) -> Option<String> {
        debug!(
            "QR extraction requested for {} ({} bytes); no decoder available",
            image.filename,
            image.data.len()
        );
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upload(filename: &str, data: &'static [u8]) -> UploadedImage {
        UploadedImage {
            filename: filename.to_string(),
            content_type: Some("image/png".to_string()),
            data: Bytes::from_static(data),
        }
    }

    #[test]
    fn test_extension_check() {
        assert!(upload("photo.PNG", b"x").has_allowed_extension());
        assert!(upload("scan.final.jpeg", b"x").has_allowed_extension());
        assert!(upload("bmp", b"x").has_allowed_extension());
        assert!(!upload("payload.exe", b"x").has_allowed_extension());
        assert!(!upload("image.png.svg", b"x").has_allowed_extension());
        assert!(!upload("noextension", b"x").has_allowed_extension());
    }

    #[test]
    fn test_analyze_returns_placeholder_result() {
        let result = ImageAnalyzer::new().analyze(&upload("qr.png", b"\x89PNG\r\n\x1a\n"));
        assert_eq!(result.filename, "qr.png");
        assert_eq!(result.risk_score, 15);
        assert!(result.threats.is_empty());
        assert_eq!(result.details, "Image appears to be safe");
    }

    #[test]
    fn test_empty_upload_gets_placeholder_result() {
        let result = ImageAnalyzer::new().analyze(&upload("empty.gif", b""));
        assert_eq!(result.filename, "empty.gif");
        assert_eq!(result.risk_score, 15);
        assert!(result.threats.is_empty());
        assert_eq!(result.details, "Image appears to be safe");
    }

    #[test]
    fn test_qr_extraction_finds_nothing() {
        assert_eq!(
            ImageAnalyzer::new().extract_qr_code(&upload("qr.png", b"\x89PNG")),
            None
        );
    }
}
