// Analysis services

pub mod image_analyzer;
pub mod url_analyzer;

pub use image_analyzer::{ImageAnalyzer, UploadedImage, ALLOWED_IMAGE_EXTENSIONS};
pub use url_analyzer::{quick_verdict, AnalysisError, UrlAnalyzer};
