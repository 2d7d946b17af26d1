// Application state and configuration
use std::sync::Arc;

use crate::{
    app_config::AppConfig,
    services::{ImageAnalyzer, UrlAnalyzer},
};

// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub url_analyzer: Arc<UrlAnalyzer>,
    pub image_analyzer: Arc<ImageAnalyzer>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config: Arc::new(config),
            url_analyzer: Arc::new(UrlAnalyzer::new()),
            image_analyzer: Arc::new(ImageAnalyzer::new()),
        }
    }
}
