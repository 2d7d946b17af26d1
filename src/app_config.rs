// Centralized configuration management for the Phish-Sense API
// Every setting is read once at startup and carried in AppState

use serde::{Deserialize, Serialize};
use std::env;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

/// Default listen address, matching the port the web client expects
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:5000";

/// Default request body limit (16 MiB) for JSON and image uploads
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 16 * 1024 * 1024;

/// Complete application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    // Server
    pub bind_address: String,
    pub port: u16,
    pub environment: Environment,
    pub rust_log: String,

    // HTTP
    pub cors_allowed_origins: Vec<String>,
    pub max_upload_bytes: usize,

    // Features
    pub enable_api_docs: bool,
}

/// Environment type
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Environment {
    Development,
    Test,
    Staging,
    Production,
}

impl From<String> for Environment {
    fn from(s: String) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            "production" | "prod" => Environment::Production,
            _ => Environment::Development,
        }
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Staging => write!(f, "staging"),
            Environment::Production => write!(f, "production"),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            port: 5000,
            environment: Environment::Development,
            rust_log: "phish_sense_api=debug,tower_http=info".to_string(),
            cors_allowed_origins: vec!["*".to_string()],
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            enable_api_docs: true,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from any key/value source.
    /// `from_env` is this with `std::env::var`; tests pass a map instead.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Helper function to get optional var with default
        let get_or_default =
            |key: &str, default: &str| -> String { lookup(key).unwrap_or_else(|| default.to_string()) };

        let parse_bool_or_default = |key: &str, default: bool| -> Result<bool, ConfigError> {
            match lookup(key) {
                None => Ok(default),
                Some(raw) => match raw.trim().to_lowercase().as_str() {
                    "true" | "1" | "yes" => Ok(true),
                    "false" | "0" | "no" => Ok(false),
                    _ => Err(ConfigError::InvalidValue(
                        key.to_string(),
                        format!("'{}' is not a valid boolean", raw),
                    )),
                },
            }
        };

        // Parse bind address to extract port
        let bind_address = get_or_default("BIND_ADDRESS", DEFAULT_BIND_ADDRESS);
        let port: u16 = bind_address
            .rsplit(':')
            .next()
            .and_then(|p| p.parse().ok())
            .ok_or_else(|| {
                ConfigError::InvalidValue(
                    "BIND_ADDRESS".to_string(),
                    format!("'{}' does not end with a port", bind_address),
                )
            })?;

        let environment = Environment::from(get_or_default("ENVIRONMENT", "development"));
        let is_production = environment == Environment::Production;

        let default_log = if is_production {
            "phish_sense_api=info,tower_http=info"
        } else {
            "phish_sense_api=debug,tower_http=info"
        };
        let rust_log = get_or_default("RUST_LOG", default_log);

        let cors_allowed_origins: Vec<String> = get_or_default("CORS_ALLOWED_ORIGINS", "*")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        if cors_allowed_origins.is_empty() {
            return Err(ConfigError::InvalidValue(
                "CORS_ALLOWED_ORIGINS".to_string(),
                "at least one origin (or '*') is required".to_string(),
            ));
        }

        let max_upload_bytes = match lookup("MAX_UPLOAD_BYTES") {
            None => DEFAULT_MAX_UPLOAD_BYTES,
            Some(raw) => raw.trim().parse::<usize>().ok().filter(|n| *n > 0).ok_or_else(|| {
                ConfigError::InvalidValue(
                    "MAX_UPLOAD_BYTES".to_string(),
                    "not a positive integer".to_string(),
                )
            })?,
        };

        // API docs are opt-in for production deployments
        let enable_api_docs = parse_bool_or_default("ENABLE_API_DOCS", !is_production)?;

        Ok(Self {
            bind_address,
            port,
            environment,
            rust_log,
            cors_allowed_origins,
            max_upload_bytes,
            enable_api_docs,
        })
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }

    /// Whether any origin may call the API
    pub fn allows_any_origin(&self) -> bool {
        self.cors_allowed_origins.iter().any(|o| o == "*")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(config.bind_address, "0.0.0.0:5000");
        assert_eq!(config.port, 5000);
        assert_eq!(config.environment, Environment::Development);
        assert_eq!(config.cors_allowed_origins, vec!["*".to_string()]);
        assert!(config.allows_any_origin());
        assert_eq!(config.max_upload_bytes, DEFAULT_MAX_UPLOAD_BYTES);
        assert!(config.enable_api_docs);
    }

    #[test]
    fn test_default_matches_empty_environment() {
        let loaded = load(&[]).unwrap();
        let default = AppConfig::default();
        assert_eq!(loaded.bind_address, default.bind_address);
        assert_eq!(loaded.port, default.port);
        assert_eq!(loaded.rust_log, default.rust_log);
        assert_eq!(loaded.cors_allowed_origins, default.cors_allowed_origins);
        assert_eq!(loaded.enable_api_docs, default.enable_api_docs);
    }

    #[test]
    fn test_production_disables_docs_by_default() {
        let config = load(&[("ENVIRONMENT", "prod")]).unwrap();
        assert!(config.is_production());
        assert!(!config.enable_api_docs);

        let config = load(&[("ENVIRONMENT", "production"), ("ENABLE_API_DOCS", "true")]).unwrap();
        assert!(config.enable_api_docs);
    }

    #[test]
    fn test_origin_list_is_trimmed() {
        let config = load(&[(
            "CORS_ALLOWED_ORIGINS",
            "http://localhost:5173, https://phish-sense.app ,",
        )])
        .unwrap();
        assert_eq!(
            config.cors_allowed_origins,
            vec!["http://localhost:5173", "https://phish-sense.app"]
        );
        assert!(!config.allows_any_origin());
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(matches!(
            load(&[("BIND_ADDRESS", "localhost")]),
            Err(ConfigError::InvalidValue(key, _)) if key == "BIND_ADDRESS"
        ));
        assert!(matches!(
            load(&[("MAX_UPLOAD_BYTES", "0")]),
            Err(ConfigError::InvalidValue(key, _)) if key == "MAX_UPLOAD_BYTES"
        ));
        assert!(matches!(
            load(&[("ENABLE_API_DOCS", "maybe")]),
            Err(ConfigError::InvalidValue(key, _)) if key == "ENABLE_API_DOCS"
        ));
        assert!(load(&[("CORS_ALLOWED_ORIGINS", " , ")]).is_err());
    }

    #[test]
    fn test_environment_parsing() {
        assert_eq!(Environment::from("STAGE".to_string()), Environment::Staging);
        assert_eq!(Environment::from("test".to_string()), Environment::Test);
        assert_eq!(Environment::from("unknown".to_string()), Environment::Development);
        assert_eq!(Environment::Production.to_string(), "production");
    }
}
