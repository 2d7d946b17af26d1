// Utility modules for the Phish-Sense API

pub mod api_error;
pub mod extract;
pub mod url_validator;
pub mod validation;

pub use api_error::{ApiError, ApiResult};
pub use extract::ApiJson;
pub use url_validator::{parse_analyzable_url, raw_authority, ParsedUrl, UrlValidationError};
pub use validation::{require_trimmed, trim_and_validate_field};
