//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges and URL shapes
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: NavConfig → Result<(), Vec<ValidationError>>

use thiserror::Error;
use url::Url;

use crate::config::schema::NavConfig;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("api.context_base is not a valid URL: {0}")]
    BadContextBase(String),

    #[error("api.context_base must not end with '/'")]
    TrailingSlashContextBase,

    #[error("{field} must start with '/'")]
    MissingLeadingSlash { field: &'static str },

    #[error("fetch.timeout_secs must be greater than zero")]
    ZeroTimeout,

    #[error("fetch.retries.max_attempts must be at least 1")]
    ZeroAttempts,

    #[error("fetch.retries.base_delay_ms must not exceed max_delay_ms")]
    BackoffRangeInverted,
}

pub fn validate_config(config: &NavConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if Url::parse(&config.api.context_base).is_err() {
        errors.push(ValidationError::BadContextBase(
            config.api.context_base.clone(),
        ));
    }
    if config.api.context_base.ends_with('/') {
        errors.push(ValidationError::TrailingSlashContextBase);
    }
    if !config.api.api_prefix.starts_with('/') {
        errors.push(ValidationError::MissingLeadingSlash {
            field: "api.api_prefix",
        });
    }
    if !config.video.base_path.starts_with('/') {
        errors.push(ValidationError::MissingLeadingSlash {
            field: "video.base_path",
        });
    }
    if config.fetch.timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }
    if config.fetch.retries.max_attempts == 0 {
        errors.push(ValidationError::ZeroAttempts);
    }
    if config.fetch.retries.base_delay_ms > config.fetch.retries.max_delay_ms {
        errors.push(ValidationError::BackoffRangeInverted);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&NavConfig::default()).is_ok());
    }

    #[test]
    fn test_all_errors_are_reported() {
        let mut config = NavConfig::default();
        config.api.context_base = "not a url/".into();
        config.api.api_prefix = "api".into();
        config.fetch.timeout_secs = 0;
        config.fetch.retries.max_attempts = 0;
        let errors = validate_config(&config).unwrap_err();
        assert!(errors.len() >= 4);
    }
}
