//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the navigation controller.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct NavConfig {
    /// Server API settings.
    pub api: ApiConfig,

    /// Static video asset settings.
    pub video: VideoConfig,

    /// Outbound fetch behavior.
    pub fetch: FetchConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Where dynamic page data is fetched from.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Origin plus context path the application is served under, without a
    /// trailing slash (e.g. "http://localhost:8080/physics").
    pub context_base: String,

    /// Path prefix of the content API under the context base.
    pub api_prefix: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            context_base: "http://localhost:8080".to_string(),
            api_prefix: "/api".to_string(),
        }
    }
}

impl ApiConfig {
    /// Full URL for a dynamic page fetch: `context_base + api_prefix + path`.
    pub fn page_url(&self, path: &str) -> String {
        format!("{}{}{}", self.context_base, self.api_prefix, path)
    }
}

/// Static video asset settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct VideoConfig {
    /// Base path for video files under the context path.
    pub base_path: String,
}

impl Default for VideoConfig {
    fn default() -> Self {
        Self {
            base_path: "/static/video".to_string(),
        }
    }
}

/// Outbound fetch behavior.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Request timeout in seconds.
    pub timeout_secs: u64,

    /// Retry settings for transient failures.
    pub retries: RetryConfig,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 10,
            retries: RetryConfig::default(),
        }
    }
}

/// Retry configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RetryConfig {
    /// Enable retries.
    pub enabled: bool,

    /// Maximum number of attempts, including the first.
    pub max_attempts: u32,

    /// Base delay for exponential backoff in milliseconds.
    pub base_delay_ms: u64,

    /// Maximum delay for exponential backoff in milliseconds.
    pub max_delay_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_attempts: 3,
            base_delay_ms: 100,
            max_delay_ms: 2000,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_url_composition() {
        let api = ApiConfig {
            context_base: "http://localhost:8080/physics".into(),
            api_prefix: "/api".into(),
        };
        assert_eq!(
            api.page_url("/topics/energy"),
            "http://localhost:8080/physics/api/topics/energy"
        );
    }

    #[test]
    fn test_empty_toml_is_valid() {
        let config: NavConfig = toml::from_str("").unwrap();
        assert_eq!(config.fetch.timeout_secs, 10);
        assert_eq!(config.api.api_prefix, "/api");
    }
}
