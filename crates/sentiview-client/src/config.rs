//! Configuration for the upstream sentiment service client

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default service address when `SENTIVIEW_API_URL` is unset
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Default per-request timeout.
///
/// Generous because the first request after backend startup may wait on a
/// cold sentiment model load.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Configuration for the sentiment service client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the analysis service
    pub base_url: String,

    /// Per-request timeout (applies to each upstream call independently)
    pub request_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ClientConfig {
    /// Create a new configuration builder
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Load the base URL from the `SENTIVIEW_API_URL` environment variable,
    /// keeping the default when unset
    pub fn with_env_base_url(mut self) -> Self {
        if let Ok(url) = std::env::var("SENTIVIEW_API_URL") {
            self.base_url = url;
        }
        self
    }
}

/// Builder for ClientConfig
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    base_url: Option<String>,
    request_timeout: Option<Duration>,
}

impl ClientConfigBuilder {
    /// Set the service base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the per-request timeout
    pub fn request_timeout(mut self, duration: Duration) -> Self {
        self.request_timeout = Some(duration);
        self
    }

    /// Load the base URL from the environment
    pub fn with_env_base_url(mut self) -> Self {
        if let Ok(url) = std::env::var("SENTIVIEW_API_URL") {
            self.base_url = Some(url);
        }
        self
    }

    /// Build the configuration
    pub fn build(self) -> ClientConfig {
        let defaults = ClientConfig::default();
        ClientConfig {
            base_url: self.base_url.unwrap_or(defaults.base_url),
            request_timeout: self.request_timeout.unwrap_or(defaults.request_timeout),
        }
    }
}
