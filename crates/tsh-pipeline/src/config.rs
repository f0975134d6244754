//! Pipeline configuration.

use crate::fallback::PageSpec;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Rendering pipeline configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Remote rendering service endpoint.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Bounded wait for a remote render, in seconds. Image-heavy requests
    /// need tens of seconds; past this the attempt counts as unavailable.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Remote attempts before falling back. An explicit `useClientFallback`
    /// signal from the service stops earlier.
    #[serde(default = "default_remote_attempts")]
    pub max_remote_attempts: usize,
    /// Page geometry for the fallback path.
    #[serde(default)]
    pub page: PageSpec,
}

fn default_endpoint() -> String {
    "http://127.0.0.1:3000/api/render-pdf".to_string()
}

fn default_timeout_secs() -> u64 {
    45
}

fn default_remote_attempts() -> usize {
    2
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
            max_remote_attempts: default_remote_attempts(),
            page: PageSpec::default(),
        }
    }
}

impl PipelineConfig {
    /// Create a configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the remote service endpoint.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set the remote timeout in seconds.
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Set the maximum remote attempts.
    pub fn with_max_remote_attempts(mut self, attempts: usize) -> Self {
        self.max_remote_attempts = attempts;
        self
    }

    /// Set the fallback page geometry.
    pub fn with_page(mut self, page: PageSpec) -> Self {
        self.page = page;
        self
    }

    /// The remote timeout as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Load configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PipelineConfig::default();
        assert_eq!(config.timeout_secs, 45);
        assert_eq!(config.max_remote_attempts, 2);
        assert!(config.endpoint.starts_with("http"));
    }

    #[test]
    fn test_config_builder() {
        let config = PipelineConfig::new()
            .with_endpoint("https://render.internal/pdf")
            .with_timeout_secs(60)
            .with_max_remote_attempts(1);
        assert_eq!(config.endpoint, "https://render.internal/pdf");
        assert_eq!(config.timeout(), Duration::from_secs(60));
        assert_eq!(config.max_remote_attempts, 1);
    }

    #[test]
    fn test_config_round_trips_through_json() {
        let config = PipelineConfig::new().with_timeout_secs(30);
        let json = config.to_json().unwrap();
        let parsed = PipelineConfig::from_json(&json).unwrap();
        assert_eq!(parsed.timeout_secs, 30);
        assert_eq!(parsed.endpoint, config.endpoint);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let parsed = PipelineConfig::from_json(r#"{"endpoint": "http://r/pdf"}"#).unwrap();
        assert_eq!(parsed.endpoint, "http://r/pdf");
        assert_eq!(parsed.timeout_secs, 45);
    }
}
