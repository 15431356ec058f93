//! Numbers source configuration

use serde::{Deserialize, Serialize};

/// Base URL of the evaluation service the numbers come from
pub const DEFAULT_BASE_URL: &str = "http://20.244.56.144/evaluation-service";

/// Connection settings for the HTTP numbers source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Base URL; resource paths are appended as `{base_url}/{path}`
    pub base_url: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl SourceConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Check the base URL is non-empty and uses an http(s) scheme
    pub fn validate(&self) -> Result<(), String> {
        let url = self.base_url.trim();
        if url.is_empty() {
            return Err("source.base_url must not be empty".to_string());
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(format!(
                "source.base_url must start with http:// or https://, got {}",
                url
            ));
        }
        Ok(())
    }
}
