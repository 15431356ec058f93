//! Coordinator configuration

use rollavg_core::Category;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Time budget for one fetch, measured from request start
pub const DEFAULT_FETCH_TIMEOUT_MS: u64 = 500;

/// Coordinator configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoordinatorConfig {
    /// Fetch timeout in ms; slower responses are dropped silently
    pub fetch_timeout_ms: u64,
    /// Categories fetched by `initialize()`
    pub initial_categories: Vec<Category>,
}

impl Default for CoordinatorConfig {
    fn default() -> Self {
        Self {
            fetch_timeout_ms: DEFAULT_FETCH_TIMEOUT_MS,
            initial_categories: vec![Category::Even],
        }
    }
}

impl CoordinatorConfig {
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_millis(self.fetch_timeout_ms)
    }

    /// Set the timeout, rounding sub-millisecond remainders up
    pub fn with_fetch_timeout(mut self, timeout: Duration) -> Self {
        let millis = timeout.as_nanos().div_ceil(1_000_000);
        self.fetch_timeout_ms = u64::try_from(millis).unwrap_or(u64::MAX);
        self
    }

    pub fn with_initial_categories(mut self, categories: Vec<Category>) -> Self {
        self.initial_categories = categories;
        self
    }

    /// Check the timeout is positive and every initial category is fetchable
    pub fn validate(&self) -> Result<(), String> {
        if self.fetch_timeout_ms == 0 {
            return Err("coordinator.fetch_timeout_ms must be greater than 0".to_string());
        }
        if let Some(category) = self
            .initial_categories
            .iter()
            .find(|c| !c.is_fetchable())
        {
            return Err(format!(
                "coordinator.initial_categories contains {}, which cannot be fetched",
                category
            ));
        }
        Ok(())
    }
}
