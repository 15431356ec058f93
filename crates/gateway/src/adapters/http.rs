//! HTTP numbers source
//!
//! Issues a single `GET {base_url}/{resource}` per fetch and decodes the
//! `{"numbers": [..]}` body.

use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use rollavg_core::Category;
use rollavg_ports::{NumbersSource, SourceResult};
use serde::de::DeserializeOwned;

use crate::config::SourceConfig;
use crate::error::RestError;
use crate::messages::NumbersResponse;

/// REST client for the external numbers source
/// Infrastructure component - handles HTTP communication
#[derive(Clone)]
pub struct HttpNumbersSource {
    client: Client,
    base_url: String,
}

impl HttpNumbersSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        HttpNumbersSource {
            client: Client::new(),
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &SourceConfig) -> Self {
        Self::new(config.base_url.clone())
    }

    /// Base URL with any trailing slash removed
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL for a category, `None` for `Manual`
    pub fn url_for(&self, category: Category) -> Option<String> {
        category
            .resource_path()
            .map(|path| format!("{}/{}", self.base_url, path))
    }

    /// Fetch the numbers list for a category
    pub async fn get_numbers(&self, category: Category) -> Result<Vec<i64>, RestError> {
        let url = self
            .url_for(category)
            .ok_or(RestError::UnsupportedCategory(category))?;

        let resp: NumbersResponse = self.get(&url).await?;
        debug!(
            "{} returned {} numbers for {}",
            url,
            resp.numbers.len(),
            category
        );
        Ok(resp.numbers)
    }

    async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T, RestError> {
        debug!("GET {}", url);
        let resp = self.client.get(url).send().await?;

        self.handle_response(resp).await
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, RestError> {
        let status = resp.status();
        let text = resp.text().await?;

        if !status.is_success() {
            return Err(RestError::Status {
                code: status.as_u16(),
                body: text,
            });
        }

        serde_json::from_str(&text).map_err(|e| RestError::Parse(e.to_string()))
    }
}

/// Implement NumbersSource for HttpNumbersSource (Dependency Inversion)
///
/// Converts infrastructure RestError to domain SourceError to maintain
/// proper dependency direction (infrastructure -> domain).
#[async_trait]
impl NumbersSource for HttpNumbersSource {
    async fn fetch_numbers(&self, category: Category) -> SourceResult<Vec<i64>> {
        self.get_numbers(category).await.map_err(Into::into)
    }

    fn name(&self) -> &str {
        "HttpNumbersSource"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_trimmed() {
        let source = HttpNumbersSource::new("http://localhost:9000/numbers/");
        assert_eq!(source.base_url(), "http://localhost:9000/numbers");
        assert_eq!(
            source.url_for(Category::Prime).as_deref(),
            Some("http://localhost:9000/numbers/primes")
        );
    }

    #[test]
    fn test_urls_per_category() {
        let source = HttpNumbersSource::from_config(&SourceConfig::new("http://svc"));
        assert_eq!(source.url_for(Category::Fibonacci).as_deref(), Some("http://svc/fibo"));
        assert_eq!(source.url_for(Category::Even).as_deref(), Some("http://svc/even"));
        assert_eq!(source.url_for(Category::Random).as_deref(), Some("http://svc/rand"));
        assert_eq!(source.url_for(Category::Manual), None);
    }

    #[tokio::test]
    async fn test_manual_is_rejected_without_request() {
        // Unroutable base: any request would fail with a network error instead
        let source = HttpNumbersSource::new("http://127.0.0.1:9");
        let err = source.fetch_numbers(Category::Manual).await.unwrap_err();
        assert_eq!(err, rollavg_ports::SourceError::Unsupported(Category::Manual));
    }
}
