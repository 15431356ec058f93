//! Fetch Orchestrator
//!
//! Issues one time-bounded request to the numbers source per call. A
//! timeout drops the request future, so a late response can never reach
//! the caller.

use log::{debug, warn};
use rollavg_core::Category;
use rollavg_ports::{NumbersSource, SourceError};
use std::sync::Arc;
use std::time::Duration;

use crate::error::FetchError;

/// Result of a fetch that did not fail
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The source answered in time
    Numbers(Vec<i64>),
    /// The timeout fired first; nothing to apply this cycle
    TimedOut,
}

/// Time-bounded fetches against a numbers source
pub struct FetchOrchestrator<S: NumbersSource + ?Sized> {
    source: Arc<S>,
    timeout: Duration,
}

impl<S: NumbersSource + ?Sized> FetchOrchestrator<S> {
    pub fn new(source: Arc<S>, timeout: Duration) -> Self {
        Self { source, timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Fetch the numbers for a category within the timeout
    ///
    /// `Manual` fails with an unsupported-category error and sends nothing.
    pub async fn fetch_category(&self, category: Category) -> Result<FetchOutcome, FetchError> {
        if !category.is_fetchable() {
            return Err(FetchError::new(
                category,
                SourceError::Unsupported(category),
            ));
        }

        debug!(
            "Fetching {} from {} (timeout {:?})",
            category,
            self.source.name(),
            self.timeout
        );

        match tokio::time::timeout(self.timeout, self.source.fetch_numbers(category)).await {
            Ok(Ok(numbers)) => Ok(FetchOutcome::Numbers(numbers)),
            Ok(Err(cause)) => Err(FetchError::new(category, cause)),
            Err(_) => {
                warn!(
                    "{} fetch exceeded {:?}, dropping request",
                    category, self.timeout
                );
                Ok(FetchOutcome::TimedOut)
            }
        }
    }
}
