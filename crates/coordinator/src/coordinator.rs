//! Category Coordinator
//!
//! Top-level orchestration unit: tracks per-category in-flight status,
//! sequences fetches into window updates, and keeps the last surfaced error.

use futures_util::future::join_all;
use log::{debug, error, info, warn};
use parking_lot::Mutex;
use rollavg_core::{Category, Window, WindowStore};
use rollavg_ports::NumbersSource;
use std::sync::Arc;

use crate::config::CoordinatorConfig;
use crate::error::{CoordinatorError, ErrorRecord, FetchError, Result};
use crate::fetch::{FetchOrchestrator, FetchOutcome};
use crate::in_flight::InFlightRegistry;
use crate::report::WindowReport;

/// What a `trigger` call did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TriggerOutcome {
    /// Numbers arrived and were merged; `added` are the novel ones
    Updated { added: Vec<i64> },
    /// A fetch for this category was already running; nothing was sent
    AlreadyInFlight,
    /// The source was too slow; window and error record untouched
    TimedOut,
    /// The fetch failed; the error was recorded
    Failed(FetchError),
}

/// Drives fetches and manual input into the per-category windows
///
/// Generic over:
/// - `S`: NumbersSource - where non-manual numbers come from
///
/// Locks are only taken inside synchronous sections and are never held
/// across an await.
pub struct CategoryCoordinator<S: NumbersSource + ?Sized> {
    config: CoordinatorConfig,
    orchestrator: FetchOrchestrator<S>,
    windows: Mutex<WindowStore>,
    in_flight: InFlightRegistry,
    last_error: Mutex<Option<ErrorRecord>>,
}

impl<S: NumbersSource + ?Sized> CategoryCoordinator<S> {
    pub fn new(source: Arc<S>, config: CoordinatorConfig) -> Self {
        let orchestrator = FetchOrchestrator::new(source, config.fetch_timeout());
        Self {
            config,
            orchestrator,
            windows: Mutex::new(WindowStore::new()),
            in_flight: InFlightRegistry::new(),
            last_error: Mutex::new(None),
        }
    }

    pub fn with_defaults(source: Arc<S>) -> Self {
        Self::new(source, CoordinatorConfig::default())
    }

    pub fn config(&self) -> &CoordinatorConfig {
        &self.config
    }

    /// Startup routine: fetch every configured initial category concurrently
    pub async fn initialize(&self) -> Vec<(Category, TriggerOutcome)> {
        let categories: Vec<Category> = self
            .config
            .initial_categories
            .iter()
            .copied()
            .filter(|category| {
                if !category.is_fetchable() {
                    warn!("Skipping initial category {}: not fetchable", category);
                }
                category.is_fetchable()
            })
            .collect();

        info!(
            "Initializing with {} fetch(es): {:?}",
            categories.len(),
            categories
        );

        self.trigger_all(&categories)
            .await
            .into_iter()
            .filter_map(|(category, result)| result.ok().map(|outcome| (category, outcome)))
            .collect()
    }

    /// Fetch a category and merge the result into its window
    ///
    /// A no-op returning `AlreadyInFlight` if a fetch for the category is
    /// still running. The in-flight flag is held until the window has been
    /// written back and is released on every exit path.
    pub async fn trigger(&self, category: Category) -> Result<TriggerOutcome> {
        if !category.is_fetchable() {
            return Err(CoordinatorError::NotFetchable(category));
        }

        let Some(_guard) = self.in_flight.try_acquire(category) else {
            debug!("{} already in flight, ignoring trigger", category);
            return Ok(TriggerOutcome::AlreadyInFlight);
        };

        let outcome = match self.orchestrator.fetch_category(category).await {
            Ok(FetchOutcome::Numbers(numbers)) => {
                let added = self.apply(category, &numbers);
                TriggerOutcome::Updated { added }
            }
            Ok(FetchOutcome::TimedOut) => TriggerOutcome::TimedOut,
            Err(err) => {
                error!("{}", err);
                self.record_error(category, err.to_string());
                TriggerOutcome::Failed(err)
            }
        };

        Ok(outcome)
    }

    /// Trigger several categories concurrently on the current task
    pub async fn trigger_all(
        &self,
        categories: &[Category],
    ) -> Vec<(Category, Result<TriggerOutcome>)> {
        let triggers = categories
            .iter()
            .map(|&category| async move { (category, self.trigger(category).await) });
        join_all(triggers).await
    }

    /// Validate and insert a manually entered number
    ///
    /// Rejections are returned and also written to the error record.
    pub fn submit_manual(&self, raw: &str) -> Result<Window> {
        let result = self.try_submit_manual(raw);
        if let Err(err) = &result {
            warn!("Manual entry rejected: {}", err);
            self.record_error(Category::Manual, err.to_string());
        }
        result
    }

    fn try_submit_manual(&self, raw: &str) -> Result<Window> {
        let value = parse_manual(raw)?;

        // Duplicate check and merge under one lock
        let mut windows = self.windows.lock();
        if windows.contains(Category::Manual, value) {
            return Err(CoordinatorError::DuplicateValue(value));
        }
        windows.apply(Category::Manual, &[value]);
        let window = windows.get(Category::Manual).clone();
        drop(windows);

        info!(
            "manual window updated with {}: avg {:.2}",
            value,
            window.average()
        );
        Ok(window)
    }

    fn apply(&self, category: Category, numbers: &[i64]) -> Vec<i64> {
        let mut windows = self.windows.lock();
        let added = windows.apply(category, numbers);
        let window = windows.get(category);
        info!(
            "{} window updated: {} new of {} received, avg {:.2}",
            category,
            added.len(),
            numbers.len(),
            window.average()
        );
        debug!("{} window now {:?}", category, window.current_state());
        added
    }

    fn record_error(&self, category: Category, message: String) {
        *self.last_error.lock() = Some(ErrorRecord::new(category, message));
    }

    /// Snapshot of a category's window
    pub fn window(&self, category: Category) -> Window {
        self.windows.lock().get(category).clone()
    }

    /// Snapshots of every window in declaration order
    pub fn windows(&self) -> Vec<(Category, Window)> {
        self.windows
            .lock()
            .iter()
            .map(|(category, window)| (category, window.clone()))
            .collect()
    }

    /// Whether a fetch for the category is in flight
    pub fn is_in_flight(&self, category: Category) -> bool {
        self.in_flight.is_in_flight(category)
    }

    /// Whether any category has a fetch in flight
    pub fn any_in_flight(&self) -> bool {
        self.in_flight.any()
    }

    pub fn last_error(&self) -> Option<ErrorRecord> {
        self.last_error.lock().clone()
    }

    pub fn clear_last_error(&self) {
        *self.last_error.lock() = None;
    }

    /// Display snapshot of one category
    pub fn report(&self, category: Category) -> WindowReport {
        let window = self.window(category);
        WindowReport::from_window(&window, self.is_in_flight(category))
    }

    /// Display snapshots of every category
    pub fn reports(&self) -> Vec<(Category, WindowReport)> {
        self.windows()
            .into_iter()
            .map(|(category, window)| {
                let loading = self.is_in_flight(category);
                (category, WindowReport::from_window(&window, loading))
            })
            .collect()
    }
}

/// Parse manual input as a whole 64-bit integer, ignoring surrounding whitespace
pub fn parse_manual(raw: &str) -> Result<i64> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| CoordinatorError::InvalidInput(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use rollavg_ports::SourceResult;

    /// Source that answers immediately with a fixed list
    struct StaticSource(Vec<i64>);

    #[async_trait]
    impl NumbersSource for StaticSource {
        async fn fetch_numbers(&self, _category: Category) -> SourceResult<Vec<i64>> {
            Ok(self.0.clone())
        }
    }

    fn coordinator() -> CategoryCoordinator<StaticSource> {
        CategoryCoordinator::with_defaults(Arc::new(StaticSource(vec![2, 4, 6])))
    }

    #[test]
    fn test_parse_manual() {
        assert_eq!(parse_manual("42"), Ok(42));
        assert_eq!(parse_manual("  -7\n"), Ok(-7));
        assert_eq!(
            parse_manual("abc"),
            Err(CoordinatorError::InvalidInput("abc".to_string()))
        );
        assert!(parse_manual("").is_err());
        assert!(parse_manual("12abc").is_err());
        assert!(parse_manual("1.5").is_err());
        assert!(parse_manual("99999999999999999999").is_err());
    }

    #[test]
    fn test_submit_manual_inserts() {
        let coordinator = coordinator();

        let window = coordinator.submit_manual("5").unwrap();
        assert_eq!(window.current_state(), &[5]);
        assert_eq!(window.average(), 5.0);

        let window = coordinator.submit_manual("7").unwrap();
        assert_eq!(window.current_state(), &[5, 7]);
        assert_eq!(window.previous_state(), &[5]);
        assert_eq!(window.last_ingested(), &[7]);
        assert_eq!(window.average(), 6.0);
        assert!(coordinator.last_error().is_none());
    }

    #[test]
    fn test_submit_manual_rejects_duplicate() {
        let coordinator = coordinator();
        coordinator.submit_manual("5").unwrap();
        let before = coordinator.window(Category::Manual);

        let err = coordinator.submit_manual("5").unwrap_err();

        assert_eq!(err, CoordinatorError::DuplicateValue(5));
        assert_eq!(coordinator.window(Category::Manual), before);
        let record = coordinator.last_error().unwrap();
        assert_eq!(record.category, Category::Manual);
        assert_eq!(record.message, err.to_string());
    }

    #[test]
    fn test_submit_manual_rejects_invalid() {
        let coordinator = coordinator();

        let err = coordinator.submit_manual("abc").unwrap_err();

        assert!(matches!(err, CoordinatorError::InvalidInput(_)));
        assert!(coordinator.window(Category::Manual).is_empty());
        assert_eq!(coordinator.last_error().unwrap().category, Category::Manual);
    }

    #[test]
    fn test_manual_eviction_after_ten_entries() {
        let coordinator = coordinator();
        for n in 1..=11 {
            coordinator.submit_manual(&n.to_string()).unwrap();
        }

        let window = coordinator.window(Category::Manual);
        assert_eq!(window.current_state(), &[2, 3, 4, 5, 6, 7, 8, 9, 10, 11]);
        // 1 was evicted, so it is accepted again
        assert!(coordinator.submit_manual("1").is_ok());
    }

    #[tokio::test]
    async fn test_trigger_manual_is_rejected() {
        let coordinator = coordinator();
        let err = coordinator.trigger(Category::Manual).await.unwrap_err();

        assert_eq!(err, CoordinatorError::NotFetchable(Category::Manual));
        assert!(coordinator.last_error().is_none());
    }

    #[tokio::test]
    async fn test_trigger_updates_window() {
        let coordinator = coordinator();

        let outcome = coordinator.trigger(Category::Even).await.unwrap();

        assert_eq!(
            outcome,
            TriggerOutcome::Updated {
                added: vec![2, 4, 6]
            }
        );
        let window = coordinator.window(Category::Even);
        assert_eq!(window.current_state(), &[2, 4, 6]);
        assert_eq!(window.average(), 4.0);
        assert!(!coordinator.is_in_flight(Category::Even));
    }

    #[tokio::test]
    async fn test_repeated_trigger_is_no_op_merge() {
        let coordinator = coordinator();
        coordinator.trigger(Category::Even).await.unwrap();

        let outcome = coordinator.trigger(Category::Even).await.unwrap();

        assert_eq!(outcome, TriggerOutcome::Updated { added: vec![] });
        let window = coordinator.window(Category::Even);
        assert_eq!(window.current_state(), &[2, 4, 6]);
        assert!(window.last_ingested().is_empty());
        assert_eq!(window.average(), 4.0);
    }

    #[tokio::test]
    async fn test_initialize_fetches_even() {
        let coordinator = coordinator();

        let outcomes = coordinator.initialize().await;

        assert_eq!(outcomes.len(), 1);
        assert_eq!(outcomes[0].0, Category::Even);
        assert_eq!(coordinator.window(Category::Even).current_state(), &[2, 4, 6]);
        assert!(coordinator.window(Category::Prime).is_empty());
    }

    #[tokio::test]
    async fn test_initialize_skips_manual() {
        let config = CoordinatorConfig::default()
            .with_initial_categories(vec![Category::Manual, Category::Prime]);
        let coordinator = CategoryCoordinator::new(Arc::new(StaticSource(vec![3])), config);

        let outcomes = coordinator.initialize().await;

        assert_eq!(
            outcomes,
            vec![(Category::Prime, TriggerOutcome::Updated { added: vec![3] })]
        );
        assert!(coordinator.window(Category::Manual).is_empty());
    }

    #[tokio::test]
    async fn test_reports_cover_all_categories() {
        let coordinator = coordinator();
        coordinator.trigger(Category::Prime).await.unwrap();

        let reports = coordinator.reports();

        assert_eq!(reports.len(), 5);
        let (category, prime) = &reports[Category::Prime.index()];
        assert_eq!(*category, Category::Prime);
        assert_eq!(prime.avg, "4.00");
        assert!(!prime.loading);
        assert_eq!(coordinator.report(Category::Random).avg, "0.00");
    }

    #[test]
    fn test_clear_last_error() {
        let coordinator = coordinator();
        coordinator.submit_manual("x").unwrap_err();
        assert!(coordinator.last_error().is_some());

        coordinator.clear_last_error();
        assert!(coordinator.last_error().is_none());
    }
}
