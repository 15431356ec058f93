//! Startup session
//!
//! Builds the coordinator from config, runs the initial fetches, then
//! fetches the remaining categories once and collects the reports.

use log::info;
use rollavg_coordinator::{CategoryCoordinator, ErrorRecord, TriggerOutcome, WindowReport};
use rollavg_core::Category;
use rollavg_gateway::HttpNumbersSource;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::config::AppConfig;

pub type HttpCoordinator = CategoryCoordinator<HttpNumbersSource>;

/// Wire the HTTP numbers source into a coordinator
pub fn build_coordinator(config: &AppConfig) -> Arc<HttpCoordinator> {
    let source = Arc::new(HttpNumbersSource::from_config(&config.source));
    info!("Numbers source at {}", source.base_url());
    Arc::new(CategoryCoordinator::new(source, config.coordinator.clone()))
}

/// What one session did, keyed by category name
#[derive(Debug, Clone, Serialize)]
pub struct SessionSummary {
    pub reports: BTreeMap<String, WindowReport>,
    #[serde(rename = "lastError")]
    pub last_error: Option<ErrorRecord>,
}

impl SessionSummary {
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Fetch every category once: the configured initial ones first, the rest after
pub async fn run_session(coordinator: &HttpCoordinator) -> SessionSummary {
    let initial = coordinator.initialize().await;
    log_outcomes(&initial);

    let remaining: Vec<Category> = Category::FETCHABLE
        .into_iter()
        .filter(|category| !coordinator.config().initial_categories.contains(category))
        .collect();
    let outcomes: Vec<(Category, TriggerOutcome)> = coordinator
        .trigger_all(&remaining)
        .await
        .into_iter()
        .filter_map(|(category, result)| result.ok().map(|outcome| (category, outcome)))
        .collect();
    log_outcomes(&outcomes);

    SessionSummary {
        reports: coordinator
            .reports()
            .into_iter()
            .map(|(category, report)| (category.to_string(), report))
            .collect(),
        last_error: coordinator.last_error(),
    }
}

fn log_outcomes(outcomes: &[(Category, TriggerOutcome)]) {
    for (category, outcome) in outcomes {
        match outcome {
            TriggerOutcome::Updated { added } => info!("{}: {} new number(s)", category, added.len()),
            TriggerOutcome::AlreadyInFlight => info!("{}: already in flight", category),
            TriggerOutcome::TimedOut => info!("{}: timed out", category),
            TriggerOutcome::Failed(err) => info!("{}: {}", category, err),
        }
    }
}
