//! rollavg Coordinator
//!
//! Sits between callers (a UI, the runner) and the numbers source:
//! - **Fetch Orchestrator**: one time-bounded request per fetch; timeouts are silent
//! - **In-flight Registry**: at most one fetch per category, released by guard
//! - **Category Coordinator**: merges results into windows, records errors
//! - **Reports**: display-shaped window snapshots
//!
//! ## Architecture
//!
//! ```text
//! trigger(category) ──► ┌──────────────────────────────────────────┐
//!                       │          Category Coordinator            │
//!                       │  in-flight? ──yes──► AlreadyInFlight     │
//!                       │      │ no (guard held until settled)     │
//!                       │  ┌───▼──────────────────────────┐        │
//!                       │  │   Fetch Orchestrator          │       │
//!                       │  │   timeout(NumbersSource)      │       │
//!                       │  └───┬──────────┬──────────┬─────┘       │
//!                       │   numbers    FetchError  TimedOut        │
//!                       │      │          │          │             │
//!                       │   merge()   ErrorRecord  (nothing)       │
//!                       │      │                                   │
//!                       │  WindowStore                             │
//!                       └──────────────────────────────────────────┘
//! submit_manual(raw) ──► parse ─► duplicate check ─► merge ─► WindowStore
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use rollavg_coordinator::{CategoryCoordinator, CoordinatorConfig};
//! use rollavg_core::Category;
//!
//! let coordinator = CategoryCoordinator::new(Arc::new(source), CoordinatorConfig::default());
//! coordinator.initialize().await;
//!
//! coordinator.trigger(Category::Prime).await?;
//! coordinator.submit_manual("42")?;
//! println!("{}", coordinator.report(Category::Prime).to_json_pretty()?);
//! ```

pub mod config;
pub mod coordinator;
pub mod error;
pub mod fetch;
pub mod in_flight;
pub mod report;

// Re-export main types
pub use config::{CoordinatorConfig, DEFAULT_FETCH_TIMEOUT_MS};
pub use coordinator::{CategoryCoordinator, TriggerOutcome, parse_manual};
pub use error::{CoordinatorError, ErrorRecord, FetchError, Result};
pub use fetch::{FetchOrchestrator, FetchOutcome};
pub use in_flight::{InFlightGuard, InFlightRegistry};
pub use report::{WindowReport, format_average};
