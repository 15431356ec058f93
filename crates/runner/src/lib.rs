//! rollavg Runner
//!
//! - **Cli**: `-c/--config` and `-h/--help`
//! - **Config**: JSON file or embedded default, with env override
//! - **Session**: builds the coordinator over the HTTP source and runs one
//!   fetch of every category
//!
//! ## Architecture
//!
//! ```text
//!  default_config.json / --config <path>
//!               │  ROLLAVG_BASE_URL
//!               ▼
//!         ┌───────────┐
//!         │ AppConfig │
//!         └─────┬─────┘
//!               │
//!   ┌───────────▼────────────┐      ┌───────────────────┐
//!   │  CategoryCoordinator   │─────►│ HttpNumbersSource │──► numbers service
//!   └───────────┬────────────┘      └───────────────────┘
//!               │ reports
//!               ▼
//!        SessionSummary (JSON)
//! ```

pub mod cli;
pub mod config;
pub mod session;

// Re-export main types
pub use cli::{CliCommand, parse_args, usage};
pub use config::{
    AppConfig, BASE_URL_ENV, ConfigError, load_config, load_config_from_str, load_default_config,
};
pub use session::{HttpCoordinator, SessionSummary, build_coordinator, run_session};
