//! rollavg Gateway
//!
//! Gateway layer for the rolling-average aggregator. Provides:
//! - Wire message types for the numbers source
//! - The HTTP adapter implementing the `NumbersSource` port
//! - Source connection configuration
//!
//! ## Architecture
//!
//! ```text
//! External numbers service
//!   GET {base}/primes | fibo | even | rand
//!         │
//!  ┌──────▼────────────┐
//!  │ HttpNumbersSource │  RestError ─► SourceError
//!  └──────┬────────────┘
//!         │ NumbersSource port
//!  ┌──────▼────────────┐
//!  │   Coordinator     │
//!  └───────────────────┘
//! ```

pub mod adapters;
pub mod config;
pub mod error;
pub mod messages;

// Re-export commonly used types
pub use adapters::HttpNumbersSource;
pub use config::{DEFAULT_BASE_URL, SourceConfig};
pub use error::RestError;
pub use messages::NumbersResponse;
