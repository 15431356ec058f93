//! rollavg Ports
//!
//! Port definitions (traits) for the rolling-average aggregator.
//! These define the boundaries between domain logic and infrastructure.

mod error;
mod numbers;

pub use error::{SourceError, SourceResult};
pub use numbers::NumbersSource;
