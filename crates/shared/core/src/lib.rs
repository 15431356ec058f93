//! rollavg Core Domain
//!
//! Pure domain types for the rolling-average aggregator.
//! This crate contains no async, no I/O, and is 100% unit testable.
//!
//! - [`Category`]: the closed set of number classes
//! - [`Window`] and [`merge`]: the bounded, deduplicated sliding window
//! - [`WindowStore`]: one window per category

pub mod category;
pub mod store;
pub mod window;

// Re-export commonly used types at crate root
pub use category::{Category, ParseCategoryError};
pub use store::WindowStore;
pub use window::{InvalidWindow, WINDOW_SIZE, Window, WindowState, mean, merge};
