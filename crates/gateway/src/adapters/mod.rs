//! Numbers source adapters
//!
//! Adapters implement the `NumbersSource` port over a concrete transport.

pub mod http;

pub use http::HttpNumbersSource;
