//! Wire message types for the numbers source

pub mod numbers;

pub use numbers::NumbersResponse;
