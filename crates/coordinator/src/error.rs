//! Coordinator errors

use rollavg_core::Category;
use rollavg_ports::SourceError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Non-timeout failure contacting the numbers source
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Failed to fetch {category} numbers: {cause}")]
pub struct FetchError {
    pub category: Category,
    pub cause: SourceError,
}

impl FetchError {
    pub fn new(category: Category, cause: SourceError) -> Self {
        Self { category, cause }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoordinatorError {
    #[error("Please enter a valid number, got {0:?}")]
    InvalidInput(String),

    #[error("Number already exists in the current window: {0}")]
    DuplicateValue(i64),

    #[error("Category {0} is not fetched from the numbers source")]
    NotFetchable(Category),
}

pub type Result<T> = std::result::Result<T, CoordinatorError>;

/// Most recent surfaced failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorRecord {
    pub category: Category,
    pub message: String,
}

impl ErrorRecord {
    pub fn new(category: Category, message: impl Into<String>) -> Self {
        Self {
            category,
            message: message.into(),
        }
    }
}
