use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number category tracked by the aggregator
///
/// Each category owns exactly one window. Every category except `Manual`
/// is populated from the external numbers source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Numbers typed in by the user
    Manual,
    #[serde(alias = "primes")]
    Prime,
    #[serde(alias = "fibo")]
    Fibonacci,
    Even,
    #[serde(alias = "rand")]
    Random,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown category: {0}")]
pub struct ParseCategoryError(pub String);

impl Category {
    /// All categories in declaration order
    pub const ALL: [Category; 5] = [
        Category::Manual,
        Category::Prime,
        Category::Fibonacci,
        Category::Even,
        Category::Random,
    ];

    /// Categories backed by the external numbers source
    pub const FETCHABLE: [Category; 4] = [
        Category::Prime,
        Category::Fibonacci,
        Category::Even,
        Category::Random,
    ];

    /// Stable name used in logs, reports and config files
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Manual => "manual",
            Category::Prime => "prime",
            Category::Fibonacci => "fibonacci",
            Category::Even => "even",
            Category::Random => "random",
        }
    }

    /// Resource path on the numbers source, `None` for `Manual`
    pub fn resource_path(&self) -> Option<&'static str> {
        match self {
            Category::Manual => None,
            Category::Prime => Some("primes"),
            Category::Fibonacci => Some("fibo"),
            Category::Even => Some("even"),
            Category::Random => Some("rand"),
        }
    }

    /// Returns true if this category is populated by fetching
    pub fn is_fetchable(&self) -> bool {
        self.resource_path().is_some()
    }

    /// Position of this category in [`Category::ALL`]
    pub fn index(&self) -> usize {
        match self {
            Category::Manual => 0,
            Category::Prime => 1,
            Category::Fibonacci => 2,
            Category::Even => 3,
            Category::Random => 4,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "manual" => Ok(Category::Manual),
            "prime" | "primes" => Ok(Category::Prime),
            "fibonacci" | "fibo" => Ok(Category::Fibonacci),
            "even" => Ok(Category::Even),
            "random" | "rand" => Ok(Category::Random),
            _ => Err(ParseCategoryError(s.to_string())),
        }
    }
}
