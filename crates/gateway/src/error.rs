//! Error types for the gateway crate

use rollavg_core::Category;
use rollavg_ports::SourceError;
use thiserror::Error;

/// HTTP-level errors
#[derive(Error, Debug)]
pub enum RestError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {code}: {body}")]
    Status { code: u16, body: String },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("No resource path for category {0}")]
    UnsupportedCategory(Category),
}

/// Convert infrastructure RestError to domain SourceError
impl From<RestError> for SourceError {
    fn from(err: RestError) -> Self {
        match err {
            RestError::Http(e) => SourceError::Network(e.to_string()),
            RestError::Status { code, body } => SourceError::Status { code, body },
            RestError::Parse(msg) => SourceError::Malformed(msg),
            RestError::UnsupportedCategory(category) => SourceError::Unsupported(category),
        }
    }
}
