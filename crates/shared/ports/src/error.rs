use rollavg_core::Category;
use thiserror::Error;

/// Domain-level errors for numbers source operations
///
/// Adapters convert their transport-specific errors into this type so the
/// coordinator never sees infrastructure details.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Request failed with status {code}: {body}")]
    Status { code: u16, body: String },

    #[error("Malformed response: {0}")]
    Malformed(String),

    #[error("Category {0} has no remote source")]
    Unsupported(Category),
}

pub type SourceResult<T> = std::result::Result<T, SourceError>;
