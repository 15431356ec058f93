use async_trait::async_trait;
use rollavg_core::Category;

use crate::error::SourceResult;

/// Port for the external numbers source
///
/// Implementations issue exactly one request per call and return the
/// numbers list unmodified. Time bounds are applied by the caller, which
/// cancels the call by dropping the future.
#[async_trait]
pub trait NumbersSource: Send + Sync {
    /// Fetch the current batch of numbers for a category
    async fn fetch_numbers(&self, category: Category) -> SourceResult<Vec<i64>>;

    /// Get the source's name/identifier for debugging
    fn name(&self) -> &str {
        "NumbersSource"
    }
}
