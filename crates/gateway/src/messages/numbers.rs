//! Numbers source message types

use serde::{Deserialize, Serialize};

/// Response body served by the numbers source: `{"numbers": [..]}`
///
/// Unknown fields are ignored; a missing or non-integer `numbers` field is
/// a parse error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumbersResponse {
    pub numbers: Vec<i64>,
}
