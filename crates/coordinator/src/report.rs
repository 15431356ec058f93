//! Display-shaped window snapshots

use rollavg_core::Window;
use serde::{Deserialize, Serialize};

/// Snapshot of one category's window in the shape a results panel renders
///
/// ```json
/// { "windowPrevState": [], "windowCurrState": [2, 4, 6], "numbers": [2, 4, 6], "avg": "4.00", "loading": false }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowReport {
    pub window_prev_state: Vec<i64>,
    pub window_curr_state: Vec<i64>,
    /// Numbers added by the last update
    pub numbers: Vec<i64>,
    /// Average with two decimals
    pub avg: String,
    pub loading: bool,
}

impl WindowReport {
    pub fn from_window(window: &Window, loading: bool) -> Self {
        Self {
            window_prev_state: window.previous_state().to_vec(),
            window_curr_state: window.current_state().to_vec(),
            numbers: window.last_ingested().to_vec(),
            avg: format_average(window.average()),
            loading,
        }
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

pub fn format_average(average: f64) -> String {
    format!("{:.2}", average)
}
