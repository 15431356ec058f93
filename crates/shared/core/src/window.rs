use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// Maximum number of values a window retains
pub const WINDOW_SIZE: usize = 10;

/// Bounded, deduplicated, insertion-ordered window of integers
///
/// Windows are only produced by [`merge`], which keeps the invariants:
/// - `current_state` holds no duplicates
/// - `current_state.len() <= WINDOW_SIZE`, oldest entries evicted first
/// - `average` is the mean of `current_state`, or `0.0` when empty
///
/// Deserializing goes through [`WindowState`], which checks the first two
/// and recomputes the average.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "WindowState")]
pub struct Window {
    previous_state: Vec<i64>,
    current_state: Vec<i64>,
    last_ingested: Vec<i64>,
    average: f64,
}

impl Window {
    /// Create an empty window
    pub fn new() -> Self {
        Self::default()
    }

    /// Contents immediately before the last update
    pub fn previous_state(&self) -> &[i64] {
        &self.previous_state
    }

    /// Current contents, oldest first
    pub fn current_state(&self) -> &[i64] {
        &self.current_state
    }

    /// Numbers actually added by the last update
    pub fn last_ingested(&self) -> &[i64] {
        &self.last_ingested
    }

    /// Mean of the current contents
    pub fn average(&self) -> f64 {
        self.average
    }

    pub fn contains(&self, value: i64) -> bool {
        self.current_state.contains(&value)
    }

    pub fn len(&self) -> usize {
        self.current_state.len()
    }

    pub fn is_empty(&self) -> bool {
        self.current_state.is_empty()
    }

    /// Fold a batch into this window, see [`merge`]
    pub fn merge(&self, incoming: &[i64]) -> (Window, Vec<i64>) {
        merge(self, incoming)
    }
}

/// Serialized form of a [`Window`] before validation
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WindowState {
    pub previous_state: Vec<i64>,
    pub current_state: Vec<i64>,
    pub last_ingested: Vec<i64>,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidWindow {
    #[error("Window holds {0} values, more than {max}", max = WINDOW_SIZE)]
    TooLong(usize),
    #[error("Window holds {0} more than once")]
    Duplicate(i64),
}

impl TryFrom<WindowState> for Window {
    type Error = InvalidWindow;

    fn try_from(state: WindowState) -> Result<Self, Self::Error> {
        if state.current_state.len() > WINDOW_SIZE {
            return Err(InvalidWindow::TooLong(state.current_state.len()));
        }
        let mut seen = HashSet::with_capacity(state.current_state.len());
        if let Some(&dup) = state.current_state.iter().find(|n| !seen.insert(**n)) {
            return Err(InvalidWindow::Duplicate(dup));
        }

        let average = mean(&state.current_state);
        Ok(Window {
            previous_state: state.previous_state,
            current_state: state.current_state,
            last_ingested: state.last_ingested,
            average,
        })
    }
}

/// Merge a batch of candidate numbers into a window
///
/// Numbers already present (including ones added earlier in the same batch)
/// are dropped. The rest are appended in batch order, then the front of the
/// window is evicted down to [`WINDOW_SIZE`] and the average recomputed.
///
/// Returns the next window and the numbers that were added.
pub fn merge(window: &Window, incoming: &[i64]) -> (Window, Vec<i64>) {
    let mut seen: HashSet<i64> = window.current_state.iter().copied().collect();
    let added: Vec<i64> = incoming
        .iter()
        .copied()
        .filter(|n| seen.insert(*n))
        .collect();

    let mut current = Vec::with_capacity(window.current_state.len() + added.len());
    current.extend_from_slice(&window.current_state);
    current.extend_from_slice(&added);

    if current.len() > WINDOW_SIZE {
        let overflow = current.len() - WINDOW_SIZE;
        current.drain(..overflow);
    }

    let average = mean(&current);

    let next = Window {
        previous_state: window.current_state.clone(),
        current_state: current,
        last_ingested: added.clone(),
        average,
    };

    (next, added)
}

/// Arithmetic mean, `0.0` for an empty slice
///
/// Summed in `i128` so ten extreme `i64` values cannot overflow.
pub fn mean(values: &[i64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let sum: i128 = values.iter().map(|&v| i128::from(v)).sum();
    sum as f64 / values.len() as f64
}
