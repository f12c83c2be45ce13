//! Derived completion statistics.

use serde::{Deserialize, Serialize};

/// Completion summary for one list: `done` of `total` steps, `pct` percent.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ProgressStats {
    /// Number of completed steps
    pub done: usize,
    /// Number of steps in the list
    pub total: usize,
    /// Rounded percentage in `0..=100`
    pub pct: u8,
}

impl ProgressStats {
    /// Whether every step is checked. A list with no steps is never complete.
    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.done == self.total
    }

    /// Whether at least one step is checked.
    pub fn is_started(&self) -> bool {
        self.done > 0
    }
}
