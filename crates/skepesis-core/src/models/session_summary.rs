use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Aggregate scores over one ordered sequence of responses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SessionSummary {
    /// round(100 * correct / total), 0 for an empty session.
    pub accuracy_percent: u8,
    /// round(100 * aligned / total), 0 for an empty session.
    pub alignment_percent: u8,
    pub total_count: usize,
    pub correct_count: usize,
    pub aligned_count: usize,
}

impl SessionSummary {
    /// Summary of a session with no responses.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.total_count == 0
    }
}
