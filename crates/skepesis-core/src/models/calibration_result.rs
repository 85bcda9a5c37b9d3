use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::Pattern;

/// Per-response output of the calibration engine.
///
/// `pattern` and `aligned` come from different threshold schemes and are
/// allowed to disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CalibrationResult {
    pub pattern: Pattern,
    pub aligned: bool,
}
