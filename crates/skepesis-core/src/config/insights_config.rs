use serde::{Deserialize, Serialize};

use super::defaults;
use crate::constants;

/// Insight report configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InsightsConfig {
    /// Maximum learning moments kept in a report.
    pub max_learning_moments: usize,
    /// Maximum reflection prompts kept in a report.
    pub max_reflection_prompts: usize,
    /// Category used when a response has none.
    pub default_category: String,
    /// Difficulty used when a response has none.
    pub default_difficulty: String,
}

impl Default for InsightsConfig {
    fn default() -> Self {
        Self {
            max_learning_moments: defaults::DEFAULT_MAX_LEARNING_MOMENTS,
            max_reflection_prompts: defaults::DEFAULT_MAX_REFLECTION_PROMPTS,
            default_category: constants::DEFAULT_CATEGORY.to_string(),
            default_difficulty: constants::DEFAULT_DIFFICULTY.to_string(),
        }
    }
}
