// Single source of truth for all default values.

// --- Insights ---
pub const DEFAULT_MAX_LEARNING_MOMENTS: usize = 5;
pub const DEFAULT_MAX_REFLECTION_PROMPTS: usize = 3;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
