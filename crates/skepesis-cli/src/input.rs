use std::path::Path;

use anyhow::{Context, Result};
use skepesis_core::{Response, ResponseRecord};

/// Read a JSON array of response rows and map them to engine input.
///
/// Confidence is not checked here; the engine rejects bad values with
/// their position.
pub fn load_responses(path: &Path) -> Result<Vec<Response>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading responses from {}", path.display()))?;
    let records: Vec<ResponseRecord> = serde_json::from_str(&content)
        .with_context(|| format!("parsing responses in {}", path.display()))?;
    tracing::debug!(count = records.len(), path = %path.display(), "responses loaded");
    Ok(records.into_iter().map(Response::from).collect())
}
