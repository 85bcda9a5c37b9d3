use crate::errors::SkepesisResult;
use crate::models::CognitiveInsights;
use crate::response::Response;

/// Metacognitive analysis of a whole attempt.
pub trait IInsightAnalyzer: Send + Sync {
    /// Build the insight report. `Ok(None)` when there are no responses.
    fn analyze(&self, responses: &[Response]) -> SkepesisResult<Option<CognitiveInsights>>;
}
