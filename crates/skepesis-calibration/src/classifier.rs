use skepesis_core::models::Pattern;
use skepesis_core::ConfidenceBand;

/// Map a `(confidence, is_correct)` pair to its behavioral pattern.
///
/// Rules, first match wins:
///
/// ```text
/// correct   && c >= 75  → ConfidentCorrect
/// correct   && c <  50  → Underconfident
/// !correct  && c >= 75  → Overconfident
/// !correct  && c <  50  → Guessing
/// otherwise (50 <= c < 75) → Calibrated
/// ```
///
/// The bands come from [`ConfidenceBand::of`]. Total over all inputs;
/// range validation is the aggregator's concern.
pub fn classify(confidence: f64, is_correct: bool) -> Pattern {
    match (is_correct, ConfidenceBand::of(confidence)) {
        (true, ConfidenceBand::High) => Pattern::ConfidentCorrect,
        (true, ConfidenceBand::Low) => Pattern::Underconfident,
        (false, ConfidenceBand::High) => Pattern::Overconfident,
        (false, ConfidenceBand::Low) => Pattern::Guessing,
        (_, ConfidenceBand::Mid) => Pattern::Calibrated,
    }
}
