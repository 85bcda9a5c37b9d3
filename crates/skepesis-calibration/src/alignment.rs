use skepesis_core::Confidence;

/// Did stated confidence predict the outcome?
///
/// `(c >= 70 && correct) || (c < 70 && !correct)`
///
/// Coarser than [`crate::classify`], on a different threshold.
pub fn is_aligned(confidence: f64, is_correct: bool) -> bool {
    (confidence >= Confidence::ALIGNED) == is_correct
}
