use skepesis_core::models::{LearningMoment, LearningMomentKind};
use skepesis_core::Response;

/// Correct answers below this confidence reveal hidden mastery.
pub const HIDDEN_MASTERY_THRESHOLD: f64 = 30.0;
/// Wrong answers above this confidence are calibration moments.
pub const CALIBRATION_MOMENT_THRESHOLD: f64 = 80.0;
/// Confidence spread across correct answers that signals growing self-awareness.
pub const SELF_AWARENESS_RANGE: f64 = 40.0;
const SELF_AWARENESS_MIN_CORRECT: usize = 3;

/// Key learning moments, at most `limit`.
///
/// Hidden-mastery moments come first, then calibration moments, each in
/// question order; the self-awareness moment, if any, comes last.
pub fn learning_moments(responses: &[Response], limit: usize) -> Vec<LearningMoment> {
    let mut moments = Vec::new();

    for (idx, r) in responses.iter().enumerate() {
        if r.is_correct && r.confidence < HIDDEN_MASTERY_THRESHOLD {
            moments.push(LearningMoment {
                kind: LearningMomentKind::HiddenMastery,
                title: "💎 Hidden Mastery".to_string(),
                description: format!(
                    "Question #{}: You knew more than you thought! Trust your knowledge.",
                    idx + 1
                ),
                lesson: "Your intuition is stronger than you realize.".to_string(),
            });
        }
    }

    for (idx, r) in responses.iter().enumerate() {
        if !r.is_correct && r.confidence > CALIBRATION_MOMENT_THRESHOLD {
            moments.push(LearningMoment {
                kind: LearningMomentKind::CalibrationMoment,
                title: "🎯 Calibration Moment".to_string(),
                description: format!(
                    "Question #{}: High confidence met unexpected outcome.",
                    idx + 1
                ),
                lesson: "A chance to refine your understanding and check assumptions.".to_string(),
            });
        }
    }

    let correct: Vec<f64> = responses
        .iter()
        .filter(|r| r.is_correct)
        .map(|r| r.confidence)
        .collect();
    if correct.len() >= SELF_AWARENESS_MIN_CORRECT {
        let max = correct.iter().copied().fold(f64::MIN, f64::max);
        let min = correct.iter().copied().fold(f64::MAX, f64::min);
        if max - min > SELF_AWARENESS_RANGE {
            moments.push(LearningMoment {
                kind: LearningMomentKind::SelfAwareness,
                title: "🧠 Growing Self-Awareness".to_string(),
                description: "Your confidence varied but you stayed accurate.".to_string(),
                lesson: "You're learning to distinguish between certainty and correctness."
                    .to_string(),
            });
        }
    }

    moments.truncate(limit);
    moments
}
