use skepesis_core::config::InsightsConfig;
use skepesis_core::models::{
    DifficultyStats, KnowledgeArea, LearningGaps, LowConfidenceResponse, QuestionFlag,
};
use skepesis_core::Response;

use crate::util::round_to;

/// Wrong answers given with confidence above this are overconfident errors.
pub const OVERCONFIDENT_ERROR_THRESHOLD: f64 = 70.0;
/// Right answers given with confidence below this are underconfident successes.
pub const UNDERCONFIDENT_SUCCESS_THRESHOLD: f64 = 40.0;
/// Any answer below this confidence is flagged as a possible guess.
pub const LOW_CONFIDENCE_THRESHOLD: f64 = 30.0;

/// Areas where the learner needs work, plus per-category and
/// per-difficulty breakdowns.
pub fn identify_learning_gaps(responses: &[Response], config: &InsightsConfig) -> LearningGaps {
    let mut gaps = LearningGaps::default();
    // (confidence sum, time sum) per category, averaged at the end.
    let mut totals: std::collections::BTreeMap<String, (f64, u64)> = Default::default();

    for r in responses {
        let c = r.confidence;
        let category = r
            .meta
            .category
            .clone()
            .unwrap_or_else(|| config.default_category.clone());
        let difficulty = r
            .meta
            .difficulty
            .clone()
            .unwrap_or_else(|| config.default_difficulty.clone());

        if !r.is_correct && c > OVERCONFIDENT_ERROR_THRESHOLD {
            gaps.overconfident_errors.push(flag(r, &category));
        }
        if r.is_correct && c < UNDERCONFIDENT_SUCCESS_THRESHOLD {
            gaps.underconfident_successes.push(flag(r, &category));
        }
        if c < LOW_CONFIDENCE_THRESHOLD {
            gaps.low_confidence_responses.push(LowConfidenceResponse {
                question_id: r.meta.question_id,
                confidence: c,
                is_correct: r.is_correct,
                category: category.clone(),
            });
        }

        let area = gaps.knowledge_areas.entry(category.clone()).or_default();
        area.total += 1;
        if r.is_correct {
            area.correct += 1;
        }
        let sums = totals.entry(category).or_default();
        sums.0 += c;
        sums.1 += u64::from(r.meta.time_spent);

        let stats: &mut DifficultyStats = gaps.difficulty_analysis.entry(difficulty).or_default();
        stats.total += 1;
        if r.is_correct {
            stats.correct += 1;
        }
    }

    for (category, (confidence_sum, time_sum)) in totals {
        if let Some(area) = gaps.knowledge_areas.get_mut(&category) {
            finish_area(area, confidence_sum, time_sum);
        }
    }

    gaps
}

fn flag(r: &Response, category: &str) -> QuestionFlag {
    QuestionFlag {
        question_id: r.meta.question_id,
        confidence: r.confidence,
        category: category.to_string(),
        question_text: r.meta.question_text.clone(),
    }
}

fn finish_area(area: &mut KnowledgeArea, confidence_sum: f64, time_sum: u64) {
    if area.total > 0 {
        let n = area.total as f64;
        area.avg_confidence = round_to(confidence_sum / n, 1);
        area.avg_time = round_to(time_sum as f64 / n, 1);
    }
}
