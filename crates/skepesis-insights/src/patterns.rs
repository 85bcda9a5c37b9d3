use skepesis_core::models::{LearningApproach, LearningPatterns, RiskBehavior, ThinkingSpeed};
use skepesis_core::Response;

use crate::util::round_to;

/// Thinking speed, risk behavior, and learning approach from response
/// timing and confidence. `None` for an empty attempt.
pub fn analyze_learning_patterns(responses: &[Response]) -> Option<LearningPatterns> {
    if responses.is_empty() {
        return None;
    }
    let n = responses.len() as f64;

    let avg_time = responses.iter().map(|r| f64::from(r.meta.time_spent)).sum::<f64>() / n;
    // Mean absolute deviation, in seconds.
    let time_variance = responses
        .iter()
        .map(|r| (f64::from(r.meta.time_spent) - avg_time).abs())
        .sum::<f64>()
        / n;

    let thinking_speed = if avg_time < 15.0 {
        ThinkingSpeed::Quick
    } else if avg_time < 30.0 {
        ThinkingSpeed::Moderate
    } else {
        ThinkingSpeed::Deliberate
    };

    let high = responses.iter().filter(|r| r.confidence > 70.0).count() as f64;
    let low = responses.iter().filter(|r| r.confidence < 40.0).count() as f64;
    let risk_behavior = if high > n * 0.7 {
        RiskBehavior::Bold
    } else if low > n * 0.5 {
        RiskBehavior::Cautious
    } else {
        RiskBehavior::Calculated
    };

    let learning_approach = if time_variance < 5.0 && avg_time < 20.0 {
        LearningApproach::Intuitive
    } else if time_variance < 5.0 && avg_time > 25.0 {
        LearningApproach::Systematic
    } else if time_variance > 10.0 {
        LearningApproach::Adaptive
    } else {
        LearningApproach::Balanced
    };

    let consistency_score = if avg_time > 0.0 {
        round_to(100.0 - time_variance / avg_time * 100.0, 1)
    } else {
        0.0
    };

    Some(LearningPatterns {
        thinking_speed,
        speed_insight: speed_insight(thinking_speed).to_string(),
        avg_time_per_question: round_to(avg_time, 1),
        risk_behavior,
        learning_approach,
        approach_insight: approach_insight(learning_approach).to_string(),
        consistency_score,
    })
}

pub fn speed_insight(speed: ThinkingSpeed) -> &'static str {
    match speed {
        ThinkingSpeed::Quick => "You process information rapidly and make fast decisions.",
        ThinkingSpeed::Moderate => "You take a balanced approach, considering options carefully.",
        ThinkingSpeed::Deliberate => {
            "You're thorough and take time to analyze each question deeply."
        }
    }
}

pub fn approach_insight(approach: LearningApproach) -> &'static str {
    match approach {
        LearningApproach::Intuitive => "You rely on gut instinct and pattern recognition.",
        LearningApproach::Systematic => "You follow a consistent, methodical thinking process.",
        LearningApproach::Adaptive => "You adjust your strategy based on question difficulty.",
        LearningApproach::Balanced => "You blend intuition with analysis effectively.",
    }
}
