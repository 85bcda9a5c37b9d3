//! Human-readable rendering. Labels and icons live here, not in the engine.

use std::fmt::Write;

use skepesis_core::models::{CalibrationResult, CognitiveInsights, Pattern, SessionSummary};
use skepesis_core::Response;

/// Display label with icon for a pattern.
pub fn pattern_label(pattern: Pattern) -> &'static str {
    match pattern {
        Pattern::ConfidentCorrect => "💪 Confident & Correct",
        Pattern::Overconfident => "⚠️ Overconfident",
        Pattern::Guessing => "🎲 Guessing",
        Pattern::Underconfident => "✨ Lucky or Underconfident",
        Pattern::Calibrated => "🎯 Calibrated",
    }
}

pub fn render_summary(
    summary: &SessionSummary,
    responses: &[Response],
    results: &[CalibrationResult],
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Responses: {}", summary.total_count);
    let _ = writeln!(
        out,
        "Accuracy:  {}% ({}/{})",
        summary.accuracy_percent, summary.correct_count, summary.total_count
    );
    let _ = writeln!(
        out,
        "Alignment: {}% ({}/{})",
        summary.alignment_percent, summary.aligned_count, summary.total_count
    );
    for (i, (response, result)) in responses.iter().zip(results).enumerate() {
        let _ = write!(
            out,
            "\n#{:<3} {:>5.1}%  {:<9} {}{}",
            i + 1,
            response.confidence,
            if response.is_correct { "correct" } else { "wrong" },
            pattern_label(result.pattern),
            if result.aligned { "" } else { "  (not aligned)" },
        );
    }
    out.trim_end().to_string()
}

pub fn render_classification(confidence: f64, is_correct: bool, result: &CalibrationResult) -> String {
    format!(
        "{:.1}% {} → {} ({})",
        confidence,
        if is_correct { "correct" } else { "wrong" },
        pattern_label(result.pattern),
        if result.aligned { "aligned" } else { "not aligned" },
    )
}

pub fn render_insights(insights: &CognitiveInsights) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Learning style: {:?}", insights.learning_style);
    let _ = writeln!(out, "  {}", insights.style_narrative);
    let _ = writeln!(out);
    let _ = writeln!(out, "Accuracy:            {:.2}%", insights.accuracy);
    let _ = writeln!(out, "Average confidence:  {:.2}", insights.avg_confidence);
    let _ = writeln!(out, "Curiosity score:     {:.2}", insights.curiosity_score);
    let _ = writeln!(out, "Calibration score:   {:.2}", insights.calibration_score);
    let _ = writeln!(out, "Alignment score:     {:.2}", insights.confidence_accuracy_alignment);
    let _ = writeln!(out, "Weighted score:      {:.2}", insights.weighted_score);

    let _ = writeln!(out, "\nPatterns:");
    for pattern in Pattern::ALL {
        let _ = writeln!(
            out,
            "  {:<28} {}",
            pattern_label(pattern),
            insights.pattern_counts.get(pattern)
        );
    }

    let p = &insights.learning_patterns;
    let _ = writeln!(
        out,
        "\nPace: {:?}, {:.1}s per question. {}",
        p.thinking_speed, p.avg_time_per_question, p.speed_insight
    );
    let _ = writeln!(out, "Approach: {:?}. {}", p.learning_approach, p.approach_insight);

    section(&mut out, "Learning moments", insights.learning_moments.iter().map(|m| {
        format!("{}: {}", m.title, m.description)
    }));
    section(&mut out, "Suggestions", insights.improvement_suggestions.iter().cloned());
    section(&mut out, "Reflect", insights.reflection_prompts.iter().cloned());
    out.trim_end().to_string()
}

fn section<I: Iterator<Item = String>>(out: &mut String, title: &str, items: I) {
    let mut items = items.peekable();
    if items.peek().is_none() {
        return;
    }
    let _ = writeln!(out, "\n{title}:");
    for item in items {
        let _ = writeln!(out, "  - {item}");
    }
}
