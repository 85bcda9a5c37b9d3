//! InsightsEngine: implements IInsightAnalyzer, assembles the full report.

use skepesis_calibration::{aggregator, CalibrationEngine};
use skepesis_core::config::InsightsConfig;
use skepesis_core::errors::SkepesisResult;
use skepesis_core::models::{
    CognitiveInsights, ConfidenceDistribution, ConfidencePerformance, SessionSummary, TimeStats,
};
use skepesis_core::traits::IInsightAnalyzer;
use skepesis_core::Response;
use skepesis_observability::{analysis_span, events};
use tracing::debug;

use crate::prompts::{self, PromptSignals};
use crate::util::{mean, round_to, share_percent};
use crate::{alignment_score, calibration_score, curiosity, gaps, moments, patterns, scoring};

/// The insight report builder.
///
/// Validation and the session summary come from the calibration engine;
/// everything else is derived here.
#[derive(Debug, Clone, Default)]
pub struct InsightsEngine {
    config: InsightsConfig,
    calibrator: CalibrationEngine,
}

impl InsightsEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: InsightsConfig) -> Self {
        Self {
            config,
            calibrator: CalibrationEngine::new(),
        }
    }

    fn build(
        &self,
        responses: &[Response],
        summary: SessionSummary,
    ) -> SkepesisResult<Option<CognitiveInsights>> {
        let Some(learning_patterns) = patterns::analyze_learning_patterns(responses) else {
            return Ok(None);
        };
        let pattern_counts = self.calibrator.pattern_counts(responses)?;

        let curiosity_score = curiosity::curiosity_score(responses);
        let alignment = alignment_score::confidence_accuracy_alignment(responses);
        let calibration = calibration_score::calibration_score(responses);
        let weighted = scoring::weighted_score(responses);
        let gaps = gaps::identify_learning_gaps(responses, &self.config);
        let learning_moments = moments::learning_moments(responses, self.config.max_learning_moments);

        let correct_responses = summary.correct_count;
        let accuracy = share_percent(correct_responses, responses.len());
        let avg_confidence = mean(responses.iter().map(|r| r.confidence));

        let (learning_style, narrative) =
            prompts::learning_style(curiosity_score, alignment, avg_confidence);
        let improvement_suggestions = prompts::improvement_suggestions(
            curiosity_score,
            alignment,
            learning_patterns.consistency_score,
            accuracy,
        );
        let reflection_prompts = prompts::reflection_prompts(
            PromptSignals {
                accuracy: round_to(accuracy, 2),
                alignment: round_to(alignment, 2),
                curiosity: round_to(curiosity_score, 2),
                thinking_speed: learning_patterns.thinking_speed,
            },
            self.config.max_reflection_prompts,
        );

        debug!(
            curiosity = curiosity_score,
            alignment = alignment,
            calibration = calibration,
            "metrics computed"
        );

        Ok(Some(CognitiveInsights {
            summary,
            pattern_counts,
            curiosity_score: round_to(curiosity_score, 2),
            accuracy: round_to(accuracy, 2),
            avg_confidence: round_to(avg_confidence, 2),
            confidence_accuracy_alignment: round_to(alignment, 2),
            calibration_score: round_to(calibration, 2),
            weighted_score: round_to(weighted, 2),
            learning_style,
            style_narrative: narrative.to_string(),
            learning_patterns,
            learning_moments,
            total_responses: responses.len(),
            correct_responses,
            gaps,
            improvement_suggestions,
            reflection_prompts,
            time_stats: time_stats(responses),
            confidence_distribution: confidence_distribution(responses),
            confidence_performance: confidence_performance(responses),
        }))
    }
}

impl IInsightAnalyzer for InsightsEngine {
    fn analyze(&self, responses: &[Response]) -> SkepesisResult<Option<CognitiveInsights>> {
        let span = analysis_span!(responses.len());
        let _guard = span.enter();

        let summary = aggregator::summarize(responses).inspect_err(events::confidence_rejected)?;
        events::session_summarized(&summary);

        let insights = self.build(responses, summary)?;
        if let Some(report) = &insights {
            events::insights_generated(
                report.total_responses,
                report.curiosity_score,
                report.calibration_score,
                prompts::style_name(report.learning_style),
            );
        }
        Ok(insights)
    }
}

fn time_stats(responses: &[Response]) -> TimeStats {
    let secs = |r: &Response| f64::from(r.meta.time_spent);
    TimeStats {
        total_time: responses.iter().map(|r| u64::from(r.meta.time_spent)).sum(),
        avg_time_per_question: round_to(mean(responses.iter().map(secs)), 1),
        avg_time_correct: round_to(mean(responses.iter().filter(|r| r.is_correct).map(secs)), 1),
        avg_time_incorrect: round_to(
            mean(responses.iter().filter(|r| !r.is_correct).map(secs)),
            1,
        ),
    }
}

fn confidence_distribution(responses: &[Response]) -> ConfidenceDistribution {
    let mut dist = ConfidenceDistribution::default();
    for r in responses {
        if r.confidence < 40.0 {
            dist.low += 1;
        } else if r.confidence <= 70.0 {
            dist.medium += 1;
        } else {
            dist.high += 1;
        }
    }
    dist
}

fn confidence_performance(responses: &[Response]) -> ConfidencePerformance {
    let high: Vec<&Response> = responses.iter().filter(|r| r.confidence > 70.0).collect();
    let low: Vec<&Response> = responses.iter().filter(|r| r.confidence < 40.0).collect();

    ConfidencePerformance {
        high_confidence_accuracy: round_to(share_percent(count_correct(&high), high.len()), 1),
        low_confidence_accuracy: round_to(share_percent(count_correct(&low), low.len()), 1),
        high_conf_questions: high.len(),
        low_conf_questions: low.len(),
    }
}

fn count_correct(set: &[&Response]) -> usize {
    set.iter().filter(|r| r.is_correct).count()
}
