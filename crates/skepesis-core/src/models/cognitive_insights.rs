use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::{PatternCounts, SessionSummary};

/// Full metacognitive report for one attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CognitiveInsights {
    pub summary: SessionSummary,
    pub pattern_counts: PatternCounts,
    /// 0–100.
    pub curiosity_score: f64,
    /// Percentage of correct answers, 2 decimals.
    pub accuracy: f64,
    pub avg_confidence: f64,
    /// Mean of confidence on correct answers and (100 − confidence) on wrong ones.
    pub confidence_accuracy_alignment: f64,
    /// 100 = stated confidence matches observed accuracy in every bucket.
    pub calibration_score: f64,
    pub weighted_score: f64,
    pub learning_style: LearningStyle,
    pub style_narrative: String,
    pub learning_patterns: LearningPatterns,
    pub learning_moments: Vec<LearningMoment>,
    pub total_responses: usize,
    pub correct_responses: usize,
    pub gaps: LearningGaps,
    pub improvement_suggestions: Vec<String>,
    pub reflection_prompts: Vec<String>,
    pub time_stats: TimeStats,
    pub confidence_distribution: ConfidenceDistribution,
    pub confidence_performance: ConfidencePerformance,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum LearningStyle {
    Analytical,
    Exploratory,
    Calibrated,
    Confident,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum ThinkingSpeed {
    Quick,
    Moderate,
    Deliberate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum RiskBehavior {
    Bold,
    Cautious,
    Calculated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum LearningApproach {
    Intuitive,
    Systematic,
    Adaptive,
    Balanced,
}

/// How the learner works through questions, derived from timing and confidence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LearningPatterns {
    pub thinking_speed: ThinkingSpeed,
    pub speed_insight: String,
    pub avg_time_per_question: f64,
    pub risk_behavior: RiskBehavior,
    pub learning_approach: LearningApproach,
    pub approach_insight: String,
    pub consistency_score: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum LearningMomentKind {
    HiddenMastery,
    CalibrationMoment,
    SelfAwareness,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LearningMoment {
    #[serde(rename = "type")]
    pub kind: LearningMomentKind,
    pub title: String,
    pub description: String,
    pub lesson: String,
}

/// A question worth revisiting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QuestionFlag {
    #[ts(type = "number | null")]
    pub question_id: Option<i64>,
    pub confidence: f64,
    pub category: String,
    pub question_text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LowConfidenceResponse {
    #[ts(type = "number | null")]
    pub question_id: Option<i64>,
    pub confidence: f64,
    pub is_correct: bool,
    pub category: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct KnowledgeArea {
    pub correct: usize,
    pub total: usize,
    pub avg_confidence: f64,
    pub avg_time: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DifficultyStats {
    pub correct: usize,
    pub total: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LearningGaps {
    pub overconfident_errors: Vec<QuestionFlag>,
    pub underconfident_successes: Vec<QuestionFlag>,
    pub low_confidence_responses: Vec<LowConfidenceResponse>,
    /// Keyed by category.
    pub knowledge_areas: BTreeMap<String, KnowledgeArea>,
    /// Keyed by difficulty.
    pub difficulty_analysis: BTreeMap<String, DifficultyStats>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TimeStats {
    #[ts(type = "number")]
    pub total_time: u64,
    pub avg_time_per_question: f64,
    pub avg_time_correct: f64,
    pub avg_time_incorrect: f64,
}

/// Response counts by confidence: low < 40, medium 40–70, high > 70.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ConfidenceDistribution {
    pub low: usize,
    pub medium: usize,
    pub high: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ConfidencePerformance {
    pub high_confidence_accuracy: f64,
    pub low_confidence_accuracy: f64,
    pub high_conf_questions: usize,
    pub low_conf_questions: usize,
}
