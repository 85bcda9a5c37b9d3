mod calibration_result;
mod cognitive_insights;
mod pattern;
mod session_summary;

pub use calibration_result::CalibrationResult;
pub use cognitive_insights::{
    CognitiveInsights, ConfidenceDistribution, ConfidencePerformance, DifficultyStats,
    KnowledgeArea, LearningApproach, LearningGaps, LearningMoment, LearningMomentKind,
    LearningPatterns, LearningStyle, LowConfidenceResponse, QuestionFlag, RiskBehavior,
    ThinkingSpeed, TimeStats,
};
pub use pattern::{Pattern, PatternCounts};
pub use session_summary::SessionSummary;
