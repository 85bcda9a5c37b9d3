mod calibrator;
mod insight_analyzer;

pub use calibrator::ICalibrator;
pub use insight_analyzer::IInsightAnalyzer;
