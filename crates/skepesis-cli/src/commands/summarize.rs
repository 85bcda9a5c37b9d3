use std::path::Path;

use anyhow::Result;
use serde_json::json;
use skepesis_calibration::CalibrationEngine;
use skepesis_core::traits::ICalibrator;
use skepesis_observability::events;

use crate::display;
use crate::input::load_responses;
use crate::OutputFormat;

pub fn run(file: &Path, format: OutputFormat) -> Result<String> {
    let responses = load_responses(file)?;
    render(&responses, format)
}

fn render(responses: &[skepesis_core::Response], format: OutputFormat) -> Result<String> {
    let engine = CalibrationEngine::new();
    let _span = skepesis_observability::summary_span!(responses.len()).entered();

    let summary = engine.summarize(responses).inspect_err(|err| {
        if let skepesis_core::SkepesisError::Scoring(scoring) = err {
            events::confidence_rejected(scoring);
        }
    })?;
    events::session_summarized(&summary);
    let results = engine.classify_all(responses)?;

    Ok(match format {
        OutputFormat::Json => serde_json::to_string_pretty(&json!({
            "summary": summary,
            "responses": results,
        }))?,
        OutputFormat::Text => display::render_summary(&summary, responses, &results),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use skepesis_core::Response;

    fn session() -> Vec<Response> {
        vec![
            Response::new(90.0, true),
            Response::new(20.0, false),
            Response::new(80.0, false),
            Response::new(40.0, true),
        ]
    }

    #[test]
    fn json_output_carries_summary_and_patterns() {
        let out = render(&session(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["summary"]["accuracy_percent"], 50);
        assert_eq!(value["summary"]["alignment_percent"], 50);
        assert_eq!(value["responses"][2]["pattern"], "OVERCONFIDENT");
        assert_eq!(value["responses"][3]["aligned"], false);
    }

    #[test]
    fn text_output_lists_each_response() {
        let out = render(&session(), OutputFormat::Text).unwrap();
        assert!(out.contains("Accuracy:  50% (2/4)"));
        assert!(out.contains("💪 Confident & Correct"));
        assert!(out.contains("✨ Lucky or Underconfident"));
    }

    #[test]
    fn out_of_range_confidence_fails_with_position() {
        let responses = vec![Response::new(50.0, true), Response::new(101.0, false)];
        let err = render(&responses, OutputFormat::Text).unwrap_err();
        assert!(err.to_string().contains("response #1"));
    }

    #[test]
    fn empty_session_reports_zero() {
        let out = render(&[], OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["summary"]["total_count"], 0);
        assert_eq!(value["summary"]["accuracy_percent"], 0);
    }
}
