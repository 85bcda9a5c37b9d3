use anyhow::{Context, Result};
use serde_json::json;
use skepesis_calibration::CalibrationEngine;
use skepesis_core::Confidence;

use crate::display;
use crate::OutputFormat;

pub fn run(confidence: f64, is_correct: bool, format: OutputFormat) -> Result<String> {
    let confidence = Confidence::try_new(confidence).context("invalid --confidence")?;
    let result = CalibrationEngine::new().classify_pair(confidence.value(), is_correct);

    Ok(match format {
        OutputFormat::Json => serde_json::to_string_pretty(&json!({
            "confidence": confidence,
            "is_correct": is_correct,
            "pattern": result.pattern,
            "aligned": result.aligned,
        }))?,
        OutputFormat::Text => display::render_classification(confidence.value(), is_correct, &result),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn high_and_wrong_is_overconfident() {
        let out = run(80.0, false, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["pattern"], "OVERCONFIDENT");
        assert_eq!(value["aligned"], false);
    }

    #[test]
    fn text_uses_display_label() {
        let out = run(60.0, true, OutputFormat::Text).unwrap();
        assert_eq!(out, "60.0% correct → 🎯 Calibrated (not aligned)");
    }

    #[test]
    fn rejects_out_of_range() {
        assert!(run(-1.0, true, OutputFormat::Text).is_err());
        assert!(run(f64::NAN, true, OutputFormat::Text).is_err());
    }
}
