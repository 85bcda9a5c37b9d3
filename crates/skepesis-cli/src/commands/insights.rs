use std::path::Path;

use anyhow::Result;
use skepesis_core::traits::IInsightAnalyzer;
use skepesis_core::{Response, SkepesisConfig};
use skepesis_insights::InsightsEngine;

use crate::display;
use crate::input::load_responses;
use crate::OutputFormat;

pub fn run(file: &Path, config: &SkepesisConfig, format: OutputFormat) -> Result<String> {
    let responses = load_responses(file)?;
    render(&responses, config, format)
}

fn render(responses: &[Response], config: &SkepesisConfig, format: OutputFormat) -> Result<String> {
    let engine = InsightsEngine::with_config(config.insights.clone());
    let insights = engine.analyze(responses)?;

    Ok(match (format, insights) {
        (OutputFormat::Json, insights) => serde_json::to_string_pretty(&insights)?,
        (OutputFormat::Text, Some(insights)) => display::render_insights(&insights),
        (OutputFormat::Text, None) => "No responses to analyze.".to_string(),
    })
}
