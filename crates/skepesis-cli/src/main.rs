//! Skepesis CLI
//!
//! Analyze exported quiz attempts: session summary, per-question patterns,
//! and the full cognitive insight report.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use skepesis_core::SkepesisConfig;

mod commands;
mod display;
mod input;

#[derive(Parser)]
#[command(name = "skepesis")]
#[command(version = skepesis_core::constants::VERSION)]
#[command(about = "Confidence calibration analysis for quiz attempts", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Output format (text, json)
    #[arg(long, default_value = "text")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum OutputFormat {
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Invalid output format: {}", s)),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Accuracy, alignment, and the pattern of every response
    Summarize {
        /// JSON array of response rows
        file: PathBuf,
    },

    /// Full metacognitive report for one attempt
    Insights {
        /// JSON array of response rows
        file: PathBuf,
    },

    /// Classify a single answer
    Classify {
        /// Confidence on the 0-100 scale
        #[arg(long)]
        confidence: f64,

        /// The answer was correct
        #[arg(long)]
        correct: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => SkepesisConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => SkepesisConfig::default(),
    };

    if cli.verbose {
        skepesis_observability::init_tracing_with_filter("debug", config.observability.json_logs);
    } else {
        skepesis_observability::init_from_config(&config.observability);
    }

    let output = match cli.command {
        Commands::Summarize { file } => commands::summarize::run(&file, cli.format)?,
        Commands::Insights { file } => commands::insights::run(&file, &config, cli.format)?,
        Commands::Classify {
            confidence,
            correct,
        } => commands::classify::run(confidence, correct, cli.format)?,
    };
    println!("{output}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn version_comes_from_core() {
        let cmd = Cli::command();
        assert_eq!(cmd.get_version(), Some(skepesis_core::constants::VERSION));
        cmd.debug_assert();
    }

    #[test]
    fn parses_classify_with_global_format() {
        let cli = Cli::try_parse_from([
            "skepesis", "--format", "json", "classify", "--confidence", "80", "--correct",
        ])
        .unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(matches!(
            cli.command,
            Commands::Classify { confidence, correct: true } if confidence == 80.0
        ));
    }

    #[test]
    fn rejects_unknown_format() {
        assert!(Cli::try_parse_from(["skepesis", "--format", "xml", "summarize", "a.json"]).is_err());
    }
}
