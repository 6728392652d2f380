//! Analyze command implementation.
//!
//! The analyze command:
//! 1. Loads the analysis configuration
//! 2. Acquires the trace (file, then optional URL refresh)
//! 3. Ingests and aggregates it
//! 4. Writes the JSON report and/or prints the summary

use crate::aggregator::{load_config, AnalysisConfig};
use crate::commands::models::AnalyzeArgs;
use crate::fetch::{validate_url, TraceFetcher};
use crate::output::{summary_lines, write_report, LineKind, TraceReport};
use crate::session::{Analyzer, TraceAnalysis, TraceSession};
use anyhow::{Context, Result};
use colored::*;
use log::{debug, info};
use std::time::Instant;

/// Execute the analyze command
///
/// **Public** - main entry point called from main.rs
///
/// # Returns
/// The analysis, or `None` when there was no trace data to analyze
///
/// # Errors
/// * Config read/validation failures
/// * Unreadable local trace file
/// * Report write errors
pub fn execute_analyze(args: AnalyzeArgs) -> Result<Option<TraceAnalysis>> {
    let start_time = Instant::now();

    let mut config = match &args.config {
        Some(path) => load_config(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => AnalysisConfig::default(),
    };
    if let Some(max_frames) = args.max_frames {
        config.max_frames = max_frames;
    }

    let analyzer = Analyzer::new(config).context("Invalid analysis configuration")?;
    debug!("Using {} aggregate stats", analyzer.config().stats.len());

    let mut session = TraceSession::new();
    if let Some(path) = &args.file {
        session
            .load_file(path)
            .with_context(|| format!("Failed to read trace {}", path.display()))?;
    }
    if let Some(url) = &args.url {
        let fetcher = TraceFetcher::new().context("Failed to create HTTP client")?;
        session.refresh_from_url(&fetcher, url);
    }

    let Some(analysis) = session.run(&analyzer) else {
        info!("No trace data loaded, nothing to analyze");
        return Ok(None);
    };

    info!(
        "Analyzed {} frames from {}",
        analysis.frame_count(),
        analysis.source
    );

    if let Some(path) = &args.output_json {
        let report = TraceReport::from_analysis(&analysis);
        write_report(&report, path).context("Failed to write report JSON")?;
        info!("✓ Report written to: {}", path.display());
    }

    if args.print_summary || args.output_json.is_none() {
        print_summary(&analysis);
    }

    let elapsed = start_time.elapsed();
    info!("Analysis completed in {:.2}s", elapsed.as_secs_f64());

    Ok(Some(analysis))
}

/// Print the text summary, warnings highlighted
fn print_summary(analysis: &TraceAnalysis) {
    println!("\n{}", "=".repeat(80));
    println!("FRAME TRACE SUMMARY");
    println!("{}", "=".repeat(80));
    println!("Source: {}", analysis.source);
    println!("Frames: {}", analysis.frame_count());
    println!();
    for line in summary_lines(analysis) {
        match line.kind {
            LineKind::Warning => println!("{}", line.text.yellow()),
            LineKind::Stat => println!("{}", line.text),
        }
    }
    println!("{}", "=".repeat(80));
}

/// Validate analyze arguments
///
/// **Public** - can be called before execute_analyze for early validation
pub fn validate_args(args: &AnalyzeArgs) -> Result<()> {
    if args.file.is_none() && args.url.is_none() {
        anyhow::bail!("Either --file or --url must be given");
    }

    if let Some(url) = &args.url {
        validate_url(url)?;
    }

    if args.max_frames == Some(0) {
        anyhow::bail!("max_frames must be greater than 0");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_validate_args_file() {
        let args = AnalyzeArgs {
            file: Some(PathBuf::from("trace.csv")),
            ..Default::default()
        };
        assert!(validate_args(&args).is_ok());
    }

    #[test]
    fn test_validate_args_no_source() {
        assert!(validate_args(&AnalyzeArgs::default()).is_err());
    }

    #[test]
    fn test_validate_args_bad_url() {
        let args = AnalyzeArgs {
            url: Some("ftp://example.com/trace.csv".to_string()),
            ..Default::default()
        };
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_zero_frames() {
        let args = AnalyzeArgs {
            file: Some(PathBuf::from("trace.csv")),
            max_frames: Some(0),
            ..Default::default()
        };
        assert!(validate_args(&args).is_err());
    }
}
