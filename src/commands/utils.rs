use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::aggregator::{load_config, AnalysisConfig};
use crate::output::read_report;
use crate::utils::config::SCHEMA_VERSION;

/// Validate a report JSON file
pub fn validate_report_file(file_path: PathBuf) -> Result<()> {
    println!("Validating report: {}", file_path.display());

    let report = read_report(&file_path)?;

    println!("✓ Valid report JSON");
    println!("  Version: {}", report.version);
    println!("  Source: {}", report.source);
    println!("  Frames: {}", report.frame_count);
    println!("  Aggregate Stats: {}", report.summaries.len());
    println!("  Negative Values: {}", report.had_negative_values);

    let empty: Vec<&str> = report.empty_stats().collect();
    if !empty.is_empty() {
        println!("  Stats Without Values: {}", empty.join(", "));
    }

    Ok(())
}

/// Display the aggregate stat definitions in effect
pub fn display_stats(config_path: Option<PathBuf>) -> Result<()> {
    let config = match &config_path {
        Some(path) => load_config(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => AnalysisConfig::default(),
    };

    println!("Aggregate Stats ({})", config.stats.len());
    for stat in &config.stats {
        let indent = "  ".repeat(stat.depth as usize + 1);
        print!("{}{} = {}", indent, stat.name, stat.add.join(" + "));
        for column in &stat.subtract {
            print!(" - {}", column);
        }
        println!();
    }
    println!();
    println!(
        "Physics columns: /{}/ or /{}/",
        config.physics.worker_pattern, config.physics.exclusive_pattern
    );
    println!("Frame cap: {}", config.max_frames);

    Ok(())
}

/// Display version information
pub fn display_version() {
    println!("Frame Trace Studio v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Per-frame performance trace aggregation for frame-time regressions.");
}
