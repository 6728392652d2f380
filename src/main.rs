//! Frame Trace Studio CLI
//!
//! Aggregates per-frame performance traces into stat series and
//! percentile summaries.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use frame_trace_studio::commands::{
    display_stats, display_version, execute_analyze, validate_args, validate_report_file,
    AnalyzeArgs,
};

/// Frame Trace Studio - frame-time breakdowns from performance traces
#[derive(Parser, Debug)]
#[command(name = "frame-trace")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Aggregate a trace CSV and report per-stat summaries
    Analyze {
        /// Path to trace CSV
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// URL to fetch the trace CSV from (falls back to --file on failure)
        #[arg(short, long, env = "FRAME_TRACE_CSV_URL")]
        url: Option<String>,

        /// TOML file with aggregate stat definitions
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Maximum number of frames to process
        #[arg(long)]
        max_frames: Option<usize>,

        /// Output path for JSON report (placed in artifacts/ by default)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print text summary to stdout
        #[arg(long)]
        summary: bool,
    },

    /// Validate a report JSON file
    Validate {
        /// Path to report JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// List the aggregate stat definitions in effect
    Stats {
        /// TOML file with aggregate stat definitions
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Analyze {
            file,
            url,
            config,
            max_frames,
            mut output,
            summary,
        } => {
            // Ensure the report goes to artifacts/ if no directory is specified
            if let Some(ref mut out) = output {
                if out.parent().map(|p| p.as_os_str().is_empty()).unwrap_or(true) {
                    *out = PathBuf::from("artifacts").join(&out);
                }
            }

            let args = AnalyzeArgs {
                file,
                url,
                config,
                max_frames,
                output_json: output,
                print_summary: summary,
            };

            // Validate args first
            validate_args(&args)?;

            execute_analyze(args)?;
        }

        Commands::Validate { file } => {
            validate_report_file(file)?;
        }

        Commands::Stats { config } => {
            display_stats(config)?;
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
