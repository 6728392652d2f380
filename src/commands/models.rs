use std::path::PathBuf;

/// Arguments for the analyze command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone, Default)]
pub struct AnalyzeArgs {
    /// Local trace CSV
    pub file: Option<PathBuf>,

    /// Remote trace CSV; on failure the local file (if any) is used
    pub url: Option<String>,

    /// TOML file with stat definitions and patterns
    pub config: Option<PathBuf>,

    /// Overrides the configured frame cap
    pub max_frames: Option<usize>,

    /// Output path for the JSON report (optional)
    pub output_json: Option<PathBuf>,

    /// Print text summary to stdout
    pub print_summary: bool,
}
