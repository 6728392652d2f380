//! Output writers for analysis reports.
//!
//! This module handles:
//! - JSON reports (versioned schema)
//! - Text summaries for the terminal

pub mod json;
pub mod schema;
pub mod text;

// Re-export main functions
pub use json::{read_report, report_to_string, write_report};
pub use schema::{FrameSample, TraceReport};
pub use text::{render_text_summary, summary_lines, LineKind, SummaryLine, NEGATIVE_VALUES_BANNER};
