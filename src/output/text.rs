//! Plain-text summary readout.
//!
//! One line per aggregate stat, indented by its depth, preceded by any
//! warnings that should make the reader distrust the numbers.

use crate::aggregator::SummaryEntry;
use crate::session::TraceAnalysis;

/// Banner shown once per run when any aggregate had to be clamped
pub const NEGATIVE_VALUES_BANNER: &str =
    "*Found frames with negative aggregate values. Please review log before accepting results as accurate.*";

/// Kind of a rendered summary line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Warning,
    Stat,
}

/// One line of the text summary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryLine {
    pub kind: LineKind,
    pub text: String,
}

impl SummaryLine {
    fn warning(text: impl Into<String>) -> Self {
        Self {
            kind: LineKind::Warning,
            text: text.into(),
        }
    }

    fn stat(text: impl Into<String>) -> Self {
        Self {
            kind: LineKind::Stat,
            text: text.into(),
        }
    }
}

/// Build the summary lines for an analysis
pub fn summary_lines(analysis: &TraceAnalysis) -> Vec<SummaryLine> {
    let mut lines: Vec<SummaryLine> = analysis
        .ingest_warnings
        .iter()
        .map(|w| SummaryLine::warning(format!("WARNING : {}", w)))
        .collect();

    if analysis.aggregation.had_negative_values {
        lines.push(SummaryLine::warning(NEGATIVE_VALUES_BANNER));
    }

    for named in &analysis.aggregation.summaries {
        let indent = "    ".repeat(named.depth as usize);
        lines.push(match &named.summary {
            SummaryEntry::Values(stats) => {
                SummaryLine::stat(format!("{}{} - ({})", indent, named.name, stats))
            }
            SummaryEntry::NoValues => {
                SummaryLine::warning(format!("WARNING : {} had no values", named.name))
            }
        });
    }

    lines
}

/// Render the summary as plain text, one line per entry
pub fn render_text_summary(analysis: &TraceAnalysis) -> String {
    summary_lines(analysis)
        .into_iter()
        .map(|line| line.text)
        .collect::<Vec<_>>()
        .join("\n")
}
