//! Trace payload ingestion.
//!
//! The profiler only knows its full column set once a capture finishes, so on a
//! graceful shutdown it appends the real header as the second-to-last line
//! followed by a `[HasHeaderRowAtEnd]` marker. This module recovers that header
//! and hands the rest to the delimited table parser.

use super::table::{parse_delimited, Table};
use crate::utils::config::HEADER_AT_END_SENTINEL;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Data-quality issues found while ingesting a payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IngestWarning {
    /// No trailing header marker: the first line may be missing late-registered columns
    MissingTrailingHeader,
}

impl fmt::Display for IngestWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IngestWarning::MissingTrailingHeader => write!(
                f,
                "Final headers were not written, make sure traces end gracefully by not \
                 shutting down the process prematurely to prevent data loss."
            ),
        }
    }
}

/// Result of ingesting one payload
#[derive(Debug, Clone, PartialEq)]
pub struct IngestedTrace {
    pub table: Table,
    pub warnings: Vec<IngestWarning>,
}

/// Ingest a raw trace payload into a table
///
/// **Public** - main entry point for ingestion
///
/// When the last line carries the trailing-header marker, the line before it
/// becomes the header and both trailing lines are removed from the data.
/// Otherwise the first line is used as-is and a
/// [`IngestWarning::MissingTrailingHeader`] is reported. Ingestion never fails.
pub fn ingest(payload: &str) -> IngestedTrace {
    let mut lines: Vec<&str> = payload
        .split('\n')
        .map(|line| line.trim_end_matches('\r'))
        .collect();

    // A terminating newline is not a row
    while lines.last().is_some_and(|line| line.trim().is_empty()) {
        lines.pop();
    }

    let mut warnings = Vec::new();

    let has_trailing_header = lines.len() >= 2
        && lines
            .last()
            .is_some_and(|line| line.starts_with(HEADER_AT_END_SENTINEL));

    if has_trailing_header {
        let header = lines[lines.len() - 2];
        debug!("Recovered trailing header with {} columns", header.split(',').count());
        lines[0] = header;
        lines.truncate(lines.len() - 2);
    } else if !lines.is_empty() {
        warn!("{}", IngestWarning::MissingTrailingHeader);
        warnings.push(IngestWarning::MissingTrailingHeader);
    }

    let table = parse_delimited(&lines.join("\n"));

    debug!(
        "Ingested {} frames across {} columns",
        table.row_count(),
        table.columns().len()
    );

    IngestedTrace { table, warnings }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_header_recovered() {
        let payload = "A\n1,2,3\n4,5,6\nA,B,C\n[HasHeaderRowAtEnd],1\n";
        let ingested = ingest(payload);

        assert_eq!(ingested.table.columns(), &["A", "B", "C"]);
        assert_eq!(ingested.table.row_count(), 2);
        assert_eq!(ingested.table.value(1, "C"), 6.0);
        assert!(ingested.warnings.is_empty());
    }

    #[test]
    fn test_missing_sentinel_warns() {
        let ingested = ingest("A,B\n1,2\n");

        assert_eq!(ingested.table.columns(), &["A", "B"]);
        assert_eq!(ingested.table.row_count(), 1);
        assert_eq!(ingested.warnings, vec![IngestWarning::MissingTrailingHeader]);
    }

    #[test]
    fn test_sentinel_without_trailing_newline() {
        let ingested = ingest("X\n1,2\nX,Y\n[HasHeaderRowAtEnd]");
        assert_eq!(ingested.table.columns(), &["X", "Y"]);
        assert_eq!(ingested.table.row_count(), 1);
    }

    #[test]
    fn test_empty_payload_no_warning() {
        let ingested = ingest("");
        assert!(ingested.table.is_empty());
        assert!(ingested.warnings.is_empty());
    }
}
