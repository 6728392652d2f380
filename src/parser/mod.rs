//! Trace ingestion.
//!
//! This module handles:
//! - Recovering the trailing header row written at capture shutdown
//! - Splitting the payload into a header-aware table of raw cells
//! - Numeric cell lookups that degrade to NaN instead of failing

pub mod table;
pub mod trace_csv;

// Re-export main types
pub use table::{parse_delimited, parse_number, Table};
pub use trace_csv::{ingest, IngestWarning, IngestedTrace};
