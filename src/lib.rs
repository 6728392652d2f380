//! Frame Trace Studio
//!
//! Aggregation of per-frame performance traces into named stat series
//! and percentile summaries for diagnosing frame-time regressions.
//!
//! This crate provides the core implementation for the
//! `frame-trace` CLI tool.
//!
//! ## Getting Started
//!
//! ```bash
//! frame-trace analyze --file trace.csv --summary
//! frame-trace analyze --file trace.csv --output artifacts/report.json
//! ```

pub mod aggregator;
pub mod commands;
pub mod fetch;
pub mod output;
pub mod parser;
pub mod session;
pub mod utils;
