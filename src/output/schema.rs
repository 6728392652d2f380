//! Output JSON schema definitions for analysis reports.
//!
//! This module defines the structure of JSON files we write to disk.
//! Schema is versioned to allow future evolution.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::aggregator::{AggregateSeries, FrameRecord, NamedSummary, NegativeAggregate, SummaryEntry};
use crate::parser::IngestWarning;
use crate::session::TraceAnalysis;
use crate::utils::config::SCHEMA_VERSION;

/// Top-level report structure written to JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceReport {
    /// Schema version for compatibility checking
    pub version: String,

    /// File path or URL the trace was loaded from
    pub source: String,

    /// Timestamp when the report was generated
    pub generated_at: String,

    /// Frames processed (after the frame cap)
    pub frame_count: usize,

    /// Columns in the ingested schema
    pub column_count: usize,

    /// Ingestion warnings
    pub warnings: Vec<IngestWarning>,

    /// True if any aggregate was clamped from a negative value
    pub had_negative_values: bool,

    /// Every clamped aggregate, for review
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub negative_aggregates: Vec<NegativeAggregate>,

    /// Per-frame derived series
    pub frames: Vec<FrameSample>,

    /// Aggregate stat values in frame order
    pub aggregate_series: Vec<AggregateSeries>,

    /// Aggregate stat summaries, rounded to 2 decimals
    pub summaries: Vec<NamedSummary>,
}

/// Serialized frame record; values the trace lacked are `null`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameSample {
    pub frame: usize,
    pub frame_time: Option<f64>,
    pub game_thread_time: Option<f64>,
    pub render_thread_time: Option<f64>,
    pub per_frame_kb: Option<f64>,
    pub physics_time: Option<f64>,
}

impl From<&FrameRecord> for FrameSample {
    fn from(record: &FrameRecord) -> Self {
        Self {
            frame: record.frame,
            frame_time: finite(record.frame_time),
            game_thread_time: finite(record.game_thread_time),
            render_thread_time: finite(record.render_thread_time),
            per_frame_kb: finite(record.per_frame_kb),
            physics_time: finite(record.physics_time),
        }
    }
}

fn finite(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}

impl TraceReport {
    /// Build a report from a finished analysis
    pub fn from_analysis(analysis: &TraceAnalysis) -> Self {
        let aggregation = &analysis.aggregation;

        let summaries = aggregation
            .summaries
            .iter()
            .map(|s| NamedSummary {
                name: s.name.clone(),
                depth: s.depth,
                summary: match &s.summary {
                    SummaryEntry::Values(stats) => SummaryEntry::Values(stats.rounded()),
                    SummaryEntry::NoValues => SummaryEntry::NoValues,
                },
            })
            .collect();

        Self {
            version: SCHEMA_VERSION.to_string(),
            source: analysis.source.clone(),
            generated_at: Utc::now().to_rfc3339(),
            frame_count: analysis.frame_count(),
            column_count: analysis.table.columns().len(),
            warnings: analysis.ingest_warnings.clone(),
            had_negative_values: aggregation.had_negative_values,
            negative_aggregates: aggregation.negative_aggregates.clone(),
            frames: aggregation.frames.iter().map(FrameSample::from).collect(),
            aggregate_series: aggregation.series.clone(),
            summaries,
        }
    }

    /// Stats that never produced a value
    pub fn empty_stats(&self) -> impl Iterator<Item = &str> {
        self.summaries
            .iter()
            .filter(|s| s.summary == SummaryEntry::NoValues)
            .map(|s| s.name.as_str())
    }
}
