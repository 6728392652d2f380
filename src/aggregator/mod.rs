//! Aggregation of trace tables into per-stat series and summaries.
//!
//! This module transforms an ingested table into:
//! - Per-frame records (frame, game thread, render thread, loaded KB, physics)
//! - One series per declared aggregate stat
//! - A 2% / avg / median / 98% / max summary per stat

pub mod config;
pub mod definitions;
pub mod engine;
pub mod metrics;
pub mod physics;

// Re-export main types and functions
pub use config::{load_config, parse_config, AnalysisConfig, PhysicsPatterns};
pub use definitions::{default_stat_definitions, AggregateStatDefinition};
pub use engine::{
    aggregate, AggregateSeries, Aggregation, FrameRecord, NamedSummary, NegativeAggregate,
};
pub use metrics::{round2, summarize, StatSummary, SummaryEntry};
pub use physics::{PhysicsColumns, PhysicsMatcher};
