//! Frame-series aggregation.
//!
//! A single pass over the table computes every frame's record and every
//! aggregate stat value; summaries are computed afterwards from the finished
//! series. Nothing is returned until both passes complete.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::definitions::AggregateStatDefinition;
use super::metrics::{summarize, SummaryEntry};
use super::physics::{PhysicsColumns, PhysicsMatcher};
use crate::parser::Table;
use crate::utils::config::{
    FRAME_TIME_COLUMN, GAME_THREAD_TIME_COLUMN, PER_FRAME_KB_COLUMN, RENDER_THREAD_TIME_COLUMN,
};
use log::{debug, warn};

/// Derived values for one processed frame
///
/// The four raw series are NaN where the trace had no usable value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameRecord {
    pub frame: usize,
    pub frame_time: f64,
    pub game_thread_time: f64,
    pub render_thread_time: f64,
    pub per_frame_kb: f64,
    /// Sum of all worker/physics columns discovered in the schema
    pub physics_time: f64,
}

/// Values of one aggregate stat, in frame order
///
/// Frames with no valid add-column contribute no entry, so the series can
/// be shorter than the frame count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateSeries {
    pub name: String,
    pub depth: u8,
    pub values: Vec<f64>,
}

/// Summary of one aggregate stat
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedSummary {
    pub name: String,
    pub depth: u8,
    pub summary: SummaryEntry,
}

/// A frame whose aggregate came out negative before clamping
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NegativeAggregate {
    pub frame: usize,
    pub stat: String,
    pub add_values: Vec<f64>,
    pub subtract_values: Vec<f64>,
}

impl fmt::Display for NegativeAggregate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "FrameNumber : {} DisplayName : {} AddValues : {:?} SubtractValues : {:?}",
            self.frame, self.stat, self.add_values, self.subtract_values
        )
    }
}

/// Complete output of one aggregation pass
#[derive(Debug, Clone, PartialEq)]
pub struct Aggregation {
    pub frames: Vec<FrameRecord>,
    pub series: Vec<AggregateSeries>,
    pub summaries: Vec<NamedSummary>,
    pub negative_aggregates: Vec<NegativeAggregate>,
    /// Raised once if any frame of any stat was clamped
    pub had_negative_values: bool,
}

impl Aggregation {
    /// Series for a stat by name
    pub fn series(&self, name: &str) -> Option<&AggregateSeries> {
        self.series.iter().find(|s| s.name == name)
    }

    /// Summary for a stat by name
    pub fn summary(&self, name: &str) -> Option<&SummaryEntry> {
        self.summaries
            .iter()
            .find(|s| s.name == name)
            .map(|s| &s.summary)
    }
}

/// Outcome of evaluating one stat on one frame
enum StatValue {
    Missing,
    Value(f64),
    Negative {
        total: f64,
        add_values: Vec<f64>,
        subtract_values: Vec<f64>,
    },
}

/// Aggregate a table
///
/// **Public** - main entry point for aggregation
///
/// # Arguments
/// * `table` - Ingested trace table
/// * `stats` - Stat definitions, in display order
/// * `physics` - Compiled physics column predicates
/// * `frame_limit` - Maximum number of frames to process
///
/// # Returns
/// Frame records, per-stat series and summaries, and every negative
/// aggregate that was clamped to zero
pub fn aggregate(
    table: &Table,
    stats: &[AggregateStatDefinition],
    physics: &PhysicsMatcher,
    frame_limit: usize,
) -> Aggregation {
    let frame_count = frame_limit.min(table.row_count());
    debug!(
        "Aggregating {} of {} frames over {} stats",
        frame_count,
        table.row_count(),
        stats.len()
    );

    let physics_columns = physics.discover(table);

    let mut frames = Vec::with_capacity(frame_count);
    let mut series: Vec<AggregateSeries> = stats
        .iter()
        .map(|stat| AggregateSeries {
            name: stat.name.clone(),
            depth: stat.depth,
            values: Vec::new(),
        })
        .collect();
    let mut negative_aggregates = Vec::new();

    for frame in 0..frame_count {
        frames.push(frame_record(table, frame, &physics_columns));

        for (stat, out) in stats.iter().zip(series.iter_mut()) {
            match evaluate_stat(table, frame, stat) {
                StatValue::Missing => {}
                StatValue::Value(total) => out.values.push(total),
                StatValue::Negative {
                    total,
                    add_values,
                    subtract_values,
                } => {
                    let negative = NegativeAggregate {
                        frame,
                        stat: stat.name.clone(),
                        add_values,
                        subtract_values,
                    };
                    warn!("Negative aggregate ({}): {}", total, negative);
                    negative_aggregates.push(negative);
                    out.values.push(0.0);
                }
            }
        }
    }

    let had_negative_values = !negative_aggregates.is_empty();
    if had_negative_values {
        warn!(
            "{} negative aggregate values were clamped to zero",
            negative_aggregates.len()
        );
    }

    let summaries = series
        .iter()
        .map(|s| NamedSummary {
            name: s.name.clone(),
            depth: s.depth,
            summary: summarize(&s.values),
        })
        .collect();

    Aggregation {
        frames,
        series,
        summaries,
        negative_aggregates,
        had_negative_values,
    }
}

/// Read the always-present columns for one frame
fn frame_record(table: &Table, frame: usize, physics: &PhysicsColumns) -> FrameRecord {
    FrameRecord {
        frame,
        frame_time: table.value(frame, FRAME_TIME_COLUMN),
        game_thread_time: table.value(frame, GAME_THREAD_TIME_COLUMN),
        render_thread_time: table.value(frame, RENDER_THREAD_TIME_COLUMN),
        per_frame_kb: table.value(frame, PER_FRAME_KB_COLUMN),
        physics_time: physics.frame_total(table, frame),
    }
}

/// Evaluate one stat on one frame
///
/// Add columns count only when they parse to a non-negative number; subtract
/// columns count whenever they parse. Without any valid add column the frame
/// has no value for this stat.
fn evaluate_stat(table: &Table, frame: usize, stat: &AggregateStatDefinition) -> StatValue {
    let add_values: Vec<f64> = stat
        .add
        .iter()
        .map(|column| table.value(frame, column))
        .filter(|value| !value.is_nan() && *value >= 0.0)
        .collect();

    if add_values.is_empty() {
        return StatValue::Missing;
    }

    let subtract_values: Vec<f64> = stat
        .subtract
        .iter()
        .map(|column| table.value(frame, column))
        .filter(|value| !value.is_nan())
        .collect();

    let added = add_values.iter().fold(0.0, |acc, v| acc + v);
    let total = subtract_values.iter().fold(added, |acc, v| acc - v);

    if total < 0.0 {
        StatValue::Negative {
            total,
            add_values,
            subtract_values,
        }
    } else {
        StatValue::Value(total)
    }
}
