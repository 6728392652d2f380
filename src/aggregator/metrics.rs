//! Summary statistics over aggregate series.
//!
//! Percentiles are read straight off the sorted series by index
//! (`floor(n * p)`), with no interpolation, so every reported value is
//! one that actually occurred in the trace.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Five-number profile of one aggregate stat
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatSummary {
    /// 2nd percentile
    pub p2: f64,

    /// Arithmetic mean
    pub avg: f64,

    /// Element at `floor(n / 2)` of the sorted series
    pub median: f64,

    /// 98th percentile
    pub p98: f64,

    /// Largest value
    pub max: f64,
}

impl StatSummary {
    /// Copy with every field rounded to 2 decimal places
    pub fn rounded(&self) -> Self {
        Self {
            p2: round2(self.p2),
            avg: round2(self.avg),
            median: round2(self.median),
            p98: round2(self.p98),
            max: round2(self.max),
        }
    }
}

impl fmt::Display for StatSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "2% : {:.2}ms, Avg : {:.2}ms, Med : {:.2}ms, 98% : {:.2}ms, Max : {:.2}ms",
            self.p2, self.avg, self.median, self.p98, self.max
        )
    }
}

/// Summary outcome for one stat
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SummaryEntry {
    /// At least one frame produced a value
    Values(StatSummary),

    /// No frame had a valid contribution for this stat
    NoValues,
}

impl SummaryEntry {
    pub fn values(&self) -> Option<&StatSummary> {
        match self {
            SummaryEntry::Values(summary) => Some(summary),
            SummaryEntry::NoValues => None,
        }
    }
}

/// Summarize a series
///
/// **Public** - main entry point for summary calculation
///
/// The input is left in frame order; sorting happens on a private copy.
/// An empty series yields [`SummaryEntry::NoValues`].
pub fn summarize(series: &[f64]) -> SummaryEntry {
    if series.is_empty() {
        return SummaryEntry::NoValues;
    }

    let mut sorted = series.to_vec();
    sorted.sort_by(f64::total_cmp);

    let n = sorted.len();
    let total: f64 = sorted.iter().fold(0.0, |acc, v| acc + v);

    SummaryEntry::Values(StatSummary {
        p2: sorted[percentile_index(n, 0.02)],
        avg: total / n as f64,
        median: sorted[n / 2],
        p98: sorted[percentile_index(n, 0.98)],
        max: sorted[n - 1],
    })
}

/// Index of the `fraction` percentile in a sorted series of length `n`
fn percentile_index(n: usize, fraction: f64) -> usize {
    ((n as f64 * fraction).floor() as usize).min(n - 1)
}

/// Round to 2 decimal places
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summarize_two_values() {
        let summary = summarize(&[6.0, 14.0]);
        let stats = summary.values().unwrap();

        assert_eq!(stats.avg, 10.0);
        assert_eq!(stats.median, 14.0);
        assert_eq!(stats.max, 14.0);
        assert_eq!(stats.p2, 6.0);
        assert_eq!(stats.p98, 14.0);
    }

    #[test]
    fn test_summarize_hundred_values() {
        let series: Vec<f64> = (0..100).rev().map(|v| v as f64).collect();
        let stats = *summarize(&series).values().unwrap();

        assert_eq!(stats.p2, 2.0);
        assert_eq!(stats.median, 50.0);
        assert_eq!(stats.p98, 98.0);
        assert_eq!(stats.max, 99.0);
        assert_eq!(stats.avg, 49.5);
    }

    #[test]
    fn test_summarize_does_not_reorder_input() {
        let series = vec![3.0, 1.0, 2.0];
        summarize(&series);
        assert_eq!(series, vec![3.0, 1.0, 2.0]);
    }

    #[test]
    fn test_summarize_empty() {
        assert_eq!(summarize(&[]), SummaryEntry::NoValues);
    }

    #[test]
    fn test_percentiles_monotonic() {
        let series = [5.0, 0.0, 12.5, 3.25, 3.25, 40.0, 7.0];
        let stats = *summarize(&series).values().unwrap();

        assert!(stats.p2 <= stats.median);
        assert!(stats.median <= stats.p98);
        assert!(stats.p98 <= stats.max);
    }

    #[test]
    fn test_summarize_idempotent_on_sorted_input() {
        let series = [1.0, 4.0, 2.0, 8.0];
        let mut sorted = series.to_vec();
        sorted.sort_by(f64::total_cmp);

        assert_eq!(summarize(&series), summarize(&sorted));
    }

    #[test]
    fn test_rounding_and_display() {
        let stats = StatSummary {
            p2: 1.004,
            avg: 2.345_6,
            median: 3.0,
            p98: 4.999,
            max: 5.0,
        };

        let rounded = stats.rounded();
        assert_eq!(rounded.p2, 1.0);
        assert_eq!(rounded.avg, 2.35);
        assert_eq!(rounded.p98, 5.0);
        assert_eq!(
            stats.to_string(),
            "2% : 1.00ms, Avg : 2.35ms, Med : 3.00ms, 98% : 5.00ms, Max : 5.00ms"
        );
    }
}
