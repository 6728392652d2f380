//! JSON report files.
//!
//! Reports are pretty-printed so they diff cleanly between runs. Missing
//! parent directories are created on write.

use super::schema::TraceReport;
use crate::utils::error::OutputError;
use log::{debug, info};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// Write a report to a JSON file
///
/// **Public** - main entry point for JSON output
///
/// # Errors
/// * `OutputError::InvalidPath` - empty path, a directory, or an uncreatable parent
/// * `OutputError::WriteFailed` - the file cannot be created or flushed
/// * `OutputError::SerializationFailed` - the report cannot be encoded
pub fn write_report(report: &TraceReport, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();
    prepare_output_path(output_path)?;

    info!(
        "Writing report for {} ({} frames) to {}",
        report.source,
        report.frame_count,
        output_path.display()
    );

    let mut writer = BufWriter::new(File::create(output_path)?);
    serde_json::to_writer_pretty(&mut writer, report)?;
    writer.flush()?;

    debug!(
        "Report size: {} bytes",
        fs::metadata(output_path).map(|m| m.len()).unwrap_or(0)
    );

    Ok(())
}

/// Serialize a report to a pretty JSON string
pub fn report_to_string(report: &TraceReport) -> Result<String, OutputError> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Load a report written by [`write_report`]
///
/// # Errors
/// * `OutputError::ReadFailed` - the file cannot be opened
/// * `OutputError::SerializationFailed` - the contents are not a report
pub fn read_report(input_path: impl AsRef<Path>) -> Result<TraceReport, OutputError> {
    let input_path = input_path.as_ref();
    debug!("Reading report from: {}", input_path.display());

    let file = File::open(input_path).map_err(|source| OutputError::ReadFailed {
        path: input_path.display().to_string(),
        source,
    })?;

    let report: TraceReport = serde_json::from_reader(BufReader::new(file))?;

    debug!(
        "Report loaded: schema {}, {} frames, {} stats",
        report.version,
        report.frame_count,
        report.summaries.len()
    );

    Ok(report)
}

/// Reject unusable destinations and create missing parent directories
fn prepare_output_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    if path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() && !parent.exists() => {
            debug!("Creating parent directories: {}", parent.display());
            fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!(
                    "Cannot create directory {}: {}",
                    parent.display(),
                    e
                ))
            })
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::{AggregateSeries, NamedSummary, StatSummary, SummaryEntry};
    use crate::output::schema::FrameSample;
    use tempfile::NamedTempFile;

    fn create_test_report() -> TraceReport {
        TraceReport {
            version: "1.0.0".to_string(),
            source: "trace.csv".to_string(),
            generated_at: "2024-01-01T00:00:00Z".to_string(),
            frame_count: 1,
            column_count: 2,
            warnings: vec![],
            had_negative_values: false,
            negative_aggregates: vec![],
            frames: vec![FrameSample {
                frame: 0,
                frame_time: Some(16.6),
                game_thread_time: None,
                render_thread_time: None,
                per_frame_kb: None,
                physics_time: Some(0.0),
            }],
            aggregate_series: vec![AggregateSeries {
                name: "GT".to_string(),
                depth: 0,
                values: vec![6.0],
            }],
            summaries: vec![NamedSummary {
                name: "GT".to_string(),
                depth: 0,
                summary: SummaryEntry::Values(StatSummary {
                    p2: 6.0,
                    avg: 6.0,
                    median: 6.0,
                    p98: 6.0,
                    max: 6.0,
                }),
            }],
        }
    }

    #[test]
    fn test_write_and_read_report() {
        let report = create_test_report();
        let temp_file = NamedTempFile::new().unwrap();
        let path = temp_file.path();

        write_report(&report, path).unwrap();
        let loaded = read_report(path).unwrap();

        assert_eq!(loaded, report);
    }

    #[test]
    fn test_missing_values_serialize_as_null() {
        let json = report_to_string(&create_test_report()).unwrap();
        assert!(json.contains("\"game_thread_time\": null"));
        assert!(json.contains("\"status\": \"values\""));
    }

    #[test]
    fn test_empty_output_path_rejected() {
        let result = write_report(&create_test_report(), "");
        assert!(matches!(result, Err(OutputError::InvalidPath(_))));
    }

    #[test]
    fn test_directory_output_path_rejected() {
        let temp_dir = tempfile::tempdir().unwrap();
        let result = write_report(&create_test_report(), temp_dir.path());
        assert!(matches!(result, Err(OutputError::InvalidPath(_))));
    }

    #[test]
    fn test_missing_report_is_read_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let missing = temp_dir.path().join("absent.json");

        match read_report(&missing) {
            Err(OutputError::ReadFailed { path, .. }) => {
                assert_eq!(path, missing.display().to_string())
            }
            other => panic!("expected ReadFailed, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_report_is_parse_error() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{{\"version\": 1").unwrap();

        let result = read_report(temp_file.path());
        assert!(matches!(result, Err(OutputError::SerializationFailed(_))));
    }

    #[test]
    fn test_write_creates_parent_dirs() {
        let temp_dir = tempfile::tempdir().unwrap();
        let nested_path = temp_dir.path().join("nested/dirs/report.json");

        write_report(&create_test_report(), &nested_path).unwrap();

        assert!(nested_path.exists());
    }
}
