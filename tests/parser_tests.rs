use frame_trace_studio::parser::{ingest, parse_delimited, parse_number, IngestWarning};
use pretty_assertions::assert_eq;

#[test]
fn test_header_recovery() {
    let payload = "A\n1,2,3\n4,5,6\nA,B,C\n[HasHeaderRowAtEnd]\n";
    let ingested = ingest(payload);

    assert_eq!(ingested.table.columns(), &["A", "B", "C"]);
    assert_eq!(ingested.table.row_count(), 2);
    assert!(ingested.warnings.is_empty());

    // Neither the header copy nor the marker is a frame
    for frame in 0..ingested.table.row_count() {
        assert_ne!(ingested.table.cell(frame, "A"), Some("A"));
        assert_ne!(ingested.table.cell(frame, "A"), Some("[HasHeaderRowAtEnd]"));
    }
}

#[test]
fn test_missing_sentinel_uses_first_line() {
    let ingested = ingest("FrameTime,GameThreadTime\n10,6\n20,14\n");

    assert_eq!(ingested.table.columns(), &["FrameTime", "GameThreadTime"]);
    assert_eq!(ingested.table.row_count(), 2);
    assert_eq!(ingested.warnings, vec![IngestWarning::MissingTrailingHeader]);
    assert!(ingested.warnings[0].to_string().contains("Final headers were not written"));
}

#[test]
fn test_late_columns_readable_after_recovery() {
    // The initial header only knew FrameTime; NewStat was registered mid-capture
    let payload = "FrameTime\n16,\n17,2.5\nFrameTime,NewStat\n[HasHeaderRowAtEnd]";
    let table = ingest(payload).table;

    assert!(table.value(0, "NewStat").is_nan());
    assert_eq!(table.value(1, "NewStat"), 2.5);
}

#[test]
fn test_parse_number() {
    assert_eq!(parse_number("1.5"), 1.5);
    assert_eq!(parse_number(" 42 "), 42.0);
    assert!(parse_number("").is_nan());
    assert!(parse_number("n/a").is_nan());
    assert!(parse_number("inf").is_nan());
    assert!(parse_number("infinity").is_nan());
    assert!(parse_number("-inf").is_nan());
    assert!(parse_number("NaN").is_nan());
}

#[test]
fn test_parse_delimited_header_only() {
    let table = parse_delimited("A,B\n");
    assert_eq!(table.columns(), &["A", "B"]);
    assert!(table.is_empty());
    assert!(table.has_column("B"));
}
