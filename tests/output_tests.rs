use frame_trace_studio::aggregator::{AggregateStatDefinition, AnalysisConfig};
use frame_trace_studio::output::{
    read_report, render_text_summary, write_report, TraceReport, NEGATIVE_VALUES_BANNER,
};
use frame_trace_studio::session::{Analyzer, TraceAnalysis, TraceSession};

fn analyze(payload: &str, stats: Vec<AggregateStatDefinition>) -> TraceAnalysis {
    let analyzer = Analyzer::new(AnalysisConfig {
        stats,
        ..Default::default()
    })
    .unwrap();
    TraceSession::with_payload(payload, "trace.csv")
        .run(&analyzer)
        .unwrap()
}

#[test]
fn test_text_summary_lines() {
    let analysis = analyze(
        "FrameTime,GameThreadTime\n10,6\n20,14\n",
        vec![
            AggregateStatDefinition::new("GT", 0, &["GameThreadTime"], &[]),
            AggregateStatDefinition::new("Ghost", 1, &["Missing"], &[]),
        ],
    );

    let text = render_text_summary(&analysis);
    let lines: Vec<&str> = text.lines().collect();

    assert!(lines[0].starts_with("WARNING : Final headers were not written"));
    assert_eq!(
        lines[1],
        "GT - (2% : 6.00ms, Avg : 10.00ms, Med : 14.00ms, 98% : 14.00ms, Max : 14.00ms)"
    );
    assert_eq!(lines[2], "WARNING : Ghost had no values");
}

#[test]
fn test_text_summary_indents_and_banner() {
    let analysis = analyze(
        "A,B\n1,5\nA,B\n[HasHeaderRowAtEnd]\n",
        vec![AggregateStatDefinition::new("Child", 2, &["A"], &["B"])],
    );

    let text = render_text_summary(&analysis);
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], NEGATIVE_VALUES_BANNER);
    assert!(lines[1].starts_with("        Child - (2% : 0.00ms"));
}

#[test]
fn test_report_round_trip() {
    let analysis = analyze(
        "FrameTime,GameThreadTime\n10.123,6\n20,\n",
        vec![AggregateStatDefinition::new("GT", 0, &["GameThreadTime"], &[])],
    );
    let report = TraceReport::from_analysis(&analysis);

    assert_eq!(report.frame_count, 2);
    assert_eq!(report.frames[1].game_thread_time, None);
    assert_eq!(report.frames[0].frame_time, Some(10.123));
    assert_eq!(report.empty_stats().count(), 0);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.json");
    write_report(&report, &path).unwrap();

    let loaded = read_report(&path).unwrap();
    assert_eq!(loaded.summaries, report.summaries);
    assert_eq!(loaded.frames, report.frames);
    assert_eq!(loaded.warnings, report.warnings);
}

#[test]
fn test_report_preserves_full_precision_samples() {
    let analysis = analyze(
        "FrameTime,GameThreadTime\n16.666666666666668,0.30000000000000004\n",
        vec![AggregateStatDefinition::new("GT", 0, &["GameThreadTime"], &[])],
    );
    let report = TraceReport::from_analysis(&analysis);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("precise.json");
    write_report(&report, &path).unwrap();
    let loaded = read_report(&path).unwrap();

    assert_eq!(loaded.frames[0].frame_time, Some(16.666666666666668));
    assert_eq!(loaded.frames[0].game_thread_time, Some(0.1 + 0.2));
    assert_eq!(loaded.aggregate_series, report.aggregate_series);
}

#[test]
fn test_report_summaries_rounded() {
    let analysis = analyze(
        "X\n1.111\n2.222\n3.337\n",
        vec![AggregateStatDefinition::new("X", 0, &["X"], &[])],
    );
    let report = TraceReport::from_analysis(&analysis);
    let stats = report.summaries[0].summary.values().unwrap();

    assert_eq!(stats.max, 3.34);
    assert_eq!(stats.avg, 2.22);
}
