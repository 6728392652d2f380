//! Trace session: acquisition state plus one-shot analysis runs.
//!
//! A session remembers the most recently loaded payload. Loading a file
//! replaces it; refreshing from a URL replaces it only when the download
//! succeeds. Each run re-ingests and re-aggregates that payload from scratch.

use crate::aggregator::{aggregate, AnalysisConfig, Aggregation, PhysicsMatcher};
use crate::fetch::TraceFetcher;
use crate::parser::{ingest, IngestWarning, Table};
use crate::utils::error::ConfigError;
use log::{debug, info, warn};
use std::fs;
use std::io;
use std::path::Path;

/// Everything one run produces
#[derive(Debug, Clone)]
pub struct TraceAnalysis {
    /// Where the payload came from (file path or URL)
    pub source: String,

    /// The ingested table, unmodified, for consumers that derive their own views
    pub table: Table,

    pub ingest_warnings: Vec<IngestWarning>,

    pub aggregation: Aggregation,
}

impl TraceAnalysis {
    pub fn frame_count(&self) -> usize {
        self.aggregation.frames.len()
    }
}

/// Validated configuration with its column patterns compiled
#[derive(Debug, Clone)]
pub struct Analyzer {
    config: AnalysisConfig,
    physics: PhysicsMatcher,
}

impl Analyzer {
    pub fn new(config: AnalysisConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let physics = PhysicsMatcher::new(&config.physics)?;

        Ok(Self { config, physics })
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Ingest and aggregate a payload
    ///
    /// Returns `None` for an empty payload: there is nothing to publish.
    pub fn analyze(&self, payload: &str, source: &str) -> Option<TraceAnalysis> {
        if payload.is_empty() {
            debug!("Empty payload, skipping analysis");
            return None;
        }

        let ingested = ingest(payload);
        let aggregation = aggregate(
            &ingested.table,
            &self.config.stats,
            &self.physics,
            self.config.max_frames,
        );

        Some(TraceAnalysis {
            source: source.to_string(),
            table: ingested.table,
            ingest_warnings: ingested.warnings,
            aggregation,
        })
    }
}

/// Most recently loaded trace payload and where it came from
#[derive(Debug, Clone, Default)]
pub struct TraceSession {
    last_payload: String,
    source: String,
}

impl TraceSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a session from an in-memory payload
    pub fn with_payload(payload: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            last_payload: payload.into(),
            source: source.into(),
        }
    }

    pub fn payload(&self) -> &str {
        &self.last_payload
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Replace the payload with a local file's contents
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> io::Result<()> {
        let path = path.as_ref();
        info!("Loading trace from: {}", path.display());

        self.last_payload = fs::read_to_string(path)?;
        self.source = path.display().to_string();

        Ok(())
    }

    /// Try to replace the payload with a remote download
    ///
    /// Failures are logged and the previous payload is kept. Returns whether
    /// the payload was replaced.
    pub fn refresh_from_url(&mut self, fetcher: &TraceFetcher, url: &str) -> bool {
        match fetcher.fetch(url) {
            Ok(body) => {
                self.last_payload = body;
                self.source = url.to_string();
                true
            }
            Err(e) => {
                warn!("Could not fetch {}: {}. Keeping previous trace.", url, e);
                false
            }
        }
    }

    /// Analyze the current payload
    pub fn run(&self, analyzer: &Analyzer) -> Option<TraceAnalysis> {
        analyzer.analyze(&self.last_payload, &self.source)
    }
}
