//! Driver
//!
//! Runs one collect → write pass. Nothing is written unless collection
//! succeeds.

use std::fmt;
use std::path::Path;

use crate::collector::Collector;
use crate::config::Config;
use crate::error::Result;
use crate::reporter;
use crate::store::{KeyspaceSource, RedisSource};

/// Outcome of a successful run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// Rows written below the header
    pub keys_written: usize,

    /// Sum of all written byte counts
    pub total_bytes: u64,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Successfully saved memory usage data for {} keys",
            self.keys_written
        )
    }
}

/// Connect to the configured server, collect, and write the CSV
pub fn run(config: &Config) -> Result<Summary> {
    config.validate()?;
    let source = RedisSource::connect(config)?;
    run_with(source, &config.output_path)
}

/// Collect from `source` and write the CSV to `output`
pub fn run_with<S: KeyspaceSource>(source: S, output: impl AsRef<Path>) -> Result<Summary> {
    let report = Collector::new(source).collect()?;
    reporter::write(&report, output.as_ref())?;

    let summary = Summary {
        keys_written: report.len(),
        total_bytes: report.total_bytes(),
    };
    tracing::info!(
        "Report written to {} ({} keys, {} bytes total)",
        output.as_ref().display(),
        summary.keys_written,
        summary.total_bytes
    );
    Ok(summary)
}
