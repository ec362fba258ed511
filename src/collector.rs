//! Collector Module
//!
//! Lists every key and sizes it, one blocking round trip per key.
//!
//! ## Failure Policy
//! - Listing fails            → whole run fails
//! - Server rejects one key   → warn, drop the key, keep going
//! - Key gone (nil reply)     → drop the key silently
//! - Transport fails mid-run  → whole run fails

use crate::error::{ReportError, Result};
use crate::report::{KeyMemoryRecord, MemoryReport};
use crate::store::{KeyspaceSource, MATCH_ALL};

/// Builds a `MemoryReport` from a keyspace source
pub struct Collector<S> {
    source: S,
}

impl<S: KeyspaceSource> Collector<S> {
    /// Create a collector over an already-connected source
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// List all keys, then query each key's memory usage in listing order
    pub fn collect(&mut self) -> Result<MemoryReport> {
        let keys = self.source.keys(MATCH_ALL)?;
        tracing::debug!("Listed {} keys", keys.len());

        let mut report = MemoryReport::new();
        for key in keys {
            match self.source.memory_usage(&key) {
                Ok(Some(bytes)) => report.push(KeyMemoryRecord::new(key, bytes)),
                Ok(None) => {
                    tracing::debug!("Key {} disappeared before it could be sized", key);
                }
                Err(ReportError::Query { message, .. }) => {
                    tracing::warn!("Error getting memory usage for key {}: {}", key, message);
                }
                Err(e) => return Err(e),
            }
        }

        Ok(report)
    }
}
