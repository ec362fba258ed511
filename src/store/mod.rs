//! Store Module
//!
//! Access to the keyspace being reported on.
//!
//! ## Commands Issued
//! - `KEYS <pattern>`: list every key name in one call
//! - `MEMORY USAGE <key>`: bytes used by one key, nil if the key is gone
//!
//! Commands are sent strictly one at a time over a single blocking
//! connection. No pipelining, no retries.

mod client;

pub use client::RedisSource;

use crate::error::Result;

/// Glob pattern matching every key in the selected database
pub const MATCH_ALL: &str = "*";

/// A keyspace that can be listed and sized key by key
pub trait KeyspaceSource {
    /// List all key names matching `pattern`, in store-defined order
    fn keys(&mut self, pattern: &str) -> Result<Vec<String>>;

    /// Bytes used by `key`
    ///
    /// Returns `Ok(None)` when the key no longer exists. Server-side rejections
    /// surface as `ReportError::Query`; transport failures as
    /// `ReportError::Connection`.
    fn memory_usage(&mut self, key: &str) -> Result<Option<u64>>;
}

impl<S: KeyspaceSource + ?Sized> KeyspaceSource for &mut S {
    fn keys(&mut self, pattern: &str) -> Result<Vec<String>> {
        (**self).keys(pattern)
    }

    fn memory_usage(&mut self, key: &str) -> Result<Option<u64>> {
        (**self).memory_usage(key)
    }
}
