//! Redis-backed keyspace source

use redis::{Client, Connection, RedisError};

use crate::config::Config;
use crate::error::{ReportError, Result};
use crate::store::KeyspaceSource;

/// Blocking Redis connection used for one report run
pub struct RedisSource {
    /// Open connection to the server
    connection: Connection,

    /// host:port, for logging
    endpoint: String,
}

impl RedisSource {
    /// Connect to the server named in `config`
    ///
    /// Fails with `ReportError::Connection` if the server cannot be reached.
    pub fn connect(config: &Config) -> Result<Self> {
        let endpoint = config.endpoint();
        tracing::debug!("Connecting to Redis at {}", endpoint);

        let client = Client::open(config.connection_info())
            .map_err(|e| ReportError::Connection(format!("{}: {}", endpoint, e)))?;
        let connection = client
            .get_connection()
            .map_err(|e| ReportError::Connection(format!("{}: {}", endpoint, e)))?;

        tracing::info!("Connected to Redis at {}", endpoint);
        Ok(Self {
            connection,
            endpoint,
        })
    }
}

impl KeyspaceSource for RedisSource {
    fn keys(&mut self, pattern: &str) -> Result<Vec<String>> {
        redis::cmd("KEYS")
            .arg(pattern)
            .query(&mut self.connection)
            .map_err(|e| classify_listing(&self.endpoint, e))
    }

    fn memory_usage(&mut self, key: &str) -> Result<Option<u64>> {
        redis::cmd("MEMORY")
            .arg("USAGE")
            .arg(key)
            .query(&mut self.connection)
            .map_err(|e| classify(&self.endpoint, key, e))
    }
}

/// True when the connection itself failed, as opposed to a server reply
fn is_transport(err: &RedisError) -> bool {
    err.is_io_error()
        || err.is_timeout()
        || err.is_connection_dropped()
        || err.is_connection_refusal()
}

/// Listing failures are always fatal; only the label differs
fn classify_listing(endpoint: &str, err: RedisError) -> ReportError {
    if is_transport(&err) {
        ReportError::Connection(format!("{}: {}", endpoint, err))
    } else {
        ReportError::Listing(err.to_string())
    }
}

/// Split transport failures (fatal) from server replies (per key)
fn classify(endpoint: &str, key: &str, err: RedisError) -> ReportError {
    if is_transport(&err) {
        ReportError::Connection(format!("{}: {}", endpoint, err))
    } else {
        ReportError::Query {
            key: key.to_string(),
            message: err.to_string(),
        }
    }
}
