//! Configuration for redis-memory-report
//!
//! Startup parameters with the defaults the tool has always used.

use std::path::PathBuf;

use redis::{ConnectionAddr, ConnectionInfo, RedisConnectionInfo};

use crate::error::{ReportError, Result};

/// Default Redis host
pub const DEFAULT_HOST: &str = "localhost";

/// Default Redis port
pub const DEFAULT_PORT: u16 = 6379;

/// Default CSV output file
pub const DEFAULT_OUTPUT: &str = "redis_memory_usage.csv";

/// Runtime configuration for one report run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Store Configuration
    // -------------------------------------------------------------------------
    /// Redis host name or IP address
    pub host: String,

    /// Redis TCP port
    pub port: u16,

    // -------------------------------------------------------------------------
    // Output Configuration
    // -------------------------------------------------------------------------
    /// CSV destination, truncated on every run
    pub output_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            output_path: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// `host:port`, with IPv6 literals bracketed
    pub fn endpoint(&self) -> String {
        if self.host.contains(':') {
            format!("[{}]:{}", self.host, self.port)
        } else {
            format!("{}:{}", self.host, self.port)
        }
    }

    /// Connection URL, for display
    pub fn connection_url(&self) -> String {
        format!("redis://{}/", self.endpoint())
    }

    /// TCP connection target handed to `redis::Client::open`
    ///
    /// Built directly rather than parsed from a URL so that any host the
    /// resolver accepts (IPv6 literals included) is usable.
    pub fn connection_info(&self) -> ConnectionInfo {
        ConnectionInfo {
            addr: ConnectionAddr::Tcp(self.host.clone(), self.port),
            redis: RedisConnectionInfo::default(),
        }
    }

    /// Reject parameters that can never produce a usable run
    pub fn validate(&self) -> Result<()> {
        if self.host.trim().is_empty() {
            return Err(ReportError::Config("host must not be empty".to_string()));
        }
        if self.port == 0 {
            return Err(ReportError::Config("port must be non-zero".to_string()));
        }
        if self.output_path.as_os_str().is_empty() {
            return Err(ReportError::Config("output path must not be empty".to_string()));
        }
        Ok(())
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the Redis host
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.config.host = host.into();
        self
    }

    /// Set the Redis port
    pub fn port(mut self, port: u16) -> Self {
        self.config.port = port;
        self
    }

    /// Set the CSV output path
    pub fn output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.output_path = path.into();
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
