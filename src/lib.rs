//! # redis-memory-report
//!
//! One-shot administrative report of per-key memory usage in Redis:
//! - Lists every key with `KEYS *`
//! - Sizes each key with `MEMORY USAGE`
//! - Writes `Key,Memory Usage (bytes)` rows to a CSV file
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     Driver (app::run)                        │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │  Collector  │          │  Reporter   │
//!   │ (per-key Q) │─report──▶│   (CSV)     │
//!   └──────┬──────┘          └─────────────┘
//!          │
//!          ▼
//!   ┌─────────────┐
//!   │ RedisSource │
//!   │ (blocking)  │
//!   └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod report;
pub mod store;
pub mod collector;
pub mod reporter;
pub mod app;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{ReportError, Result};
pub use config::Config;
pub use report::{KeyMemoryRecord, MemoryReport};
pub use collector::Collector;
pub use app::Summary;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of redis-memory-report
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
