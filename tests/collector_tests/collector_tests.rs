//! Tests for Collector
//!
//! These tests verify:
//! - Every listed key with a defined size is reported, in listing order
//! - Server-side per-key errors drop only that key, with a warning naming it
//! - Vanished keys are dropped silently
//! - Transport failures abort the run

#[path = "../common/mod.rs"]
mod common;

use common::{capture_logs, FakeSource, Reply};
use redis_memory_report::collector::Collector;
use redis_memory_report::error::ReportError;
use redis_memory_report::report::KeyMemoryRecord;

// =============================================================================
// Basic Collection Tests
// =============================================================================

#[test]
fn test_collect_all_defined() {
    let source = FakeSource::new(&[
        ("user:1", Reply::Bytes(72)),
        ("user:2", Reply::Bytes(80)),
        ("session", Reply::Bytes(1024)),
    ]);
    let mut collector = Collector::new(source);

    let report = collector.collect().unwrap();

    assert_eq!(report.len(), 3);
    assert_eq!(
        report.records(),
        &[
            KeyMemoryRecord::new("user:1", 72),
            KeyMemoryRecord::new("user:2", 80),
            KeyMemoryRecord::new("session", 1024),
        ]
    );
}

#[test]
fn test_collect_lists_with_match_all_pattern() {
    let mut source = FakeSource::new(&[("a", Reply::Bytes(1))]);
    Collector::new(&mut source).collect().unwrap();

    assert_eq!(source.listed_patterns, vec!["*".to_string()]);
}

#[test]
fn test_collect_preserves_listing_order() {
    let source = FakeSource::new(&[
        ("zeta", Reply::Bytes(1)),
        ("alpha", Reply::Bytes(2)),
        ("mid", Reply::Bytes(3)),
    ]);
    let report = Collector::new(source).collect().unwrap();

    let keys: Vec<&str> = report.iter().map(|r| r.key.as_str()).collect();
    assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
}

#[test]
fn test_collect_empty_keyspace() {
    let report = Collector::new(FakeSource::empty()).collect().unwrap();
    assert!(report.is_empty());
}

#[test]
fn test_collect_keeps_zero_byte_keys() {
    let source = FakeSource::new(&[("c", Reply::Bytes(0))]);
    let report = Collector::new(source).collect().unwrap();

    assert_eq!(report.records(), &[KeyMemoryRecord::new("c", 0)]);
}

// =============================================================================
// Per-Key Failure Tests
// =============================================================================

#[test]
fn test_collect_skips_server_error_key() {
    let source = FakeSource::new(&[
        ("a", Reply::Bytes(10)),
        ("b", Reply::ServerError("ERR unknown command 'MEMORY'")),
        ("c", Reply::Bytes(0)),
    ]);
    let report = Collector::new(source).collect().unwrap();

    assert_eq!(
        report.records(),
        &[KeyMemoryRecord::new("a", 10), KeyMemoryRecord::new("c", 0)]
    );
}

#[test]
fn test_collect_warns_with_key_and_server_message() {
    let source = FakeSource::new(&[
        ("a", Reply::Bytes(10)),
        ("b", Reply::ServerError("ERR unknown command 'MEMORY'")),
    ]);

    let (report, logs) = capture_logs(|| Collector::new(source).collect());

    assert_eq!(report.unwrap().len(), 1);
    assert!(logs.contains("WARN"));
    assert!(logs.contains("Error getting memory usage for key b: ERR unknown command 'MEMORY'"));
    // Key appears once, not repeated by the error's own Display
    assert!(!logs.contains("Query error"));
}

#[test]
fn test_collect_vanished_key_is_not_warned() {
    let source = FakeSource::new(&[("gone", Reply::Missing)]);

    let (report, logs) = capture_logs(|| Collector::new(source).collect());

    assert!(report.unwrap().is_empty());
    assert!(!logs.contains("WARN"));
}

#[test]
fn test_collect_continues_after_error() {
    let mut source = FakeSource::new(&[
        ("bad", Reply::ServerError("WRONGTYPE")),
        ("good", Reply::Bytes(5)),
    ]);
    let report = Collector::new(&mut source).collect().unwrap();

    assert_eq!(source.queried, vec!["bad".to_string(), "good".to_string()]);
    assert_eq!(report.len(), 1);
}

#[test]
fn test_collect_drops_vanished_key() {
    let source = FakeSource::new(&[
        ("a", Reply::Bytes(10)),
        ("expired", Reply::Missing),
        ("c", Reply::Bytes(3)),
    ]);
    let report = Collector::new(source).collect().unwrap();

    let keys: Vec<&str> = report.iter().map(|r| r.key.as_str()).collect();
    assert_eq!(keys, vec!["a", "c"]);
}

#[test]
fn test_collect_all_keys_fail() {
    let source = FakeSource::new(&[
        ("a", Reply::ServerError("ERR")),
        ("b", Reply::Missing),
    ]);
    let report = Collector::new(source).collect().unwrap();
    assert!(report.is_empty());
}

// =============================================================================
// Fatal Failure Tests
// =============================================================================

#[test]
fn test_collect_unreachable_store() {
    let result = Collector::new(FakeSource::unreachable()).collect();
    assert!(matches!(result, Err(ReportError::Connection(_))));
}

#[test]
fn test_collect_aborts_on_disconnect() {
    let mut source = FakeSource::new(&[
        ("a", Reply::Bytes(1)),
        ("b", Reply::Disconnect),
        ("c", Reply::Bytes(3)),
    ]);
    let result = Collector::new(&mut source).collect();

    assert!(matches!(result, Err(ReportError::Connection(_))));
    // Nothing after the failure is queried
    assert_eq!(source.queried, vec!["a".to_string(), "b".to_string()]);
}
