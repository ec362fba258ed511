//! Reporter Module
//!
//! Serializes a `MemoryReport` as CSV.
//!
//! ## Output Format
//! ```text
//! Key,Memory Usage (bytes)\r\n
//! user:1,72\r\n
//! "a,b",56\r\n
//! ```
//!
//! Fields are quoted only when they contain the delimiter, a quote or a line
//! break. The file is truncated on every run.

use std::fs;
use std::io::Write;
use std::path::Path;

use csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::error::Result;
use crate::report::MemoryReport;

/// Column headers, in order
pub const CSV_HEADERS: [&str; 2] = ["Key", "Memory Usage (bytes)"];

/// Write `report` to `writer` as CSV, header first
pub fn write_to<W: Write>(report: &MemoryReport, writer: W) -> Result<()> {
    let mut csv = WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::CRLF)
        .from_writer(writer);

    // Header is written by hand so that an empty report still gets one
    csv.write_record(CSV_HEADERS)?;
    for record in report {
        csv.serialize(record)?;
    }
    csv.flush()?;
    Ok(())
}

/// Render `report` to an in-memory CSV document
pub fn to_bytes(report: &MemoryReport) -> Result<Vec<u8>> {
    let mut buf = Vec::with_capacity(64 + report.len() * 32);
    write_to(report, &mut buf)?;
    Ok(buf)
}

/// Write `report` to `path`, replacing any existing file
///
/// The document is rendered fully in memory before the file is touched.
pub fn write(report: &MemoryReport, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let bytes = to_bytes(report)?;
    fs::write(path, bytes)?;

    tracing::debug!("Wrote {} rows to {}", report.len(), path.display());
    Ok(())
}
