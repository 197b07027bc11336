//! Record output for the monitoring pipeline.
//!
//! One pipe-delimited line per record: `identifier|value|destination`.
//! Broker-scope records have no destination, leaving the trailing segment
//! empty. Rendering happens only after the traversal has fully completed;
//! a failed run emits nothing.

#![warn(missing_docs)]

use crate::core::{MetricRecord, Result};
use std::io::Write;

/// Renders one record as a pipe-delimited line (without newline).
pub fn render_record(record: &MetricRecord) -> String {
    format!(
        "{}|{}|{}",
        record.id,
        record.value,
        record.destination.as_deref().unwrap_or("")
    )
}

/// Writes all records, one line each, to `writer`.
pub fn write_records<W: Write>(writer: &mut W, records: &[MetricRecord]) -> Result<()> {
    for record in records {
        writeln!(writer, "{}", render_record(record))?;
    }
    Ok(())
}
