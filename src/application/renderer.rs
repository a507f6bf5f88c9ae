//! Document rendering.
//!
//! Sorts normalized records chronologically and renders the final output
//! text: one headed block per record, joined by a horizontal rule.

use chrono::{DateTime, Utc};

use crate::domain::NormalizedRecord;

/// Fixed-width UTC header format, zero-padded, 24-hour clock.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H-%M-%S";

/// Separator between rendered blocks.
pub const BLOCK_SEPARATOR: &str = "\n\n---\n\n";

/// Formats an instant as the fixed-width UTC header string.
#[must_use]
pub fn format_instant(instant: DateTime<Utc>) -> String {
    instant.format(TIMESTAMP_FORMAT).to_string()
}

/// Sorts records ascending by instant and renders the output document.
///
/// The sort is stable: records with equal instants keep their input order.
/// That matters because every entry without a usable timestamp shares the
/// epoch sentinel instant.
#[must_use]
pub fn render_document(records: &mut [NormalizedRecord]) -> String {
    records.sort_by_key(|r| r.instant);

    records
        .iter()
        .map(render_block)
        .collect::<Vec<_>>()
        .join(BLOCK_SEPARATOR)
}

fn render_block(record: &NormalizedRecord) -> String {
    format!("# {}\n\n{}", format_instant(record.instant), record.body)
        .trim()
        .to_string()
}
