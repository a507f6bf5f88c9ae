//! Domain models for journal export data.
//!
//! These models represent the core entities extracted from a journaling
//! app's export document.

use chrono::{DateTime, Utc};

/// A single raw journal entry as found in the export document.
///
/// Every field is optional; a fully empty entry is still valid and must
/// survive normalization with placeholder content.
#[derive(Debug, Clone, Default)]
pub struct JournalEntry {
    /// When the entry was created (ISO-8601-like string).
    pub creation_date: Option<String>,
    /// When the entry was last modified (ISO-8601-like string).
    pub modified_date: Option<String>,
    /// Plain text body.
    pub text: Option<String>,
    /// Serialized rich-text structure with a `contents` part list.
    pub rich_text: Option<String>,
}

/// The parsed export document: entries in source order, which is not
/// assumed to be chronological.
#[derive(Debug, Clone, Default)]
pub struct JournalDocument {
    pub entries: Vec<JournalEntry>,
}

/// Result of parsing an entry's embedded rich-text structure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RichTextOutcome {
    /// The structure parsed; carries the concatenated part text.
    Text(String),
    /// The structure did not parse as structured data.
    Unreadable,
}

/// One normalized `(instant, body)` record, derived transiently per
/// conversion run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedRecord {
    /// Absolute point in time; the Unix epoch when no timestamp resolved.
    pub instant: DateTime<Utc>,
    /// Rendered body text, never empty.
    pub body: String,
}

/// Summary of a completed conversion, reported alongside the output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionSummary {
    /// Number of entries converted.
    pub entry_count: usize,
    /// Instant of the first rendered record.
    pub first: DateTime<Utc>,
    /// Instant of the last rendered record.
    pub last: DateTime<Utc>,
}
