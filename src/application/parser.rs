//! JSON parsing for journal export data.
//!
//! Handles conversion from the raw export document to domain models,
//! including the per-entry embedded rich-text structure.

use serde::Deserialize;

use crate::domain::{AppError, JournalDocument, JournalEntry, Result, RichTextOutcome};

/// Raw export document as produced by the journaling app.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawDocument {
    #[serde(default)]
    entries: Vec<RawEntry>,
}

/// Raw entry shape. Every field may be absent.
#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct RawEntry {
    #[serde(default)]
    creation_date: Option<String>,
    #[serde(default)]
    modified_date: Option<String>,
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    rich_text: Option<String>,
}

/// Rich-text envelope embedded as a serialized string inside an entry.
#[derive(Debug, Deserialize)]
struct RawRichText {
    #[serde(default)]
    contents: Vec<RawContentPart>,
}

#[derive(Debug, Deserialize, Default)]
struct RawContentPart {
    #[serde(default)]
    text: Option<String>,
}

/// Parses the export document text into a domain document.
///
/// # Errors
/// Returns `MalformedDocument` if the text is not valid structured data.
pub fn parse_document(text: &str) -> Result<JournalDocument> {
    let raw: RawDocument = serde_json::from_str(text).map_err(AppError::malformed)?;

    let entries = raw
        .entries
        .into_iter()
        .map(|e| JournalEntry {
            creation_date: e.creation_date,
            modified_date: e.modified_date,
            text: e.text,
            rich_text: e.rich_text,
        })
        .collect();

    Ok(JournalDocument { entries })
}

/// Parses an entry's rich-text string into a two-tag outcome.
///
/// A successful parse concatenates every content part's `text` in sequence
/// order (absent text counts as empty). A failed parse is not an error;
/// the caller substitutes placeholder content.
#[must_use]
pub fn parse_rich_text(raw: &str) -> RichTextOutcome {
    match serde_json::from_str::<RawRichText>(raw) {
        Ok(rich) => {
            let joined: String = rich
                .contents
                .iter()
                .map(|part| part.text.as_deref().unwrap_or_default())
                .collect();
            RichTextOutcome::Text(joined)
        }
        Err(e) => {
            tracing::debug!("Unreadable rich text: {}", e);
            RichTextOutcome::Unreadable
        }
    }
}
