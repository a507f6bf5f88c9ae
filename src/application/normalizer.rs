//! Entry normalization.
//!
//! Maps raw journal entries with heterogeneous shapes onto uniform
//! `(instant, body)` records. This stage is pure and total: no entry is
//! ever dropped, and a malformed entry resolves to fallback content
//! instead of raising.

use chrono::{DateTime, Utc};

use crate::domain::{JournalEntry, NormalizedRecord, RichTextOutcome};

use super::parser::parse_rich_text;

/// Body used when neither text field yields content.
pub const MISSING_CONTENT_PLACEHOLDER: &str = "[No content]";

/// Normalizes every entry, preserving count and input order.
#[must_use]
pub fn normalize_entries(entries: &[JournalEntry]) -> Vec<NormalizedRecord> {
    entries.iter().map(normalize_entry).collect()
}

fn normalize_entry(entry: &JournalEntry) -> NormalizedRecord {
    NormalizedRecord {
        instant: resolve_instant(entry),
        body: resolve_body(entry),
    }
}

/// Resolves the entry's instant: creation date first, then modified date,
/// then the Unix epoch sentinel (which sorts before any real date).
fn resolve_instant(entry: &JournalEntry) -> DateTime<Utc> {
    parse_instant(entry.creation_date.as_deref())
        .or_else(|| parse_instant(entry.modified_date.as_deref()))
        .unwrap_or(DateTime::UNIX_EPOCH)
}

/// Parses an ISO-8601-like timestamp string. Failures resolve to `None`,
/// never raise.
fn parse_instant(value: Option<&str>) -> Option<DateTime<Utc>> {
    let s = value?;
    s.parse::<DateTime<Utc>>().ok()
}

/// Resolves the entry body. First rule yielding non-empty trimmed content
/// wins: plain text, then concatenated rich-text parts, then placeholder.
/// An unreadable rich-text structure resolves to the placeholder directly.
fn resolve_body(entry: &JournalEntry) -> String {
    if let Some(text) = entry.text.as_deref() {
        let trimmed = text.trim();
        if !trimmed.is_empty() {
            return clean_body(trimmed);
        }
    }

    if let Some(raw) = entry.rich_text.as_deref() {
        match parse_rich_text(raw) {
            RichTextOutcome::Text(joined) => {
                let trimmed = joined.trim();
                if !trimmed.is_empty() {
                    return clean_body(trimmed);
                }
            }
            RichTextOutcome::Unreadable => return MISSING_CONTENT_PLACEHOLDER.to_string(),
        }
    }

    MISSING_CONTENT_PLACEHOLDER.to_string()
}

/// Removes a single literal backslash immediately preceding a period or
/// hyphen, an escaping artifact of the export format. No other
/// transformation is applied.
#[must_use]
pub fn clean_body(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(&next) = chars.peek() {
                if next == '.' || next == '-' {
                    continue;
                }
            }
        }
        out.push(c);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry_with_text(text: &str) -> JournalEntry {
        JournalEntry {
            text: Some(text.to_string()),
            ..JournalEntry::default()
        }
    }

    #[test]
    fn test_entry_count_is_preserved() {
        let entries = vec![
            entry_with_text("one"),
            JournalEntry::default(),
            entry_with_text("three"),
        ];
        assert_eq!(normalize_entries(&entries).len(), entries.len());
    }

    #[test]
    fn test_creation_date_preferred_over_modified() {
        let entry = JournalEntry {
            creation_date: Some("2023-05-01T14:03:09Z".to_string()),
            modified_date: Some("2024-01-01T00:00:00Z".to_string()),
            ..JournalEntry::default()
        };
        let record = &normalize_entries(std::slice::from_ref(&entry))[0];
        assert_eq!(
            record.instant,
            "2023-05-01T14:03:09Z".parse::<DateTime<Utc>>().unwrap()
        );
    }

    #[test]
    fn test_unparseable_creation_falls_back_to_modified() {
        let entry = JournalEntry {
            creation_date: Some("last tuesday".to_string()),
            modified_date: Some("2024-01-01T00:00:00Z".to_string()),
            ..JournalEntry::default()
        };
        let record = &normalize_entries(std::slice::from_ref(&entry))[0];
        assert_eq!(
            record.instant,
            "2024-01-01T00:00:00Z".parse::<DateTime<Utc>>().unwrap()
        );
    }

    #[test]
    fn test_missing_timestamps_resolve_to_epoch_sentinel() {
        let record = &normalize_entries(&[entry_with_text("undated")])[0];
        assert_eq!(record.instant, DateTime::UNIX_EPOCH);
    }

    #[test]
    fn test_plain_text_wins_over_rich_text() {
        let entry = JournalEntry {
            text: Some("plain".to_string()),
            rich_text: Some(r#"{"contents":[{"text":"rich"}]}"#.to_string()),
            ..JournalEntry::default()
        };
        let record = &normalize_entries(std::slice::from_ref(&entry))[0];
        assert_eq!(record.body, "plain");
    }

    #[test]
    fn test_whitespace_text_falls_through_to_rich_text() {
        let entry = JournalEntry {
            text: Some("   ".to_string()),
            rich_text: Some(r#"{"contents":[{"text":"Hello"},{"text":" world"}]}"#.to_string()),
            ..JournalEntry::default()
        };
        let record = &normalize_entries(std::slice::from_ref(&entry))[0];
        assert_eq!(record.body, "Hello world");
    }

    #[test]
    fn test_unreadable_rich_text_yields_placeholder() {
        let entry = JournalEntry {
            text: Some(String::new()),
            rich_text: Some("not-json".to_string()),
            ..JournalEntry::default()
        };
        let record = &normalize_entries(std::slice::from_ref(&entry))[0];
        assert_eq!(record.body, MISSING_CONTENT_PLACEHOLDER);
    }

    #[test]
    fn test_empty_entry_yields_placeholder() {
        let record = &normalize_entries(&[JournalEntry::default()])[0];
        assert_eq!(record.body, MISSING_CONTENT_PLACEHOLDER);
    }

    #[test]
    fn test_clean_body_unescapes_periods_and_hyphens() {
        assert_eq!(clean_body(r"A sentence\. And a dash\- here"), "A sentence. And a dash- here");
    }

    #[test]
    fn test_clean_body_leaves_other_escapes_alone() {
        assert_eq!(clean_body(r"keep \n and \\ as-is"), r"keep \n and \\ as-is");
    }

    #[test]
    fn test_clean_body_is_idempotent() {
        let once = clean_body(r"escaped\. text with list item\- end");
        let twice = clean_body(&once);
        assert_eq!(once, twice);
    }
}
