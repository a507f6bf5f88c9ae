//! Presentation strings for conversion results.
//!
//! These are advisory status and listing strings consumed by the CLI,
//! not part of the data contract.

use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Table};

use crate::domain::{ConversionStatus, ConversionSummary, NormalizedRecord};

use super::renderer::format_instant;

/// Formats the success summary: entry count plus first and last entry
/// timestamps in the fixed UTC format.
#[must_use]
pub fn format_summary(summary: &ConversionSummary) -> String {
    format!(
        "{}\n  Entries: {}\n  First: {}\n  Last: {}",
        "📊 Conversion summary".bold(),
        summary.entry_count.to_string().cyan(),
        format_instant(summary.first).green(),
        format_instant(summary.last).green(),
    )
}

/// Formats one of the four session states as a status line.
#[must_use]
pub fn format_status(status: &ConversionStatus) -> String {
    match status {
        ConversionStatus::Idle => "Ready".dimmed().to_string(),
        ConversionStatus::Processing => "Processing...".yellow().to_string(),
        ConversionStatus::Success(summary) => format!(
            "{} Converted {} entries",
            "✓".green().bold(),
            summary.entry_count
        ),
        ConversionStatus::Failed(message) => {
            format!("{} {}", "✗".red().bold(), message)
        }
    }
}

/// Formats a table listing of normalized records.
#[must_use]
pub fn format_records_table(records: &[NormalizedRecord]) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["#", "Timestamp", "Preview"]);

    for (i, record) in records.iter().enumerate() {
        table.add_row(vec![
            (i + 1).to_string(),
            format_instant(record.instant),
            truncate(&record.body, 50),
        ]);
    }

    table.to_string()
}

/// Truncates a string to max length with ellipsis, first line only.
fn truncate(s: &str, max_len: usize) -> String {
    let s = s.lines().next().unwrap_or(s);
    if s.len() <= max_len {
        s.to_string()
    } else {
        format!("{}...", &s[..max_len - 3])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("hello world!", 8), "hello...");
        assert_eq!(truncate("first\nsecond", 20), "first");
    }

    #[test]
    fn test_summary_carries_fixed_format_timestamps() {
        let summary = ConversionSummary {
            entry_count: 3,
            first: "2023-05-01T14:03:09Z".parse().unwrap(),
            last: "2023-06-01T08:30:00Z".parse().unwrap(),
        };

        let rendered = format_summary(&summary);
        assert!(rendered.contains("2023-05-01 14-03-09"));
        assert!(rendered.contains("2023-06-01 08-30-00"));
    }

    #[test]
    fn test_records_table_lists_every_record() {
        let records = vec![
            NormalizedRecord {
                instant: DateTime::UNIX_EPOCH,
                body: "[No content]".to_string(),
            },
            NormalizedRecord {
                instant: "2023-05-01T14:03:09Z".parse().unwrap(),
                body: "a day".to_string(),
            },
        ];

        let table = format_records_table(&records);
        assert!(table.contains("1970-01-01 00-00-00"));
        assert!(table.contains("2023-05-01 14-03-09"));
        assert!(table.contains("a day"));
    }
}
