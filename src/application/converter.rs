//! Conversion orchestration.
//!
//! Drives the full pipeline for one input file: suffix dispatch, source
//! location, document parse, normalization, and rendering. Owns the
//! ordering of the error taxonomy; every error here is terminal for the
//! attempt.

use std::ffi::OsStr;
use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};

use crate::domain::{
    AppError, ConversionSession, ConversionSummary, NormalizedRecord, Result,
};
use crate::infrastructure::ZipSource;

use super::locator::locate_document;
use super::normalizer::normalize_entries;
use super::parser::parse_document;
use super::renderer::render_document;

/// Application name used in generated output filenames.
pub const APP_NAME: &str = "journal-export-handler";

/// How an input file is to be read, decided from its filename suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SourceKind {
    /// Bare document, parsed directly.
    Document,
    /// Archive, passed through the source locator first.
    Archive,
}

/// A completed conversion: the output document plus reporting data.
#[derive(Debug, Clone)]
pub struct Conversion {
    /// The rendered output document.
    pub output: String,
    /// Entry count and first/last instants.
    pub summary: ConversionSummary,
    /// The normalized records in rendered (chronological) order.
    pub records: Vec<NormalizedRecord>,
}

/// Converts one export file into the output document.
///
/// # Errors
/// Returns the first terminal error encountered: `UnsupportedFileType`,
/// `DocumentNotFound`, `MalformedDocument`, `EmptyEntryList`,
/// `EmptyRenderedOutput`, or an archive/IO failure.
pub fn convert_file(path: &Path) -> Result<Conversion> {
    let text = load_source_text(path)?;
    convert_text(&text)
}

/// Converts already-loaded document text. Shared by both input paths.
///
/// # Errors
/// Returns `MalformedDocument`, `EmptyEntryList`, or `EmptyRenderedOutput`.
pub fn convert_text(text: &str) -> Result<Conversion> {
    let document = parse_document(text)?;

    if document.entries.is_empty() {
        return Err(AppError::EmptyEntryList);
    }

    tracing::info!("Converting {} entries", document.entries.len());

    let mut records = normalize_entries(&document.entries);
    let output = render_document(&mut records);

    if output.trim().is_empty() {
        return Err(AppError::EmptyRenderedOutput);
    }

    let summary = ConversionSummary {
        entry_count: records.len(),
        first: records.first().map_or(DateTime::UNIX_EPOCH, |r| r.instant),
        last: records.last().map_or(DateTime::UNIX_EPOCH, |r| r.instant),
    };

    Ok(Conversion {
        output,
        summary,
        records,
    })
}

/// Runs a conversion against a session, recording status transitions and
/// replacing or clearing the stored output.
///
/// # Errors
/// Propagates the error from `convert_file` after recording it.
pub fn run_conversion(session: &mut ConversionSession, path: &Path) -> Result<Conversion> {
    session.begin();

    match convert_file(path) {
        Ok(conversion) => {
            session.complete(conversion.output.clone(), conversion.summary.clone());
            Ok(conversion)
        }
        Err(e) => {
            session.fail(e.to_string());
            Err(e)
        }
    }
}

/// Generated output filename: `<app-name>-<yyyy-mm-dd>.md`, UTC date of
/// conversion time.
#[must_use]
pub fn suggested_filename(now: DateTime<Utc>) -> String {
    format!("{APP_NAME}-{}.md", now.format("%Y-%m-%d"))
}

/// Reads the document text for the given input, dispatching on suffix.
fn load_source_text(path: &Path) -> Result<String> {
    match source_kind(path)? {
        SourceKind::Document => fs::read_to_string(path)
            .map_err(|e| AppError::io(format!("Failed to read {}", path.display()), e)),
        SourceKind::Archive => {
            let mut source = ZipSource::open(path)?;
            locate_document(&mut source)
        }
    }
}

/// Decides the input kind from the filename suffix, case-insensitively,
/// before any read is attempted.
fn source_kind(path: &Path) -> Result<SourceKind> {
    let extension = path
        .extension()
        .and_then(OsStr::to_str)
        .map(str::to_lowercase);

    match extension.as_deref() {
        Some("json") => Ok(SourceKind::Document),
        Some("zip") => Ok(SourceKind::Archive),
        other => Err(AppError::UnsupportedFileType {
            extension: other.unwrap_or_default().to_string(),
        }),
    }
}
