//! Source document location inside an archive container.
//!
//! The archive is abstracted behind a capability trait so the locator can
//! be tested against an in-memory fake.

use crate::domain::{AppError, Result};

/// Filename suffix identifying the journal document inside an archive.
///
/// A suffix match (rather than exact-name) tolerates nested directory
/// paths. It also matches an unrelated `myjournal.json`; that ambiguity is
/// inherited from the export format and deliberately not disambiguated.
const TARGET_SUFFIX: &str = "journal.json";

/// Capability interface over an archive of named text streams.
pub trait ArchiveSource {
    /// Stream names in the container's enumeration order.
    fn entry_names(&self) -> &[String];

    /// Decoded text content of the named stream.
    ///
    /// # Errors
    /// Fails if the stream does not exist or cannot be decoded.
    fn read_text(&mut self, name: &str) -> Result<String>;
}

/// Finds and reads the journal document inside an archive.
///
/// Candidate streams are those whose name ends with the target filename,
/// case-insensitively. Among candidates the shortest full path wins,
/// favoring top-level matches over nested duplicates; equal-length names
/// resolve to enumeration order.
///
/// # Errors
/// Returns `DocumentNotFound` if no stream qualifies, or the underlying
/// read error for the selected stream.
pub fn locate_document<S: ArchiveSource>(source: &mut S) -> Result<String> {
    let selected = source
        .entry_names()
        .iter()
        .filter(|name| name.to_lowercase().ends_with(TARGET_SUFFIX))
        .min_by_key(|name| name.len())
        .cloned()
        .ok_or(AppError::DocumentNotFound)?;

    tracing::debug!("Selected source stream: {}", selected);

    source.read_text(&selected)
}
