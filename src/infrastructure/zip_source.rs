//! Zip archive adapter.
//!
//! Implements the `ArchiveSource` capability over a zip file on disk,
//! opened read-only. Enumeration order follows the archive's central
//! directory, which is stable across reads.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use zip::ZipArchive;

use crate::application::ArchiveSource;
use crate::domain::{AppError, Result};

/// Read-only zip container of named text streams.
pub struct ZipSource {
    archive: ZipArchive<File>,
    names: Vec<String>,
}

impl ZipSource {
    /// Opens an archive and indexes its stream names.
    ///
    /// # Errors
    /// Returns error if the file cannot be opened or is not a valid archive.
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .map_err(|e| AppError::io(format!("Failed to open {}", path.display()), e))?;
        let mut archive = ZipArchive::new(file).map_err(AppError::archive)?;

        let mut names = Vec::with_capacity(archive.len());
        for i in 0..archive.len() {
            let entry = archive.by_index(i).map_err(AppError::archive)?;
            names.push(entry.name().to_string());
        }

        tracing::debug!(
            "Opened archive {} with {} entries",
            path.display(),
            names.len()
        );

        Ok(Self { archive, names })
    }
}

impl ArchiveSource for ZipSource {
    fn entry_names(&self) -> &[String] {
        &self.names
    }

    fn read_text(&mut self, name: &str) -> Result<String> {
        let mut entry = self.archive.by_name(name).map_err(AppError::archive)?;

        let mut text = String::new();
        entry
            .read_to_string(&mut text)
            .map_err(|e| AppError::io(format!("Failed to decode stream '{name}'"), e))?;

        Ok(text)
    }
}
