//! Domain-level error types for journal-export-handler.
//!
//! All errors are typed with `thiserror` and provide meaningful context
//! without exposing internal details to end users.

use thiserror::Error;

/// Application-level errors. Every variant is terminal for the current
/// conversion attempt and is surfaced once at the top level.
#[derive(Error, Debug)]
pub enum AppError {
    /// Filename suffix is neither `.json` nor `.zip`; raised before any read.
    #[error("Unsupported file type: '{extension}'. Expected a .json or .zip export")]
    UnsupportedFileType { extension: String },

    /// The archive contains no stream matching the journal document name.
    #[error("No journal document found in the archive")]
    DocumentNotFound,

    /// Structured parse of the chosen source text failed.
    #[error("Malformed journal document: {message}")]
    MalformedDocument {
        message: String,
        #[source]
        source: Option<serde_json::Error>,
    },

    /// The parsed document has zero entries.
    #[error("The journal document contains no entries")]
    EmptyEntryList,

    /// Normalization and rendering produced only whitespace. Unreachable
    /// given the normalizer's placeholder fallback, checked anyway.
    #[error("Conversion produced an empty document")]
    EmptyRenderedOutput,

    /// Failed to open or read the archive container.
    #[error("Archive error: {message}")]
    Archive {
        message: String,
        #[source]
        source: Option<zip::result::ZipError>,
    },

    /// IO operation failed.
    #[error("IO error: {message}")]
    Io {
        message: String,
        #[source]
        source: Option<std::io::Error>,
    },
}

impl AppError {
    /// Create a malformed-document error from a serde error.
    pub fn malformed(err: serde_json::Error) -> Self {
        Self::MalformedDocument {
            message: err.to_string(),
            source: Some(err),
        }
    }

    /// Create an archive error from a zip error.
    pub fn archive(err: zip::result::ZipError) -> Self {
        Self::Archive {
            message: err.to_string(),
            source: Some(err),
        }
    }

    /// Create an IO error with context.
    pub fn io(message: impl Into<String>, err: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source: Some(err),
        }
    }
}

/// Result type alias using `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
