//! Infrastructure layer - external adapters (archive, filesystem).
//!
//! This layer handles all I/O against real containers.

pub mod zip_source;

pub use zip_source::ZipSource;
