//! Application layer - use cases and orchestration.
//!
//! This layer contains the conversion pipeline: source location inside an
//! archive, entry normalization, document rendering, and the top-level
//! converter that sequences them.

pub mod converter;
pub mod formatter;
pub mod locator;
pub mod normalizer;
pub mod parser;
pub mod renderer;

pub use converter::{convert_file, run_conversion, suggested_filename, Conversion, APP_NAME};
pub use formatter::{format_records_table, format_status, format_summary};
pub use locator::{locate_document, ArchiveSource};
pub use normalizer::{clean_body, normalize_entries, MISSING_CONTENT_PLACEHOLDER};
pub use renderer::{format_instant, render_document, BLOCK_SEPARATOR};
