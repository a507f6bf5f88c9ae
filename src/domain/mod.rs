//! Domain layer - core business logic and types.
//!
//! This layer contains pure domain models, session state, and error types
//! without any external dependencies (archive, IO, etc.).

pub mod error;
pub mod models;
pub mod session;

pub use error::{AppError, Result};
pub use models::{
    ConversionSummary, JournalDocument, JournalEntry, NormalizedRecord, RichTextOutcome,
};
pub use session::{ConversionSession, ConversionStatus};
