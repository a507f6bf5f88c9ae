//! Conversion session state.
//!
//! The single mutable "current output" and status live in an explicit
//! session value that is created, driven, and dropped within one CLI run.
//! There is no ambient global state.

use crate::domain::ConversionSummary;

/// Advisory status of the most recent conversion attempt.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConversionStatus {
    /// No conversion has been attempted yet.
    #[default]
    Idle,
    /// A conversion is in flight.
    Processing,
    /// The last conversion succeeded.
    Success(ConversionSummary),
    /// The last conversion failed with a human-readable message.
    Failed(String),
}

/// Holds the most recent output document and status.
///
/// The output is replaced wholesale on success and cleared on failure;
/// stale partial output is never retained.
#[derive(Debug, Clone, Default)]
pub struct ConversionSession {
    output: Option<String>,
    status: ConversionStatus,
}

impl ConversionSession {
    /// Create an idle session with no output.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a conversion as in flight, dropping any previous output.
    pub fn begin(&mut self) {
        self.output = None;
        self.status = ConversionStatus::Processing;
    }

    /// Record a successful conversion.
    pub fn complete(&mut self, output: String, summary: ConversionSummary) {
        self.output = Some(output);
        self.status = ConversionStatus::Success(summary);
    }

    /// Record a failed conversion, clearing any previous output.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.output = None;
        self.status = ConversionStatus::Failed(message.into());
    }

    /// The output of the last successful conversion, if any.
    #[must_use]
    pub fn output(&self) -> Option<&str> {
        self.output.as_deref()
    }

    /// The current status.
    #[must_use]
    pub const fn status(&self) -> &ConversionStatus {
        &self.status
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    fn summary() -> ConversionSummary {
        ConversionSummary {
            entry_count: 1,
            first: DateTime::UNIX_EPOCH,
            last: DateTime::UNIX_EPOCH,
        }
    }

    #[test]
    fn test_new_session_is_idle() {
        let session = ConversionSession::new();
        assert_eq!(*session.status(), ConversionStatus::Idle);
        assert!(session.output().is_none());
    }

    #[test]
    fn test_failure_clears_previous_output() {
        let mut session = ConversionSession::new();

        session.begin();
        session.complete("# doc".to_string(), summary());
        assert_eq!(session.output(), Some("# doc"));

        session.begin();
        assert!(session.output().is_none());
        session.fail("boom");

        assert!(session.output().is_none());
        assert_eq!(
            *session.status(),
            ConversionStatus::Failed("boom".to_string())
        );
    }
}
