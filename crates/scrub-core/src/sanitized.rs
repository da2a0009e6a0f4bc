//! Sanitization outcome models

use crate::{RedactedFrame, Reportable};

/// The policy's output for one sanitized error.
///
/// Constructed once per sanitize call and never mutated afterwards. The
/// wrapped original is retained for internal logging only and is never
/// serialized externally.
#[derive(Debug)]
pub struct SanitizedError {
    pub message: String,
    pub code: i64,
    pub error_id: Option<String>,
    pub redacted_trace: Vec<RedactedFrame>,
    pub original: Box<dyn Reportable>,
}

/// What the policy decided for one error.
#[derive(Debug)]
pub enum Outcome {
    /// Sanitization applied; the record wraps the raw error as `original`.
    Sanitized(SanitizedError),
    /// Policy declined; the raw error passes through unchanged.
    Untouched(Box<dyn Reportable>),
}

impl Outcome {
    pub fn was_sanitized(&self) -> bool {
        matches!(self, Outcome::Sanitized(_))
    }

    pub fn message(&self) -> &str {
        match self {
            Outcome::Sanitized(s) => &s.message,
            Outcome::Untouched(e) => e.message(),
        }
    }

    pub fn code(&self) -> i64 {
        match self {
            Outcome::Sanitized(s) => s.code,
            Outcome::Untouched(e) => e.code(),
        }
    }

    pub fn error_id(&self) -> Option<&str> {
        match self {
            Outcome::Sanitized(s) => s.error_id.as_deref(),
            Outcome::Untouched(_) => None,
        }
    }

    /// Redacted frames, empty for an untouched outcome (raw frames are
    /// never exposed through this accessor).
    pub fn trace(&self) -> &[RedactedFrame] {
        match self {
            Outcome::Sanitized(s) => &s.redacted_trace,
            Outcome::Untouched(_) => &[],
        }
    }

    /// Recover ownership of the raw error.
    pub fn into_original(self) -> Box<dyn Reportable> {
        match self {
            Outcome::Sanitized(s) => s.original,
            Outcome::Untouched(e) => e,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Report;

    #[test]
    fn test_untouched_outcome_accessors() {
        let outcome = Outcome::Untouched(Box::new(
            Report::new("Plain", "nothing sensitive").with_code(7),
        ));

        assert!(!outcome.was_sanitized());
        assert_eq!(outcome.message(), "nothing sensitive");
        assert_eq!(outcome.code(), 7);
        assert_eq!(outcome.error_id(), None);
        assert!(outcome.trace().is_empty());
    }

    #[test]
    fn test_sanitized_outcome_accessors() {
        let original = Box::new(Report::new("DbError", "password=x").with_code(2002));
        let outcome = Outcome::Sanitized(SanitizedError {
            message: "[REDACTED]".to_string(),
            code: 2002,
            error_id: Some("abc-123".to_string()),
            redacted_trace: vec![RedactedFrame {
                file: "unknown".to_string(),
                line: 0,
                scope: None,
                operation: None,
            }],
            original,
        });

        assert!(outcome.was_sanitized());
        assert_eq!(outcome.message(), "[REDACTED]");
        assert_eq!(outcome.code(), 2002);
        assert_eq!(outcome.error_id(), Some("abc-123"));
        assert_eq!(outcome.trace().len(), 1);
        assert_eq!(outcome.into_original().message(), "password=x");
    }
}
