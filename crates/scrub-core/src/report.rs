//! Raw-error collaborator contract

use crate::RawFrame;

/// The opaque raw-error value handed to the sanitization engine.
///
/// `kind` is a stable, caller-supplied label for the error's runtime type;
/// the policy dispatches on it (forced/never lists, generic messages, tags)
/// without any reflection.
pub trait Reportable: std::fmt::Debug + Send + Sync {
    fn kind(&self) -> &str;
    fn message(&self) -> &str;
    fn code(&self) -> i64;
    fn cause(&self) -> Option<&dyn Reportable>;
    fn frames(&self) -> &[RawFrame];

    /// Rebuild a value of the same kind carrying a replacement message and
    /// the original code and cause. Returns `None` when the error type does
    /// not support reconstruction; the manager surfaces that as a distinct
    /// rethrow failure rather than swallowing it.
    fn rebuild(&self, message: &str) -> Option<Box<dyn Reportable>> {
        let _ = message;
        None
    }
}

/// Concrete owned error report, the default `Reportable` implementation.
#[derive(Debug, Clone)]
pub struct Report {
    kind: String,
    message: String,
    code: i64,
    cause: Option<Box<Report>>,
    frames: Vec<RawFrame>,
}

impl Report {
    pub fn new(kind: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            message: message.into(),
            code: 0,
            cause: None,
            frames: Vec::new(),
        }
    }

    pub fn with_code(mut self, code: i64) -> Self {
        self.code = code;
        self
    }

    pub fn with_cause(mut self, cause: Report) -> Self {
        self.cause = Some(Box::new(cause));
        self
    }

    pub fn with_frames(mut self, frames: Vec<RawFrame>) -> Self {
        self.frames = frames;
        self
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Report {}

impl Reportable for Report {
    fn kind(&self) -> &str {
        &self.kind
    }

    fn message(&self) -> &str {
        &self.message
    }

    fn code(&self) -> i64 {
        self.code
    }

    fn cause(&self) -> Option<&dyn Reportable> {
        self.cause.as_deref().map(|c| c as &dyn Reportable)
    }

    fn frames(&self) -> &[RawFrame] {
        &self.frames
    }

    fn rebuild(&self, message: &str) -> Option<Box<dyn Reportable>> {
        let mut rebuilt = self.clone();
        rebuilt.message = message.to_string();
        Some(Box::new(rebuilt))
    }
}
