//! Wire formatters for sanitized errors
//!
//! A formatter is a pure encoder from an error view to one response body
//! shape. Five reference shapes ship here (simple JSON, JSON:API, RFC 7807
//! problem details, HAL, Hydra); applications may register their own under
//! any name.

pub mod hal;
pub mod hydra;
pub mod jsonapi;
pub mod problem;
pub mod simple;

use scrub_core::{Outcome, RedactedFrame, Result, ScrubError};
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;

pub use hal::HalFormatter;
pub use hydra::HydraFormatter;
pub use jsonapi::JsonApiFormatter;
pub use problem::ProblemFormatter;
pub use simple::SimpleFormatter;

/// Borrowed flat view over an outcome, the only thing a formatter sees.
#[derive(Debug, Clone, Copy)]
pub struct ErrorView<'a> {
    pub message: &'a str,
    pub code: i64,
    pub error_id: Option<&'a str>,
    pub trace: &'a [RedactedFrame],
}

impl<'a> From<&'a Outcome> for ErrorView<'a> {
    fn from(outcome: &'a Outcome) -> Self {
        Self {
            message: outcome.message(),
            code: outcome.code(),
            error_id: outcome.error_id(),
            trace: outcome.trace(),
        }
    }
}

impl<'a> ErrorView<'a> {
    /// Trace body, present only when requested and non-empty.
    pub fn trace_value(&self, include_trace: bool) -> Option<Value> {
        if include_trace && !self.trace.is_empty() {
            serde_json::to_value(self.trace).ok()
        } else {
            None
        }
    }

    /// `urn:uuid:<id>` form used by formatters that need a URI identifier.
    pub fn urn(&self) -> Option<String> {
        self.error_id.map(|id| format!("urn:uuid:{id}"))
    }
}

/// Pure encoder from an error view to one response body shape.
pub trait Formatter: Send + Sync {
    fn content_type(&self) -> &'static str;

    fn format(&self, view: &ErrorView<'_>, status: u16, include_trace: bool) -> Value;
}

/// Final encoded response handed back to the host framework.
#[derive(Debug, Clone, Serialize)]
pub struct Response {
    pub status: u16,
    pub content_type: String,
    pub headers: Vec<(String, String)>,
    pub body: Value,
}

/// Reason-phrase lookup for the statuses error responses use.
pub fn status_title(status: u16) -> &'static str {
    match status {
        400 => "Bad Request",
        401 => "Unauthorized",
        403 => "Forbidden",
        404 => "Not Found",
        405 => "Method Not Allowed",
        409 => "Conflict",
        422 => "Unprocessable Entity",
        429 => "Too Many Requests",
        500 => "Internal Server Error",
        502 => "Bad Gateway",
        503 => "Service Unavailable",
        _ => "Error",
    }
}

/// Named formatter registry. Ships with the five reference formatters
/// registered; applications may add or shadow entries.
pub struct FormatterRegistry {
    formatters: HashMap<String, Box<dyn Formatter>>,
}

impl FormatterRegistry {
    /// Empty registry with no formatters at all.
    pub fn empty() -> Self {
        Self {
            formatters: HashMap::new(),
        }
    }

    pub fn with_defaults() -> Self {
        let mut registry = Self::empty();
        registry.register("simple", Box::new(SimpleFormatter));
        registry.register("jsonapi", Box::new(JsonApiFormatter));
        registry.register("problem", Box::new(ProblemFormatter));
        registry.register("hal", Box::new(HalFormatter));
        registry.register("hydra", Box::new(HydraFormatter));
        registry
    }

    pub fn register(&mut self, name: impl Into<String>, formatter: Box<dyn Formatter>) {
        self.formatters.insert(name.into(), formatter);
    }

    pub fn get(&self, name: &str) -> Result<&dyn Formatter> {
        self.formatters
            .get(name)
            .map(|formatter| formatter.as_ref())
            .ok_or_else(|| ScrubError::FormatterNotFound(name.to_string()))
    }
}

impl Default for FormatterRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_defaults() {
        let registry = FormatterRegistry::with_defaults();
        for name in ["simple", "jsonapi", "problem", "hal", "hydra"] {
            assert!(registry.get(name).is_ok(), "missing formatter {name}");
        }
    }

    #[test]
    fn test_registry_unknown_name() {
        let registry = FormatterRegistry::with_defaults();
        match registry.get("xml") {
            Err(ScrubError::FormatterNotFound(name)) => assert_eq!(name, "xml"),
            other => panic!("expected FormatterNotFound, got {:?}", other.err()),
        }
    }

    #[test]
    fn test_registry_custom_registration() {
        struct PlainText;
        impl Formatter for PlainText {
            fn content_type(&self) -> &'static str {
                "text/plain"
            }
            fn format(&self, view: &ErrorView<'_>, _status: u16, _include_trace: bool) -> Value {
                Value::String(view.message.to_string())
            }
        }

        let mut registry = FormatterRegistry::with_defaults();
        registry.register("plain", Box::new(PlainText));
        assert_eq!(registry.get("plain").unwrap().content_type(), "text/plain");
    }

    #[test]
    fn test_status_titles() {
        assert_eq!(status_title(404), "Not Found");
        assert_eq!(status_title(422), "Unprocessable Entity");
        assert_eq!(status_title(500), "Internal Server Error");
        assert_eq!(status_title(599), "Error");
    }
}
