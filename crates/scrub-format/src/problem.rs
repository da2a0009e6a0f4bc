//! RFC 7807 problem-details shape

use crate::{ErrorView, Formatter, status_title};
use serde_json::{Value, json};

pub struct ProblemFormatter;

impl Formatter for ProblemFormatter {
    fn content_type(&self) -> &'static str {
        "application/problem+json"
    }

    fn format(&self, view: &ErrorView<'_>, status: u16, include_trace: bool) -> Value {
        let mut body = json!({
            "type": "about:blank",
            "title": status_title(status),
            "status": status,
            "detail": view.message,
        });

        if let Some(urn) = view.urn() {
            body["instance"] = json!(urn);
        }
        if let Some(trace) = view.trace_value(include_trace) {
            body["trace"] = trace;
        }

        body
    }
}
