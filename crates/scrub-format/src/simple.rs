//! Flat `{error, error_id?, trace?}` shape

use crate::{ErrorView, Formatter};
use serde_json::{Value, json};

pub struct SimpleFormatter;

impl Formatter for SimpleFormatter {
    fn content_type(&self) -> &'static str {
        "application/json"
    }

    fn format(&self, view: &ErrorView<'_>, _status: u16, include_trace: bool) -> Value {
        let mut body = json!({ "error": view.message });

        if let Some(id) = view.error_id {
            body["error_id"] = json!(id);
        }
        if let Some(trace) = view.trace_value(include_trace) {
            body["trace"] = trace;
        }

        body
    }
}
