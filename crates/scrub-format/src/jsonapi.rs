//! JSON:API `errors[]` shape

use crate::{ErrorView, Formatter, status_title};
use serde_json::{Value, json};

pub struct JsonApiFormatter;

impl Formatter for JsonApiFormatter {
    fn content_type(&self) -> &'static str {
        "application/vnd.api+json"
    }

    fn format(&self, view: &ErrorView<'_>, status: u16, include_trace: bool) -> Value {
        // JSON:API error members are strings, including status and code.
        let mut error = json!({
            "status": status.to_string(),
            "title": status_title(status),
            "detail": view.message,
        });

        if let Some(id) = view.error_id {
            error["id"] = json!(id);
        }
        if view.code != 0 {
            error["code"] = json!(view.code.to_string());
        }
        if let Some(trace) = view.trace_value(include_trace) {
            error["meta"] = json!({ "trace": trace });
        }

        json!({ "errors": [error] })
    }
}
