//! HAL `{message, status, _links, _embedded}` shape

use crate::{ErrorView, Formatter};
use serde_json::{Value, json};

pub struct HalFormatter;

impl Formatter for HalFormatter {
    fn content_type(&self) -> &'static str {
        "application/hal+json"
    }

    fn format(&self, view: &ErrorView<'_>, status: u16, include_trace: bool) -> Value {
        let self_href = view.urn().unwrap_or_else(|| "about:blank".to_string());
        let mut body = json!({
            "message": view.message,
            "status": status,
            "_links": { "self": { "href": self_href } },
        });

        if let Some(id) = view.error_id {
            body["error_id"] = json!(id);
        }
        if let Some(trace) = view.trace_value(include_trace) {
            body["_embedded"] = json!({ "trace": trace });
        }

        body
    }
}
