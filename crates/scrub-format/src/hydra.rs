//! Hydra / JSON-LD error shape

use crate::{ErrorView, Formatter, status_title};
use serde_json::{Value, json};

pub struct HydraFormatter;

impl Formatter for HydraFormatter {
    fn content_type(&self) -> &'static str {
        "application/ld+json"
    }

    fn format(&self, view: &ErrorView<'_>, status: u16, include_trace: bool) -> Value {
        let mut body = json!({
            "@context": "http://www.w3.org/ns/hydra/context.jsonld",
            "@type": "hydra:Error",
            "hydra:title": status_title(status),
            "hydra:description": view.message,
        });

        if let Some(urn) = view.urn() {
            body["@id"] = json!(urn);
        }
        if let Some(trace) = view.trace_value(include_trace) {
            body["trace"] = trace;
        }

        body
    }
}
