//! Call-stack frame models

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One raw call-stack frame as received from a diagnostic source.
///
/// Fields are loosely typed on purpose: frames arrive from deserialized
/// diagnostic payloads and may carry missing or wrong-typed values. The
/// redactor is responsible for defaulting them, not this model.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawFrame {
    #[serde(default)]
    pub file: Value,
    #[serde(default)]
    pub line: Value,
    #[serde(default)]
    pub scope: Value,
    #[serde(default)]
    pub operation: Value,
    /// Call arguments. Accepted so arbitrary frame payloads deserialize,
    /// never read by the redactor and never emitted downstream.
    #[serde(default)]
    pub arguments: Value,
}

impl RawFrame {
    pub fn at(file: impl Into<String>, line: u32) -> Self {
        Self {
            file: Value::String(file.into()),
            line: Value::from(line),
            ..Self::default()
        }
    }

    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = Value::String(scope.into());
        self
    }

    pub fn with_operation(mut self, operation: impl Into<String>) -> Self {
        self.operation = Value::String(operation.into());
        self
    }

    pub fn with_arguments(mut self, arguments: Value) -> Self {
        self.arguments = arguments;
        self
    }
}

/// A frame safe to expose externally.
///
/// There is no arguments field: call arguments are the highest-risk frame
/// data and the output type cannot carry them at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedactedFrame {
    pub file: String,
    pub line: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_raw_frame_builder() {
        let frame = RawFrame::at("/app/src/db.rs", 42)
            .with_scope("db::Pool")
            .with_operation("connect")
            .with_arguments(json!(["mysql://root:hunter2@db/prod"]));

        assert_eq!(frame.file, json!("/app/src/db.rs"));
        assert_eq!(frame.line, json!(42));
        assert_eq!(frame.scope, json!("db::Pool"));
        assert_eq!(frame.operation, json!("connect"));
        assert!(frame.arguments.is_array());
    }

    #[test]
    fn test_raw_frame_deserializes_partial_payload() {
        let frame: RawFrame = serde_json::from_value(json!({
            "file": 123,
            "line": "x",
        }))
        .unwrap();

        assert_eq!(frame.file, json!(123));
        assert_eq!(frame.line, json!("x"));
        assert!(frame.scope.is_null());
        assert!(frame.arguments.is_null());
    }

    #[test]
    fn test_redacted_frame_serializes_without_absent_fields() {
        let frame = RedactedFrame {
            file: "unknown".to_string(),
            line: 0,
            scope: None,
            operation: None,
        };

        let value = serde_json::to_value(&frame).unwrap();
        assert_eq!(value, json!({"file": "unknown", "line": 0}));
    }
}
