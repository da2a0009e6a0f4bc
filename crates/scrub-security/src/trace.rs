//! Call-stack frame redaction

use crate::PatternSet;
use scrub_core::{RawFrame, RedactedFrame};

const UNKNOWN_FILE: &str = "unknown";

/// Redact a raw trace into frames safe for external exposure.
///
/// Pure function: frame order and count are preserved 1:1. Per frame:
/// - `file`: taken when string-typed, else the `"unknown"` sentinel; the
///   resulting value is pattern-scrubbed either way
/// - `line`: taken when a non-negative integer, else `0`
/// - `scope` / `operation`: passed through only when string-typed, omitted
///   otherwise
/// - arguments: never copied, under any configuration
pub fn redact_frames(frames: &[RawFrame], patterns: &PatternSet) -> Vec<RedactedFrame> {
    frames
        .iter()
        .map(|frame| RedactedFrame {
            file: patterns.scrub(frame.file.as_str().unwrap_or(UNKNOWN_FILE)),
            line: frame
                .line
                .as_u64()
                .and_then(|line| u32::try_from(line).ok())
                .unwrap_or(0),
            scope: frame.scope.as_str().map(str::to_string),
            operation: frame.operation.as_str().map(str::to_string),
        })
        .collect()
}
