//! Pattern matching and trace redaction for scrub
//!
//! This crate contains:
//! - `PatternSet`: ordered, compiled redaction patterns with a shared
//!   replacement token
//! - `redact_frames`: pure call-stack frame redaction

pub mod patterns;
pub mod trace;

pub use patterns::{PatternSet, default_patterns};
pub use trace::redact_frames;
