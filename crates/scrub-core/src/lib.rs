//! Core domain models and contracts for scrub
//!
//! This crate contains:
//! - The raw-error collaborator contract (`Reportable`, `Report`)
//! - Call-stack frame models (`RawFrame`, `RedactedFrame`)
//! - The sanitization outcome (`SanitizedError`, `Outcome`)
//! - The context store contract (`ContextStore`, `MemoryContext`)

pub mod context;
pub mod error;
pub mod frame;
pub mod report;
pub mod sanitized;

pub use context::{ContextStore, MemoryContext};
pub use error::{Result, ScrubError};
pub use frame::{RawFrame, RedactedFrame};
pub use report::{Report, Reportable};
pub use sanitized::{Outcome, SanitizedError};
