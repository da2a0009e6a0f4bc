//! Sanitization engine for scrub
//!
//! This crate contains:
//! - `Policy`: the sanitization decision tree
//! - `enrich`: advisory context enrichment
//! - `Manager`: the façade tying policy, logging and formatting together

pub mod enrich;
pub mod manager;
pub mod policy;

pub use enrich::{ContextCallback, TAGS_CONTEXT_KEY, enrich};
pub use manager::{LogSink, Manager, RequestInfo, ResponseOptions, TracingSink};
pub use policy::Policy;
