//! Advisory context enrichment
//!
//! Enrichment attaches diagnostic metadata to the context store. It is
//! never load-bearing for sanitization correctness: every failure is
//! absorbed at its own call site so one broken callback or store write
//! cannot block the others, let alone the sanitization result.

use scrub_core::ContextStore;
use serde_json::{Value, json};

/// Fixed context key the error's category tags are recorded under.
pub const TAGS_CONTEXT_KEY: &str = "error_tags";

/// A named zero-argument enrichment callback. `Ok(None)` means nothing to
/// record; `Err` is discarded at the call site.
pub type ContextCallback = Box<dyn Fn() -> anyhow::Result<Option<Value>> + Send + Sync>;

/// Run every callback (in registration order), then record the error's
/// tags, writing each produced value to the store under the callback name.
pub fn enrich(
    store: &dyn ContextStore,
    callbacks: &[(String, ContextCallback)],
    tags: Option<&Vec<String>>,
) {
    for (name, callback) in callbacks {
        match callback() {
            Ok(Some(value)) => {
                if let Err(err) = store.add(name, value) {
                    tracing::debug!(callback = %name, error = %err, "context store rejected enrichment value");
                }
            }
            Ok(None) => {}
            Err(err) => {
                tracing::debug!(callback = %name, error = %err, "context callback failed");
            }
        }
    }

    if let Some(tags) = tags.filter(|tags| !tags.is_empty())
        && let Err(err) = store.add(TAGS_CONTEXT_KEY, json!(tags))
    {
        tracing::debug!(error = %err, "context store rejected error tags");
    }
}
