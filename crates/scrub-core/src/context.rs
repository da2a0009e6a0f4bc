//! Context store contract

use anyhow::anyhow;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Mutex;

/// Additive key/value sink for enrichment data consumed by logging and
/// monitoring collaborators.
///
/// The engine only ever calls `add`; it never removes or overwrites keys it
/// did not write. Implementations own their concurrency discipline.
pub trait ContextStore: Send + Sync {
    fn add(&self, key: &str, value: Value) -> anyhow::Result<()>;
}

/// In-memory store backed by a mutex, suitable for tests and
/// single-process collectors.
#[derive(Debug, Default)]
pub struct MemoryContext {
    values: Mutex<HashMap<String, Value>>,
}

impl MemoryContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<Value> {
        self.values.lock().ok()?.get(key).cloned()
    }

    pub fn snapshot(&self) -> HashMap<String, Value> {
        self.values
            .lock()
            .map(|values| values.clone())
            .unwrap_or_default()
    }
}

impl ContextStore for MemoryContext {
    fn add(&self, key: &str, value: Value) -> anyhow::Result<()> {
        let mut values = self
            .values
            .lock()
            .map_err(|_| anyhow!("context store lock poisoned"))?;
        values.insert(key.to_string(), value);
        Ok(())
    }
}
