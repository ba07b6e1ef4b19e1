//! Local persistent key-value storage.
//!
//! Stores write whole values under string keys; there is no incremental
//! append. [`crate::db::Database`] is the durable implementation and
//! [`MemoryStore`] backs tests and throwaway sessions.

pub mod envelope;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use anyhow::Result;

pub use envelope::{Decoded, EnvelopeError, ENVELOPE_VERSION};

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Insert or fully replace the value stored under `key`.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Returns `true` if a value was removed.
    fn remove(&self, key: &str) -> Result<bool>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<bool> {
        (**self).remove(key)
    }
}

/// In-memory store. Clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<MemoryInner>>,
}

#[derive(Debug, Default)]
struct MemoryInner {
    values: HashMap<String, String>,
    writes: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `set` calls so far.
    pub fn write_count(&self) -> usize {
        self.inner.lock().expect("memory store lock poisoned").writes
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let inner = self.inner.lock().expect("memory store lock poisoned");
        Ok(inner.values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut inner = self.inner.lock().expect("memory store lock poisoned");
        inner.values.insert(key.to_string(), value.to_string());
        inner.writes += 1;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<bool> {
        let mut inner = self.inner.lock().expect("memory store lock poisoned");
        Ok(inner.values.remove(key).is_some())
    }
}
