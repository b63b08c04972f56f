//! In-memory content store for tests and examples.

use std::collections::BTreeMap;

use anyhow::{Context, Result};

use super::ContentStore;

/// Content store backed by an in-memory map.
#[derive(Debug, Default)]
pub struct MemStore {
    entries: BTreeMap<String, Vec<u8>>,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a document under the given key, replacing any previous value.
    pub fn insert(&mut self, key: impl Into<String>, content: impl Into<Vec<u8>>) {
        self.entries.insert(key.into(), content.into());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ContentStore for MemStore {
    fn keys(&self) -> Result<Vec<String>> {
        Ok(self.entries.keys().cloned().collect())
    }

    fn read(&self, key: &str) -> Result<Vec<u8>> {
        self.entries
            .get(key)
            .cloned()
            .with_context(|| format!("No such key: `{key}`"))
    }
}
