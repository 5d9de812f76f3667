//! Bundled resources compiled into the binary.
//!
//! Games register `include_bytes!` blobs under string ids (e.g. `"/ship.png"`)
//! and look them up at init time instead of touching the filesystem.

use std::collections::HashMap;

/// Lookup table of embedded byte blobs keyed by id.
#[derive(Debug, Default, Clone)]
pub struct EmbeddedAssets {
    entries: HashMap<String, &'static [u8]>,
}

impl EmbeddedAssets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `bytes` under `id`, replacing any previous entry.
    pub fn with(mut self, id: impl Into<String>, bytes: &'static [u8]) -> Self {
        self.insert(id, bytes);
        self
    }

    pub fn insert(&mut self, id: impl Into<String>, bytes: &'static [u8]) {
        let id = id.into();
        if self.entries.insert(id.clone(), bytes).is_some() {
            log::debug!("embedded asset '{id}' replaced");
        }
    }

    pub fn get(&self, id: &str) -> Option<&'static [u8]> {
        self.entries.get(id).copied()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
