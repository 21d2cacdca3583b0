//! In-memory comic cache
//!
//! Unbounded and never expires. The map is allocated on first access and
//! guarded by a reader/writer lock; locks are only held for the duration of
//! a single `get` or `put`.

use crate::comic::Comic;
use std::collections::HashMap;
use std::sync::{OnceLock, PoisonError, RwLock};

/// Thread-safe cache of comics keyed by id
#[derive(Debug, Default)]
pub struct ComicCache {
    entries: OnceLock<RwLock<HashMap<u64, Comic>>>,
}

impl ComicCache {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> &RwLock<HashMap<u64, Comic>> {
        self.entries.get_or_init(|| {
            log::debug!("Initializing comic cache");
            RwLock::new(HashMap::new())
        })
    }

    /// Get a copy of a cached comic
    pub fn get(&self, id: u64) -> Option<Comic> {
        // Entries are write-once, so a poisoned lock still holds valid data
        let entries = self.entries().read().unwrap_or_else(PoisonError::into_inner);
        entries.get(&id).cloned()
    }

    /// Store a comic, replacing any previous entry for the same id
    pub fn put(&self, id: u64, comic: Comic) {
        let mut entries = self
            .entries()
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        entries.insert(id, comic);
    }

    pub fn len(&self) -> usize {
        self.entries
            .get()
            .map(|entries| entries.read().unwrap_or_else(PoisonError::into_inner).len())
            .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
