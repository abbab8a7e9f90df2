//! Entry Store - Capacity-bounded, newest-first log of mood entries
//!
//! Append-only from the caller's perspective: entries are never removed
//! individually, only evicted oldest-first once the store is over
//! capacity. Persistence happens one layer up, through the state store.

use serde::{Deserialize, Serialize};

use crate::domain::entities::MoodEntry;

/// Maximum number of retained entries
pub const ENTRY_CAPACITY: usize = 50;

/// Partial update applied to an existing entry by id
#[derive(Debug, Clone, Default)]
pub struct EntryPatch {
    /// Supportive content generated after classification
    pub content: Option<String>,
}

/// Newest-first log of mood entries, bounded at 50
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntryStore {
    entries: Vec<MoodEntry>,
    #[serde(skip, default = "default_capacity")]
    capacity: usize,
}

fn default_capacity() -> usize {
    ENTRY_CAPACITY
}

impl Default for EntryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl EntryStore {
    pub fn new() -> Self {
        Self::with_capacity(ENTRY_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            capacity,
        }
    }

    /// Prepend an entry and evict beyond capacity, oldest first
    pub fn append(&mut self, entry: MoodEntry) {
        self.entries.insert(0, entry);
        self.entries.truncate(self.capacity);
    }

    /// Apply a partial update to the entry with `id`; no-op when the id
    /// is absent (it may already have been evicted). Returns whether an
    /// entry was touched.
    pub fn patch(&mut self, id: &str, patch: EntryPatch) -> bool {
        let Some(entry) = self.entries.iter_mut().find(|e| e.id == id) else {
            return false;
        };
        if let Some(content) = patch.content {
            entry.content = Some(content);
        }
        true
    }

    /// All retained entries, newest first
    pub fn list(&self) -> &[MoodEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
