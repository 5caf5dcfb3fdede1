// Single-entry memo:
// one fingerprint, one stats value
// overwrite only, no history, no eviction

use crate::settings::WordsPerMinute;
use crate::types::{DocumentStats, Fingerprint};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotEntry {
    pub fingerprint: Fingerprint,
    /// Rate the read time in `stats` was estimated with.
    pub words_per_minute: WordsPerMinute,
    pub stats: DocumentStats,
}

#[derive(Debug, Clone, Default)]
pub struct CacheSlot {
    entry: Option<SlotEntry>,
}

impl CacheSlot {
    /// The stored entry, if its fingerprint matches.
    pub fn lookup(&self, fingerprint: &Fingerprint) -> Option<&SlotEntry> {
        self.entry
            .as_ref()
            .filter(|entry| &entry.fingerprint == fingerprint)
    }

    pub fn store(&mut self, entry: SlotEntry) {
        self.entry = Some(entry);
    }

    pub fn entry(&self) -> Option<&SlotEntry> {
        self.entry.as_ref()
    }

    pub fn last_fingerprint(&self) -> Option<&Fingerprint> {
        self.entry.as_ref().map(|entry| &entry.fingerprint)
    }

    pub fn last_stats(&self) -> Option<&DocumentStats> {
        self.entry.as_ref().map(|entry| &entry.stats)
    }

    pub fn is_empty(&self) -> bool {
        self.entry.is_none()
    }

    pub fn clear(&mut self) {
        self.entry = None;
    }
}
