use crate::cache::config::CacheConfig;
use crate::cache::slot::{CacheSlot, SlotEntry};
use crate::document::EditorContext;
use crate::settings::WordsPerMinute;
use crate::text::{estimate_read_time, MarkdownWordCounter, WordCounter};
use crate::types::{DocumentStats, Fingerprint, Scope};

/// Memoizes statistics per scope.
///
/// Document and selection results live in separate slots so switching between
/// the two views does not evict either one. Each slot remembers only the most
/// recent text it saw.
///
/// Single-threaded: every lookup takes `&mut self`.
#[derive(Debug)]
pub struct StatsCache<C = MarkdownWordCounter> {
    counter: C,
    config: CacheConfig,
    document: CacheSlot,
    selection: CacheSlot,
}

impl Default for StatsCache<MarkdownWordCounter> {
    fn default() -> Self {
        Self::new(CacheConfig::v0())
    }
}

impl StatsCache<MarkdownWordCounter> {
    pub fn new(config: CacheConfig) -> Self {
        Self::with_counter(MarkdownWordCounter, config)
    }
}

impl<C: WordCounter> StatsCache<C> {
    pub fn with_counter(counter: C, config: CacheConfig) -> Self {
        Self {
            counter,
            config,
            document: CacheSlot::default(),
            selection: CacheSlot::default(),
        }
    }

    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    pub fn counter(&self) -> &C {
        &self.counter
    }

    pub fn slot(&self, scope: Scope) -> &CacheSlot {
        match scope {
            Scope::Document => &self.document,
            Scope::Selection => &self.selection,
        }
    }

    fn slot_mut(&mut self, scope: Scope) -> &mut CacheSlot {
        match scope {
            Scope::Document => &mut self.document,
            Scope::Selection => &mut self.selection,
        }
    }

    /// Statistics for whatever the editor currently shows.
    ///
    /// Without an active view this returns [`DocumentStats::empty`] and leaves
    /// both slots untouched.
    pub fn compute_stats(
        &mut self,
        context: &EditorContext,
        words_per_minute: WordsPerMinute,
    ) -> DocumentStats {
        if !context.has_active_view() {
            return DocumentStats::empty();
        }

        self.get_or_compute(context.scope(), context.current_text(), words_per_minute)
    }

    /// Looks `text` up in the slot for `scope`.
    ///
    /// A fingerprint hit at the same reading speed returns the stored stats
    /// with no side effect. A hit at a different speed is a partial miss: the
    /// word count is reused, the read time is re-estimated and the slot is
    /// rewritten with the new rate. Anything else is counted and stored.
    pub fn get_or_compute(
        &mut self,
        scope: Scope,
        text: &str,
        words_per_minute: WordsPerMinute,
    ) -> DocumentStats {
        let fingerprint = Fingerprint::compute(text, &self.config.fingerprint);

        let cached = self
            .slot(scope)
            .lookup(&fingerprint)
            .map(|entry| (entry.words_per_minute, entry.stats.clone()));

        let stats = match cached {
            Some((rate, stats)) if rate == words_per_minute => {
                log::trace!("{scope} stats cache hit");
                return stats;
            }
            // Same text, new reading speed: the word count is still good.
            Some((_, stats)) => {
                log::trace!("{scope} stats cache hit, re-estimating read time at {words_per_minute} wpm");
                DocumentStats {
                    read_time: estimate_read_time(stats.word_count, words_per_minute),
                    ..stats
                }
            }
            None => {
                log::trace!("{scope} stats cache miss");
                self.measure(scope, text, words_per_minute)
            }
        };

        self.slot_mut(scope).store(SlotEntry {
            fingerprint,
            words_per_minute,
            stats: stats.clone(),
        });

        stats
    }

    /// Uncached whole-document statistics.
    pub fn full_document_stats(&self, text: &str, words_per_minute: WordsPerMinute) -> DocumentStats {
        self.measure(Scope::Document, text, words_per_minute)
    }

    pub fn clear(&mut self) {
        self.document.clear();
        self.selection.clear();
    }

    fn measure(&self, scope: Scope, text: &str, words_per_minute: WordsPerMinute) -> DocumentStats {
        let word_count = self.counter.count_words(text);

        DocumentStats {
            word_count,
            char_count: text.chars().count(),
            read_time: estimate_read_time(word_count, words_per_minute),
            is_selection: scope.is_selection(),
        }
    }
}
