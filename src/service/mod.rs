pub mod debounce;

use std::borrow::Cow;
use std::time::Instant;

use chrono::{DateTime, Local};

use crate::cache::{CacheConfig, StatsCache};
use crate::document::EditorContext;
use crate::presentation::{last_saved_text, DetailedReport, StatusLine};
use crate::settings::StatsSettings;
use crate::text::{MarkdownWordCounter, WordCounter};
use crate::types::DocumentStats;
pub use debounce::{Debouncer, DEBOUNCE_MS};

/// Owns everything one editor integration needs between update cycles.
///
/// The host feeds it a fresh [`EditorContext`] whenever it decides to refresh;
/// the service never observes the editor on its own.
#[derive(Debug)]
pub struct StatsService<C = MarkdownWordCounter> {
    cache: StatsCache<C>,
    settings: StatsSettings,
    debouncer: Debouncer,
    last_saved: Option<DateTime<Local>>,
}

impl Default for StatsService<MarkdownWordCounter> {
    fn default() -> Self {
        Self::new(StatsSettings::default())
    }
}

impl StatsService<MarkdownWordCounter> {
    pub fn new(settings: StatsSettings) -> Self {
        Self::with_cache(StatsCache::new(CacheConfig::v0()), settings)
    }
}

impl<C: WordCounter> StatsService<C> {
    pub fn with_cache(cache: StatsCache<C>, settings: StatsSettings) -> Self {
        Self {
            cache,
            settings,
            debouncer: Debouncer::new(),
            last_saved: None,
        }
    }

    pub fn settings(&self) -> &StatsSettings {
        &self.settings
    }

    /// Replaces the settings. Cached word counts stay valid; a changed reading
    /// speed only re-estimates read times on the next lookup.
    pub fn update_settings(&mut self, settings: StatsSettings) {
        self.settings = settings;
    }

    pub fn cache(&self) -> &StatsCache<C> {
        &self.cache
    }

    pub fn debouncer(&self) -> &Debouncer {
        &self.debouncer
    }

    /// The context the statistics are computed for. With selection stats
    /// disabled a selection is reported at document scope.
    fn effective_context<'a>(&self, context: &'a EditorContext) -> Cow<'a, EditorContext> {
        if context.is_selection() && !self.settings.show_selection_stats {
            Cow::Owned(context.without_selection())
        } else {
            Cow::Borrowed(context)
        }
    }

    pub fn compute_stats(&mut self, context: &EditorContext) -> DocumentStats {
        let context = self.effective_context(context);
        self.cache.compute_stats(&context, self.settings.words_per_minute)
    }

    pub fn status_line(&mut self, context: &EditorContext) -> StatusLine {
        let context = self.effective_context(context);
        let stats = self.cache.compute_stats(&context, self.settings.words_per_minute);
        StatusLine::render(&self.settings, &context, &stats)
    }

    /// `None` when no document is focused.
    pub fn detailed_report(&mut self, context: &EditorContext) -> Option<DetailedReport> {
        if !context.has_active_view() {
            return None;
        }

        let rate = self.settings.words_per_minute;
        let stats = self.cache.compute_stats(context, rate);
        let full_document = context
            .is_selection()
            .then(|| self.cache.full_document_stats(context.full_text(), rate));

        Some(DetailedReport::new(context, stats, rate, full_document))
    }

    /// Records an edit. The refresh becomes due once the debounce window passes
    /// without another edit.
    pub fn schedule_refresh(&mut self, now: Instant) {
        self.debouncer.schedule_at(now);
    }

    /// True exactly once per quiet period. The caller then builds a context
    /// and asks for a [`StatsService::status_line`].
    pub fn take_due_refresh(&mut self, now: Instant) -> bool {
        if self.debouncer.should_execute_at(now) {
            self.debouncer.mark_executed();
            return true;
        }
        false
    }

    pub fn record_save(&mut self) {
        self.record_save_at(Local::now());
    }

    pub fn record_save_at(&mut self, saved_at: DateTime<Local>) {
        self.last_saved = Some(saved_at);
    }

    pub fn last_saved_text(&self) -> String {
        last_saved_text(&self.settings, self.last_saved.as_ref())
    }
}
