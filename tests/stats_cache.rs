mod common;

use common::{init_logging, wpm, CountingCounter};
use statbar_core::cache::{CacheConfig, FingerprintStrategy, StatsCache};
use statbar_core::document::{CursorPosition, EditorContext};
use statbar_core::types::{DocumentStats, Fingerprint, Scope};

fn counting_cache(config: CacheConfig) -> StatsCache<CountingCounter> {
    init_logging();
    StatsCache::with_counter(CountingCounter::default(), config)
}

fn selection(full: &str, selected: &str) -> EditorContext {
    EditorContext::from_view(
        full,
        CursorPosition::new(0, 0),
        CursorPosition::new(0, selected.chars().count() as u32),
        selected,
    )
}

/// 100 chars of head, a 5-byte middle, 100 chars of tail.
fn windowed(middle: &str) -> String {
    assert_eq!(middle.len(), 5);
    format!("{}{}{}", "word ".repeat(20), middle, " word".repeat(20))
}

#[test]
fn identical_text_is_counted_once() {
    let mut cache = counting_cache(CacheConfig::v0());
    let context = EditorContext::document("Hello world this is a test");

    let first = cache.compute_stats(&context, wpm(200));
    let second = cache.compute_stats(&context, wpm(200));

    assert_eq!(first, second);
    assert_eq!(first.word_count, 6);
    assert_eq!(cache.counter().calls(), 1);
}

#[test]
fn length_change_recomputes() {
    let mut cache = counting_cache(CacheConfig::v0());

    cache.get_or_compute(Scope::Document, "one two", wpm(200));
    let stats = cache.get_or_compute(Scope::Document, "one two three", wpm(200));

    assert_eq!(stats.word_count, 3);
    assert_eq!(cache.counter().calls(), 2);
}

#[test]
fn edge_change_with_same_length_recomputes() {
    let mut cache = counting_cache(CacheConfig::v0());

    cache.get_or_compute(Scope::Document, "one two", wpm(200));
    let stats = cache.get_or_compute(Scope::Document, "one_two", wpm(200));

    assert_eq!(stats.word_count, 1);
    assert_eq!(cache.counter().calls(), 2);
}

#[test]
fn scopes_are_cached_independently() {
    let mut cache = counting_cache(CacheConfig::v0());
    let full = "alpha beta gamma delta";
    let document = EditorContext::document(full);
    let selected = selection(full, "alpha beta");

    let doc_stats = cache.compute_stats(&document, wpm(200));
    let sel_stats = cache.compute_stats(&selected, wpm(200));
    assert_eq!(cache.counter().calls(), 2);

    // Alternating between the views hits both slots.
    assert_eq!(cache.compute_stats(&document, wpm(200)), doc_stats);
    assert_eq!(cache.compute_stats(&selected, wpm(200)), sel_stats);
    assert_eq!(cache.counter().calls(), 2);

    assert_eq!(doc_stats.word_count, 4);
    assert!(!doc_stats.is_selection);
    assert_eq!(sel_stats.word_count, 2);
    assert!(sel_stats.is_selection);
}

#[test]
fn document_update_leaves_selection_slot_alone() {
    let mut cache = counting_cache(CacheConfig::v0());

    cache.get_or_compute(Scope::Selection, "picked words", wpm(200));
    let before = cache.slot(Scope::Selection).entry().cloned();

    cache.get_or_compute(Scope::Document, "a whole new document", wpm(200));
    cache.get_or_compute(Scope::Document, "another document", wpm(200));

    assert_eq!(cache.slot(Scope::Selection).entry().cloned(), before);
    assert_eq!(
        cache.slot(Scope::Document).last_stats().map(|s| s.word_count),
        Some(2)
    );
}

#[test]
fn slot_holds_only_the_latest_entry() {
    let mut cache = counting_cache(CacheConfig::v0());

    cache.get_or_compute(Scope::Document, "first", wpm(200));
    cache.get_or_compute(Scope::Document, "second text", wpm(200));
    cache.get_or_compute(Scope::Document, "first", wpm(200));

    assert_eq!(cache.counter().calls(), 3);
    assert_eq!(
        cache.slot(Scope::Document).last_fingerprint(),
        Some(&Fingerprint::window("first", 100))
    );
}

#[test]
fn inactive_context_yields_empty_stats_without_touching_slots() {
    let mut cache = counting_cache(CacheConfig::v0());

    let stats = cache.compute_stats(&EditorContext::inactive(), wpm(200));

    assert_eq!(stats, DocumentStats::empty());
    assert_eq!(stats.read_time, "0:00");
    assert!(cache.slot(Scope::Document).is_empty());
    assert!(cache.slot(Scope::Selection).is_empty());
    assert_eq!(cache.counter().calls(), 0);
}

#[test]
fn reading_speed_change_reuses_word_count() {
    let mut cache = counting_cache(CacheConfig::v0());
    let text = "word ".repeat(400);

    let slow = cache.get_or_compute(Scope::Document, &text, wpm(200));
    let fast = cache.get_or_compute(Scope::Document, &text, wpm(400));

    assert_eq!(slow.read_time, "2:00");
    assert_eq!(fast.read_time, "1:00");
    assert_eq!(fast.word_count, slow.word_count);
    assert_eq!(cache.counter().calls(), 1);
    assert_eq!(
        cache.slot(Scope::Document).entry().map(|e| e.words_per_minute),
        Some(wpm(400))
    );
}

#[test]
fn middle_edit_with_same_length_serves_stale_stats() {
    // Known limitation of the window fingerprint.
    let mut cache = counting_cache(CacheConfig::v0());
    let original = windowed("x y z");
    let edited = windowed("x_y_z");
    assert_eq!(original.len(), edited.len());

    let before = cache.get_or_compute(Scope::Document, &original, wpm(200));
    let after = cache.get_or_compute(Scope::Document, &edited, wpm(200));

    assert_eq!(before.word_count, 43);
    assert_eq!(after, before);
    assert_eq!(cache.counter().calls(), 1);
}

#[test]
fn content_hash_detects_middle_edits() {
    let mut cache = counting_cache(CacheConfig::content_hash());

    cache.get_or_compute(Scope::Document, &windowed("x y z"), wpm(200));
    let after = cache.get_or_compute(Scope::Document, &windowed("x_y_z"), wpm(200));

    assert_eq!(after.word_count, 41);
    assert_eq!(cache.counter().calls(), 2);
}

#[test]
fn wider_window_sees_further_into_the_text() {
    let mut cache = counting_cache(CacheConfig {
        fingerprint: FingerprintStrategy::Window { edge_chars: 110 },
    });

    cache.get_or_compute(Scope::Document, &windowed("x y z"), wpm(200));
    cache.get_or_compute(Scope::Document, &windowed("x_y_z"), wpm(200));

    assert_eq!(cache.counter().calls(), 2);
}

#[test]
fn clear_forces_recount() {
    let mut cache = counting_cache(CacheConfig::v0());

    cache.get_or_compute(Scope::Document, "some words", wpm(200));
    cache.clear();
    cache.get_or_compute(Scope::Document, "some words", wpm(200));

    assert_eq!(cache.counter().calls(), 2);
}

#[test]
fn full_document_stats_bypass_the_cache() {
    let mut cache = counting_cache(CacheConfig::v0());

    let a = cache.full_document_stats("one two three", wpm(200));
    let b = cache.full_document_stats("one two three", wpm(200));

    assert_eq!(a, b);
    assert_eq!(cache.counter().calls(), 2);
    assert!(cache.slot(Scope::Document).is_empty());

    cache.get_or_compute(Scope::Document, "x", wpm(200));
    assert_eq!(cache.counter().calls(), 3);
}

#[test]
fn char_count_describes_current_text() {
    let mut cache: StatsCache = StatsCache::default();
    let context = selection("full document text", "selected text here");

    let stats = cache.compute_stats(&context, wpm(200));

    assert_eq!(stats.word_count, 3);
    assert_eq!(stats.char_count, 18);
    assert_eq!(stats.char_count, context.char_count());
    assert!(stats.is_selection);
    assert_eq!(stats.scope(), Scope::Selection);
}

#[test]
fn window_fingerprint_layout() {
    assert_eq!(Fingerprint::window("abc", 100).as_str(), "3abcabc");
    assert_eq!(Fingerprint::window("", 100).as_str(), "0");

    let text = format!("{}{}{}", "h".repeat(100), "m".repeat(50), "t".repeat(100));
    let expected = format!("250{}{}", "h".repeat(100), "t".repeat(100));
    assert_eq!(Fingerprint::window(&text, 100).as_str(), expected);
}

#[test]
fn window_fingerprint_respects_char_boundaries() {
    let text = "é".repeat(150);
    let fp = Fingerprint::window(&text, 100);
    assert_eq!(fp.as_str(), format!("300{}{}", "é".repeat(100), "é".repeat(100)));
}

#[test]
fn content_hash_fingerprint_is_prefixed_sha256() {
    let fp = Fingerprint::content_hash("Hello world");
    assert!(fp.as_str().starts_with("sha256:"));
    assert_eq!(fp.as_str().len(), "sha256:".len() + 64);
    assert_eq!(fp, Fingerprint::content_hash("Hello world"));
    assert_ne!(fp, Fingerprint::content_hash("Hello world!"));
}

#[test]
fn cache_reports_its_fingerprint_strategy() {
    let cache: StatsCache = StatsCache::default();
    assert_eq!(cache.config(), &CacheConfig::v0());

    let cache = counting_cache(CacheConfig::content_hash());
    assert_eq!(cache.config().fingerprint, FingerprintStrategy::ContentHash);
}

#[test]
fn rate_change_rewrites_the_slot_and_later_hits_are_silent() {
    let mut cache = counting_cache(CacheConfig::v0());

    cache.get_or_compute(Scope::Document, "one two three", wpm(200));
    let rerated = cache.get_or_compute(Scope::Document, "one two three", wpm(100));
    let entry = cache.slot(Scope::Document).entry().cloned();

    assert_eq!(cache.get_or_compute(Scope::Document, "one two three", wpm(100)), rerated);
    assert_eq!(cache.slot(Scope::Document).entry().cloned(), entry);
    assert_eq!(cache.counter().calls(), 1);
}
