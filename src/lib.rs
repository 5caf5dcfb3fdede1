//! Word count, character count and read-time statistics for editor status bars.
//!
//! `statbar-core` turns the text of the focused document, or of the active
//! selection, into a markdown-aware word count, character counts and an `M:SS`
//! reading-time estimate. Results are memoized per scope behind a cheap
//! content fingerprint so that refreshing on every keystroke stays inexpensive.
//!
//! The crate is synchronous and holds no global state. A host integration owns
//! a [`StatsCache`] (or a [`StatsService`], which adds settings, status-bar
//! formatting and debouncing) and pulls fresh statistics by passing in an
//! [`EditorContext`] whenever it decides to refresh.

pub mod cache;
pub mod document;
pub mod presentation;
pub mod service;
pub mod settings;
pub mod text;
pub mod types;

pub use cache::{CacheConfig, FingerprintStrategy, StatsCache};
pub use document::{CursorPosition, EditorContext};
pub use service::StatsService;
pub use settings::{SettingsError, StatsSettings, WordsPerMinute};
pub use text::{count_words, estimate_read_time};
pub use types::{DocumentStats, Scope};
