pub mod settings;
pub mod words_per_minute;

use thiserror::Error;

pub use settings::{LabelPosition, StatsSettings};
pub use words_per_minute::{WordsPerMinute, DEFAULT_WORDS_PER_MINUTE};

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Words per minute must be a whole number, got {0:?}")]
    UnparsableWordsPerMinute(String),
    #[error("Words per minute must be positive, got {0}")]
    NonPositiveWordsPerMinute(i64),
    #[error("Words per minute is too large: {0}")]
    WordsPerMinuteTooLarge(i64),
    #[error("Invalid settings JSON: {0}")]
    Json(#[from] serde_json::Error),
}
