use std::fmt;
use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use super::SettingsError;

pub const DEFAULT_WORDS_PER_MINUTE: u32 = 200;

const DEFAULT_RATE: NonZeroU32 = match NonZeroU32::new(DEFAULT_WORDS_PER_MINUTE) {
    Some(rate) => rate,
    None => panic!("default reading speed must be positive"),
};

/// Reading speed. Always strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u32")]
pub struct WordsPerMinute(NonZeroU32);

impl WordsPerMinute {
    pub fn new(value: u32) -> Result<Self, SettingsError> {
        NonZeroU32::new(value)
            .map(WordsPerMinute)
            .ok_or(SettingsError::NonPositiveWordsPerMinute(0))
    }

    /// Parses user input such as `"250"`. Surrounding whitespace is ignored.
    pub fn parse(input: &str) -> Result<Self, SettingsError> {
        let trimmed = input.trim();
        let value: i64 = trimmed
            .parse()
            .map_err(|_| SettingsError::UnparsableWordsPerMinute(trimmed.to_string()))?;
        Self::try_from(value)
    }

    pub fn get(self) -> u32 {
        self.0.get()
    }
}

impl Default for WordsPerMinute {
    fn default() -> Self {
        WordsPerMinute(DEFAULT_RATE)
    }
}

impl TryFrom<i64> for WordsPerMinute {
    type Error = SettingsError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if value <= 0 {
            return Err(SettingsError::NonPositiveWordsPerMinute(value));
        }
        let value = u32::try_from(value).map_err(|_| SettingsError::WordsPerMinuteTooLarge(value))?;
        Self::new(value)
    }
}

impl From<WordsPerMinute> for u32 {
    fn from(value: WordsPerMinute) -> Self {
        value.get()
    }
}

impl fmt::Display for WordsPerMinute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
