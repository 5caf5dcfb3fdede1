use serde::{Deserialize, Serialize};

use super::{SettingsError, WordsPerMinute};

/// Where the read-time label sits relative to the `M:SS` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelPosition {
    Before,
    #[default]
    After,
}

/// User preferences for the status bar.
///
/// Field names serialize in camelCase so a host can hand over its stored JSON
/// untouched. Every field is optional on input; missing keys take the default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StatsSettings {
    pub show_word_count: bool,
    pub show_char_count: bool,
    pub show_read_time: bool,
    pub show_last_saved_time: bool,
    pub word_label: String,
    pub char_label: String,
    pub read_time_label: String,
    pub read_time_label_position: LabelPosition,
    pub last_saved_time_label: String,
    pub separator_label: String,
    pub words_per_minute: WordsPerMinute,
    pub show_selection_stats: bool,
    pub selection_prefix: String,
}

impl Default for StatsSettings {
    fn default() -> Self {
        Self {
            show_word_count: true,
            show_char_count: true,
            show_read_time: false,
            show_last_saved_time: false,
            word_label: "Words:".into(),
            char_label: "Characters:".into(),
            read_time_label: "min read".into(),
            read_time_label_position: LabelPosition::After,
            last_saved_time_label: "Last saved:".into(),
            separator_label: "or".into(),
            words_per_minute: WordsPerMinute::default(),
            show_selection_stats: true,
            selection_prefix: "[SEL]".into(),
        }
    }
}

impl StatsSettings {
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Applies a words-per-minute value typed by the user.
    ///
    /// Invalid input leaves the current value in place.
    pub fn set_words_per_minute_input(&mut self, input: &str) -> Result<(), SettingsError> {
        let rate = WordsPerMinute::parse(input)?;
        log::debug!("words per minute changed: {} -> {}", self.words_per_minute, rate);
        self.words_per_minute = rate;
        Ok(())
    }
}
