use serde::{Deserialize, Serialize};

use crate::document::EditorContext;
use crate::settings::{LabelPosition, StatsSettings};
use crate::types::DocumentStats;

/// The two strings a status-bar item shows: its text and its hover tooltip.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StatusLine {
    pub text: String,
    pub tooltip: String,
}

impl StatusLine {
    pub fn render(settings: &StatsSettings, context: &EditorContext, stats: &DocumentStats) -> Self {
        if !context.has_active_view() {
            return Self::default();
        }

        let text = build_status_text(settings, context, stats);
        let tooltip = if text.trim().is_empty() {
            String::new()
        } else {
            build_tooltip(settings, context, stats)
        };

        Self { text, tooltip }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

pub fn build_status_text(
    settings: &StatsSettings,
    context: &EditorContext,
    stats: &DocumentStats,
) -> String {
    let mut parts = Vec::with_capacity(3);

    if settings.show_word_count {
        parts.push(format!("{} {}", settings.word_label, group_thousands(stats.word_count)));
    }
    if settings.show_char_count {
        parts.push(format!("{} {}", settings.char_label, group_thousands(stats.char_count)));
    }
    if settings.show_read_time {
        parts.push(match settings.read_time_label_position {
            LabelPosition::Before => format!("{} {}", settings.read_time_label, stats.read_time),
            LabelPosition::After => format!("{} {}", stats.read_time, settings.read_time_label),
        });
    }

    if parts.is_empty() {
        return String::new();
    }

    let separator = format!(" {} ", settings.separator_label);
    let text = parts.join(&separator);

    if context.is_selection() && settings.show_selection_stats {
        format!("{} {}", settings.selection_prefix, text)
    } else {
        text
    }
}

pub fn build_tooltip(settings: &StatsSettings, context: &EditorContext, stats: &DocumentStats) -> String {
    let (heading, scope_line) = if context.is_selection() && settings.show_selection_stats {
        let selected_chars = context.selected_text().chars().count();
        ("Selection Stats:", format!("Selected text ({selected_chars} chars)"))
    } else {
        ("Document Stats:", "Full document".to_string())
    };

    format!(
        "{heading}\n{scope_line}\nWords: {}\nCharacters: {} ({} no spaces)\nEstimated Read Time: {} minutes",
        group_thousands(stats.word_count),
        group_thousands(stats.char_count),
        group_thousands(context.char_no_spaces()),
        stats.read_time,
    )
}

/// `1234567` -> `"1,234,567"`
pub fn group_thousands(value: usize) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(digit);
    }

    out
}
