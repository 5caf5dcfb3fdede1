use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::document::EditorContext;
use crate::presentation::status::group_thousands;
use crate::settings::WordsPerMinute;
use crate::types::{DocumentStats, Scope};

/// Everything the detailed statistics view shows for the current editor.
///
/// For a selection the whole-document numbers ride along in `full_document`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailedReport {
    pub scope: Scope,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_chars: Option<usize>,
    pub stats: DocumentStats,
    pub char_no_spaces: usize,
    pub words_per_minute: WordsPerMinute,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_document: Option<DocumentStats>,
}

impl DetailedReport {
    pub fn new(
        context: &EditorContext,
        stats: DocumentStats,
        words_per_minute: WordsPerMinute,
        full_document: Option<DocumentStats>,
    ) -> Self {
        let scope = context.scope();
        let selected_chars = scope
            .is_selection()
            .then(|| context.selected_text().chars().count());

        Self {
            scope,
            selected_chars,
            stats,
            char_no_spaces: context.char_no_spaces(),
            words_per_minute,
            full_document,
        }
    }

    /// Plain-text rendering, one fact per line.
    pub fn render_text(&self) -> String {
        let mut out = String::new();

        match self.selected_chars {
            Some(chars) => {
                out.push_str("Selection Statistics\n");
                let _ = writeln!(out, "Analyzing selected text ({} characters)", group_thousands(chars));
            }
            None => {
                out.push_str("Document Statistics\n");
                out.push_str("Analyzing entire document\n");
            }
        }

        let _ = writeln!(out, "Words: {}", group_thousands(self.stats.word_count));
        let _ = writeln!(out, "Characters: {}", group_thousands(self.stats.char_count));
        let _ = writeln!(out, "Characters (no spaces): {}", group_thousands(self.char_no_spaces));
        let _ = writeln!(out, "Estimated read time: {} minutes", self.stats.read_time);
        let _ = write!(out, "Based on {} words per minute", self.words_per_minute);

        if let Some(full) = &self.full_document {
            out.push_str("\n\nFull Document Statistics\n");
            let _ = writeln!(out, "Words: {}", group_thousands(full.word_count));
            let _ = writeln!(out, "Characters: {}", group_thousands(full.char_count));
            let _ = write!(out, "Estimated read time: {} minutes", full.read_time);
        }

        out
    }
}
