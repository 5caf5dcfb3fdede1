use serde::{Deserialize, Serialize};

use crate::text::normalize::is_space;
use crate::types::Scope;

/// A cursor location as reported by the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CursorPosition {
    pub line: u32,
    pub ch: u32,
}

impl CursorPosition {
    pub fn new(line: u32, ch: u32) -> Self {
        Self { line, ch }
    }
}

/// Snapshot of the focused editor taken on every change notification.
///
/// The text the statistics describe is always [`EditorContext::current_text`]:
/// the selection when one is active, the full document otherwise. Character
/// counts are computed from that same text when the snapshot is built, so they
/// can never describe a different string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorContext {
    has_active_view: bool,
    has_selection: bool,
    is_selection: bool,
    selected_text: String,
    full_text: String,
    char_count: usize,
    char_no_spaces: usize,
}

impl EditorContext {
    /// No editable document is focused.
    pub fn inactive() -> Self {
        Self {
            has_active_view: false,
            has_selection: false,
            is_selection: false,
            selected_text: String::new(),
            full_text: String::new(),
            char_count: 0,
            char_no_spaces: 0,
        }
    }

    /// An active view with the cursor collapsed.
    pub fn document(full_text: impl Into<String>) -> Self {
        Self::build(full_text.into(), false, String::new())
    }

    /// Builds a snapshot from the raw editor state.
    ///
    /// A selection exists when `from` and `to` differ. The selected text is
    /// only retained in that case, and the snapshot is only selection-scoped
    /// when that text is non-empty.
    pub fn from_view(
        full_text: impl Into<String>,
        from: CursorPosition,
        to: CursorPosition,
        selected_text: impl Into<String>,
    ) -> Self {
        let has_selection = from != to;
        let selected_text = if has_selection {
            selected_text.into()
        } else {
            String::new()
        };
        Self::build(full_text.into(), has_selection, selected_text)
    }

    /// The same view evaluated at document scope.
    pub fn without_selection(&self) -> Self {
        if !self.has_active_view {
            return Self::inactive();
        }
        Self::document(self.full_text.clone())
    }

    fn build(full_text: String, has_selection: bool, selected_text: String) -> Self {
        let is_selection = has_selection && !selected_text.is_empty();
        let current = if is_selection { &selected_text } else { &full_text };

        let char_count = current.chars().count();
        let char_no_spaces = current.chars().filter(|c| !is_space(*c)).count();

        Self {
            has_active_view: true,
            has_selection,
            is_selection,
            selected_text,
            full_text,
            char_count,
            char_no_spaces,
        }
    }

    pub fn has_active_view(&self) -> bool {
        self.has_active_view
    }

    pub fn has_selection(&self) -> bool {
        self.has_selection
    }

    pub fn is_selection(&self) -> bool {
        self.is_selection
    }

    pub fn selected_text(&self) -> &str {
        &self.selected_text
    }

    pub fn full_text(&self) -> &str {
        &self.full_text
    }

    pub fn current_text(&self) -> &str {
        if self.is_selection {
            &self.selected_text
        } else {
            &self.full_text
        }
    }

    pub fn char_count(&self) -> usize {
        self.char_count
    }

    pub fn char_no_spaces(&self) -> usize {
        self.char_no_spaces
    }

    pub fn scope(&self) -> Scope {
        Scope::from_is_selection(self.is_selection)
    }
}

impl Default for EditorContext {
    fn default() -> Self {
        Self::inactive()
    }
}
