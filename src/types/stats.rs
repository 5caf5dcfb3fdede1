use std::fmt;

use serde::{Deserialize, Serialize};

/// Which text a set of statistics describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    Document,
    Selection,
}

impl Scope {
    pub fn from_is_selection(is_selection: bool) -> Self {
        if is_selection {
            Scope::Selection
        } else {
            Scope::Document
        }
    }

    pub fn is_selection(self) -> bool {
        matches!(self, Scope::Selection)
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::Document => f.write_str("document"),
            Scope::Selection => f.write_str("selection"),
        }
    }
}

/// Statistics for one piece of text.
///
/// Values are never mutated once handed out; a content change produces a new
/// value that replaces the old one in the cache.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentStats {
    pub word_count: usize,
    pub char_count: usize,
    /// `M:SS`
    pub read_time: String,
    pub is_selection: bool,
}

impl DocumentStats {
    /// Stats reported when no editable document is focused.
    pub fn empty() -> Self {
        Self {
            word_count: 0,
            char_count: 0,
            read_time: "0:00".to_string(),
            is_selection: false,
        }
    }

    pub fn scope(&self) -> Scope {
        Scope::from_is_selection(self.is_selection)
    }
}
