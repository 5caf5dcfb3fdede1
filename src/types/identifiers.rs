use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::cache::FingerprintStrategy;

/// Cache key summarizing a piece of text.
///
/// A fingerprint is NOT a content identity. The default window strategy is
/// lossy: two texts of equal byte length that share their leading and trailing
/// windows produce the same fingerprint even if their middles differ.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fingerprint(String);

impl Fingerprint {
    pub fn compute(text: &str, strategy: &FingerprintStrategy) -> Self {
        match strategy {
            FingerprintStrategy::Window { edge_chars } => Self::window(text, *edge_chars),
            FingerprintStrategy::ContentHash => Self::content_hash(text),
        }
    }

    /// `len(text)` followed by the first and last `edge_chars` characters.
    ///
    /// Texts shorter than the window contribute their whole content to both
    /// halves.
    pub fn window(text: &str, edge_chars: usize) -> Self {
        let head_end = text
            .char_indices()
            .nth(edge_chars)
            .map_or(text.len(), |(i, _)| i);

        let tail_start = if edge_chars == 0 {
            text.len()
        } else {
            text.char_indices()
                .rev()
                .nth(edge_chars - 1)
                .map_or(0, |(i, _)| i)
        };

        let head = &text[..head_end];
        let tail = &text[tail_start..];

        Fingerprint(format!("{}{head}{tail}", text.len()))
    }

    /// Full-content hash. Never collides in practice, costs a pass over the text.
    pub fn content_hash(text: &str) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(text.as_bytes());

        let hash = hasher.finalize();
        let hex = hex::encode(hash);

        Fingerprint(format!("sha256:{hex}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
