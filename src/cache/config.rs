use serde::{Deserialize, Serialize};

pub const DEFAULT_EDGE_CHARS: usize = 100;

/// How cache keys are derived from text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FingerprintStrategy {
    /// Length plus the first and last `edge_chars` characters. Constant cost,
    /// but an edit confined to the middle that keeps the length unchanged is
    /// not detected and the previous stats are served.
    Window { edge_chars: usize },
    /// SHA-256 of the full text. Exact, linear in the text length.
    ContentHash,
}

// The strategy is the whole cache identity:
// no expiry, no size bound
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheConfig {
    pub fingerprint: FingerprintStrategy,
}

impl CacheConfig {
    pub fn v0() -> Self {
        Self {
            fingerprint: FingerprintStrategy::Window {
                edge_chars: DEFAULT_EDGE_CHARS,
            },
        }
    }

    pub fn content_hash() -> Self {
        Self {
            fingerprint: FingerprintStrategy::ContentHash,
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self::v0()
    }
}
