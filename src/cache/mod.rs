pub mod config;
pub mod slot;
pub mod stats_cache;

pub use config::{CacheConfig, FingerprintStrategy, DEFAULT_EDGE_CHARS};
pub use slot::{CacheSlot, SlotEntry};
pub use stats_cache::StatsCache;
