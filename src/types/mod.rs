pub mod identifiers;
pub mod stats;

pub use identifiers::Fingerprint;
pub use stats::{DocumentStats, Scope};
