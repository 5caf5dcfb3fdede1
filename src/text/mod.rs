pub mod counter;
pub mod normalize;
pub mod read_time;

pub use counter::{MarkdownWordCounter, WordCounter};
pub use normalize::normalize;
pub use read_time::estimate_read_time;

/// Word count of `text` using the default markdown-aware counter.
pub fn count_words(text: &str) -> usize {
    MarkdownWordCounter.count_words(text)
}
