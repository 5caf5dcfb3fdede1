use crate::text::normalize::normalize;

pub trait WordCounter {
    fn count_words(&self, text: &str) -> usize;
}

/// v0: markdown-aware prose word count.
///
/// Code is dropped, link syntax is reduced to its visible text, markup markers
/// are deleted and sentence punctuation is treated as a separator. Any other
/// run of non-whitespace characters counts as one word, so `"!@#$%^&*()"` is a
/// single word.
#[derive(Debug, Default, Clone, Copy)]
pub struct MarkdownWordCounter;

impl WordCounter for MarkdownWordCounter {
    fn count_words(&self, text: &str) -> usize {
        log::trace!("raw input text: {text:?}");

        let cleaned = normalize(text);
        log::trace!("after cleaning: {cleaned:?}");

        let count = if cleaned.is_empty() {
            0
        } else {
            cleaned.split(' ').filter(|word| !word.is_empty()).count()
        };

        log::debug!("word count: {count}");
        count
    }
}
