#![allow(dead_code)]

use std::cell::Cell;

use statbar_core::text::{count_words, WordCounter};
use statbar_core::WordsPerMinute;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn wpm(value: u32) -> WordsPerMinute {
    WordsPerMinute::new(value).unwrap()
}

/// Markdown counter that records how often it was asked to count.
#[derive(Debug, Default)]
pub struct CountingCounter {
    calls: Cell<usize>,
}

impl CountingCounter {
    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl WordCounter for CountingCounter {
    fn count_words(&self, text: &str) -> usize {
        self.calls.set(self.calls.get() + 1);
        count_words(text)
    }
}
