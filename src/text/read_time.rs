use crate::settings::WordsPerMinute;

/// Estimated reading time as `M:SS`.
///
/// Rounding happens once, on the total number of seconds, so 333 words at
/// 200 wpm (99.9 s) reads as `1:40`.
pub fn estimate_read_time(word_count: usize, words_per_minute: WordsPerMinute) -> String {
    let minutes_exact = word_count as f64 / f64::from(words_per_minute.get());
    let total_seconds = (minutes_exact * 60.0).round() as u64;

    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;

    format!("{minutes}:{seconds:02}")
}
