//! Markdown-aware cleaning applied before counting words.
//!
//! Each pass consumes the output of the previous one and the order matters:
//! fences are removed before inline code so a backtick pair inside a fence is
//! never matched on its own, and wiki links are unwrapped before markdown links
//! so `[[a]]` is not mistaken for a label.

use std::sync::OnceLock;

use regex::{Captures, Regex};

/// Compiles a literal pattern once and hands out the cached instance.
macro_rules! cached_regex {
    ($pattern:expr) => {{
        static RE: OnceLock<Regex> = OnceLock::new();
        RE.get_or_init(|| Regex::new($pattern).unwrap())
    }};
}

/// Whitespace as editors report it: the Unicode space separators, the ASCII
/// controls `\t \n \v \f \r`, line/paragraph separators and the byte order mark.
/// U+0085 is not included.
const SPACE_RUN: &str = r"[\t\n\x0B\x0C\r \xA0\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}]+";

/// Same set as the whitespace runs collapsed by [`normalize`].
pub(crate) fn is_space(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{0B}'
            | '\u{0C}'
            | '\r'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Runs every cleaning pass and returns prose separated by single spaces.
pub fn normalize(text: &str) -> String {
    let cleaned = strip_code_fences(text);
    let cleaned = strip_inline_code(&cleaned);
    let cleaned = unwrap_wiki_links(&cleaned);
    let cleaned = unwrap_markdown_links(&cleaned);
    let cleaned = strip_markup_markers(&cleaned);
    let cleaned = space_out_punctuation(&cleaned);
    collapse_whitespace(&cleaned)
}

/// Removes every ```` ``` ```` ... ```` ``` ```` span, delimiters included.
/// An opening fence with no closing fence is left untouched.
pub(crate) fn strip_code_fences(text: &str) -> String {
    cached_regex!(r"(?s)```.*?```").replace_all(text, "").into_owned()
}

/// Removes `` `code` `` spans, delimiters included.
pub(crate) fn strip_inline_code(text: &str) -> String {
    cached_regex!(r"`[^`]*`").replace_all(text, "").into_owned()
}

/// Replaces `[[inner]]` with the text a reader sees.
pub(crate) fn unwrap_wiki_links(text: &str) -> String {
    cached_regex!(r"\[\[([^\]]+)\]\]")
        .replace_all(text, |caps: &Captures| wiki_link_text(&caps[1]).to_string())
        .into_owned()
}

/// `Target|Display` keeps `Display`, falling back to `Target` when the alias
/// is empty. Plain `Target` is kept as is.
fn wiki_link_text(inner: &str) -> &str {
    match inner.split_once('|') {
        Some((_, display)) if !display.is_empty() => display,
        Some((target, _)) => target,
        None => inner,
    }
}

/// Replaces `[label](url)` with `label`. Both parts must be non-empty.
pub(crate) fn unwrap_markdown_links(text: &str) -> String {
    cached_regex!(r"\[([^\]]+)\]\([^)]+\)")
        .replace_all(text, "${1}")
        .into_owned()
}

/// Deletes `# * _ ~ >`. Words separated only by a marker are fused.
pub(crate) fn strip_markup_markers(text: &str) -> String {
    cached_regex!(r"[#*_~>]").replace_all(text, "").into_owned()
}

/// Turns `. , ! ? ; :` into spaces.
pub(crate) fn space_out_punctuation(text: &str) -> String {
    cached_regex!(r"[.,!?;:]").replace_all(text, " ").into_owned()
}

pub(crate) fn collapse_whitespace(text: &str) -> String {
    cached_regex!(SPACE_RUN)
        .replace_all(text, " ")
        .trim_matches(' ')
        .to_string()
}
