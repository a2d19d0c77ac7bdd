//! Sentence segmentation

use crate::types::Sentence;
use regex::Regex;
use std::sync::OnceLock;

static BOUNDARY_RE: OnceLock<Regex> = OnceLock::new();

/// Split text after any `.`, `!` or `?` that is followed by whitespace.
///
/// Terminal punctuation stays with its sentence. Fragments are trimmed and
/// empty ones dropped, so indices are dense over the returned sentences.
pub fn split_sentences(text: &str) -> Vec<Sentence<'_>> {
    let re = BOUNDARY_RE.get_or_init(|| Regex::new(r"[.!?]\s+").unwrap());

    let mut fragments = Vec::new();
    let mut start = 0;
    for m in re.find_iter(text) {
        // terminators are single-byte, so this is a char boundary
        let end = m.start() + 1;
        fragments.push(&text[start..end]);
        start = m.end();
    }
    fragments.push(&text[start..]);

    fragments
        .into_iter()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .enumerate()
        .map(|(index, text)| Sentence { text, index })
        .collect()
}
