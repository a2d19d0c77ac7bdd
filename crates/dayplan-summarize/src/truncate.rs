//! Length truncation on word boundaries

pub const ELLIPSIS: &str = "...";

/// Cut `text` to at most `max_length` characters, marker included.
///
/// Returns `None` when the text already fits. Otherwise the cut is moved
/// back to the last whitespace so no partial word is kept, and `...` is
/// appended. Without whitespace before the cut, the raw character boundary
/// is used. For `max_length` of 3 or less the marker is dropped and the
/// text is cut at `max_length` characters.
pub fn truncate_at_word(text: &str, max_length: usize) -> Option<String> {
    if text.chars().count() <= max_length {
        return None;
    }

    let marker_len = ELLIPSIS.chars().count();
    if max_length <= marker_len {
        return Some(text.chars().take(max_length).collect());
    }

    let budget = max_length - marker_len;
    let cut_at = text
        .char_indices()
        .nth(budget)
        .map(|(i, _)| i)
        .unwrap_or(text.len());
    let cut = &text[..cut_at];

    let word_complete = text[cut_at..]
        .chars()
        .next()
        .is_some_and(char::is_whitespace);

    let head = if word_complete {
        cut.trim_end()
    } else {
        match cut.rfind(char::is_whitespace) {
            Some(pos) => cut[..pos].trim_end(),
            None => cut,
        }
    };
    let head = if head.is_empty() { cut } else { head };

    Some(format!("{}{}", head, ELLIPSIS))
}
