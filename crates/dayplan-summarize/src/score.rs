//! Heuristic sentence scoring

/// Words that mark conclusion, causal or recommendation language
pub const KEYWORDS: [&str; 21] = [
    "important",
    "key",
    "critical",
    "essential",
    "must",
    "should",
    "conclusion",
    "summary",
    "therefore",
    "thus",
    "however",
    "but",
    "because",
    "reason",
    "result",
    "findings",
    "study",
    "research",
    "recommend",
    "suggest",
    "conclude",
];

const KEYWORD_WEIGHT: u32 = 2;
const LEAD_BONUS: u32 = 3;
const EARLY_BONUS: u32 = 1;
const LENGTH_BONUS: u32 = 1;
const MEDIUM_WORDS: std::ops::RangeInclusive<usize> = 10..=25;

/// Count keyword occurrences in a sentence.
///
/// Case-insensitive substring match, so "researchers" hits "research" and
/// "keyboard" hits "key".
pub fn keyword_hits(text: &str) -> u32 {
    let lower = text.to_lowercase();
    KEYWORDS
        .iter()
        .map(|kw| lower.matches(kw).count() as u32)
        .sum()
}

/// Score a sentence at the given position in its document
pub fn score_sentence(text: &str, index: usize) -> u32 {
    let mut score = keyword_hits(text) * KEYWORD_WEIGHT;

    match index {
        0 => score += LEAD_BONUS,
        1 | 2 => score += EARLY_BONUS,
        _ => {}
    }

    if MEDIUM_WORDS.contains(&text.split_whitespace().count()) {
        score += LENGTH_BONUS;
    }

    score
}
