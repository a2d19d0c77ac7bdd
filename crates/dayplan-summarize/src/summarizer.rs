//! Extractive summarizer: score, select, reorder, join, truncate

use crate::config::SummarizerConfig;
use crate::error::SummarizeError;
use crate::score::score_sentence;
use crate::segment::split_sentences;
use crate::truncate::truncate_at_word;
use crate::types::{ScoredSentence, Sentence, Summary, SummaryKind};
use std::collections::HashSet;
use tracing::debug;

/// Reusable summarizer holding validated limits
#[derive(Debug, Clone, Default)]
pub struct Summarizer {
    config: SummarizerConfig,
}

impl Summarizer {
    pub fn new(config: SummarizerConfig) -> Result<Self, SummarizeError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SummarizerConfig {
        &self.config
    }

    pub fn summarize(&self, text: &str) -> String {
        run(text, &self.config).text
    }

    /// Short form of a note for list views
    pub fn preview(&self, note: &str) -> String {
        self.summarize(note)
    }
}

/// Summarize `text` to at most `max_sentences` sentences and `max_length`
/// characters.
///
/// Text that already fits is returned trimmed and otherwise unchanged.
pub fn summarize(
    text: &str,
    max_sentences: usize,
    max_length: usize,
) -> Result<String, SummarizeError> {
    let config = SummarizerConfig::new(max_sentences, max_length);
    summarize_detailed(text, &config).map(|summary| summary.text)
}

pub fn summarize_detailed(
    text: &str,
    config: &SummarizerConfig,
) -> Result<Summary, SummarizeError> {
    config.validate()?;
    Ok(run(text, config))
}

fn run(text: &str, config: &SummarizerConfig) -> Summary {
    let text = text.trim();
    if text.is_empty() {
        return Summary::empty();
    }

    let length = text.chars().count();
    if length <= config.max_length {
        return Summary::unchanged(text.to_string());
    }

    let sentences = split_sentences(text);
    // Unreachable after the length check above; kept so callers that skip
    // it still get the whole text back.
    if sentences.len() <= config.max_sentences && length <= config.max_length {
        return Summary::unchanged(text.to_string());
    }

    let scored: Vec<ScoredSentence> = sentences
        .iter()
        .map(|&sentence| ScoredSentence {
            sentence,
            score: score_sentence(sentence.text, sentence.index),
        })
        .collect();

    let mut chosen = select(&sentences, scored, config.max_sentences);
    chosen.sort_by_key(|s| s.index);

    let joined = chosen
        .iter()
        .map(|s| s.text)
        .collect::<Vec<_>>()
        .join(" ");

    debug!(
        sentences = sentences.len(),
        selected = chosen.len(),
        joined_len = joined.chars().count(),
        "summarized text"
    );

    let selected = chosen.iter().map(|s| s.index).collect();
    match truncate_at_word(&joined, config.max_length) {
        Some(cut) => Summary {
            text: cut,
            kind: SummaryKind::Extracted,
            sentence_count: sentences.len(),
            selected,
            truncated: true,
        },
        None => Summary {
            text: joined,
            kind: SummaryKind::Extracted,
            sentence_count: sentences.len(),
            selected,
            truncated: false,
        },
    }
}

/// Pick up to `limit` sentences: the top scorers above zero, then backfill
/// in document order.
fn select<'a>(
    sentences: &[Sentence<'a>],
    mut scored: Vec<ScoredSentence<'a>>,
    limit: usize,
) -> Vec<Sentence<'a>> {
    scored.sort_by(|a, b| {
        b.score
            .cmp(&a.score)
            .then(a.sentence.index.cmp(&b.sentence.index))
    });

    let mut seen = HashSet::new();
    let mut chosen = Vec::with_capacity(limit);

    for candidate in scored.iter().take(limit) {
        if candidate.score > 0 {
            seen.insert(candidate.sentence.index);
            chosen.push(candidate.sentence);
        }
    }

    for sentence in sentences {
        if chosen.len() >= limit {
            break;
        }
        if seen.insert(sentence.index) {
            chosen.push(*sentence);
        }
    }

    chosen
}
