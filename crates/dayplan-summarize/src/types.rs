//! Sentence and summary types

use serde::{Deserialize, Serialize};

/// A trimmed, non-empty sentence borrowed from the input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sentence<'a> {
    pub text: &'a str,
    /// Position in the sentence sequence (0-based)
    pub index: usize,
}

/// A sentence with its importance score for one summarize call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredSentence<'a> {
    pub sentence: Sentence<'a>,
    pub score: u32,
}

/// Which path produced a summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SummaryKind {
    /// Input already fit; returned trimmed but otherwise untouched
    Unchanged,
    /// Built from selected sentences
    Extracted,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub text: String,
    pub kind: SummaryKind,
    /// Sentences found in the input (0 on the unchanged path)
    pub sentence_count: usize,
    /// Indices of contributing sentences, ascending
    pub selected: Vec<usize>,
    /// Whether the joined sentences were cut to fit
    pub truncated: bool,
}

impl Summary {
    pub fn empty() -> Self {
        Self::unchanged(String::new())
    }

    pub fn unchanged(text: String) -> Self {
        Self {
            text,
            kind: SummaryKind::Unchanged,
            sentence_count: 0,
            selected: Vec::new(),
            truncated: false,
        }
    }

    /// Output length in characters
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}
