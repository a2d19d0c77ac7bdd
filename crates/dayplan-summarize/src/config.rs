//! Summarizer limits

use crate::error::SummarizeError;
use serde::{Deserialize, Serialize};

pub const DEFAULT_MAX_SENTENCES: usize = 3;
pub const DEFAULT_MAX_LENGTH: usize = 300;

/// Limits applied to every summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummarizerConfig {
    /// Most sentences that may contribute to the output
    #[serde(default = "default_max_sentences")]
    pub max_sentences: usize,

    /// Longest output, in characters
    #[serde(default = "default_max_length")]
    pub max_length: usize,
}

fn default_max_sentences() -> usize {
    DEFAULT_MAX_SENTENCES
}

fn default_max_length() -> usize {
    DEFAULT_MAX_LENGTH
}

impl SummarizerConfig {
    pub fn new(max_sentences: usize, max_length: usize) -> Self {
        Self {
            max_sentences,
            max_length,
        }
    }

    pub fn validate(&self) -> Result<(), SummarizeError> {
        if self.max_sentences < 1 {
            return Err(SummarizeError::InvalidArgument {
                name: "max_sentences",
                value: self.max_sentences,
            });
        }
        if self.max_length < 1 {
            return Err(SummarizeError::InvalidArgument {
                name: "max_length",
                value: self.max_length,
            });
        }
        Ok(())
    }
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_SENTENCES, DEFAULT_MAX_LENGTH)
    }
}
