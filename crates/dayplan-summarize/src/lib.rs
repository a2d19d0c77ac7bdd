//! Extractive text summarization for planner notes and free text

mod config;
mod error;
mod score;
mod segment;
mod summarizer;
mod truncate;
mod types;

pub use config::SummarizerConfig;
pub use error::SummarizeError;
pub use score::{keyword_hits, score_sentence, KEYWORDS};
pub use segment::split_sentences;
pub use summarizer::{summarize, summarize_detailed, Summarizer};
pub use truncate::{truncate_at_word, ELLIPSIS};
pub use types::{ScoredSentence, Sentence, Summary, SummaryKind};
