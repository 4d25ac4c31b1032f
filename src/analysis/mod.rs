//! Frequency analysis over a word list
//!
//! Letter occurrence counts, prefix/suffix n-gram counts, and word composition.
//! Every table is recomputed from the list passed in; nothing is cached between calls.

mod composition;
mod frequency;
mod ngram;

pub use composition::{LetterMix, is_vowel, letter_mix, word_distribution};
pub use frequency::{SortOrder, letter_counts, letter_total};
pub use ngram::{GramPosition, find_gram, gram_freq};

use crate::core::WORD_LENGTH;
use thiserror::Error;

/// Error type for frequency queries
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    #[error("n-gram length must be between 1 and {WORD_LENGTH}, got {0}")]
    InvalidGramLength(usize),
}
