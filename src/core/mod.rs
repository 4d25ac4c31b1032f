//! Core domain types for puzzle solving
//!
//! Words, the word list they live in, and the per-letter feedback of a guess.
//! All types here are pure values with no I/O.

mod feedback;
mod word;
mod word_list;

pub use feedback::{Feedback, Verdict};
pub use word::{ALPHABET, WORD_LENGTH, Word, WordError};
pub use word_list::WordList;
