//! Candidate ranking
//!
//! Words are rated by how much of a reference list's letter frequency they cover.
//! The recommendation is the top-rated word, with ties broken by common first and
//! last letters.

mod rating;
mod selector;

pub use rating::{Rating, RatingSpread, best_opening_words, rank_words, rate_words, rating_spread};
pub use selector::{TIEBREAK_BREADTH, select_best};

pub(crate) use rating::round2;
