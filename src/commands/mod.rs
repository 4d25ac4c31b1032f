//! Public operations
//!
//! Validated entry points over the engine: autonomous and assisted solving,
//! standalone ranking, chart data, and the whole-list benchmark.

pub mod assist;
pub mod benchmark;
mod error;
pub mod letters;
pub mod rank;
pub mod solve;

pub use crate::analysis::letter_counts;
pub use crate::ranking::rank_words;
pub use assist::solve_assisted;
pub use benchmark::{BenchmarkResult, PuzzleResult, run_benchmark};
pub use error::{SolveError, WordRole};
pub use letters::{LetterBar, letter_chart};
pub use rank::rank_entries;
pub use solve::{parse_word, random_word, solve_autonomous};
