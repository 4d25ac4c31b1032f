//! Puzzle solving
//!
//! [`Solver`] runs the guess/feedback loop for one puzzle. Autonomous and assisted
//! play share that loop and differ only in their [`GuessSource`].

mod config;
mod engine;
mod report;
mod source;

pub use config::{RANKING_CAP, SolveConfig};
pub use engine::Solver;
pub use report::{Outcome, PuzzleStats, SolveEvent, SolveMode, SolveReport, StepReport};
pub use source::{GuessSource, RankedSource, SuppliedSource};
