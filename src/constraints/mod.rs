//! Cumulative letter constraints and candidate filtering
//!
//! A [`ConstraintState`] accumulates what every guess of a puzzle revealed about the
//! target; [`filter_candidates`] narrows a word list down to the words that are still
//! consistent with it.

mod filter;
mod state;

pub use filter::filter_candidates;
pub use state::ConstraintState;
