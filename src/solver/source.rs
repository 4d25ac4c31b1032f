//! Where the next guess of a puzzle comes from
//!
//! The solve loop is the same for every mode; only the choice of the next guess
//! differs. A [`GuessSource`] makes that choice.

use super::{SolveEvent, SolveMode};
use crate::core::Word;

/// A supplier of guesses for the solve loop
pub trait GuessSource {
    fn mode(&self) -> SolveMode;

    /// Produce the next guess, given the engine's current recommendation
    ///
    /// Returns `None` when the source has nothing left to guess, which ends the puzzle.
    fn next_guess(&mut self, recommendation: Option<&Word>) -> Option<Word>;

    /// The event that explains why [`GuessSource::next_guess`] returned `None`
    fn exhausted(&self, turn: usize) -> SolveEvent;
}

/// Always plays the engine's recommendation
#[derive(Debug, Clone, Copy, Default)]
pub struct RankedSource;

impl GuessSource for RankedSource {
    fn mode(&self) -> SolveMode {
        SolveMode::Autonomous
    }

    fn next_guess(&mut self, recommendation: Option<&Word>) -> Option<Word> {
        recommendation.cloned()
    }

    fn exhausted(&self, turn: usize) -> SolveEvent {
        SolveEvent::NoCandidates { turn }
    }
}

/// Plays caller-supplied guesses in order, ignoring the recommendation
#[derive(Debug, Clone)]
pub struct SuppliedSource {
    guesses: std::vec::IntoIter<Word>,
}

impl SuppliedSource {
    #[must_use]
    pub fn new(guesses: Vec<Word>) -> Self {
        Self {
            guesses: guesses.into_iter(),
        }
    }
}

impl GuessSource for SuppliedSource {
    fn mode(&self) -> SolveMode {
        SolveMode::Assisted
    }

    fn next_guess(&mut self, _recommendation: Option<&Word>) -> Option<Word> {
        self.guesses.next()
    }

    fn exhausted(&self, turn: usize) -> SolveEvent {
        SolveEvent::GuessesExhausted { turn }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranked_follows_recommendation() {
        let mut source = RankedSource;
        let crate_word = Word::new("crate").unwrap();

        assert_eq!(source.next_guess(Some(&crate_word)), Some(crate_word));
        assert_eq!(source.next_guess(None), None);
        assert_eq!(source.exhausted(3), SolveEvent::NoCandidates { turn: 3 });
    }

    #[test]
    fn supplied_ignores_recommendation() {
        let words = vec![Word::new("audio").unwrap(), Word::new("crane").unwrap()];
        let mut source = SuppliedSource::new(words);
        let advice = Word::new("slate").unwrap();

        assert_eq!(source.next_guess(Some(&advice)).unwrap().text(), "audio");
        assert_eq!(source.next_guess(Some(&advice)).unwrap().text(), "crane");
        assert!(source.next_guess(Some(&advice)).is_none());
        assert_eq!(source.mode(), SolveMode::Assisted);
    }
}
