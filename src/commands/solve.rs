//! Autonomous solving
//!
//! The engine plays its own recommendation every turn, starting from a given word.

use super::error::{SolveError, WordRole};
use crate::core::{Word, WordList};
use crate::solver::{RankedSource, SolveConfig, SolveEvent, SolveReport, Solver};
use rand::prelude::IndexedRandom;

/// Solve for `target` starting from `guess`, always playing the recommended word
///
/// Both words are validated first. Words missing from `word_list` are added to it and
/// reported as [`SolveEvent::WordAdmitted`].
///
/// # Errors
/// Returns [`SolveError::InvalidWord`] if either word is not a valid puzzle word.
///
/// # Examples
/// ```
/// use wordle_wizard::commands::solve_autonomous;
/// use wordle_wizard::solver::SolveConfig;
/// use wordle_wizard::wordlists::loader::embedded;
///
/// let mut words = embedded();
/// let report = solve_autonomous(&mut words, "crane", "crane", &SolveConfig::default()).unwrap();
///
/// assert!(report.outcome.solved);
/// assert_eq!(report.outcome.guesses_used, 1);
/// ```
pub fn solve_autonomous(
    word_list: &mut WordList,
    guess: &str,
    target: &str,
    config: &SolveConfig,
) -> Result<SolveReport, SolveError> {
    let guess = parse_word(guess, WordRole::Guess)?;
    let target = parse_word(target, WordRole::Target)?;

    let admitted = admit_all(word_list, [&guess, &target]);

    log::debug!("autonomous solve: '{guess}' -> '{target}'");
    let mut report = Solver::new(word_list, *config).run(guess, &target, RankedSource);
    report.events.splice(0..0, admitted);

    Ok(report)
}

/// Pick a random word from the list, for a random start or target
#[must_use]
pub fn random_word(word_list: &WordList) -> Option<&Word> {
    word_list.as_slice().choose(&mut rand::rng())
}

/// Validate user input as a puzzle word
///
/// Surrounding whitespace is ignored and case is folded.
///
/// # Errors
/// Returns [`SolveError::InvalidWord`] tagged with `role` if the input is not a valid
/// puzzle word.
pub fn parse_word(input: &str, role: WordRole) -> Result<Word, SolveError> {
    Word::new(input.trim()).map_err(|source| SolveError::invalid(role, input, source))
}

/// Add unseen words to the list, one event per inserted word
pub(crate) fn admit_all<'w>(
    word_list: &mut WordList,
    words: impl IntoIterator<Item = &'w Word>,
) -> Vec<SolveEvent> {
    words
        .into_iter()
        .filter(|word| word_list.admit((*word).clone()))
        .map(|word| {
            log::warn!("'{word}' is not in the word list; adding it");
            SolveEvent::WordAdmitted {
                word: word.text().to_string(),
            }
        })
        .collect()
}
