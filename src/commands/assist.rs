//! Assisted solving
//!
//! The caller supplies every guess. After each one the engine reports what was
//! learned and which word it would play next, but never plays it.

use super::error::{SolveError, WordRole};
use super::solve::{admit_all, parse_word};
use crate::core::{Word, WordList};
use crate::solver::{SolveConfig, SolveReport, Solver, SuppliedSource};

/// Replay the supplied guesses against `target`, advising after each one
///
/// Every guess and the target are validated before anything is solved. Unseen words
/// are added to `word_list`. The puzzle ends when a guess hits the target, the guess
/// budget runs out, or the supplied guesses are used up.
///
/// # Errors
/// Returns [`SolveError::NoGuesses`] for an empty guess list and
/// [`SolveError::InvalidWord`] for the first invalid word.
///
/// # Examples
/// ```
/// use wordle_wizard::commands::solve_assisted;
/// use wordle_wizard::solver::SolveConfig;
/// use wordle_wizard::wordlists::loader::embedded;
///
/// let mut words = embedded();
/// let report = solve_assisted(&mut words, &["audio", "crane"], "crate", &SolveConfig::default())
///     .unwrap();
///
/// assert!(!report.outcome.solved);
/// assert_eq!(report.outcome.guesses_used, 2);
/// assert_eq!(report.recommendations().last(), Some(&Some("crate")));
/// ```
pub fn solve_assisted<S: AsRef<str>>(
    word_list: &mut WordList,
    guesses: &[S],
    target: &str,
    config: &SolveConfig,
) -> Result<SolveReport, SolveError> {
    if guesses.is_empty() {
        return Err(SolveError::NoGuesses);
    }

    let guesses: Vec<Word> = guesses
        .iter()
        .enumerate()
        .map(|(i, input)| parse_word(input.as_ref(), WordRole::SuppliedGuess(i + 1)))
        .collect::<Result<_, _>>()?;
    let target = parse_word(target, WordRole::Target)?;

    let admitted = admit_all(word_list, guesses.iter().chain([&target]));

    let mut supplied = guesses.into_iter();
    let Some(first) = supplied.next() else {
        return Err(SolveError::NoGuesses);
    };

    log::debug!("assisted solve: '{first}' -> '{target}'");
    let source = SuppliedSource::new(supplied.collect());
    let mut report = Solver::new(word_list, *config).run(first, &target, source);
    report.events.splice(0..0, admitted);

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WordError;
    use crate::solver::{SolveEvent, SolveMode};
    use crate::wordlists::loader::words_from_slice;

    fn scenario() -> WordList {
        WordList::new(words_from_slice(&["crane", "slate", "trace", "crate", "grate"]))
    }

    #[test]
    fn empty_guess_list_is_rejected() {
        let mut list = scenario();
        let err = solve_assisted::<&str>(&mut list, &[], "crate", &SolveConfig::default());
        assert_eq!(err.unwrap_err(), SolveError::NoGuesses);
    }

    #[test]
    fn invalid_supplied_guess_is_numbered() {
        let mut list = scenario();
        let err = solve_assisted(&mut list, &["crane", "sl8te"], "crate", &SolveConfig::default())
            .unwrap_err();

        assert!(matches!(
            err,
            SolveError::InvalidWord {
                role: WordRole::SuppliedGuess(2),
                source: WordError::InvalidCharacters,
                ..
            }
        ));
        assert_eq!(list.len(), 5);
    }

    #[test]
    fn stops_when_a_guess_hits() {
        let mut list = scenario();
        let report = solve_assisted(
            &mut list,
            &["slate", "crate", "grate"],
            "crate",
            &SolveConfig::default(),
        )
        .unwrap();

        assert_eq!(report.mode, SolveMode::Assisted);
        assert!(report.outcome.solved);
        assert_eq!(report.outcome.guesses_used, 2);
        assert_eq!(
            report.events.last(),
            Some(&SolveEvent::Solved {
                word: "crate".to_string(),
                turn: 2
            })
        );
    }

    #[test]
    fn unseen_guesses_are_admitted() {
        let mut list = scenario();
        let report =
            solve_assisted(&mut list, &["audio", "crane"], "crate", &SolveConfig::default()).unwrap();

        assert_eq!(report.admitted(), ["audio"]);
        assert_eq!(list.len(), 6);
        assert_eq!(report.recommendations(), [Some("crate"), Some("crate")]);
        assert_eq!(report.events.last(), Some(&SolveEvent::GuessesExhausted { turn: 2 }));
    }

    #[test]
    fn budget_caps_supplied_guesses() {
        let mut list = scenario();
        let config = SolveConfig::default().with_max_guesses(2);
        let report =
            solve_assisted(&mut list, &["slate", "grate", "crate"], "crate", &config).unwrap();

        assert!(!report.outcome.solved);
        assert_eq!(report.outcome.guesses_used, 2);
        assert!(matches!(
            report.events.last(),
            Some(SolveEvent::BudgetExhausted { turn: 2, .. })
        ));
    }
}
