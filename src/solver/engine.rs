//! The solve loop

use super::{
    GuessSource, Outcome, RANKING_CAP, SolveConfig, SolveEvent, SolveReport, StepReport,
};
use crate::constraints::{ConstraintState, filter_candidates};
use crate::core::{Word, WordList};
use crate::ranking::{rate_words, select_best};
use std::thread;

/// Drives one puzzle from a first guess to a win or a halt
///
/// Each turn the guess is checked against the target. A miss is folded into the
/// constraint state, the word list is filtered down to the remaining candidates,
/// and the candidates are rated to produce a recommendation. The [`GuessSource`]
/// then decides what to guess next.
pub struct Solver<'a> {
    words: &'a WordList,
    config: SolveConfig,
}

impl<'a> Solver<'a> {
    /// Create a solver over a word list
    ///
    /// Candidates are drawn from `words` and ratings use its letter frequencies.
    #[must_use]
    pub const fn new(words: &'a WordList, config: SolveConfig) -> Self {
        Self { words, config }
    }

    #[must_use]
    pub const fn config(&self) -> &SolveConfig {
        &self.config
    }

    /// Play `first` and then whatever `source` supplies until the puzzle ends
    ///
    /// The puzzle ends when a guess equals `target`, when the guess budget is used up,
    /// or when the source has no next guess.
    pub fn run<S: GuessSource>(&self, first: Word, target: &Word, mut source: S) -> SolveReport {
        let reference = self.words.as_slice();
        let universe = self.words.len();

        let mut state = ConstraintState::new();
        let mut guessed: Vec<Word> = Vec::new();
        let mut events: Vec<SolveEvent> = Vec::new();
        let mut guess = first;
        let mut turn = 0;

        let solved = loop {
            turn += 1;
            if turn > 1 && !self.config.pace.is_zero() {
                thread::sleep(self.config.pace);
            }
            guessed.push(guess.clone());

            if guess.text() == target.text() {
                log::info!("solved '{target}' in {turn} guesses");
                events.push(SolveEvent::Solved {
                    word: target.text().to_string(),
                    turn,
                });
                break true;
            }

            let feedback = state.record(&guess, target);
            let candidates = filter_candidates(reference, &state, &guessed);
            let ratings = rate_words(&candidates, reference, false);
            let recommendation: Option<&Word> = select_best(&ratings, reference)
                .and_then(|best| candidates.iter().copied().find(|w| w.text() == best.word));

            log::debug!(
                "turn {turn}: '{guess}' {} leaves {} of {universe} candidates",
                feedback.to_emoji(),
                candidates.len()
            );

            let remaining = candidates.len();
            let eliminated = universe.saturating_sub(remaining);
            events.push(SolveEvent::Step(StepReport {
                turn,
                guess: guess.text().to_string(),
                feedback,
                exact: state.exact_positions(),
                misplaced: state.misplaced_positions(),
                excluded: state.excluded_letters(),
                universe,
                remaining,
                eliminated,
                eliminated_pct: StepReport::percent(eliminated, universe),
                remaining_pct: StepReport::percent(remaining, universe),
                ranking: self
                    .config
                    .verbose
                    .then(|| ratings.iter().take(RANKING_CAP).cloned().collect()),
                recommendation: recommendation.map(|w| w.text().to_string()),
                guessed: guessed.iter().map(|w| w.text().to_string()).collect(),
            }));

            if turn >= self.config.max_guesses {
                log::info!("missed '{target}' after {turn} guesses");
                events.push(SolveEvent::BudgetExhausted {
                    turn,
                    target: target.text().to_string(),
                });
                break false;
            }

            match source.next_guess(recommendation) {
                Some(next) => guess = next,
                None => {
                    log::info!("no further guess after turn {turn}");
                    events.push(source.exhausted(turn));
                    break false;
                }
            }
        };

        SolveReport {
            mode: source.mode(),
            outcome: Outcome {
                solved,
                guesses_used: turn,
                final_word: guess.text().to_string(),
            },
            events,
        }
    }
}
