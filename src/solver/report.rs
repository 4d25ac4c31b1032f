//! Structured narration of a solve
//!
//! The engine never prints. Every turn is recorded as a [`SolveEvent`] so callers
//! can render, log, or inspect a puzzle however they like.

use crate::analysis::{LetterMix, letter_mix};
use crate::core::{Feedback, Verdict};
use crate::ranking::{Rating, round2};

/// How the guesses of a puzzle were chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveMode {
    /// Every guess after the first is the engine's recommendation
    Autonomous,
    /// Every guess is supplied by the caller; recommendations are advice only
    Assisted,
}

/// What one non-winning guess revealed
#[derive(Debug, Clone, PartialEq)]
pub struct StepReport {
    pub turn: usize,
    pub guess: String,
    pub feedback: Feedback,
    /// Letters at their known position, sorted by position
    pub exact: Vec<(char, usize)>,
    /// Letters seen at a wrong position, sorted by position
    pub misplaced: Vec<(char, usize)>,
    pub excluded: Vec<char>,
    /// Size of the word list the candidates were drawn from
    pub universe: usize,
    pub remaining: usize,
    pub eliminated: usize,
    pub eliminated_pct: f64,
    pub remaining_pct: f64,
    /// Raw ratings of the remaining candidates, only kept in verbose mode
    pub ranking: Option<Vec<Rating>>,
    pub recommendation: Option<String>,
    /// Guesses made so far, this one included
    pub guessed: Vec<String>,
}

impl StepReport {
    /// Percentage of `part` in `whole`, rounded to two decimals
    pub(crate) fn percent(part: usize, whole: usize) -> f64 {
        if whole == 0 {
            return 0.0;
        }
        round2(part as f64 / whole as f64 * 100.0)
    }
}

/// One entry in the narration of a puzzle
#[derive(Debug, Clone, PartialEq)]
pub enum SolveEvent {
    /// A guess or target missing from the word list was added to it
    WordAdmitted { word: String },
    Step(StepReport),
    Solved { word: String, turn: usize },
    /// The guess budget ran out; names the target that was missed
    BudgetExhausted { turn: usize, target: String },
    /// No candidate was left to recommend
    NoCandidates { turn: usize },
    /// The caller supplied no further guesses
    GuessesExhausted { turn: usize },
}

/// Final result of a puzzle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub solved: bool,
    pub guesses_used: usize,
    /// The last word guessed
    pub final_word: String,
}

/// Everything a solve produced
#[derive(Debug, Clone, PartialEq)]
pub struct SolveReport {
    pub mode: SolveMode,
    pub outcome: Outcome,
    pub events: Vec<SolveEvent>,
}

impl SolveReport {
    /// Step reports in turn order
    pub fn steps(&self) -> impl Iterator<Item = &StepReport> {
        self.events.iter().filter_map(|event| match event {
            SolveEvent::Step(step) => Some(step),
            _ => None,
        })
    }

    /// The recommendation made after each step, in turn order
    #[must_use]
    pub fn recommendations(&self) -> Vec<Option<&str>> {
        self.steps()
            .map(|step| step.recommendation.as_deref())
            .collect()
    }

    /// Words admitted into the word list while validating the input
    #[must_use]
    pub fn admitted(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|event| match event {
                SolveEvent::WordAdmitted { word } => Some(word.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Summary statistics of the puzzle
    ///
    /// Averages are taken over the step reports (non-winning guesses) and rounded
    /// to two decimals; a puzzle solved on its first guess averages to 0.
    #[must_use]
    pub fn stats(&self) -> PuzzleStats {
        let steps: Vec<&StepReport> = self.steps().collect();
        let average = |count: fn(&StepReport) -> usize| {
            if steps.is_empty() {
                return 0.0;
            }
            let total: usize = steps.iter().map(|step| count(step)).sum();
            round2(total as f64 / steps.len() as f64)
        };

        let first_guess = steps
            .first()
            .map_or_else(|| self.outcome.final_word.clone(), |step| step.guess.clone());

        PuzzleStats {
            solved: self.outcome.solved,
            guesses_used: self.outcome.guesses_used,
            first_guess_mix: letter_mix(&first_guess, true),
            first_guess,
            avg_exact: average(|s| s.feedback.count(Verdict::Exact)),
            avg_misplaced: average(|s| s.feedback.count(Verdict::Misplaced)),
            avg_excluded: average(|s| s.feedback.count(Verdict::Excluded)),
            avg_remaining: average(|s| s.remaining),
        }
    }
}

/// Per-puzzle summary numbers
#[derive(Debug, Clone, PartialEq)]
pub struct PuzzleStats {
    pub solved: bool,
    pub guesses_used: usize,
    pub first_guess: String,
    pub first_guess_mix: LetterMix,
    pub avg_exact: f64,
    pub avg_misplaced: f64,
    pub avg_excluded: f64,
    pub avg_remaining: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    fn step(turn: usize, guess: &str, target: &str, remaining: usize) -> SolveEvent {
        let feedback = Feedback::evaluate(&Word::new(guess).unwrap(), &Word::new(target).unwrap());
        SolveEvent::Step(StepReport {
            turn,
            guess: guess.to_string(),
            feedback,
            exact: Vec::new(),
            misplaced: Vec::new(),
            excluded: Vec::new(),
            universe: 10,
            remaining,
            eliminated: 10 - remaining,
            eliminated_pct: StepReport::percent(10 - remaining, 10),
            remaining_pct: StepReport::percent(remaining, 10),
            ranking: None,
            recommendation: Some(target.to_string()),
            guessed: vec![guess.to_string()],
        })
    }

    fn report() -> SolveReport {
        SolveReport {
            mode: SolveMode::Autonomous,
            outcome: Outcome {
                solved: true,
                guesses_used: 3,
                final_word: "crate".to_string(),
            },
            events: vec![
                SolveEvent::WordAdmitted { word: "xylyl".to_string() },
                step(1, "audio", "crate", 6),
                step(2, "crane", "crate", 1),
                SolveEvent::Solved { word: "crate".to_string(), turn: 3 },
            ],
        }
    }

    #[test]
    fn percent_rounds_and_handles_empty_universe() {
        assert_eq!(StepReport::percent(1, 3), 33.33);
        assert_eq!(StepReport::percent(0, 0), 0.0);
    }

    #[test]
    fn recommendations_follow_steps() {
        let report = report();
        assert_eq!(report.recommendations(), [Some("crate"), Some("crate")]);
        assert_eq!(report.admitted(), ["xylyl"]);
        assert_eq!(report.steps().count(), 2);
    }

    #[test]
    fn stats_average_over_steps() {
        let stats = report().stats();

        // audio vs crate: a misplaced, rest excluded; crane vs crate: 4 exact, n excluded
        assert_eq!(stats.first_guess, "audio");
        assert_eq!(stats.first_guess_mix, LetterMix { vowels: 4, consonants: 1 });
        assert_eq!(stats.avg_exact, 2.0);
        assert_eq!(stats.avg_misplaced, 0.5);
        assert_eq!(stats.avg_excluded, 2.5);
        assert_eq!(stats.avg_remaining, 3.5);
        assert!(stats.solved);
    }

    #[test]
    fn stats_of_first_guess_win() {
        let report = SolveReport {
            mode: SolveMode::Assisted,
            outcome: Outcome {
                solved: true,
                guesses_used: 1,
                final_word: "crate".to_string(),
            },
            events: vec![SolveEvent::Solved { word: "crate".to_string(), turn: 1 }],
        };
        let stats = report.stats();

        assert_eq!(stats.first_guess, "crate");
        assert_eq!(stats.avg_remaining, 0.0);
    }
}
