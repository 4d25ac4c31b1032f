//! Plain-text formatting shared by the CLI and the interactive session

use crate::solver::{SolveEvent, SolveMode, SolveReport};

/// A bar of `width` cells, filled in proportion to `value / max`
#[must_use]
pub fn progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format `(letter, position)` pairs as `c:0 r:1`
#[must_use]
pub fn format_positions(pairs: &[(char, usize)]) -> String {
    if pairs.is_empty() {
        return "none".to_string();
    }
    pairs
        .iter()
        .map(|(letter, position)| format!("{letter}:{position}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format letters as a space-separated list
#[must_use]
pub fn format_letters(letters: &[char]) -> String {
    if letters.is_empty() {
        return "none".to_string();
    }
    letters
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

fn guesses(n: usize) -> String {
    if n == 1 {
        "1 guess".to_string()
    } else {
        format!("{n} guesses")
    }
}

/// One-line summary of how a puzzle ended
///
/// # Examples
/// ```
/// use wordle_wizard::commands::solve_autonomous;
/// use wordle_wizard::output::formatters::outcome_line;
/// use wordle_wizard::solver::SolveConfig;
/// use wordle_wizard::wordlists::loader::embedded;
///
/// let mut words = embedded();
/// let config = SolveConfig::default().with_max_guesses(1);
/// let report = solve_autonomous(&mut words, "crane", "crate", &config).unwrap();
///
/// assert_eq!(
///     outcome_line(&report),
///     "Could not solve the puzzle in 1 guess. The target word was 'crate'."
/// );
/// ```
#[must_use]
pub fn outcome_line(report: &SolveReport) -> String {
    let Some(last) = report.events.last() else {
        return String::new();
    };
    let used = report.outcome.guesses_used;

    match (last, report.mode) {
        (SolveEvent::Solved { turn: 1, .. }, SolveMode::Autonomous) => {
            "The starting word and the target word are the same. Try two different words.".to_string()
        }
        (SolveEvent::Solved { turn, .. }, SolveMode::Autonomous) => {
            format!("Solved the puzzle in {}!", guesses(*turn))
        }
        (SolveEvent::Solved { turn, .. }, SolveMode::Assisted) => {
            format!("You solved the puzzle in {}!", guesses(*turn))
        }
        (SolveEvent::BudgetExhausted { target, .. }, _) => format!(
            "Could not solve the puzzle in {}. The target word was '{target}'.",
            guesses(used)
        ),
        (SolveEvent::NoCandidates { .. }, _) => {
            "No word in the list matches the feedback so far.".to_string()
        }
        (SolveEvent::GuessesExhausted { turn }, _) => {
            format!("No more guesses after {}.", guesses(*turn))
        }
        _ => String::new(),
    }
}
