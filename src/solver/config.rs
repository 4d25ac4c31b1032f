//! Solve loop settings

use std::time::Duration;

/// Largest ranking a step report carries in verbose mode
pub const RANKING_CAP: usize = 40;

/// Settings shared by every solve mode
///
/// # Examples
/// ```
/// use std::time::Duration;
/// use wordle_wizard::solver::SolveConfig;
///
/// let config = SolveConfig::default()
///     .with_max_guesses(4)
///     .with_verbose(true)
///     .with_pace(Duration::from_millis(250));
///
/// assert_eq!(config.max_guesses, 4);
/// assert!(config.verbose);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolveConfig {
    /// Guess budget, counting the starting guess
    pub max_guesses: usize,
    /// Include the candidate ranking in each step report
    pub verbose: bool,
    /// Delay before every guess after the first
    pub pace: Duration,
}

impl Default for SolveConfig {
    fn default() -> Self {
        Self {
            max_guesses: 6,
            verbose: false,
            pace: Duration::ZERO,
        }
    }
}

impl SolveConfig {
    /// Set the guess budget (at least one guess is always made)
    #[must_use]
    pub const fn with_max_guesses(mut self, max_guesses: usize) -> Self {
        self.max_guesses = if max_guesses == 0 { 1 } else { max_guesses };
        self
    }

    #[must_use]
    pub const fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    #[must_use]
    pub const fn with_pace(mut self, pace: Duration) -> Self {
        self.pace = pace;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = SolveConfig::default();
        assert_eq!(config.max_guesses, 6);
        assert!(!config.verbose);
        assert_eq!(config.pace, Duration::ZERO);
    }

    #[test]
    fn zero_budget_becomes_one() {
        assert_eq!(SolveConfig::default().with_max_guesses(0).max_guesses, 1);
    }
}
