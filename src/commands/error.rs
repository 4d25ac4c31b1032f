//! Errors reported by the public solve operations

use crate::core::{WORD_LENGTH, WordError};
use std::fmt;
use thiserror::Error;

/// Which input a rejected word was supplied as
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordRole {
    Guess,
    Target,
    /// The n-th caller-supplied guess (1-based)
    SuppliedGuess(usize),
}

impl fmt::Display for WordRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Guess => write!(f, "guess"),
            Self::Target => write!(f, "target"),
            Self::SuppliedGuess(n) => write!(f, "guess #{n}"),
        }
    }
}

/// Input rejected before any solving started
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    #[error("invalid {role} '{input}': {source}")]
    InvalidWord {
        role: WordRole,
        input: String,
        #[source]
        source: WordError,
    },
    #[error("at least one guess is required")]
    NoGuesses,
}

impl SolveError {
    pub(crate) fn invalid(role: WordRole, input: &str, source: WordError) -> Self {
        Self::InvalidWord {
            role,
            input: input.to_string(),
            source,
        }
    }

    /// A short hint telling the user how to fix the input
    #[must_use]
    pub fn guidance(&self) -> String {
        match self {
            Self::InvalidWord {
                role,
                source: WordError::InvalidLength(len),
                ..
            } => format!(
                "The {role} has {len} letters. Enter a word with exactly {WORD_LENGTH} letters."
            ),
            Self::InvalidWord { role, .. } => {
                format!("The {role} may only use the letters a to z. Remove any other characters.")
            }
            Self::NoGuesses => "Enter at least one guess to get advice.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_role() {
        let err = SolveError::invalid(WordRole::Target, "cran", WordError::InvalidLength(4));
        assert_eq!(
            err.to_string(),
            "invalid target 'cran': word must be exactly 5 letters, got 4"
        );
        assert!(err.guidance().contains("exactly 5 letters"));
    }

    #[test]
    fn supplied_guess_is_numbered() {
        let err = SolveError::invalid(WordRole::SuppliedGuess(2), "cr4ne", WordError::InvalidCharacters);
        assert!(err.to_string().starts_with("invalid guess #2"));
        assert!(err.guidance().contains("a to z"));
    }
}
