//! Per-letter feedback for a guess
//!
//! Each position of a guess is classified as:
//! - Exact (letter in the target at this position)
//! - Misplaced (letter somewhere in the target, but not here)
//! - Excluded (letter nowhere in the target)
//!
//! Repeated letters are classified independently at every position: a guess letter
//! that appears anywhere in the target is never excluded, no matter how many times
//! it is repeated in the guess.

use super::{WORD_LENGTH, Word};
use std::fmt;

/// Classification of a single guess letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    Exact,
    Misplaced,
    Excluded,
}

impl Verdict {
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Exact => '🟩',
            Self::Misplaced => '🟨',
            Self::Excluded => '⬜',
        }
    }
}

/// Feedback for one guess against the target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([Verdict; WORD_LENGTH]);

impl Feedback {
    /// All exact (perfect match)
    pub const SOLVED: Self = Self([Verdict::Exact; WORD_LENGTH]);

    /// Classify every position of `guess` against `target`
    ///
    /// # Examples
    /// ```
    /// use wordle_wizard::core::{Feedback, Verdict, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let target = Word::new("crate").unwrap();
    /// let feedback = Feedback::evaluate(&guess, &target);
    ///
    /// assert_eq!(feedback.verdict(3), Verdict::Excluded); // N
    /// assert_eq!(feedback.count(Verdict::Exact), 4);
    /// assert_eq!(feedback.to_emoji(), "🟩🟩🟩⬜🟩");
    /// ```
    #[must_use]
    pub fn evaluate(guess: &Word, target: &Word) -> Self {
        let mut verdicts = [Verdict::Excluded; WORD_LENGTH];

        for (i, verdict) in verdicts.iter_mut().enumerate() {
            let letter = guess.char_at(i);
            *verdict = if letter == target.char_at(i) {
                Verdict::Exact
            } else if target.has_letter(letter) {
                Verdict::Misplaced
            } else {
                Verdict::Excluded
            };
        }

        Self(verdicts)
    }

    #[inline]
    #[must_use]
    pub const fn verdicts(&self) -> &[Verdict; WORD_LENGTH] {
        &self.0
    }

    /// Verdict at a position
    ///
    /// # Panics
    /// Panics if position >= [`WORD_LENGTH`]
    #[inline]
    #[must_use]
    pub const fn verdict(&self, position: usize) -> Verdict {
        self.0[position]
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        *self == Self::SOLVED
    }

    /// Count positions with the given verdict
    #[must_use]
    pub fn count(&self, verdict: Verdict) -> usize {
        self.0.iter().filter(|&&v| v == verdict).count()
    }

    /// Convert feedback to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|v| v.emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_emoji())
    }
}
