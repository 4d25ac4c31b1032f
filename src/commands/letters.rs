//! Letter statistics for charting
//!
//! The numbers behind a letter frequency bar chart, with each bar tagged as a
//! vowel or consonant.

use crate::analysis::{SortOrder, is_vowel, letter_counts};
use crate::core::{ALPHABET, Word};

/// One bar of a letter frequency chart
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterBar {
    pub letter: char,
    pub count: usize,
    pub vowel: bool,
}

/// Unique-per-word letter counts over the alphabet, most frequent first
///
/// `y` is charted as a vowel.
///
/// # Examples
/// ```
/// use wordle_wizard::commands::letter_chart;
/// use wordle_wizard::core::Word;
///
/// let words = vec![Word::new("audio").unwrap(), Word::new("crane").unwrap()];
/// let chart = letter_chart(&words);
///
/// assert_eq!(chart[0].letter, 'a');
/// assert_eq!(chart[0].count, 2);
/// assert!(chart[0].vowel);
/// ```
#[must_use]
pub fn letter_chart(words: &[Word]) -> Vec<LetterBar> {
    letter_counts(words, ALPHABET, true, SortOrder::Descending)
        .into_iter()
        .map(|(letter, count)| LetterBar {
            letter,
            count,
            vowel: is_vowel(letter, true),
        })
        .collect()
}
