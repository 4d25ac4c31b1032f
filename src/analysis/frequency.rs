//! Letter frequency tables

use crate::core::Word;
use rustc_hash::FxHashMap;
use std::cmp::Reverse;

/// Ordering of a frequency table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Most frequent first
    #[default]
    Descending,
    /// Least frequent first
    Ascending,
    /// Same order as the alphabet that was passed in
    Alphabet,
}

/// Count how many times each letter of `alphabet` occurs across `words`
///
/// With `unique` set, a word contributes at most once to each of its letters, so
/// "geese" adds 1 to `e`. Otherwise repeated letters count every time.
/// Every alphabet letter appears in the result, even with a count of 0. Sorting is
/// stable, so letters with equal counts keep alphabet order.
///
/// # Examples
/// ```
/// use wordle_wizard::analysis::{SortOrder, letter_counts};
/// use wordle_wizard::core::{ALPHABET, Word};
///
/// let words = vec![Word::new("geese").unwrap(), Word::new("crane").unwrap()];
///
/// let unique = letter_counts(&words, ALPHABET, true, SortOrder::Descending);
/// assert_eq!(unique[0], ('e', 2));
///
/// let repeated = letter_counts(&words, ALPHABET, false, SortOrder::Descending);
/// assert_eq!(repeated[0], ('e', 4));
/// assert_eq!(repeated.len(), 26);
/// ```
#[must_use]
pub fn letter_counts(
    words: &[Word],
    alphabet: &str,
    unique: bool,
    order: SortOrder,
) -> Vec<(char, usize)> {
    let mut counts: Vec<(char, usize)> = Vec::with_capacity(alphabet.len());
    let mut index: FxHashMap<u8, usize> = FxHashMap::default();

    for letter in alphabet.chars().map(|c| c.to_ascii_lowercase()) {
        if counts.iter().any(|&(seen, _)| seen == letter) {
            continue;
        }
        if letter.is_ascii() {
            index.insert(letter as u8, counts.len());
        }
        counts.push((letter, 0));
    }

    let mut tally = |letter: u8| {
        if let Some(&i) = index.get(&letter) {
            counts[i].1 += 1;
        }
    };

    for word in words {
        if unique {
            word.letter_set().into_iter().for_each(&mut tally);
        } else {
            word.chars().iter().copied().for_each(&mut tally);
        }
    }

    match order {
        SortOrder::Descending => counts.sort_by_key(|&(_, count)| Reverse(count)),
        SortOrder::Ascending => counts.sort_by_key(|&(_, count)| count),
        SortOrder::Alphabet => {}
    }

    counts
}

/// Sum of all counts in a letter table
#[must_use]
pub fn letter_total(counts: &[(char, usize)]) -> usize {
    counts.iter().map(|&(_, count)| count).sum()
}
