//! Word composition: vowel/consonant mix and raw word distribution

use super::SortOrder;
use rustc_hash::FxHashMap;
use std::cmp::Reverse;

/// Vowel and consonant counts of a word (repeats counted)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LetterMix {
    pub vowels: usize,
    pub consonants: usize,
}

/// Whether `letter` is a vowel; `y` counts as one when `y_is_vowel` is set
#[must_use]
pub fn is_vowel(letter: char, y_is_vowel: bool) -> bool {
    match letter.to_ascii_lowercase() {
        'a' | 'e' | 'i' | 'o' | 'u' => true,
        'y' => y_is_vowel,
        _ => false,
    }
}

/// Count vowels and consonants in `word`, ignoring anything that isn't an ASCII letter
///
/// # Examples
/// ```
/// use wordle_wizard::analysis::letter_mix;
///
/// let mix = letter_mix("rhyme", true);
/// assert_eq!((mix.vowels, mix.consonants), (2, 3));
///
/// let mix = letter_mix("rhyme", false);
/// assert_eq!((mix.vowels, mix.consonants), (1, 4));
/// ```
#[must_use]
pub fn letter_mix(word: &str, y_is_vowel: bool) -> LetterMix {
    word.chars()
        .filter(char::is_ascii_alphabetic)
        .fold(LetterMix::default(), |mut mix, letter| {
            if is_vowel(letter, y_is_vowel) {
                mix.vowels += 1;
            } else {
                mix.consonants += 1;
            }
            mix
        })
}

/// Count how often each entry appears in a raw list of words
///
/// Entries are lowercased; first-seen order breaks ties.
#[must_use]
pub fn word_distribution<S: AsRef<str>>(entries: &[S], order: SortOrder) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    let mut index: FxHashMap<String, usize> = FxHashMap::default();

    for entry in entries {
        let word = entry.as_ref().trim().to_lowercase();
        if let Some(&i) = index.get(&word) {
            counts[i].1 += 1;
        } else {
            index.insert(word.clone(), counts.len());
            counts.push((word, 1));
        }
    }

    match order {
        SortOrder::Descending => counts.sort_by_key(|(_, count)| Reverse(*count)),
        SortOrder::Ascending => counts.sort_by_key(|(_, count)| *count),
        SortOrder::Alphabet => counts.sort_by(|(a, _), (b, _)| a.cmp(b)),
    }

    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vowels_with_and_without_y() {
        assert!(is_vowel('A', false));
        assert!(is_vowel('y', true));
        assert!(!is_vowel('y', false));
        assert!(!is_vowel('t', true));
    }

    #[test]
    fn mix_counts_repeats() {
        let mix = letter_mix("geese", true);
        assert_eq!(mix, LetterMix { vowels: 3, consonants: 2 });
    }

    #[test]
    fn mix_skips_non_letters() {
        let mix = letter_mix("a-b c", true);
        assert_eq!(mix, LetterMix { vowels: 1, consonants: 2 });
    }

    #[test]
    fn distribution_counts_duplicates() {
        let entries = ["crane", "slate", "CRANE", "trace", "crane"];
        let dist = word_distribution(&entries, SortOrder::Descending);

        assert_eq!(dist[0], ("crane".to_string(), 3));
        assert_eq!(dist[1], ("slate".to_string(), 1));
        assert_eq!(dist.len(), 3);
    }

    #[test]
    fn distribution_ascending_and_alphabetical() {
        let entries = ["trace", "slate", "slate"];

        let asc = word_distribution(&entries, SortOrder::Ascending);
        assert_eq!(asc[0], ("trace".to_string(), 1));

        let alpha = word_distribution(&entries, SortOrder::Alphabet);
        assert_eq!(alpha[0].0, "slate");
    }
}
