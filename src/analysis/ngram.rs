//! Prefix and suffix n-gram frequency

use super::AnalysisError;
use crate::core::{WORD_LENGTH, Word};
use rustc_hash::FxHashMap;
use std::cmp::Reverse;

/// Which end of a word an n-gram is taken from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GramPosition {
    /// The first n letters (prefix)
    Start,
    /// The last n letters (suffix)
    End,
}

impl GramPosition {
    fn slice(self, word: &Word, n: usize) -> &str {
        let text = word.text();
        match self {
            Self::Start => &text[..n],
            Self::End => &text[text.len() - n..],
        }
    }
}

/// Count how many words share each n-letter prefix or suffix
///
/// Results are ordered by descending count; grams with equal counts keep the
/// order in which they were first seen in `words`.
///
/// # Errors
/// Returns [`AnalysisError::InvalidGramLength`] unless `1 <= n <= WORD_LENGTH`.
///
/// # Examples
/// ```
/// use wordle_wizard::analysis::{GramPosition, gram_freq};
/// use wordle_wizard::core::Word;
///
/// let words: Vec<Word> = ["crane", "crate", "slate"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
///
/// let starts = gram_freq(&words, 2, GramPosition::Start).unwrap();
/// assert_eq!(starts[0], ("cr".to_string(), 2));
///
/// let ends = gram_freq(&words, 3, GramPosition::End).unwrap();
/// assert_eq!(ends[0], ("ate".to_string(), 2));
/// ```
pub fn gram_freq(
    words: &[Word],
    n: usize,
    position: GramPosition,
) -> Result<Vec<(String, usize)>, AnalysisError> {
    if n == 0 || n > WORD_LENGTH {
        return Err(AnalysisError::InvalidGramLength(n));
    }

    let mut grams: Vec<(String, usize)> = Vec::new();
    let mut index: FxHashMap<&str, usize> = FxHashMap::default();

    for word in words {
        let gram = position.slice(word, n);
        if let Some(&i) = index.get(gram) {
            grams[i].1 += 1;
        } else {
            index.insert(gram, grams.len());
            grams.push((gram.to_string(), 1));
        }
    }

    grams.sort_by_key(|(_, count)| Reverse(*count));
    Ok(grams)
}

/// Look up the count of a single n-gram
///
/// Returns `Ok(None)` when no word has that prefix/suffix.
///
/// # Errors
/// Returns [`AnalysisError::InvalidGramLength`] unless `1 <= n <= WORD_LENGTH`.
pub fn find_gram(
    words: &[Word],
    n: usize,
    position: GramPosition,
    search: &str,
) -> Result<Option<(String, usize)>, AnalysisError> {
    let search = search.to_lowercase();
    Ok(gram_freq(words, n, position)?
        .into_iter()
        .find(|(gram, _)| *gram == search))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(*t).unwrap()).collect()
    }

    #[test]
    fn single_letter_starts_descending() {
        let list = words(&["slate", "crane", "crate", "shine", "trace"]);
        let starts = gram_freq(&list, 1, GramPosition::Start).unwrap();

        assert_eq!(
            starts,
            vec![
                ("s".to_string(), 2),
                ("c".to_string(), 2),
                ("t".to_string(), 1)
            ]
        );
    }

    #[test]
    fn single_letter_ends() {
        let list = words(&["slate", "crane", "crust", "trace"]);
        let ends = gram_freq(&list, 1, GramPosition::End).unwrap();

        assert_eq!(ends[0], ("e".to_string(), 3));
        assert_eq!(ends[1], ("t".to_string(), 1));
    }

    #[test]
    fn full_length_gram_counts_words() {
        let list = words(&["crane", "crane", "slate"]);
        let grams = gram_freq(&list, 5, GramPosition::End).unwrap();

        assert_eq!(grams[0], ("crane".to_string(), 2));
    }

    #[test]
    fn invalid_lengths_rejected() {
        let list = words(&["crane"]);

        assert_eq!(
            gram_freq(&list, 0, GramPosition::Start),
            Err(AnalysisError::InvalidGramLength(0))
        );
        assert_eq!(
            gram_freq(&list, 6, GramPosition::End),
            Err(AnalysisError::InvalidGramLength(6))
        );
    }

    #[test]
    fn find_gram_hit_and_miss() {
        let list = words(&["crane", "crate", "slate"]);

        assert_eq!(
            find_gram(&list, 2, GramPosition::Start, "CR").unwrap(),
            Some(("cr".to_string(), 2))
        );
        assert_eq!(find_gram(&list, 2, GramPosition::Start, "zz").unwrap(), None);
    }

    #[test]
    fn empty_list_has_no_grams() {
        assert!(gram_freq(&[], 1, GramPosition::Start).unwrap().is_empty());
    }
}
