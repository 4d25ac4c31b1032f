//! Letter-coverage rating of words
//!
//! A word's rating is the share of the reference list's letter-frequency mass
//! that its distinct letters cover:
//!
//! rating = Σ count(letter) over distinct letters of the word / Σ count(all letters) × 100
//!
//! where `count` is the unique-per-word letter count of the reference list.

use crate::analysis::{SortOrder, letter_counts, letter_total};
use crate::core::{ALPHABET, WORD_LENGTH, Word};
use rustc_hash::FxHashMap;
use std::fmt;

/// A word and its rating
#[derive(Debug, Clone, PartialEq)]
pub struct Rating {
    pub word: String,
    pub score: f64,
}

impl Rating {
    #[must_use]
    pub fn new(word: impl Into<String>, score: f64) -> Self {
        Self {
            word: word.into(),
            score,
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.2})", self.word, self.score)
    }
}

/// Round to two decimal places
#[inline]
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Per-letter weights of a reference list
struct LetterWeights {
    counts: FxHashMap<u8, usize>,
    total: usize,
}

impl LetterWeights {
    fn of(reference: &[Word]) -> Self {
        let table = letter_counts(reference, ALPHABET, true, SortOrder::Descending);
        let total = letter_total(&table);
        let counts = table
            .into_iter()
            .map(|(letter, count)| (letter as u8, count))
            .collect();
        Self { counts, total }
    }

    fn score(&self, word: &Word) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        let covered: usize = word
            .letter_set()
            .iter()
            .filter_map(|letter| self.counts.get(letter))
            .sum();
        round2(covered as f64 / self.total as f64 * 100.0)
    }
}

/// Rate `words_to_rate` against the letter frequencies of `reference`
///
/// Results are sorted by descending score; equal scores keep input order.
/// With `normalized`, scores are rescaled so the best word is 100 and the worst is 0.
/// When every score is equal the normalized scores are all 0, except that a single
/// word always normalizes to 100.
///
/// # Examples
/// ```
/// use wordle_wizard::core::Word;
/// use wordle_wizard::ranking::rate_words;
///
/// let list: Vec<Word> = ["crane", "slate", "trace", "crate", "grate"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
/// let refs: Vec<&Word> = list.iter().collect();
///
/// let ratings = rate_words(&refs, &list, false);
/// assert_eq!(ratings[0].word, "trace");
/// assert_eq!(ratings[0].score, 84.0);
///
/// let normalized = rate_words(&refs, &list, true);
/// assert_eq!(normalized[0].score, 100.0);
/// assert_eq!(normalized.last().unwrap().score, 0.0);
/// ```
#[must_use]
pub fn rate_words(words_to_rate: &[&Word], reference: &[Word], normalized: bool) -> Vec<Rating> {
    let weights = LetterWeights::of(reference);

    let mut ratings: Vec<Rating> = words_to_rate
        .iter()
        .map(|word| Rating::new(word.text(), weights.score(word)))
        .collect();
    ratings.sort_by(|a, b| b.score.total_cmp(&a.score));

    if normalized {
        normalize(&mut ratings);
    }

    ratings
}

/// Rate a slice of words against a reference list
///
/// Convenience wrapper over [`rate_words`] for callers holding owned words.
#[must_use]
pub fn rank_words(words: &[Word], reference: &[Word], normalized: bool) -> Vec<Rating> {
    let refs: Vec<&Word> = words.iter().collect();
    rate_words(&refs, reference, normalized)
}

/// Rescale sorted ratings onto 0..=100
fn normalize(ratings: &mut [Rating]) {
    if let [only] = &mut *ratings {
        only.score = 100.0;
        return;
    }

    let (Some(max), Some(min)) = (ratings.first(), ratings.last()) else {
        return;
    };
    let (max, min) = (max.score, min.score);
    let span = max - min;

    for rating in ratings {
        rating.score = if span > 0.0 {
            round2((rating.score - min) / span * 100.0)
        } else {
            0.0
        };
    }
}

/// Best opening words for a list
///
/// Takes the most frequent letters of the list (one per letter slot) and keeps only
/// words that contain all of them. If no word does, the least frequent of those
/// letters is dropped and the search repeats. Survivors are returned with their raw
/// ratings, best first.
#[must_use]
pub fn best_opening_words(words: &[Word]) -> Vec<Rating> {
    let table = letter_counts(words, ALPHABET, true, SortOrder::Descending);

    for size in (1..=WORD_LENGTH).rev() {
        let top: Vec<u8> = table
            .iter()
            .take(size)
            .map(|&(letter, _)| letter as u8)
            .collect();

        let matches: Vec<&Word> = words
            .iter()
            .filter(|word| top.iter().all(|&letter| word.has_letter(letter)))
            .collect();

        if !matches.is_empty() {
            log::debug!(
                "{} opening words cover the top {size} letters",
                matches.len()
            );
            return rate_words(&matches, words, false);
        }
    }

    Vec::new()
}

/// Top, middle, and bottom slices of a ranking
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RatingSpread {
    pub best: Vec<Rating>,
    pub middle: Vec<Rating>,
    pub worst: Vec<Rating>,
}

/// Take the best `k`, middle `k`, and worst `k` entries of a sorted ranking
///
/// Slices may overlap when the ranking holds fewer than `3 * k` entries.
#[must_use]
pub fn rating_spread(ratings: &[Rating], k: usize) -> RatingSpread {
    let k = k.min(ratings.len());
    let mid_start = (ratings.len() - k) / 2;

    RatingSpread {
        best: ratings[..k].to_vec(),
        middle: ratings[mid_start..mid_start + k].to_vec(),
        worst: ratings[ratings.len() - k..].to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(*t).unwrap()).collect()
    }

    fn scenario() -> Vec<Word> {
        words(&["crane", "slate", "trace", "crate", "grate"])
    }

    fn scores(ratings: &[Rating]) -> Vec<(&str, f64)> {
        ratings.iter().map(|r| (r.word.as_str(), r.score)).collect()
    }

    #[test]
    fn raw_scores_follow_coverage_formula() {
        let list = scenario();
        let ratings = rank_words(&list, &list, false);

        // Unique letter mass of the list is 25: c3 r4 a5 n1 e5 s1 l1 t4 g1
        assert_eq!(
            scores(&ratings),
            vec![
                ("trace", 84.0),
                ("crate", 84.0),
                ("grate", 76.0),
                ("crane", 72.0),
                ("slate", 64.0)
            ]
        );
    }

    #[test]
    fn repeated_letters_count_once() {
        let list = words(&["geese", "eerie"]);
        let ratings = rank_words(&words(&["geese"]), &list, false);

        // e2 + g1 + s1 over a total of e2 g1 s1 r1 i1 = 6
        assert_eq!(ratings[0].score, 66.67);
    }

    #[test]
    fn normalized_spans_zero_to_hundred() {
        let list = scenario();
        let ratings = rank_words(&list, &list, true);

        assert_eq!(ratings[0].score, 100.0);
        assert_eq!(ratings[1].score, 100.0);
        assert_eq!(ratings[2], Rating::new("grate", 60.0));
        assert_eq!(ratings[3], Rating::new("crane", 40.0));
        assert_eq!(ratings[4].score, 0.0);
    }

    #[test]
    fn normalized_all_equal_scores_are_zero() {
        let list = scenario();
        let ratings = rank_words(&words(&["least", "slate", "stale"]), &list, true);

        assert!(ratings.iter().all(|r| r.score == 0.0));
        assert_eq!(ratings.len(), 3);
    }

    #[test]
    fn normalized_single_word_is_hundred() {
        let list = scenario();
        let ratings = rank_words(&words(&["crane"]), &list, true);

        assert_eq!(ratings, vec![Rating::new("crane", 100.0)]);
    }

    #[test]
    fn empty_inputs() {
        let list = scenario();
        assert!(rank_words(&[], &list, true).is_empty());

        let ratings = rank_words(&list, &[], false);
        assert!(ratings.iter().all(|r| r.score == 0.0));
    }

    #[test]
    fn opening_words_cover_top_letters() {
        let list = scenario();
        let openers = best_opening_words(&list);

        // Top five letters are a, e, r, t, c: only the anagrams cover all of them
        assert_eq!(scores(&openers), vec![("trace", 84.0), ("crate", 84.0)]);
    }

    #[test]
    fn opening_words_fall_back_to_fewer_letters() {
        let list = words(&["abcdx", "abcey", "abfgz"]);
        let openers = best_opening_words(&list);

        // No word has all of a, b, c, d, e; only one has a, b, c, d
        assert_eq!(openers.len(), 1);
        assert_eq!(openers[0].word, "abcdx");
    }

    #[test]
    fn spread_slices() {
        let ratings: Vec<Rating> = (0..9)
            .map(|i| Rating::new(format!("w{i}"), f64::from(9 - i)))
            .collect();
        let spread = rating_spread(&ratings, 3);

        assert_eq!(spread.best[0].word, "w0");
        assert_eq!(spread.middle[0].word, "w3");
        assert_eq!(spread.worst[2].word, "w8");
    }

    #[test]
    fn spread_of_short_ranking() {
        let ratings = vec![Rating::new("crane", 1.0)];
        let spread = rating_spread(&ratings, 5);

        assert_eq!(spread.best, ratings);
        assert_eq!(spread.middle, ratings);
        assert_eq!(spread.worst, ratings);
    }
}
