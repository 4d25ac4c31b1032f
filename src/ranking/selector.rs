//! Picking one recommendation out of a ranking
//!
//! Among the words sharing the top raw rating, prefer one that starts with a
//! common first letter and ends with a common last letter of the reference list.

use super::Rating;
use crate::analysis::{GramPosition, gram_freq};
use crate::core::Word;

/// How many of the most frequent first/last letters the tie-break considers
pub const TIEBREAK_BREADTH: usize = 10;

/// Select the recommended word from raw (unnormalized) ratings
///
/// Start letters are tried in frequency order, then end letters in frequency order,
/// then the tied words in ranking order; the first word matching both wins. If no
/// tied word matches, the first tied word wins. Returns `None` for an empty ranking.
///
/// # Examples
/// ```
/// use wordle_wizard::core::Word;
/// use wordle_wizard::ranking::{rank_words, select_best};
///
/// let list: Vec<Word> = ["least", "slate", "stale", "steal"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
///
/// // All four are anagrams and tie; "s...e" has the most common ends
/// let ratings = rank_words(&list, &list, false);
/// assert_eq!(select_best(&ratings, &list).unwrap().word, "slate");
/// ```
#[must_use]
pub fn select_best<'a>(ratings: &'a [Rating], reference: &[Word]) -> Option<&'a Rating> {
    let top = ratings
        .iter()
        .map(|r| r.score)
        .max_by(f64::total_cmp)?;

    let tied: Vec<&Rating> = ratings.iter().filter(|r| r.score == top).collect();
    if let [only] = tied.as_slice() {
        return Some(*only);
    }

    let starts = frequent_letters(reference, GramPosition::Start);
    let ends = frequent_letters(reference, GramPosition::End);

    starts
        .iter()
        .flat_map(|start| ends.iter().map(move |end| (start, end)))
        .find_map(|(start, end)| {
            tied.iter()
                .find(|r| r.word.starts_with(start.as_str()) && r.word.ends_with(end.as_str()))
        })
        .or_else(|| tied.first())
        .copied()
}

/// The most frequent single letters at one end of the reference words
fn frequent_letters(reference: &[Word], position: GramPosition) -> Vec<String> {
    gram_freq(reference, 1, position)
        .unwrap_or_default()
        .into_iter()
        .take(TIEBREAK_BREADTH)
        .map(|(gram, _)| gram)
        .collect()
}
