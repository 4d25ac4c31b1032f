//! Narrowing a word list to the words still consistent with a constraint state

use super::ConstraintState;
use crate::core::Word;

/// Keep the words that `state` admits and that haven't been guessed yet
///
/// Word-list order is preserved. With an empty state every un-guessed word survives.
///
/// # Examples
/// ```
/// use wordle_wizard::constraints::{ConstraintState, filter_candidates};
/// use wordle_wizard::core::Word;
///
/// let words: Vec<Word> = ["crane", "slate", "trace", "crate", "grate"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
/// let guess = Word::new("crane").unwrap();
///
/// let mut state = ConstraintState::new();
/// state.record(&guess, &Word::new("crate").unwrap());
///
/// let candidates = filter_candidates(&words, &state, &[guess]);
/// assert_eq!(candidates.len(), 1);
/// assert_eq!(candidates[0].text(), "crate");
/// ```
#[must_use]
pub fn filter_candidates<'a>(
    words: &'a [Word],
    state: &ConstraintState,
    guessed: &[Word],
) -> Vec<&'a Word> {
    words
        .iter()
        .filter(|word| !guessed.iter().any(|g| g.text() == word.text()))
        .filter(|word| state.admits(word))
        .collect()
}
