//! Standalone ranking of words against a word list

use super::error::{SolveError, WordRole};
use super::solve::parse_word;
use crate::core::{Word, WordList};
use crate::ranking::{Rating, rate_words};

/// Rate user-supplied words against `word_list`
///
/// With no words, the whole list is ranked. Words are validated but not admitted
/// into the list, so they don't change the frequencies they are rated against.
///
/// # Errors
/// Returns [`SolveError::InvalidWord`] for the first entry that isn't a valid word.
pub fn rank_entries<S: AsRef<str>>(
    word_list: &WordList,
    entries: &[S],
    normalized: bool,
) -> Result<Vec<Rating>, SolveError> {
    let reference = word_list.as_slice();
    if entries.is_empty() {
        let all: Vec<&Word> = word_list.iter().collect();
        return Ok(rate_words(&all, reference, normalized));
    }

    let words: Vec<Word> = entries
        .iter()
        .enumerate()
        .map(|(i, entry)| parse_word(entry.as_ref(), WordRole::SuppliedGuess(i + 1)))
        .collect::<Result<_, _>>()?;
    let refs: Vec<&Word> = words.iter().collect();

    Ok(rate_words(&refs, reference, normalized))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    fn scenario() -> WordList {
        WordList::new(words_from_slice(&["crane", "slate", "trace", "crate", "grate"]))
    }

    #[test]
    fn empty_entries_rank_whole_list() {
        let ratings = rank_entries::<&str>(&scenario(), &[], true).unwrap();

        assert_eq!(ratings.len(), 5);
        assert_eq!(ratings[0], Rating::new("trace", 100.0));
        assert_eq!(ratings[4], Rating::new("slate", 0.0));
    }

    #[test]
    fn entries_are_rated_without_admission() {
        let list = scenario();
        let ratings = rank_entries(&list, &["Grate", "zzzzz"], false).unwrap();

        assert_eq!(ratings[0], Rating::new("grate", 76.0));
        assert_eq!(ratings[1], Rating::new("zzzzz", 0.0));
        assert_eq!(list.len(), 5);
    }

    #[test]
    fn invalid_entry_fails() {
        assert!(rank_entries(&scenario(), &["crane", "toolong"], false).is_err());
    }
}
