//! The universe of legal guesses and targets for a puzzle

use super::Word;
use rustc_hash::FxHashSet;

/// Ordered, duplicate-free list of puzzle words
///
/// The list only grows: [`WordList::admit`] appends words that were not seen before,
/// so guesses or targets missing from the loaded list never fail a lookup.
#[derive(Debug, Clone, Default)]
pub struct WordList {
    words: Vec<Word>,
    seen: FxHashSet<String>,
}

impl WordList {
    /// Build a list from words, dropping repeated entries but keeping first-seen order
    #[must_use]
    pub fn new(words: impl IntoIterator<Item = Word>) -> Self {
        let mut list = Self::default();
        for word in words {
            list.admit(word);
        }
        list
    }

    /// Append `word` if it is not already in the list
    ///
    /// Returns `true` when the word was inserted.
    pub fn admit(&mut self, word: Word) -> bool {
        if self.seen.contains(word.text()) {
            return false;
        }
        self.seen.insert(word.text().to_string());
        self.words.push(word);
        true
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.seen.contains(word.text())
    }

    /// Find a word by its text
    #[must_use]
    pub fn get(&self, text: &str) -> Option<&Word> {
        if !self.seen.contains(text) {
            return None;
        }
        self.words.iter().find(|w| w.text() == text)
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[Word] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }
}

impl FromIterator<Word> for WordList {
    fn from_iter<I: IntoIterator<Item = Word>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<'a> IntoIterator for &'a WordList {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(*t).unwrap()).collect()
    }

    #[test]
    fn new_drops_duplicates_keeping_order() {
        let list = WordList::new(words(&["crane", "slate", "crane", "trace"]));

        let texts: Vec<&str> = list.iter().map(Word::text).collect();
        assert_eq!(texts, ["crane", "slate", "trace"]);
    }

    #[test]
    fn admit_appends_only_unseen_words() {
        let mut list = WordList::new(words(&["crane", "slate"]));

        assert!(list.admit(Word::new("crate").unwrap()));
        assert!(!list.admit(Word::new("crane").unwrap()));
        assert_eq!(list.len(), 3);
        assert_eq!(list.as_slice()[2].text(), "crate");
    }

    #[test]
    fn lookup_by_text() {
        let list = WordList::new(words(&["crane", "slate"]));

        assert!(list.contains(&Word::new("slate").unwrap()));
        assert_eq!(list.get("slate").map(Word::text), Some("slate"));
        assert!(list.get("grate").is_none());
    }

    #[test]
    fn empty_list() {
        let list = WordList::default();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
    }
}
