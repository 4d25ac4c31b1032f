//! Word list loading
//!
//! Lists come from a newline-separated file or from the embedded default list.
//! Blank lines and entries that aren't valid puzzle words are skipped.

use super::WORDS;
use crate::analysis::{SortOrder, word_distribution};
use crate::core::{Word, WordList};
use std::fs;
use std::io;
use std::path::Path;

/// Load a word list from a file
///
/// Repeated entries keep their first position.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use wordle_wizard::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<WordList> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;

    let lines: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let repeated = word_distribution(&lines, SortOrder::Descending)
        .into_iter()
        .take_while(|&(_, count)| count > 1)
        .count();
    if repeated > 0 {
        log::debug!("{repeated} entries repeat in {}", path.display());
    }

    let mut skipped = 0;
    let words: WordList = lines
        .into_iter()
        .filter_map(|line| {
            Word::new(line)
                .inspect_err(|_| skipped += 1)
                .ok()
        })
        .collect();

    if skipped > 0 {
        log::warn!("skipped {skipped} invalid entries in {}", path.display());
    }
    log::debug!("loaded {} words from {}", words.len(), path.display());

    Ok(words)
}

/// Convert a string slice to words, skipping invalid entries
///
/// # Examples
/// ```
/// use wordle_wizard::wordlists::WORDS;
/// use wordle_wizard::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

/// The embedded default word list
#[must_use]
pub fn embedded() -> WordList {
    WordList::new(words_from_slice(WORDS))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn words_from_slice_skips_invalid() {
        let words = words_from_slice(&["crane", "toolong", "abc", "sl@te", "slate"]);

        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["crane", "slate"]);
    }

    #[test]
    fn words_from_slice_empty() {
        assert!(words_from_slice(&[]).is_empty());
    }

    #[test]
    fn embedded_list_is_complete() {
        let list = embedded();
        assert_eq!(list.len(), WORDS.len());
        assert!(list.get("crane").is_some());
    }

    #[test]
    fn load_from_file_skips_blank_and_invalid_lines() {
        let path = std::env::temp_dir().join(format!("wordle_wizard_{}.txt", std::process::id()));
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "CRANE\n\n  slate  \nnope\ncrane\ntrace").unwrap();
        drop(file);

        let list = load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        let texts: Vec<&str> = list.iter().map(Word::text).collect();
        assert_eq!(texts, ["crane", "slate", "trace"]);
    }

    #[test]
    fn load_from_missing_file_errors() {
        assert!(load_from_file("does/not/exist.txt").is_err());
    }
}
