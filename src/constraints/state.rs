//! Constraint state accumulated over the guesses of one puzzle

use crate::core::{Feedback, Verdict, WORD_LENGTH, Word};
use rustc_hash::{FxHashMap, FxHashSet};

/// Everything learned about the target so far
///
/// Positions are only ever added and excluded letters are never removed, so a
/// state can only get stricter as guesses are recorded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConstraintState {
    exact: FxHashMap<u8, Vec<usize>>,
    misplaced: FxHashMap<u8, Vec<usize>>,
    excluded: FxHashSet<u8>,
}

impl ConstraintState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluate `guess` against `target` and fold the result into the state
    ///
    /// # Examples
    /// ```
    /// use wordle_wizard::constraints::ConstraintState;
    /// use wordle_wizard::core::Word;
    ///
    /// let mut state = ConstraintState::new();
    /// let guess = Word::new("crane").unwrap();
    /// let target = Word::new("crate").unwrap();
    ///
    /// state.record(&guess, &target);
    /// assert_eq!(state.exact_positions(), [('c', 0), ('r', 1), ('a', 2), ('e', 4)]);
    /// assert_eq!(state.excluded_letters(), ['n']);
    /// ```
    pub fn record(&mut self, guess: &Word, target: &Word) -> Feedback {
        let feedback = Feedback::evaluate(guess, target);
        self.apply(guess, &feedback);
        feedback
    }

    /// Fold already computed feedback for `guess` into the state
    pub fn apply(&mut self, guess: &Word, feedback: &Feedback) {
        for (position, &verdict) in feedback.verdicts().iter().enumerate() {
            let letter = guess.char_at(position);
            match verdict {
                Verdict::Exact => insert_position(&mut self.exact, letter, position),
                Verdict::Misplaced => insert_position(&mut self.misplaced, letter, position),
                Verdict::Excluded => {
                    self.excluded.insert(letter);
                }
            }
        }
    }

    /// Letters known to sit at a position, sorted by position
    #[must_use]
    pub fn exact_positions(&self) -> Vec<(char, usize)> {
        sorted_positions(&self.exact)
    }

    /// Letters known to be in the word but not at these positions, sorted by position
    #[must_use]
    pub fn misplaced_positions(&self) -> Vec<(char, usize)> {
        sorted_positions(&self.misplaced)
    }

    /// Letters known to be absent, alphabetically
    #[must_use]
    pub fn excluded_letters(&self) -> Vec<char> {
        let mut letters: Vec<char> = self.excluded.iter().map(|&l| char::from(l)).collect();
        letters.sort_unstable();
        letters
    }

    /// Letters the target is known to contain
    #[must_use]
    pub fn known_present(&self) -> FxHashSet<u8> {
        self.exact
            .iter()
            .chain(&self.misplaced)
            .filter(|(_, positions)| !positions.is_empty())
            .map(|(&letter, _)| letter)
            .collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.exact.is_empty() && self.misplaced.is_empty() && self.excluded.is_empty()
    }

    /// Whether `word` is consistent with every recorded constraint
    ///
    /// A word is admitted when it:
    /// 1. contains no excluded letter
    /// 2. has no misplaced letter at a position where it was seen misplaced
    /// 3. contains every letter known to be present
    /// 4. has every exact letter at each of its exact positions
    #[must_use]
    pub fn admits(&self, word: &Word) -> bool {
        if self.excluded.iter().any(|&letter| word.has_letter(letter)) {
            return false;
        }

        let misplaced_ok = self.misplaced.iter().all(|(&letter, positions)| {
            positions.is_empty()
                || (word.has_letter(letter) && positions.iter().all(|&p| word.char_at(p) != letter))
        });
        if !misplaced_ok {
            return false;
        }

        self.exact
            .iter()
            .all(|(&letter, positions)| positions.iter().all(|&p| word.char_at(p) == letter))
    }
}

fn insert_position(map: &mut FxHashMap<u8, Vec<usize>>, letter: u8, position: usize) {
    debug_assert!(position < WORD_LENGTH);
    let positions = map.entry(letter).or_default();
    if !positions.contains(&position) {
        positions.push(position);
    }
}

fn sorted_positions(map: &FxHashMap<u8, Vec<usize>>) -> Vec<(char, usize)> {
    let mut pairs: Vec<(char, usize)> = map
        .iter()
        .flat_map(|(&letter, positions)| positions.iter().map(move |&p| (char::from(letter), p)))
        .collect();
    pairs.sort_unstable_by_key(|&(letter, position)| (position, letter));
    pairs
}
