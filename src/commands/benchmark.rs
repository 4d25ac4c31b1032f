//! Whole-list benchmark
//!
//! Solves many targets autonomously from one starting word and summarises how
//! many guesses each took. Puzzles are independent, so they run in parallel.

use super::error::{SolveError, WordRole};
use super::solve::parse_word;
use crate::core::{Word, WordList};
use crate::solver::{RankedSource, SolveConfig, Solver};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::cmp::Reverse;
use std::time::{Duration, Instant};

/// Result of one benchmarked puzzle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleResult {
    pub target: String,
    pub guesses: usize,
    pub solved: bool,
}

/// Summary of a benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub start: String,
    pub total_words: usize,
    pub solved: usize,
    pub failed: usize,
    /// Solved puzzles keyed by the number of guesses they took
    pub distribution: FxHashMap<usize, usize>,
    /// Mean guesses over solved puzzles
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    /// Solved words that took the most guesses, hardest first
    pub hardest: Vec<(String, usize)>,
    pub failures: Vec<String>,
    pub duration: Duration,
}

impl BenchmarkResult {
    fn from_results(start: &Word, results: &[PuzzleResult], duration: Duration) -> Self {
        let solved: Vec<&PuzzleResult> = results.iter().filter(|r| r.solved).collect();

        let mut distribution: FxHashMap<usize, usize> = FxHashMap::default();
        for result in &solved {
            *distribution.entry(result.guesses).or_insert(0) += 1;
        }

        let total_guesses: usize = solved.iter().map(|r| r.guesses).sum();
        let average_guesses = if solved.is_empty() {
            0.0
        } else {
            total_guesses as f64 / solved.len() as f64
        };

        let mut hardest: Vec<(String, usize)> = solved
            .iter()
            .map(|r| (r.target.clone(), r.guesses))
            .collect();
        hardest.sort_by_key(|(_, guesses)| Reverse(*guesses));
        hardest.truncate(10);

        Self {
            start: start.text().to_string(),
            total_words: results.len(),
            solved: solved.len(),
            failed: results.len() - solved.len(),
            distribution,
            average_guesses,
            min_guesses: solved.iter().map(|r| r.guesses).min().unwrap_or(0),
            max_guesses: solved.iter().map(|r| r.guesses).max().unwrap_or(0),
            hardest,
            failures: results
                .iter()
                .filter(|r| !r.solved)
                .map(|r| r.target.clone())
                .collect(),
            duration,
        }
    }

    #[must_use]
    pub fn success_rate(&self) -> f64 {
        if self.total_words == 0 {
            return 0.0;
        }
        self.solved as f64 / self.total_words as f64 * 100.0
    }
}

/// Solve every target autonomously from `start`
///
/// `start` is admitted into `word_list` if missing. Targets run in parallel over a
/// shared read-only list; pacing is ignored. `limit` caps how many targets are solved.
///
/// # Errors
/// Returns [`SolveError::InvalidWord`] if `start` is not a valid word.
///
/// # Panics
/// Panics if the progress bar template is malformed (it is a fixed literal).
pub fn run_benchmark(
    word_list: &mut WordList,
    start: &str,
    limit: Option<usize>,
    config: &SolveConfig,
) -> Result<BenchmarkResult, SolveError> {
    let start = parse_word(start, WordRole::Guess)?;
    if word_list.admit(start.clone()) {
        log::warn!("'{start}' is not in the word list; adding it");
    }

    let word_list: &WordList = word_list;
    let targets: Vec<&Word> = word_list
        .iter()
        .take(limit.unwrap_or(word_list.len()))
        .collect();
    let config = SolveConfig {
        pace: Duration::ZERO,
        ..*config
    };
    let solver = Solver::new(word_list, config);

    log::info!("benchmarking '{start}' over {} targets", targets.len());

    let pb = ProgressBar::new(targets.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .expect("progress template is valid")
            .progress_chars("█▓▒░"),
    );

    let started = Instant::now();
    let results: Vec<PuzzleResult> = targets
        .par_iter()
        .map(|&target| {
            let report = solver.run(start.clone(), target, RankedSource);
            pb.inc(1);
            PuzzleResult {
                target: target.text().to_string(),
                guesses: report.outcome.guesses_used,
                solved: report.outcome.solved,
            }
        })
        .collect();
    pb.finish_with_message("done");

    Ok(BenchmarkResult::from_results(&start, &results, started.elapsed()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::{embedded, words_from_slice};

    #[test]
    fn benchmark_small_list() {
        let mut list = WordList::new(words_from_slice(&[
            "crane", "slate", "trace", "crate", "grate", "irate", "audio",
        ]));
        let config = SolveConfig::default().with_max_guesses(10);
        let result = run_benchmark(&mut list, "slate", None, &config).unwrap();

        assert_eq!(result.total_words, 7);
        assert_eq!(result.solved, 7);
        assert_eq!(result.min_guesses, 1);
        assert_eq!(result.distribution.get(&1), Some(&1));
        assert_eq!(result.distribution.values().sum::<usize>(), result.solved);
        assert!(result.average_guesses >= 1.0);
        assert!(result.failures.is_empty());
    }

    #[test]
    fn benchmark_respects_limit_and_budget() {
        let mut list = embedded();
        let config = SolveConfig::default();
        let result = run_benchmark(&mut list, "crane", Some(25), &config).unwrap();

        assert_eq!(result.total_words, 25);
        assert_eq!(result.solved + result.failed, 25);
        assert!(result.max_guesses <= 6);
        assert!(result.hardest.windows(2).all(|pair| pair[0].1 >= pair[1].1));
    }

    #[test]
    fn benchmark_rejects_invalid_start() {
        let mut list = embedded();
        assert!(run_benchmark(&mut list, "xx", Some(1), &SolveConfig::default()).is_err());
    }

    #[test]
    fn empty_results_summarise_to_zero() {
        let start = Word::new("crane").unwrap();
        let result = BenchmarkResult::from_results(&start, &[], Duration::ZERO);

        assert_eq!(result.total_words, 0);
        assert_eq!(result.average_guesses, 0.0);
        assert_eq!(result.success_rate(), 0.0);
    }
}
