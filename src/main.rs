//! Wordle Wizard - CLI
//!
//! Solves puzzles by letter-frequency coverage, advises on your own guesses, and
//! charts the statistics of a word list.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::time::Duration;
use wordle_wizard::{
    analysis::{GramPosition, find_gram, gram_freq},
    commands::{
        SolveError, WordRole, letter_chart, parse_word, random_word, rank_entries, run_benchmark,
        solve_assisted, solve_autonomous,
    },
    core::WordList,
    output::{
        print_benchmark_result, print_grams, print_letter_chart, print_ratings, print_report,
        print_spread, print_stats,
    },
    ranking::{best_opening_words, rating_spread},
    solver::{SolveConfig, SolveReport},
    wordlists::loader::{embedded, load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordle_wizard",
    about = "Wordle solver and assistant using letter-frequency coverage",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list: 'embedded' (default) or path to a newline-separated file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Guess budget per puzzle
    #[arg(short = 'm', long, global = true, default_value_t = 6)]
    max_guesses: usize,

    /// Show constraints, elimination counts and candidate rankings
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Pause between guesses, in milliseconds
    #[arg(long, global = true, default_value_t = 0)]
    pace_ms: u64,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive assisted game (default)
    Play {
        /// Hidden word to play against (random if omitted)
        #[arg(short, long)]
        target: Option<String>,
    },

    /// Let the wizard solve a puzzle on its own
    Solve {
        /// Starting guess (random if omitted)
        start: Option<String>,

        /// Target word (random if omitted)
        target: Option<String>,

        /// Print per-puzzle statistics
        #[arg(long)]
        stats: bool,
    },

    /// Replay your own guesses and get advice after each one
    Assist {
        /// Target word
        target: String,

        /// Guesses in the order they were played
        #[arg(required = true)]
        guesses: Vec<String>,

        /// Print per-puzzle statistics
        #[arg(long)]
        stats: bool,
    },

    /// Rate words by letter-frequency coverage
    Rank {
        /// Words to rate (the whole list if omitted)
        words: Vec<String>,

        /// Rescale scores so the best is 100 and the worst 0
        #[arg(long)]
        normalized: bool,

        /// Number of results to show
        #[arg(short = 'n', long, default_value_t = 20)]
        top: usize,

        /// Show the best, middle and worst K words instead
        #[arg(long, value_name = "K")]
        spread: Option<usize>,
    },

    /// Chart how many words contain each letter
    Letters,

    /// Most common prefixes or suffixes
    Grams {
        /// N-gram length
        #[arg(short = 'l', long, default_value_t = 1)]
        length: usize,

        /// Which end of the word to read
        #[arg(short, long, value_enum, default_value_t = Position::Start)]
        position: Position,

        /// Look up a single n-gram
        #[arg(short, long)]
        search: Option<String>,

        /// Number of results to show
        #[arg(short = 'n', long, default_value_t = 15)]
        top: usize,
    },

    /// Best opening words for the list
    Openers {
        /// Number of results to show
        #[arg(short = 'n', long, default_value_t = 10)]
        top: usize,
    },

    /// Solve every word in the list from one starting word
    Benchmark {
        /// Starting word (the best opener if omitted)
        #[arg(short = 'f', long)]
        first_word: Option<String>,

        /// Limit number of words to test
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Position {
    Start,
    End,
}

impl From<Position> for GramPosition {
    fn from(position: Position) -> Self {
        match position {
            Position::Start => Self::Start,
            Position::End => Self::End,
        }
    }
}

/// Load the word list named by the -w flag
fn load_wordlist(name: &str) -> Result<WordList> {
    match name {
        "embedded" => Ok(embedded()),
        path => {
            let words = load_from_file(path)
                .with_context(|| format!("failed to read word list '{path}'"))?;
            if words.is_empty() {
                bail!("word list '{path}' contains no valid words");
            }
            Ok(words)
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut words = load_wordlist(&cli.wordlist)?;
    log::debug!("word list holds {} words", words.len());

    let config = SolveConfig::default()
        .with_max_guesses(cli.max_guesses)
        .with_verbose(cli.verbose)
        .with_pace(Duration::from_millis(cli.pace_ms));

    let command = cli.command.unwrap_or(Commands::Play { target: None });

    match command {
        Commands::Play { target } => run_play_command(words, target.as_deref(), config),
        Commands::Solve {
            start,
            target,
            stats,
        } => run_solve_command(&mut words, start, target, &config, stats),
        Commands::Assist {
            target,
            guesses,
            stats,
        } => {
            let report = solve_assisted(&mut words, &guesses, &target, &config)
                .map_err(explain)
                .context("cannot replay guesses")?;
            show_report(&report, stats);
            Ok(())
        }
        Commands::Rank {
            words: entries,
            normalized,
            top,
            spread,
        } => {
            let ratings = rank_entries(&words, &entries, normalized)
                .map_err(explain)
                .context("cannot rank words")?;
            if let Some(k) = spread {
                print_spread(&rating_spread(&ratings, k));
            } else {
                print_ratings(&ratings[..top.min(ratings.len())], "Word ratings");
            }
            Ok(())
        }
        Commands::Letters => {
            print_letter_chart(&letter_chart(words.as_slice()));
            Ok(())
        }
        Commands::Grams {
            length,
            position,
            search,
            top,
        } => run_grams_command(&words, length, position.into(), search.as_deref(), top),
        Commands::Openers { top } => {
            let openers = best_opening_words(words.as_slice());
            print_ratings(&openers[..top.min(openers.len())], "Best opening words");
            Ok(())
        }
        Commands::Benchmark { first_word, limit } => {
            let start = match first_word {
                Some(word) => word,
                None => best_opening_words(words.as_slice())
                    .into_iter()
                    .next()
                    .map(|rating| rating.word)
                    .context("word list is empty")?,
            };
            println!("Benchmarking '{start}' against {} words...", words.len());
            let result = run_benchmark(&mut words, &start, limit, &config)
                .map_err(explain)
                .context("cannot run benchmark")?;
            print_benchmark_result(&result);
            Ok(())
        }
    }
}

/// Print the correction hint for rejected input and pass the error on
fn explain(err: SolveError) -> SolveError {
    eprintln!("{} {}", "hint:".yellow().bold(), err.guidance());
    err
}

fn show_report(report: &SolveReport, stats: bool) {
    print_report(report);
    if stats {
        print_stats(&report.stats());
    }
}

fn pick_random(words: &WordList) -> Result<String> {
    random_word(words)
        .map(|word| word.text().to_string())
        .context("word list is empty")
}

fn run_solve_command(
    words: &mut WordList,
    start: Option<String>,
    target: Option<String>,
    config: &SolveConfig,
    stats: bool,
) -> Result<()> {
    let start = start.map_or_else(|| pick_random(words), Ok)?;
    let target = target.map_or_else(|| pick_random(words), Ok)?;

    let report = solve_autonomous(words, &start, &target, config)
        .map_err(explain)
        .context("cannot solve puzzle")?;
    show_report(&report, stats);
    Ok(())
}

fn run_grams_command(
    words: &WordList,
    length: usize,
    position: GramPosition,
    search: Option<&str>,
    top: usize,
) -> Result<()> {
    let end = match position {
        GramPosition::Start => "prefixes",
        GramPosition::End => "suffixes",
    };

    if let Some(search) = search {
        match find_gram(words.as_slice(), length, position, search)? {
            Some((gram, count)) => println!("{} appears in {count} words", gram.to_uppercase()),
            None => println!("No word has the {end} '{}'", search.to_uppercase()),
        }
        return Ok(());
    }

    let grams = gram_freq(words.as_slice(), length, position)?;
    print_grams(&grams[..top.min(grams.len())], &format!("Most common {length}-letter {end}"));
    Ok(())
}

fn run_play_command(words: WordList, target: Option<&str>, config: SolveConfig) -> Result<()> {
    use wordle_wizard::interactive::{App, run_tui};

    let target = match target {
        Some(text) => parse_word(text, WordRole::Target)
            .map_err(explain)
            .context("cannot start game")?,
        None => random_word(&words).cloned().context("word list is empty")?,
    };

    let app = App::new(words, target, config);
    run_tui(app)
}
