//! Coloured printing of command results

use super::formatters::{format_letters, format_positions, outcome_line, progress_bar};
use crate::commands::{BenchmarkResult, LetterBar};
use crate::core::{Feedback, Verdict};
use crate::ranking::{Rating, RatingSpread};
use crate::solver::{PuzzleStats, SolveEvent, SolveMode, SolveReport, StepReport};
use colored::{ColoredString, Colorize};

/// Colour each letter of `guess` by its verdict
#[must_use]
pub fn colored_guess(guess: &str, feedback: &Feedback) -> String {
    guess
        .chars()
        .zip(feedback.verdicts())
        .map(|(letter, verdict)| {
            let text = format!(" {} ", letter.to_ascii_uppercase());
            let cell: ColoredString = match verdict {
                Verdict::Exact => text.black().on_green(),
                Verdict::Misplaced => text.black().on_yellow(),
                Verdict::Excluded => text.white().on_bright_black(),
            };
            cell.to_string()
        })
        .collect()
}

/// Print the narration of a solve
pub fn print_report(report: &SolveReport) {
    println!("\n{}", "─".repeat(60).cyan());
    let title = match report.mode {
        SolveMode::Autonomous => "WORDLE WIZARD",
        SolveMode::Assisted => "WORDLE WIZARD (assisted)",
    };
    println!(" {}", title.bright_cyan().bold());
    println!("{}", "─".repeat(60).cyan());

    for event in &report.events {
        match event {
            SolveEvent::WordAdmitted { word } => println!(
                "{} '{}' was not in the word list and has been added.",
                "note:".yellow().bold(),
                word
            ),
            SolveEvent::Step(step) => print_step(step, report.mode),
            SolveEvent::Solved { word, turn } => println!(
                "\n{} {}  {}",
                format!("Guess {turn}:").bold(),
                colored_guess(word, &Feedback::SOLVED),
                Feedback::SOLVED.to_emoji()
            ),
            SolveEvent::BudgetExhausted { .. }
            | SolveEvent::NoCandidates { .. }
            | SolveEvent::GuessesExhausted { .. } => {}
        }
    }

    let line = outcome_line(report);
    println!();
    if report.outcome.solved {
        println!("{}", line.green().bold());
    } else {
        println!("{}", line.red().bold());
    }
}

fn print_step(step: &StepReport, mode: SolveMode) {
    println!(
        "\n{} {}  {}",
        format!("Guess {}:", step.turn).bold(),
        colored_guess(&step.guess, &step.feedback),
        step.feedback.to_emoji()
    );

    if let Some(ranking) = &step.ranking {
        println!("  Correct positions:   {}", format_positions(&step.exact));
        println!("  Wrong positions:     {}", format_positions(&step.misplaced));
        println!("  Not in the word:     {}", format_letters(&step.excluded));
        println!(
            "  {} words ({:.2}%) eliminated, {} ({:.2}%) still possible",
            step.eliminated, step.eliminated_pct, step.remaining, step.remaining_pct
        );
        if !ranking.is_empty() {
            print_ratings(ranking, "Best candidates");
        }
        println!("  Guessed so far:      {}", step.guessed.join(", "));
    } else {
        println!("  {} words still possible", step.remaining);
    }

    match (&step.recommendation, mode) {
        (Some(word), SolveMode::Autonomous) => {
            println!("  Next guess:          {}", word.to_uppercase().bright_yellow());
        }
        (Some(word), SolveMode::Assisted) => {
            println!("  Suggested guess:     {}", word.to_uppercase().bright_yellow());
        }
        (None, _) => {}
    }
}

/// Print ratings as a two-column list with bars
pub fn print_ratings(ratings: &[Rating], title: &str) {
    let max = ratings.iter().map(|r| r.score).fold(0.0, f64::max);
    println!("  {}", title.bright_cyan());
    for rating in ratings {
        println!(
            "    {} {} {:6.2}",
            rating.word.to_uppercase(),
            progress_bar(rating.score, max, 20).green(),
            rating.score
        );
    }
}

/// Print the best, middle, and worst slices of a ranking
pub fn print_spread(spread: &RatingSpread) {
    print_ratings(&spread.best, "Highest rated");
    print_ratings(&spread.middle, "Middle of the pack");
    print_ratings(&spread.worst, "Lowest rated");
}

/// Print a letter frequency chart, vowels highlighted
pub fn print_letter_chart(chart: &[LetterBar]) {
    let max = chart.iter().map(|bar| bar.count).max().unwrap_or(0);
    println!("\n{}", "Letter frequency (words containing each letter)".bright_cyan().bold());
    for bar in chart {
        let cells = progress_bar(bar.count as f64, max as f64, 40);
        let cells = if bar.vowel { cells.yellow() } else { cells.blue() };
        println!("  {} {cells} {:5}", bar.letter.to_ascii_uppercase(), bar.count);
    }
}

/// Print an n-gram frequency table
pub fn print_grams(grams: &[(String, usize)], title: &str) {
    let max = grams.first().map_or(0, |(_, count)| *count);
    println!("\n{}", title.bright_cyan().bold());
    for (gram, count) in grams {
        println!(
            "  {:>5} {} {count:5}",
            gram.to_uppercase(),
            progress_bar(*count as f64, max as f64, 30).green()
        );
    }
}

/// Print summary statistics of a puzzle
pub fn print_stats(stats: &PuzzleStats) {
    println!("\n{}", "Puzzle statistics".bright_cyan().bold());
    println!(
        "  First guess:        {} ({} vowels, {} consonants)",
        stats.first_guess.to_uppercase(),
        stats.first_guess_mix.vowels,
        stats.first_guess_mix.consonants
    );
    println!("  Guesses used:       {}", stats.guesses_used);
    println!("  Avg exact letters:  {:.2}", stats.avg_exact);
    println!("  Avg misplaced:      {:.2}", stats.avg_misplaced);
    println!("  Avg excluded:       {:.2}", stats.avg_excluded);
    println!("  Avg words left:     {:.2}", stats.avg_remaining);
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {}",
        "BENCHMARK RESULTS:".bright_cyan().bold(),
        result.start.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!(
        "   Solved:           {} {}",
        result.solved,
        format!("({:.1}%)", result.success_rate()).green()
    );
    if result.failed > 0 {
        println!("   Failed:           {}", result.failed.to_string().red());
    }
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses).bright_yellow().bold()
    );
    println!("   Best case:        {}", result.min_guesses.to_string().green());
    println!("   Worst case:       {}", result.max_guesses.to_string().yellow());
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let most = result.distribution.values().copied().max().unwrap_or(0);
    let mut counts: Vec<(usize, usize)> = result.distribution.iter().map(|(&k, &v)| (k, v)).collect();
    counts.sort_unstable();
    for (guesses, count) in counts {
        let pct = count as f64 / result.solved.max(1) as f64 * 100.0;
        let bar = progress_bar(count as f64, most as f64, 40);
        println!("   {guesses:2}: {} {count:4} ({pct:5.1}%)", bar.green());
    }

    if !result.hardest.is_empty() {
        println!("\n😰 {}", "Hardest words:".yellow().bold());
        for (word, guesses) in result.hardest.iter().take(5) {
            println!("   {} ({guesses} guesses)", word.to_uppercase().yellow());
        }
    }
    if !result.failures.is_empty() {
        println!("\n❌ {}", "Unsolved:".red().bold());
        println!("   {}", result.failures.join(", ").to_uppercase());
    }
}
