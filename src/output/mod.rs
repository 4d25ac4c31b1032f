//! Terminal output formatting
//!
//! The engine only produces structured reports; this module turns them into text.

pub mod display;
pub mod formatters;

pub use display::{
    colored_guess, print_benchmark_result, print_grams, print_letter_chart, print_ratings,
    print_report, print_spread, print_stats,
};
