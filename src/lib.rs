//! Wordle Wizard
//!
//! A Wordle solver and assistant built on letter-frequency coverage. Each turn the
//! feedback is folded into a constraint state, the word list is filtered to the
//! words still possible, and the survivors are rated by how much of the list's
//! letter mass they cover.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_wizard::commands::solve_autonomous;
//! use wordle_wizard::solver::SolveConfig;
//! use wordle_wizard::wordlists::loader::embedded;
//!
//! let mut words = embedded();
//! let report = solve_autonomous(&mut words, "slate", "crate", &SolveConfig::default()).unwrap();
//!
//! assert!(report.outcome.solved);
//! assert_eq!(report.outcome.final_word, "crate");
//! ```

// Core domain types
pub mod core;

// Letter and n-gram frequency tables
pub mod analysis;

// Coverage ratings and recommendation
pub mod ranking;

// Feedback accumulation and candidate filtering
pub mod constraints;

// Solve loop
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
