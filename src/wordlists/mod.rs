//! Word lists for puzzle solving
//!
//! The default list is compiled into the binary; other lists load from files.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
