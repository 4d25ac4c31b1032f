//! Interactive assisted game in the terminal

pub mod app;
mod rendering;

pub use app::{App, run_tui};
