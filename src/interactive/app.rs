//! TUI application state and logic
//!
//! An assisted game: the user types guesses against a hidden target and the
//! engine reports what each guess revealed and what it would play next.

use crate::commands::{random_word, solve_assisted};
use crate::core::{WORD_LENGTH, Word, WordList};
use crate::ranking::best_opening_words;
use crate::solver::{SolveConfig, SolveEvent, SolveReport, StepReport};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;

/// Application state
pub struct App {
    pub words: WordList,
    pub config: SolveConfig,
    pub target: Word,
    pub guesses: Vec<String>,
    pub report: Option<SolveReport>,
    pub opener: Option<String>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub input_mode: InputMode,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
}

impl Statistics {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            return 0.0;
        }
        self.games_won as f64 / self.total_games as f64 * 100.0
    }
}

impl App {
    /// Start a game against `target`
    ///
    /// Every step keeps its ranking so the candidates panel has something to show,
    /// and pacing is switched off.
    #[must_use]
    pub fn new(words: WordList, target: Word, config: SolveConfig) -> Self {
        let opener = best_opening_words(words.as_slice())
            .into_iter()
            .next()
            .map(|rating| rating.word);
        let config = config.with_verbose(true).with_pace(Duration::ZERO);

        let mut app = Self {
            words,
            config,
            target,
            guesses: Vec::new(),
            report: None,
            opener,
            input_buffer: String::new(),
            messages: Vec::new(),
            stats: Statistics::default(),
            input_mode: InputMode::Guessing,
            should_quit: false,
        };
        app.add_message(
            "Guess the hidden word. After each guess I'll suggest the next one.",
            MessageStyle::Info,
        );
        app.add_message("Tab fills in the suggestion.", MessageStyle::Info);
        app
    }

    /// The word the engine would play next
    #[must_use]
    pub fn suggestion(&self) -> Option<&str> {
        match self.last_step() {
            Some(step) => step.recommendation.as_deref(),
            None => self.opener.as_deref(),
        }
    }

    /// Report of the most recent non-winning guess
    #[must_use]
    pub fn last_step(&self) -> Option<&StepReport> {
        self.report.as_ref().and_then(|report| report.steps().last())
    }

    /// Words still consistent with every guess so far
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.last_step().map_or(self.words.len(), |step| step.remaining)
    }

    #[must_use]
    pub fn guesses_left(&self) -> usize {
        self.config.max_guesses.saturating_sub(self.guesses.len())
    }

    /// Validate and play the typed guess
    pub fn submit_guess(&mut self) {
        let guess = self.input_buffer.trim().to_lowercase();
        let mut attempt = self.guesses.clone();
        attempt.push(guess.clone());

        match solve_assisted(&mut self.words, &attempt, self.target.text(), &self.config) {
            Ok(report) => {
                self.guesses = attempt;
                self.input_buffer.clear();
                if !report.admitted().is_empty() {
                    self.add_message(
                        &format!("'{}' was added to the word list", guess.to_uppercase()),
                        MessageStyle::Info,
                    );
                }
                self.report = Some(report);
                self.after_guess();
            }
            Err(err) => {
                log::debug!("rejected guess '{guess}': {err}");
                self.add_message(&err.guidance(), MessageStyle::Error);
            }
        }
    }

    fn after_guess(&mut self) {
        let Some(report) = &self.report else {
            return;
        };
        let turn = report.outcome.guesses_used;

        match report.events.last() {
            Some(SolveEvent::Solved { .. }) => {
                self.finish(true);
                let celebration = match turn {
                    1 => "🎯 First try! Extraordinary!",
                    2 => "🔥 Magnificent! Two guesses!",
                    3 => "✨ Splendid! Three guesses!",
                    4 => "👏 Great job! Four guesses!",
                    _ => "🎉 Solved!",
                };
                self.add_message(celebration, MessageStyle::Success);
                self.add_message("Press 'n' for a new game or 'q' to quit.", MessageStyle::Info);
            }
            Some(SolveEvent::BudgetExhausted { target, .. }) => {
                let text = format!("Out of guesses. The word was {}.", target.to_uppercase());
                self.finish(false);
                self.add_message(&text, MessageStyle::Error);
                self.add_message("Press 'n' for a new game or 'q' to quit.", MessageStyle::Info);
            }
            _ => {
                let remaining = self.remaining();
                self.add_message(
                    &format!("{remaining} words still possible"),
                    MessageStyle::Info,
                );
            }
        }
    }

    fn finish(&mut self, won: bool) {
        self.input_mode = InputMode::GameOver;
        self.stats.total_games += 1;
        if won {
            self.stats.games_won += 1;
        }
    }

    /// Put the suggestion in the input box
    pub fn accept_suggestion(&mut self) {
        if let Some(word) = self.suggestion().map(str::to_string) {
            self.input_buffer = word;
        }
    }

    /// Take back the last guess
    pub fn undo_last(&mut self) {
        if self.input_mode == InputMode::GameOver {
            self.add_message("The game is over. Press 'n' for a new one.", MessageStyle::Error);
            return;
        }
        if self.guesses.pop().is_none() {
            self.add_message("Nothing to undo!", MessageStyle::Error);
            return;
        }

        self.report = if self.guesses.is_empty() {
            None
        } else {
            solve_assisted(&mut self.words, &self.guesses, self.target.text(), &self.config).ok()
        };
        self.add_message("Undone!", MessageStyle::Info);
    }

    /// Start over with a random target
    pub fn new_game(&mut self) {
        if let Some(target) = random_word(&self.words) {
            self.target = target.clone();
        }
        self.guesses.clear();
        self.report = None;
        self.input_buffer.clear();
        self.messages.clear();
        self.input_mode = InputMode::Guessing;
        self.add_message("New game started!", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match (self.input_mode, key.code) {
            (_, KeyCode::Esc) => self.should_quit = true,
            (_, KeyCode::Char('c')) if ctrl => self.should_quit = true,
            (_, KeyCode::Char('n')) if ctrl => self.new_game(),
            (_, KeyCode::Char('u')) if ctrl => self.undo_last(),
            (InputMode::GameOver, KeyCode::Char('q')) => self.should_quit = true,
            (InputMode::GameOver, KeyCode::Char('n')) => self.new_game(),
            (InputMode::GameOver, _) => {}
            (InputMode::Guessing, KeyCode::Tab) => self.accept_suggestion(),
            (InputMode::Guessing, KeyCode::Char(c)) => {
                if self.input_buffer.len() < WORD_LENGTH && c.is_ascii_alphabetic() {
                    self.input_buffer.push(c.to_ascii_lowercase());
                }
            }
            (InputMode::Guessing, KeyCode::Backspace) => {
                self.input_buffer.pop();
            }
            (InputMode::Guessing, KeyCode::Enter) => self.submit_guess(),
            (InputMode::Guessing, _) => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    fn app(max_guesses: usize) -> App {
        let words = WordList::new(words_from_slice(&["crane", "slate", "trace", "crate", "grate"]));
        let config = SolveConfig::default().with_max_guesses(max_guesses);
        App::new(words, Word::new("crate").unwrap(), config)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_word(app: &mut App, word: &str) {
        for c in word.chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        app.handle_key(key(KeyCode::Enter));
    }

    #[test]
    fn opener_is_suggested_before_first_guess() {
        let app = app(6);
        assert_eq!(app.suggestion(), Some("trace"));
        assert_eq!(app.remaining(), 5);
    }

    #[test]
    fn guess_updates_suggestion() {
        let mut app = app(6);
        type_word(&mut app, "crane");

        assert_eq!(app.guesses, ["crane"]);
        assert_eq!(app.remaining(), 1);
        assert_eq!(app.suggestion(), Some("crate"));
        assert_eq!(app.input_mode, InputMode::Guessing);
    }

    #[test]
    fn tab_then_enter_wins() {
        let mut app = app(6);
        type_word(&mut app, "crane");
        app.handle_key(key(KeyCode::Tab));
        app.handle_key(key(KeyCode::Enter));

        assert_eq!(app.input_mode, InputMode::GameOver);
        assert_eq!(app.stats.games_won, 1);
    }

    #[test]
    fn short_guess_is_rejected() {
        let mut app = app(6);
        type_word(&mut app, "cra");

        assert!(app.guesses.is_empty());
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Error);
    }

    #[test]
    fn unknown_guess_is_admitted() {
        let mut app = app(6);
        type_word(&mut app, "brace");

        assert_eq!(app.guesses, ["brace"]);
        assert_eq!(app.words.len(), 6);
    }

    #[test]
    fn undo_restores_previous_state() {
        let mut app = app(6);
        type_word(&mut app, "slate");
        type_word(&mut app, "crane");
        app.handle_key(ctrl('u'));

        assert_eq!(app.guesses, ["slate"]);
        assert_eq!(app.last_step().unwrap().guess, "slate");

        app.handle_key(ctrl('u'));
        assert!(app.report.is_none());
        assert_eq!(app.suggestion(), Some("trace"));
    }

    #[test]
    fn running_out_of_guesses_ends_game() {
        let mut app = app(1);
        type_word(&mut app, "slate");

        assert_eq!(app.input_mode, InputMode::GameOver);
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 0);
        assert!(app.messages.iter().any(|m| m.text.contains("CRATE")));
    }

    #[test]
    fn new_game_resets() {
        let mut app = app(1);
        type_word(&mut app, "slate");
        app.handle_key(key(KeyCode::Char('n')));

        assert_eq!(app.input_mode, InputMode::Guessing);
        assert!(app.guesses.is_empty());
        assert!(app.words.contains(&app.target));
    }

    #[test]
    fn escape_quits() {
        let mut app = app(6);
        app.handle_key(key(KeyCode::Esc));
        assert!(app.should_quit);
    }
}
