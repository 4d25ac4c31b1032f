//! TUI rendering with ratatui

use super::app::{App, InputMode, MessageStyle};
use crate::core::Verdict;
use crate::output::formatters::{format_letters, format_positions};
use crate::solver::SolveEvent;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Candidates listed in the side panel
const SHOWN_CANDIDATES: usize = 12;

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    render_main_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);
    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🧙 WORDLE WIZARD - Assisted Mode")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_main_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    render_board(f, app, chunks[0]);
    render_knowledge(f, app, chunks[1]);
}

fn verdict_style(verdict: Verdict) -> Style {
    let bg = match verdict {
        Verdict::Exact => Color::Green,
        Verdict::Misplaced => Color::Yellow,
        Verdict::Excluded => Color::DarkGray,
    };
    Style::default()
        .fg(Color::Black)
        .bg(bg)
        .add_modifier(Modifier::BOLD)
}

fn tile_line(word: &str, verdicts: &[Verdict]) -> Line<'static> {
    let spans: Vec<Span> = word
        .chars()
        .zip(verdicts)
        .flat_map(|(letter, &verdict)| {
            [
                Span::styled(
                    format!(" {} ", letter.to_ascii_uppercase()),
                    verdict_style(verdict),
                ),
                Span::raw(" "),
            ]
        })
        .collect();
    Line::from(spans)
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let mut lines: Vec<Line> = Vec::new();

    if let Some(report) = &app.report {
        for event in &report.events {
            match event {
                SolveEvent::Step(step) => {
                    lines.push(tile_line(&step.guess, step.feedback.verdicts()));
                }
                SolveEvent::Solved { word, .. } => {
                    lines.push(tile_line(word, &[Verdict::Exact; crate::core::WORD_LENGTH]));
                }
                _ => {}
            }
        }
    }

    for _ in app.guesses.len()..app.config.max_guesses {
        lines.push(Line::from(Span::styled(
            " _   _   _   _   _ ",
            Style::default().fg(Color::DarkGray),
        )));
    }

    let board = Paragraph::new(lines).block(
        Block::default()
            .title(format!(" Board ({} guesses left) ", app.guesses_left()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_knowledge(f: &mut Frame, app: &App, area: Rect) {
    let suggestion = app.suggestion().map_or_else(
        || Span::raw("none"),
        |word| {
            Span::styled(
                word.to_uppercase(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
        },
    );

    let mut content = vec![Line::from(vec![Span::raw("Suggested: "), suggestion])];
    if let Some(step) = app.last_step() {
        content.push(Line::from(format!("Correct:   {}", format_positions(&step.exact))));
        content.push(Line::from(format!("Misplaced: {}", format_positions(&step.misplaced))));
        content.push(Line::from(format!("Absent:    {}", format_letters(&step.excluded))));
    }

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(" What We Know ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Percentage(60),
            Constraint::Min(5),
        ])
        .split(area);

    render_search_progress(f, app, chunks[0]);
    render_candidates(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_search_progress(f: &mut Frame, app: &App, area: Rect) {
    let (pct, label) = app.last_step().map_or_else(
        || (0.0, format!("{} words possible", app.words.len())),
        |step| {
            (
                step.eliminated_pct,
                format!(
                    "{:.2}% eliminated | {} remain",
                    step.eliminated_pct, step.remaining
                ),
            )
        },
    );

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Words Eliminated ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(pct.clamp(0.0, 100.0) as u16)
        .label(label);
    f.render_widget(gauge, area);
}

fn render_candidates(f: &mut Frame, app: &App, area: Rect) {
    let ranking = app.last_step().and_then(|step| step.ranking.as_ref());

    let items: Vec<ListItem> = match ranking {
        Some(ranking) if !ranking.is_empty() => ranking
            .iter()
            .take(SHOWN_CANDIDATES)
            .map(|rating| {
                ListItem::new(Line::from(vec![
                    Span::styled(
                        format!("{:<6}", rating.word.to_uppercase()),
                        Style::default().fg(Color::Green),
                    ),
                    Span::styled(
                        format!("{:6.2}", rating.score),
                        Style::default().fg(Color::Cyan),
                    ),
                ]))
            })
            .collect(),
        Some(_) => vec![ListItem::new("No candidates match the feedback")],
        None => vec![ListItem::new(format!("{} words possible", app.remaining()))],
    };

    let list = List::new(items).block(
        Block::default()
            .title(format!(" Candidates ({}) ", app.remaining()))
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );
    f.render_widget(list, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));
    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::GameOver => (
            " Game over | 'n' new game, 'q' quit ",
            String::new(),
            Color::Green,
        ),
        InputMode::Guessing => (
            " Your guess | Enter submit, Tab use suggestion ",
            app.input_buffer.to_uppercase(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );
    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let text = format!(
        "Games: {} | Win rate: {:.0}% | Ctrl-U undo | Ctrl-N new game | Esc quit",
        app.stats.total_games,
        app.stats.win_rate()
    );
    let status = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(status, area);
}
