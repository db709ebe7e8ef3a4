//! TUI rendering with ratatui
//!
//! Draws the board, banner, and on-screen keyboard. Layout math lives in
//! [`game_layout`] so mouse hit testing sees the same regions the screen
//! shows.

use super::app::{App, Screen};
use super::keyboard::{self, ScreenKey};
use crate::core::{MAX_GUESSES, Verdict, WORD_LENGTH};
use crate::engine::Phase;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use rustc_hash::FxHashMap;

/// Screen regions of the game view
pub struct GameLayout {
    pub header: Rect,
    pub board: Rect,
    pub banner: Rect,
    pub keyboard: Rect,
    pub status: Rect,
}

/// Split the full frame into the game view's regions
///
/// Shared by rendering and mouse hit testing so clicks line up with what
/// was drawn.
#[must_use]
pub fn game_layout(area: Rect) -> GameLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                               // Header
            Constraint::Length(MAX_GUESSES as u16 + 2),          // Board
            Constraint::Length(3),                               // Banner
            Constraint::Length(keyboard::ROW_COUNT as u16 + 2),  // Keyboard
            Constraint::Min(1),                                  // Status bar
        ])
        .split(area);

    GameLayout {
        header: chunks[0],
        board: chunks[1],
        banner: chunks[2],
        keyboard: chunks[3],
        status: chunks[4],
    }
}

/// The region the key rows occupy inside the keyboard block
#[must_use]
pub fn keyboard_keys_area(keyboard: Rect) -> Rect {
    keyboard.inner(Margin {
        horizontal: 1,
        vertical: 1,
    })
}

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    match app.screen {
        Screen::Game => render_game(f, app),
        Screen::Leaderboard => render_leaderboard(f, app),
    }
}

fn render_game(f: &mut Frame, app: &App) {
    let layout = game_layout(f.area());

    render_header(f, layout.header);
    render_board(f, app, layout.board);
    render_banner(f, app, layout.banner);
    render_keyboard(f, app, layout.keyboard);
    render_status(f, app, layout.status);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🟩 WORDLE")
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

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let lines: Vec<Line> = (0..MAX_GUESSES).map(|i| board_row(app, i)).collect();
    let board = Paragraph::new(lines).alignment(Alignment::Center);
    f.render_widget(board, inner);
}

/// One board row: committed rows show their verdict colors, the
/// revealing row colors only the flipped letters, the draft row shows
/// plain typed letters.
fn board_row(app: &App, index: usize) -> Line<'static> {
    let session = &app.session;
    let rows = session.rows();

    if index < rows.len() {
        let row = &rows[index];
        let verdicts = row.verdicts;
        return tiles(row.guess.letters(), |j| Some(verdicts.at(j)));
    }

    if index == rows.len() {
        match session.phase() {
            Phase::Revealing {
                shown,
                guess,
                verdicts,
            } => {
                let (shown, verdicts) = (*shown, *verdicts);
                return tiles(guess.letters(), |j| {
                    (j < shown).then_some(verdicts.at(j))
                });
            }
            Phase::Accepting => {
                let mut letters = [b' '; WORD_LENGTH];
                letters[..session.draft().len()].copy_from_slice(session.draft());
                return tiles(&letters, |_| None);
            }
            Phase::Terminal(_) => {}
        }
    }

    tiles(&[b' '; WORD_LENGTH], |_| None)
}

fn tiles<F>(letters: &[u8; WORD_LENGTH], verdict_at: F) -> Line<'static>
where
    F: Fn(usize) -> Option<Verdict>,
{
    let mut spans = Vec::with_capacity(WORD_LENGTH * 2 - 1);

    for (j, &letter) in letters.iter().enumerate() {
        spans.push(Span::styled(
            format!(" {} ", letter as char),
            tile_style(verdict_at(j)),
        ));
        if j + 1 < WORD_LENGTH {
            spans.push(Span::raw(" "));
        }
    }

    Line::from(spans)
}

fn tile_style(verdict: Option<Verdict>) -> Style {
    match verdict {
        Some(Verdict::Correct) => Style::default()
            .fg(Color::White)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        Some(Verdict::Present) => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        Some(Verdict::Absent) => Style::default().fg(Color::White).bg(Color::DarkGray),
        None => Style::default().fg(Color::White).bg(Color::Black),
    }
}

fn render_banner(f: &mut Frame, app: &App, area: Rect) {
    let Some(banner) = &app.banner else {
        return;
    };

    let color = if banner.win { Color::Yellow } else { Color::Red };
    let paragraph = Paragraph::new(banner.text.as_str())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );
    f.render_widget(paragraph, area);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    // The keyboard disappears once the session is settled
    if app.session.is_over() {
        let hint = Paragraph::new("Press 'n' for a new game or 'q' to quit")
            .style(
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded),
            );
        f.render_widget(hint, area);
        return;
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);
    f.render_widget(block, area);

    let keys_area = keyboard_keys_area(area);
    let hints = app.session.keyboard_hints();

    let mut lines = Vec::with_capacity(keyboard::ROW_COUNT);
    for keys in keyboard::rows() {
        let offset = keyboard::row_offset(keys_area.width, &keys);
        let mut spans = vec![Span::raw(" ".repeat(offset as usize))];

        for key in keys {
            spans.push(Span::styled(key.label(), key_style(key, &hints)));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
    }

    f.render_widget(Paragraph::new(lines), keys_area);
}

fn key_style(key: ScreenKey, hints: &FxHashMap<u8, Verdict>) -> Style {
    let ScreenKey::Letter(letter) = key else {
        return Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD);
    };

    match hints.get(&letter) {
        Some(&verdict) => tile_style(Some(verdict)),
        None => Style::default().fg(Color::White),
    }
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(30),
            Constraint::Percentage(45),
        ])
        .split(area);

    let guesses_text = format!(
        "Guesses: {}/{}",
        app.session.guesses_taken(),
        MAX_GUESSES
    );
    let guesses = Paragraph::new(guesses_text).alignment(Alignment::Center);
    f.render_widget(guesses, chunks[0]);

    let stats_text = format!(
        "Games: {} | Won: {}",
        app.stats.games_played, app.stats.games_won
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let help_text = match app.session.phase() {
        Phase::Accepting => "Type or click letters | Enter: submit | Esc: quit",
        Phase::Revealing { .. } => "Revealing...",
        Phase::Terminal(_) => "n: New Game | q: Quit",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

fn render_leaderboard(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Min(10),    // Results
            Constraint::Length(3),  // Status bar
        ])
        .split(f.area());

    let header = Paragraph::new("🏆 LEADERBOARD")
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Yellow)),
        );
    f.render_widget(header, chunks[0]);

    render_results(f, app, chunks[1]);

    let help = Paragraph::new("n: New Game | q: Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

fn render_results(f: &mut Frame, app: &App, area: Rect) {
    let stats = &app.stats;
    let win_rate = if stats.games_played > 0 {
        stats.games_won as f64 / stats.games_played as f64 * 100.0
    } else {
        0.0
    };

    let mut lines = vec![
        Line::from(format!("Games played: {}", stats.games_played)),
        Line::from(format!(
            "Games won:    {} ({win_rate:.0}%)",
            stats.games_won
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Guess distribution",
            Style::default().add_modifier(Modifier::BOLD),
        )),
    ];

    let max_count = stats.guess_distribution.iter().max().copied().unwrap_or(0);
    for taken in 1..=MAX_GUESSES {
        let count = stats.guess_distribution[taken];
        let bar_len = if max_count > 0 { count * 20 / max_count } else { 0 };

        lines.push(Line::from(vec![
            Span::raw(format!("{taken}: ")),
            Span::styled("█".repeat(bar_len), Style::default().fg(Color::Green)),
            Span::raw(format!(" {count}")),
        ]));
    }

    let results = Paragraph::new(lines).block(
        Block::default()
            .title(" This Session ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(results, area);
}
