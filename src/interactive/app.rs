//! TUI application state and logic
//!
//! The app owns one [`Session`] at a time plus the timers that drive its
//! reveal animation and the post-win redirect. Host chords (quit, new
//! game) are handled here; everything else is normalized into game
//! tokens and fed to the session.

use super::{keyboard, rendering};
use crate::answer::AnswerSource;
use crate::core::{MAX_GUESSES, Word};
use crate::engine::{
    Effect, Outcome, REVEAL_STEP, Session, TimerSlot, Timers, Token, present,
};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io;
use std::time::{Duration, Instant};

/// Idle poll interval when no timer is armed
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Which view is on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Game,
    Leaderboard,
}

/// End-of-session banner
#[derive(Debug, Clone)]
pub struct Banner {
    pub text: String,
    pub win: bool,
}

/// Results accumulated across games in this run
#[derive(Debug, Default, Clone)]
pub struct Stats {
    pub games_played: usize,
    pub games_won: usize,
    /// Wins by guesses taken, 1-based
    pub guess_distribution: [usize; MAX_GUESSES + 1],
}

impl Stats {
    fn record(&mut self, outcome: &Outcome) {
        self.games_played += 1;
        if let Outcome::Win { guesses_taken } = outcome {
            self.games_won += 1;
            if *guesses_taken <= MAX_GUESSES {
                self.guess_distribution[*guesses_taken] += 1;
            }
        }
    }
}

/// Application state
pub struct App {
    pub session: Session,
    pub timers: Timers,
    pub screen: Screen,
    pub banner: Option<Banner>,
    pub stats: Stats,
    pub should_quit: bool,
    source: AnswerSource,
    pool: Vec<Word>,
}

impl App {
    /// Build the app, resolving the answer source once up front
    #[must_use]
    pub fn new(source: AnswerSource, pool: Vec<Word>) -> Self {
        let answer = source.resolve(&pool);

        Self {
            session: Session::new(answer),
            timers: Timers::new(),
            screen: Screen::Game,
            banner: None,
            stats: Stats::default(),
            should_quit: false,
            source,
            pool,
        }
    }

    /// Start a fresh session
    ///
    /// Random answers are re-picked from the pool; daily and fixed
    /// answers replay the same word, so no network call happens inside
    /// the event loop.
    pub fn new_game(&mut self) {
        self.timers.cancel_all();
        self.banner = None;
        self.screen = Screen::Game;

        let answer = match self.source {
            AnswerSource::Random => self.source.resolve(&self.pool),
            AnswerSource::Daily | AnswerSource::Fixed(_) => self.session.answer().clone(),
        };

        log::debug!("new game started");
        self.session = Session::new(answer);
    }

    /// Handle a key press
    ///
    /// Host chords act on any screen: Esc and Ctrl+C quit, Ctrl+N starts
    /// a new game. Plain `n` and `q` only act once the session is over
    /// (or on the leaderboard), so they stay usable as guess letters.
    pub fn handle_key(&mut self, key: &KeyEvent, now: Instant) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.new_game();
                return;
            }
            KeyCode::Esc => {
                self.should_quit = true;
                return;
            }
            _ => {}
        }

        match self.screen {
            Screen::Leaderboard => match key.code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Char('n') => self.new_game(),
                _ => {}
            },
            Screen::Game if self.session.is_over() => match key.code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Char('n') => self.new_game(),
                _ => {}
            },
            Screen::Game => {
                if let Some(token) = Token::from_key_event(key) {
                    self.apply_token(token, now);
                }
            }
        }
    }

    /// Handle a mouse event against the frame the screen was drawn with
    pub fn handle_mouse(&mut self, mouse: &MouseEvent, frame: Rect, now: Instant) {
        if !matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)) {
            return;
        }
        if self.screen != Screen::Game || self.session.is_over() {
            return;
        }

        let layout = rendering::game_layout(frame);
        let keys_area = rendering::keyboard_keys_area(layout.keyboard);
        if let Some(key) = keyboard::key_at(keys_area, mouse.column, mouse.row) {
            self.apply_token(key.token(), now);
        }
    }

    /// Handle a fired timer slot
    pub fn handle_timer(&mut self, slot: TimerSlot, now: Instant) {
        match slot {
            TimerSlot::Reveal => {
                let effect = self.session.handle_reveal_tick();
                self.apply_effect(effect, now);
            }
            TimerSlot::Redirect => {
                self.screen = Screen::Leaderboard;
            }
        }
    }

    fn apply_token(&mut self, token: Token, now: Instant) {
        let effect = self.session.handle_token(token);
        self.apply_effect(effect, now);
    }

    fn apply_effect(&mut self, effect: Option<Effect>, now: Instant) {
        match effect {
            Some(Effect::ScheduleReveal) => {
                self.timers.schedule(TimerSlot::Reveal, REVEAL_STEP, now);
            }
            Some(Effect::SessionOver(outcome)) => self.finish(&outcome, now),
            None => {}
        }
    }

    fn finish(&mut self, outcome: &Outcome, now: Instant) {
        self.stats.record(outcome);

        let presentation = present(outcome);
        if let Some(delay) = presentation.redirect_after {
            self.timers.schedule(TimerSlot::Redirect, delay, now);
        }
        self.banner = Some(Banner {
            text: presentation.message,
            win: outcome.is_win(),
        });
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        // Fire everything due before drawing, so frames never lag a tick
        let now = Instant::now();
        while let Some(slot) = app.timers.due(now) {
            app.handle_timer(slot, now);
        }

        if app.should_quit {
            break;
        }

        terminal.draw(|f| super::rendering::ui(f, &app))?;

        // Sleep until the next deadline, or idle-poll for input
        let wait = app.timers.next_deadline().map_or(POLL_INTERVAL, |deadline| {
            deadline
                .saturating_duration_since(Instant::now())
                .min(POLL_INTERVAL)
        });

        if event::poll(wait)? {
            match event::read()? {
                Event::Key(key) => {
                    // Only process key press events (fixes Windows double-input bug)
                    if key.kind == KeyEventKind::Press {
                        app.handle_key(&key, Instant::now());
                    }
                }
                Event::Mouse(mouse) => {
                    let size = terminal.size()?;
                    let frame = Rect::new(0, 0, size.width, size.height);
                    app.handle_mouse(&mouse, frame, Instant::now());
                }
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
