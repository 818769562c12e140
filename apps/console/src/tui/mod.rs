//! # Full-Screen Console
//!
//! Interactive mode used when stdin and stdout are both terminals. The same
//! command grammar as line mode is typed into an input bar; every command
//! redraws the captured [`Screen`].
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │ e-Delivery                                                  Cart (1)   │
//! ├─ Delivery Items ────────────────────────────────────────────────────────┤
//! │ [1] Electronics Package                   In Transit   ◄── blue badge  │
//! │ ...                                                                     │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │ Item added to cart!                        ◄── notice / error / help   │
//! │ > show 2_                                  ◄── input bar               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Keys: printable characters edit the input, `Enter` runs it,
//! `Backspace` deletes, `Esc` or `Ctrl+C` quits.

mod ui;

use std::io;

use crossterm::{
    event::{self, Event as TermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::Backend, backend::CrosstermBackend, Terminal};
use tracing::{debug, warn};

use crate::commands::{self, Command, Outcome};
use crate::error::RunError;
use crate::render;
use crate::screen::Screen;
use crate::state::{ConfigState, SessionState};

/// What the footer shows above the input bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Hint,
    Notice(String),
    Error(String),
    Help,
}

/// Everything the full-screen UI draws.
#[derive(Debug, Clone)]
pub struct TuiState {
    screen: Screen,
    input: String,
    status: Status,
    should_quit: bool,
}

impl TuiState {
    pub fn new(session: &SessionState, config: &ConfigState) -> Self {
        TuiState {
            screen: session.with_app(|app| Screen::capture(app, config)),
            input: String::new(),
            status: Status::Hint,
            should_quit: false,
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Applies one key press.
    pub fn handle_key(&mut self, key: KeyEvent, session: &mut SessionState, config: &ConfigState) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true
            }
            KeyCode::Enter => {
                let line = std::mem::take(&mut self.input);
                if !line.trim().is_empty() {
                    self.submit(&line, session, config);
                }
            }
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Char(c) => self.input.push(c),
            _ => {}
        }
    }

    fn submit(&mut self, line: &str, session: &mut SessionState, config: &ConfigState) {
        let result = line
            .parse::<Command>()
            .and_then(|command| commands::execute(session, config, command));

        match result {
            Ok(Outcome::Rendered { event, screen }) => {
                self.screen = screen;
                self.status = event
                    .as_ref()
                    .and_then(render::notice)
                    .map_or(Status::Hint, Status::Notice);
            }
            Ok(Outcome::Help) => self.status = Status::Help,
            Ok(Outcome::Quit) => self.should_quit = true,
            Err(err) => {
                warn!(input = %line.trim(), code = err.code.as_str(), "command rejected");
                self.status = Status::Error(err.to_string());
            }
        }
    }
}

/// Runs the full-screen console until the operator quits.
pub fn run(session: &mut SessionState, config: &ConfigState) -> Result<(), RunError> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let result = event_loop(&mut terminal, session, config);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn event_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    session: &mut SessionState,
    config: &ConfigState,
) -> Result<(), RunError> {
    let mut state = TuiState::new(session, config);
    debug!("full-screen console started");

    while !state.should_quit() {
        terminal.draw(|f| ui::draw(f, &state))?;

        if let TermEvent::Key(key) = event::read()? {
            state.handle_key(key, session, config);
        }
    }
    Ok(())
}
