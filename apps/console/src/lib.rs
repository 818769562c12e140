//! # Parcel Console Library
//!
//! Core library for the Parcel Desk console application.
//! This is the main entry point that configures and runs a session.
//!
//! ## Module Organization
//! ```text
//! parcel_console/
//! ├── lib.rs          ◄─── You are here (setup & read loop)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── session.rs  ◄─── Owns the core AppState
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs      ◄─── Parsing + dispatch
//! │   ├── catalog.rs  ◄─── list / show / back
//! │   ├── cart.rs     ◄─── add / cart / request
//! │   └── devtools.rs ◄─── devtools / accept
//! ├── screen.rs       ◄─── Serializable view snapshots
//! ├── palette.rs      ◄─── Status colours
//! ├── render.rs       ◄─── Line-mode text output
//! ├── tui/            ◄─── Full-screen ratatui console
//! └── error.rs        ◄─── Command and session error types
//! ```

pub mod commands;
pub mod error;
pub mod palette;
pub mod render;
pub mod screen;
pub mod state;
pub mod tui;

use std::io::{self, BufRead, Write};

use clap::Parser;
use is_terminal::IsTerminal;
use serde_json::json;
use tracing::{info, warn};
use tracing_subscriber::{fmt::writer::BoxMakeWriter, EnvFilter};

use commands::{Command, Outcome};
use error::{ApiError, RunError};
use screen::Screen;
use state::{ConfigState, OutputFormat, SessionState};

/// Command line flags. They win over `PARCEL_*` environment variables.
#[derive(Parser, Debug, Default)]
#[command(
    name = "parcel-console",
    about = "Mock delivery desk: browse items, request deliveries, accept them as an agent",
    version
)]
pub struct Args {
    /// Reject accepts of unknown delivery requests instead of ignoring them
    #[arg(long)]
    pub strict: bool,

    /// Output format for rendered views
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Default log directive when RUST_LOG is unset (e.g. "debug")
    #[arg(long)]
    pub log_level: Option<String>,

    /// Read one command per line even when attached to a terminal
    #[arg(long)]
    pub no_tui: bool,

    /// Never colour status badges
    #[arg(long)]
    pub no_color: bool,
}

/// Terminal capabilities of a line-mode session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineMode {
    /// Print a `> ` prompt before each read.
    pub prompt: bool,
    /// Colour status badges.
    pub color: bool,
}

/// Runs the console against stdin/stdout.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Console Startup                                   │
/// │                                                                         │
/// │  1. Load Configuration ───────────────────────────────────────────────► │
/// │     • defaults ◄── PARCEL_* env ◄── command line flags                  │
/// │                                                                         │
/// │  2. Pick a Mode ──────────────────────────────────────────────────────► │
/// │     • stdin + stdout are terminals, plain output ──► full-screen TUI    │
/// │     • otherwise ──► line mode (text or JSON)                            │
/// │                                                                         │
/// │  3. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter, written to stderr             │
/// │                                                                         │
/// │  4. Initialize Session ───────────────────────────────────────────────► │
/// │     • List view, empty cart, empty ledger                               │
/// │                                                                         │
/// │  5. Read → Execute → Render until quit or EOF                           │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run(args: Args) -> Result<(), RunError> {
    let config = load_config(&args)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let full_screen = !args.no_tui
        && config.output == OutputFormat::Plain
        && stdin.is_terminal()
        && stdout.is_terminal();

    // stderr shares the terminal with the full-screen UI
    let discard_logs = full_screen && io::stderr().is_terminal();
    init_tracing(args.log_level.as_deref(), discard_logs);
    info!(
        policy = ?config.policy,
        output = ?config.output,
        full_screen,
        "Starting Parcel Desk console"
    );

    let mut session = SessionState::new(config.policy);

    if full_screen {
        tui::run(&mut session, &config)?;
    } else {
        let mode = LineMode {
            prompt: stdin.is_terminal(),
            color: config.color && stdout.is_terminal(),
        };
        run_session(&mut session, &config, stdin.lock(), stdout.lock(), mode)?;
    }

    session.with_app(|app| {
        info!(
            commands = session.commands_run(),
            requests = app.ledger().len(),
            "Session ended"
        );
    });
    Ok(())
}

/// Applies command line flags over the environment configuration.
pub fn load_config(args: &Args) -> Result<ConfigState, RunError> {
    let mut config = ConfigState::from_env()?;

    if args.strict {
        config.policy = parcel_core::Policy::Strict;
    }
    if let Some(format) = args.format {
        config.output = format;
    }
    if args.no_color {
        config.color = false;
    }

    Ok(config)
}

/// Drives one session over arbitrary input and output.
///
/// Renders the initial list screen, then handles one command per line.
/// Returns when the operator quits or the input ends.
pub fn run_session<R, W>(
    session: &mut SessionState,
    config: &ConfigState,
    input: R,
    mut output: W,
    mode: LineMode,
) -> Result<(), RunError>
where
    R: BufRead,
    W: Write,
{
    let initial = Outcome::Rendered {
        event: None,
        screen: session.with_app(|app| Screen::capture(app, config)),
    };
    emit(&mut output, config, mode, &Ok(initial))?;

    let mut lines = input.lines();
    loop {
        if mode.prompt && config.output == OutputFormat::Plain {
            write!(output, "> ")?;
            output.flush()?;
        }

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let result = line
            .parse::<Command>()
            .and_then(|command| commands::execute(session, config, command));

        if let Err(err) = &result {
            warn!(input = %line.trim(), code = err.code.as_str(), "command rejected");
        }

        emit(&mut output, config, mode, &result)?;

        if matches!(result, Ok(Outcome::Quit)) {
            break;
        }
    }

    output.flush()?;
    Ok(())
}

fn emit<W: Write>(
    output: &mut W,
    config: &ConfigState,
    mode: LineMode,
    result: &Result<Outcome, ApiError>,
) -> Result<(), RunError> {
    match config.output {
        OutputFormat::Json => {
            let value = match result {
                Ok(Outcome::Help) => json!({ "outcome": "help", "text": render::help() }),
                Ok(outcome) => serde_json::to_value(outcome)?,
                Err(err) => json!({ "error": err }),
            };
            writeln!(output, "{}", serde_json::to_string(&value)?)?;
        }
        OutputFormat::Plain => match result {
            Ok(Outcome::Rendered { event, screen }) => {
                writeln!(output, "{}", render::screen(screen, mode.color))?;
                if let Some(text) = event.as_ref().and_then(render::notice) {
                    writeln!(output, "* {text}")?;
                }
            }
            Ok(Outcome::Help) => write!(output, "{}", render::help())?,
            Ok(Outcome::Quit) => writeln!(output, "Goodbye.")?,
            Err(err) => writeln!(output, "{}", render::error(err))?,
        },
    }
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=parcel=trace` - Show trace for parcel crates only
/// - Default: WARN, INFO for parcel crates (logs go to stderr)
///
/// With `discard` set, events are filtered as usual but written nowhere.
fn init_tracing(default_directive: Option<&str>, discard: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(default_directive.unwrap_or("warn,parcel_core=info,parcel_console=info"))
    });
    let writer = if discard {
        BoxMakeWriter::new(io::sink)
    } else {
        BoxMakeWriter::new(io::stderr)
    };

    // A second init (e.g. in tests) is not an error worth surfacing.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use parcel_core::{Policy, RequestStatus};

    fn run_script(script: &str, config: &ConfigState) -> (SessionState, String) {
        let mut session = SessionState::new(config.policy);
        let mut out = Vec::new();
        let mode = LineMode::default();
        run_session(&mut session, config, script.as_bytes(), &mut out, mode).unwrap();
        (session, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_scripted_session() {
        let script = "show 1\nadd\nadd\ncart\nrequest\ndevtools\naccept 1\nquit\nlist\n";
        let (session, out) = run_script(script, &ConfigState::default());

        assert!(out.contains("Item added to cart!"));
        assert!(out.contains("Item is already in your cart."));
        assert!(out.contains("Delivery request submitted successfully!"));
        assert!(out.contains("Cart #1 accepted for delivery."));
        assert!(out.ends_with("Goodbye.\n"));

        // `list` after quit is never read
        assert_eq!(session.commands_run(), 7);
        session.with_app(|app| {
            assert_eq!(app.ledger().get(1).unwrap().status, RequestStatus::Processing);
            assert!(app.cart().is_empty());
        });
    }

    #[test]
    fn test_errors_do_not_end_session() {
        let (session, out) = run_script("bogus\nrequest\nadd 1\n", &ConfigState::default());

        assert!(out.contains("! [INVALID_INPUT] unknown command 'bogus'"));
        assert!(out.contains("! [PRECONDITION] Cannot request delivery: the cart is empty"));
        assert_eq!(session.with_app(|app| app.cart().len()), 1);
    }

    #[test]
    fn test_json_output_one_document_per_line() {
        let config = ConfigState {
            output: OutputFormat::Json,
            policy: Policy::Strict,
            ..ConfigState::default()
        };
        let (_, out) = run_script("add 2\naccept 4\n", &config);

        let docs: Vec<serde_json::Value> = out
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(docs.len(), 3);
        assert_eq!(docs[0]["screen"]["view"], "list");
        assert_eq!(docs[1]["event"]["event"], "itemAdded");
        assert_eq!(docs[2]["error"]["code"], "NOT_FOUND");
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let (session, _) = run_script("\n   \ncart\n", &ConfigState::default());
        assert_eq!(session.commands_run(), 1);
    }

    #[test]
    fn test_flags_override_defaults() {
        let args = Args {
            strict: true,
            format: Some(OutputFormat::Json),
            no_color: true,
            ..Args::default()
        };
        let config = load_config(&args).unwrap();
        assert_eq!(config.policy, Policy::Strict);
        assert_eq!(config.output, OutputFormat::Json);
        assert!(!config.color);
    }

    #[test]
    fn test_colored_line_mode() {
        let config = ConfigState::default();
        let mut session = SessionState::new(config.policy);
        let mut out = Vec::new();
        let mode = LineMode {
            prompt: true,
            color: true,
        };
        run_session(&mut session, &config, "show 4\n".as_bytes(), &mut out, mode).unwrap();

        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("> "));
        assert!(out.contains("\u{1b}[32mDelivered"));
    }

    #[test]
    fn test_dev_tools_lists_item_count() {
        let script = "add 1\nadd 2\nrequest\ndevtools\n";
        let (_, out) = run_script(script, &ConfigState::default());
        assert!(out.contains("Items (2)"));
        assert!(!out.contains('\u{1b}'));
    }
}
