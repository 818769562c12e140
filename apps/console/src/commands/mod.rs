//! # Console Commands Module
//!
//! Everything the operator can type, and how it reaches the core.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs       ◄─── You are here (parsing + dispatch)
//! ├── catalog.rs   ◄─── list, show, back
//! ├── cart.rs      ◄─── add, cart, request
//! └── devtools.rs  ◄─── devtools, accept
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Console Command Flow                                 │
//! │                                                                         │
//! │  stdin: "add 2"                                                         │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Command::parse ──► Command::Add(Some(2))                               │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  execute(session, config, command)                                      │
//! │      cart::add(session, Some(2)) ──► Action::AddItem(2) ──► Event      │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Outcome::Rendered { event, screen }  ──► render / JSON                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod cart;
pub mod catalog;
pub mod devtools;

use std::str::FromStr;

use parcel_core::Event;
use serde::Serialize;
use tracing::debug;

use crate::error::ApiError;
use crate::screen::Screen;
use crate::state::{ConfigState, SessionState};

/// A parsed input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    List,
    Show(u32),
    Back,
    /// `None` adds the item open in the detail view.
    Add(Option<u32>),
    Cart,
    Request,
    DevTools,
    Accept(u32),
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = ApiError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let verb = words
            .next()
            .ok_or_else(|| ApiError::invalid_input("empty command"))?
            .to_ascii_lowercase();
        let arg = words.next();

        if let Some(extra) = words.next() {
            return Err(ApiError::invalid_input(format!(
                "unexpected argument '{extra}'"
            )));
        }

        let command = match verb.as_str() {
            "list" | "ls" => Command::List,
            "show" | "details" => Command::Show(parse_id("show", "an item id", arg)?),
            "back" => Command::Back,
            "add" => Command::Add(arg.map(|a| parse_id("add", "an item id", Some(a))).transpose()?),
            "cart" => Command::Cart,
            "request" => Command::Request,
            "devtools" | "dev" => Command::DevTools,
            "accept" => Command::Accept(parse_id("accept", "a request id", arg)?),
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => {
                return Err(ApiError::invalid_input(format!(
                    "unknown command '{other}' (try 'help')"
                )))
            }
        };

        // Commands without a parameter reject one.
        let takes_arg = matches!(
            command,
            Command::Show(_) | Command::Add(_) | Command::Accept(_)
        );
        if !takes_arg {
            if let Some(arg) = arg {
                return Err(ApiError::invalid_input(format!(
                    "{verb} takes no argument, got '{arg}'"
                )));
            }
        }

        Ok(command)
    }
}

fn parse_id(verb: &str, what: &str, arg: Option<&str>) -> Result<u32, ApiError> {
    let arg = arg.ok_or_else(|| ApiError::invalid_input(format!("{verb} expects {what}")))?;
    arg.trim_start_matches('#')
        .parse()
        .map_err(|_| ApiError::invalid_input(format!("{verb} expects {what}, got '{arg}'")))
}

/// What the loop should do after a command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "camelCase")]
pub enum Outcome {
    /// Show the (possibly new) active screen, plus a notice for `event`.
    Rendered {
        #[serde(skip_serializing_if = "Option::is_none")]
        event: Option<Event>,
        screen: Screen,
    },
    /// Print the command reference.
    Help,
    /// End the session.
    Quit,
}

/// Runs one command against the session.
pub fn execute(
    session: &mut SessionState,
    config: &ConfigState,
    command: Command,
) -> Result<Outcome, ApiError> {
    debug!(?command, "execute command");

    let event = match command {
        Command::Help => return Ok(Outcome::Help),
        Command::Quit => return Ok(Outcome::Quit),
        Command::List | Command::Back => catalog::list(session)?,
        Command::Show(id) => catalog::show(session, id)?,
        Command::Add(id) => cart::add(session, id)?,
        Command::Cart => cart::open(session)?,
        Command::Request => cart::request(session)?,
        Command::DevTools => devtools::open(session)?,
        Command::Accept(id) => devtools::accept(session, id)?,
    };

    // View changes are visible from the screen itself.
    let event = match event {
        Event::ViewChanged { .. } => None,
        other => Some(other),
    };

    Ok(Outcome::Rendered {
        event,
        screen: session.with_app(|app| Screen::capture(app, config)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use parcel_core::{Policy, RequestStatus};

    fn parse(line: &str) -> Result<Command, ApiError> {
        line.parse()
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(parse("list").unwrap(), Command::List);
        assert_eq!(parse("  SHOW 3 ").unwrap(), Command::Show(3));
        assert_eq!(parse("add").unwrap(), Command::Add(None));
        assert_eq!(parse("add 4").unwrap(), Command::Add(Some(4)));
        assert_eq!(parse("accept #2").unwrap(), Command::Accept(2));
        assert_eq!(parse("exit").unwrap(), Command::Quit);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(parse("").unwrap_err().code, ErrorCode::InvalidInput);
        assert_eq!(
            parse("accept x").unwrap_err().message,
            "accept expects a request id, got 'x'"
        );
        assert_eq!(parse("show").unwrap_err().message, "show expects an item id");
        assert!(parse("cart 1").is_err());
        assert!(parse("show 1 2").is_err());
        assert!(parse("fly").unwrap_err().message.contains("unknown command"));
    }

    #[test]
    fn test_execute_scenario() {
        let config = ConfigState::default();
        let mut session = SessionState::new(Policy::Permissive);

        execute(&mut session, &config, Command::Show(1)).unwrap();
        let added = execute(&mut session, &config, Command::Add(None)).unwrap();
        assert!(matches!(
            added,
            Outcome::Rendered {
                event: Some(Event::ItemAdded { item_id: 1, already_in_cart: false }),
                screen: Screen::Detail { in_cart: true, .. },
            }
        ));

        execute(&mut session, &config, Command::Cart).unwrap();
        let submitted = execute(&mut session, &config, Command::Request).unwrap();
        assert!(matches!(
            submitted,
            Outcome::Rendered {
                event: Some(Event::RequestSubmitted { cart_id: 1, item_count: 1 }),
                screen: Screen::List { cart_size: 0, .. },
            }
        ));

        execute(&mut session, &config, Command::DevTools).unwrap();
        execute(&mut session, &config, Command::Accept(1)).unwrap();
        let status = session.with_app(|app| app.ledger().get(1).map(|c| c.status));
        assert_eq!(status, Some(RequestStatus::Processing));
    }

    #[test]
    fn test_execute_view_change_has_no_event() {
        let config = ConfigState::default();
        let mut session = SessionState::new(Policy::Permissive);

        let outcome = execute(&mut session, &config, Command::Cart).unwrap();
        assert!(matches!(outcome, Outcome::Rendered { event: None, .. }));
    }

    #[test]
    fn test_help_and_quit_do_not_touch_session() {
        let config = ConfigState::default();
        let mut session = SessionState::new(Policy::Permissive);

        assert_eq!(execute(&mut session, &config, Command::Help).unwrap(), Outcome::Help);
        assert_eq!(execute(&mut session, &config, Command::Quit).unwrap(), Outcome::Quit);
        assert_eq!(session.commands_run(), 0);
    }
}
