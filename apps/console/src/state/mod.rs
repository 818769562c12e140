//! # State Module
//!
//! Manages application state for the console.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │          ┌──────────────────┐         ┌──────────────────┐              │
//! │          │  SessionState    │         │   ConfigState    │              │
//! │          │                  │         │                  │              │
//! │          │  AppState        │         │  policy          │              │
//! │          │  (view, cart,    │         │  date_format     │              │
//! │          │   ledger)        │         │  operator        │              │
//! │          └──────────────────┘         └──────────────────┘              │
//! │                                                                         │
//! │  • SessionState: mutated by one command at a time                      │
//! │  • ConfigState: Read-only after initialization                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod session;

pub use config::{ConfigError, ConfigState, OutputFormat, DEFAULT_DATE_FORMAT};
pub use session::SessionState;
