//! # Parcel Console Entry Point
//!
//! ## Application Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Parcel Desk Console                              │
//! │                                                                         │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                      Terminal (stdin/stdout)                     │  │
//! │  │    list · show · add · cart · request · devtools · accept        │  │
//! │  └──────────────────────────────┬───────────────────────────────────┘  │
//! │                                 ▼                                       │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                    Rust Shell (this crate)                       │  │
//! │  │                                                                  │  │
//! │  │  main.rs ────► Parses flags                                      │  │
//! │  │  lib.rs ─────► Logging, config, read loop                        │  │
//! │  │  commands/ ──► Input → core Action                               │  │
//! │  │  state/ ─────► SessionState, ConfigState                         │  │
//! │  └──────────────────────────────┬───────────────────────────────────┘  │
//! │                                 ▼                                       │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                    parcel-core (in memory only)                  │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use clap::Parser;
use parcel_console::Args;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // The actual setup is in lib.rs for better testability
    parcel_console::run(Args::parse())?;
    Ok(())
}
