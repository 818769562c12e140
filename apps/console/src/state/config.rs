//! # Configuration State
//!
//! Stores console configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Command line flags (`--strict`, `--format`, `--no-color`)
//! 2. Environment variables (`PARCEL_*`)
//! 3. Defaults (this file)
//!
//! Configuration is read-only after initialization.

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local, Utc};
use parcel_core::Policy;
use thiserror::Error;

/// Default request date layout, close to an en-US `toLocaleString`.
pub const DEFAULT_DATE_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

/// Console configuration.
#[derive(Debug, Clone)]
pub struct ConfigState {
    /// How the reducer treats accepts of unknown requests.
    pub policy: Policy,

    /// chrono format string for request dates (rendered in local time).
    pub date_format: String,

    /// Role name shown in the dev tools header.
    pub operator: String,

    /// How views are printed.
    pub output: OutputFormat,

    /// Whether status badges may be coloured (still requires a terminal).
    pub color: bool,
}

/// Output format for rendered views.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text screens.
    #[default]
    Plain,

    /// One JSON document per command.
    Json,
}

/// Configuration error types.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {value}")]
    InvalidValue { name: String, value: String },
}

impl Default for ConfigState {
    fn default() -> Self {
        ConfigState {
            policy: Policy::Permissive,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            operator: "Delivery Agent".to_string(),
            output: OutputFormat::Plain,
            color: true,
        }
    }
}

impl ConfigState {
    /// Creates a new ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `PARCEL_STRICT`: `true`/`1` rejects accepts of unknown requests
    /// - `PARCEL_DATE_FORMAT`: Override the request date layout
    /// - `PARCEL_OPERATOR`: Override the dev tools role name
    /// - `NO_COLOR`: Any non-empty value turns badge colours off
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`ConfigState::from_env`] with an injectable variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ConfigState::default();

        if let Some(strict) = lookup("PARCEL_STRICT") {
            if parse_flag("PARCEL_STRICT", &strict)? {
                config.policy = Policy::Strict;
            }
        }

        if let Some(format) = lookup("PARCEL_DATE_FORMAT") {
            if !format.trim().is_empty() {
                // chrono panics while formatting with a bad specifier
                if StrftimeItems::new(&format).any(|item| matches!(item, Item::Error)) {
                    return Err(ConfigError::InvalidValue {
                        name: "PARCEL_DATE_FORMAT".to_string(),
                        value: format,
                    });
                }
                config.date_format = format;
            }
        }

        if let Some(operator) = lookup("PARCEL_OPERATOR") {
            if !operator.trim().is_empty() {
                config.operator = operator.trim().to_string();
            }
        }

        if lookup("NO_COLOR").is_some_and(|value| !value.is_empty()) {
            config.color = false;
        }

        Ok(config)
    }

    /// Formats a request timestamp for display.
    ///
    /// ## Example
    /// ```rust,ignore
    /// let config = ConfigState::default();
    /// config.format_request_date(&Utc::now()); // "10/19/2026, 3:04:05 PM"
    /// ```
    pub fn format_request_date(&self, at: &DateTime<Utc>) -> String {
        at.with_timezone(&Local).format(&self.date_format).to_string()
    }
}

fn parse_flag(name: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            name: name.to_string(),
            value: value.to_string(),
        }),
    }
}
