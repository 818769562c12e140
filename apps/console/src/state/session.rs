//! # Session State
//!
//! Owns the core [`AppState`] for the lifetime of one console session.
//!
//! ## Ownership
//! The console runs a single read-dispatch-render loop, so the session is
//! owned by that loop and borrowed mutably per command. No lock is needed:
//! there is exactly one writer by construction.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Session Operations                                   │
//! │                                                                         │
//! │  Operator Input           Command                 Session Access        │
//! │  ──────────────           ───────                 ──────────────        │
//! │                                                                         │
//! │  add 2 ──────────────────► cart::add() ─────────► dispatch(AddItem)    │
//! │                                                                         │
//! │  cart ───────────────────► cart::open() ────────► dispatch(ShowCart)   │
//! │                                                                         │
//! │  (render) ───────────────► Screen::capture() ───► with_app (read only) │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use parcel_core::{Action, AppState, CoreResult, Event, Policy};

/// The console's single session.
#[derive(Debug, Default)]
pub struct SessionState {
    app: AppState,
    commands_run: u64,
}

impl SessionState {
    /// Creates a fresh session: list view, empty cart, empty ledger.
    pub fn new(policy: Policy) -> Self {
        SessionState {
            app: AppState::with_policy(policy),
            commands_run: 0,
        }
    }

    /// Executes a function with read access to the app state.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let size = session.with_app(|app| app.cart().len());
    /// ```
    pub fn with_app<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&AppState) -> R,
    {
        f(&self.app)
    }

    /// Feeds one action through the core reducer.
    pub fn dispatch(&mut self, action: Action) -> CoreResult<Event> {
        self.commands_run += 1;
        self.app.apply(action)
    }

    /// Number of actions dispatched so far, successful or not.
    pub fn commands_run(&self) -> u64 {
        self.commands_run
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parcel_core::ViewKind;

    #[test]
    fn test_new_session_starts_on_list() {
        let session = SessionState::new(Policy::Permissive);
        assert_eq!(session.with_app(|app| app.view().kind()), ViewKind::List);
        assert_eq!(session.commands_run(), 0);
    }

    #[test]
    fn test_dispatch_counts_failures_too() {
        let mut session = SessionState::new(Policy::Strict);

        assert!(session.dispatch(Action::AddItem(1)).is_ok());
        assert!(session.dispatch(Action::AcceptDelivery(9)).is_err());

        assert_eq!(session.commands_run(), 2);
        assert_eq!(session.with_app(|app| app.cart().len()), 1);
    }
}
