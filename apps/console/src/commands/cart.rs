//! # Cart Commands
//!
//! Console commands for building and submitting the cart.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────────┐                    │
//! │  │  Empty   │────►│ In Cart  │────►│ Ledger entry │                    │
//! │  │  Cart    │     │          │     │  (Pending)   │                    │
//! │  └──────────┘     └──────────┘     └──────────────┘                    │
//! │       ▲                │                  │                             │
//! │       │           add [<id>]           request                          │
//! │       │                                   │                             │
//! │       └───────────────────────────────────┘                            │
//! │                    (cart emptied, back to list)                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use parcel_core::{Action, Event};
use tracing::{debug, warn};

use crate::error::ApiError;
use crate::state::SessionState;

/// Adds an item to the cart.
///
/// ## Behavior
/// - `add <id>`: adds that catalog item from any view
/// - `add`: adds the item open in the detail view
/// - Adding an item already in the cart changes nothing; the returned event
///   says so instead of claiming success
pub fn add(session: &mut SessionState, item_id: Option<u32>) -> Result<Event, ApiError> {
    let item_id = match item_id {
        Some(id) => id,
        None => session
            .with_app(|app| app.view().selected_item().map(|item| item.id))
            .ok_or_else(|| {
                warn!("add without id outside the detail view");
                ApiError::invalid_input("add expects an item id unless an item is open")
            })?,
    };
    debug!(item_id, "add command");

    Ok(session.dispatch(Action::AddItem(item_id))?)
}

/// Opens the cart view.
pub fn open(session: &mut SessionState) -> Result<Event, ApiError> {
    debug!("cart command");
    Ok(session.dispatch(Action::ShowCart)?)
}

/// Submits the cart as a new delivery request.
///
/// ## Errors
/// `PRECONDITION` when the cart is empty; nothing is recorded.
pub fn request(session: &mut SessionState) -> Result<Event, ApiError> {
    debug!("request command");
    Ok(session.dispatch(Action::SubmitRequest)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use parcel_core::Policy;

    #[test]
    fn test_add_uses_open_item() {
        let mut session = SessionState::new(Policy::Permissive);
        session.dispatch(Action::ShowDetail(3)).unwrap();

        let event = add(&mut session, None).unwrap();

        assert_eq!(event, Event::ItemAdded { item_id: 3, already_in_cart: false });
    }

    #[test]
    fn test_add_without_id_on_list_fails() {
        let mut session = SessionState::new(Policy::Permissive);
        let err = add(&mut session, None).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput);
        assert_eq!(session.commands_run(), 0);
    }

    #[test]
    fn test_add_twice_reports_duplicate() {
        let mut session = SessionState::new(Policy::Permissive);
        add(&mut session, Some(1)).unwrap();
        let event = add(&mut session, Some(1)).unwrap();

        assert_eq!(event, Event::ItemAdded { item_id: 1, already_in_cart: true });
        assert_eq!(session.with_app(|app| app.cart().len()), 1);
    }

    #[test]
    fn test_request_empty_cart() {
        let mut session = SessionState::new(Policy::Permissive);
        open(&mut session).unwrap();

        let err = request(&mut session).unwrap_err();

        assert_eq!(err.code, ErrorCode::Precondition);
        assert!(session.with_app(|app| app.ledger().is_empty()));
    }

    #[test]
    fn test_request_moves_cart_into_ledger() {
        let mut session = SessionState::new(Policy::Permissive);
        add(&mut session, Some(1)).unwrap();
        add(&mut session, Some(2)).unwrap();

        request(&mut session).unwrap();

        session.with_app(|app| {
            assert!(app.cart().is_empty());
            let ids: Vec<u32> = app.ledger().entries()[0].items.iter().map(|i| i.id).collect();
            assert_eq!(ids, vec![1, 2]);
        });
    }
}
