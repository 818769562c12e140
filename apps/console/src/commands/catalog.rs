//! # Catalog Commands
//!
//! Browsing the built-in delivery items: the list and the detail page.

use parcel_core::{Action, Event};
use tracing::debug;

use crate::error::ApiError;
use crate::state::SessionState;

/// Shows the item list (`list`, `back`).
pub fn list(session: &mut SessionState) -> Result<Event, ApiError> {
    debug!("list command");
    Ok(session.dispatch(Action::ShowList)?)
}

/// Opens the detail page of a catalog item.
///
/// ## Errors
/// `NOT_FOUND` when the id is not in the catalog; the view does not change.
pub fn show(session: &mut SessionState, item_id: u32) -> Result<Event, ApiError> {
    debug!(item_id, "show command");
    Ok(session.dispatch(Action::ShowDetail(item_id))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use parcel_core::{Policy, ViewKind};

    #[test]
    fn test_show_then_back() {
        let mut session = SessionState::new(Policy::Permissive);

        show(&mut session, 2).unwrap();
        assert_eq!(session.with_app(|app| app.view().kind()), ViewKind::Detail);

        list(&mut session).unwrap();
        assert_eq!(session.with_app(|app| app.view().kind()), ViewKind::List);
    }

    #[test]
    fn test_show_unknown_item() {
        let mut session = SessionState::new(Policy::Permissive);
        let err = show(&mut session, 12).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(session.with_app(|app| app.view().kind()), ViewKind::List);
    }
}
