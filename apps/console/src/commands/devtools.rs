//! # Dev Tools Commands
//!
//! The delivery agent's side: review the ledger and accept requests.

use parcel_core::{Action, Event};
use tracing::debug;

use crate::error::ApiError;
use crate::state::SessionState;

/// Opens the dev tools view.
pub fn open(session: &mut SessionState) -> Result<Event, ApiError> {
    debug!("devtools command");
    Ok(session.dispatch(Action::ShowDevTools)?)
}

/// Accepts a pending delivery request.
///
/// ## Behavior
/// - Pending request: moves to Processing
/// - Any other status: unchanged, reported in the event
/// - Unknown id: ignored, or `NOT_FOUND` with `--strict`
pub fn accept(session: &mut SessionState, cart_id: u32) -> Result<Event, ApiError> {
    debug!(cart_id, "accept command");
    Ok(session.dispatch(Action::AcceptDelivery(cart_id))?)
}
