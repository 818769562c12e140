//! # Application State
//!
//! The whole session in one struct, driven by a single reducer.
//!
//! ## Dispatch Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        AppState::dispatch                               │
//! │                                                                         │
//! │  Action ──► match ──► catalog / cart / ledger / router ──► Event       │
//! │                 │                                                       │
//! │                 └──► CoreError (unknown item, empty cart,              │
//! │                      unknown request under Policy::Strict)             │
//! │                                                                         │
//! │  Events replace modal alerts: the presentation layer decides how to    │
//! │  notify the operator.                                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//! ```rust
//! use chrono::Utc;
//! use parcel_core::app::{Action, AppState, Event};
//! use parcel_core::RequestStatus;
//!
//! let mut app = AppState::new();
//! app.dispatch(Action::AddItem(1), Utc::now()).unwrap();
//! let submitted = app.dispatch(Action::SubmitRequest, Utc::now()).unwrap();
//! assert_eq!(submitted, Event::RequestSubmitted { cart_id: 1, item_count: 1 });
//!
//! app.dispatch(Action::AcceptDelivery(1), Utc::now()).unwrap();
//! assert_eq!(app.ledger().get(1).unwrap().status, RequestStatus::Processing);
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::cart::{AddOutcome, Cart};
use crate::catalog::Catalog;
use crate::error::{CoreError, CoreResult};
use crate::ledger::{AcceptOutcome, Ledger};
use crate::types::RequestStatus;
use crate::view::{View, ViewKind, ViewRouter};

// =============================================================================
// Actions & Events
// =============================================================================

/// Everything the operator can do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    ShowList,
    ShowDetail(u32),
    ShowCart,
    ShowDevTools,
    AddItem(u32),
    SubmitRequest,
    AcceptDelivery(u32),
}

/// What a successful dispatch did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "camelCase")]
pub enum Event {
    /// The active view changed (or was re-entered).
    #[serde(rename_all = "camelCase")]
    ViewChanged { view: ViewKind },

    /// An add was handled. `already_in_cart` means the cart did not change.
    #[serde(rename_all = "camelCase")]
    ItemAdded { item_id: u32, already_in_cart: bool },

    /// The cart became a new ledger entry and was emptied.
    #[serde(rename_all = "camelCase")]
    RequestSubmitted { cart_id: u32, item_count: usize },

    /// A pending request moved to Processing.
    #[serde(rename_all = "camelCase")]
    DeliveryAccepted { cart_id: u32 },

    /// The request was not pending; its status is reported unchanged.
    #[serde(rename_all = "camelCase")]
    AcceptIgnored { cart_id: u32, status: RequestStatus },

    /// No request carries this id (permissive policy only).
    #[serde(rename_all = "camelCase")]
    UnknownRequestIgnored { cart_id: u32 },
}

/// How lenient the reducer is about accepting unknown requests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Policy {
    /// Unknown request ids are ignored.
    #[default]
    Permissive,
    /// Unknown request ids fail with [`CoreError::RequestNotFound`].
    Strict,
}

// =============================================================================
// App State
// =============================================================================

/// Session state: catalog, active view, cart and ledger.
///
/// Starts with an empty cart, an empty ledger and the list view.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    catalog: Catalog,
    router: ViewRouter,
    cart: Cart,
    ledger: Ledger,
    policy: Policy,
}

impl AppState {
    pub fn new() -> Self {
        AppState::with_policy(Policy::default())
    }

    pub fn with_policy(policy: Policy) -> Self {
        AppState {
            catalog: Catalog::builtin(),
            router: ViewRouter::new(),
            cart: Cart::new(),
            ledger: Ledger::new(),
            policy,
        }
    }

    /// Dispatches an action stamped with the current time.
    pub fn apply(&mut self, action: Action) -> CoreResult<Event> {
        self.dispatch(action, Utc::now())
    }

    /// Applies one action. `now` is used as the request timestamp when the
    /// action submits the cart.
    ///
    /// On error, no state has changed.
    pub fn dispatch(&mut self, action: Action, now: DateTime<Utc>) -> CoreResult<Event> {
        debug!(?action, "dispatch");

        match action {
            Action::ShowList => Ok(self.view_changed(ViewRouter::show_list)),
            Action::ShowCart => Ok(self.view_changed(ViewRouter::show_cart)),
            Action::ShowDevTools => Ok(self.view_changed(ViewRouter::show_dev_tools)),
            Action::ShowDetail(id) => {
                let item = self.catalog.require(id)?.clone();
                let view = self.router.show_detail(item);
                Ok(Event::ViewChanged { view })
            }
            Action::AddItem(id) => self.add_item(id),
            Action::SubmitRequest => self.submit_request(now),
            Action::AcceptDelivery(id) => self.accept_delivery(id),
        }
    }

    fn view_changed(&mut self, transition: fn(&mut ViewRouter) -> ViewKind) -> Event {
        Event::ViewChanged {
            view: transition(&mut self.router),
        }
    }

    fn add_item(&mut self, id: u32) -> CoreResult<Event> {
        let item = self.catalog.require(id)?;
        let outcome = self.cart.add_item(item);

        if outcome == AddOutcome::Added {
            info!(item_id = id, cart_size = self.cart.len(), "item added to cart");
        }

        Ok(Event::ItemAdded {
            item_id: id,
            already_in_cart: outcome == AddOutcome::AlreadyPresent,
        })
    }

    fn submit_request(&mut self, now: DateTime<Utc>) -> CoreResult<Event> {
        if self.cart.is_empty() {
            return Err(CoreError::EmptyCart);
        }

        let items = self.cart.take();
        let item_count = items.len();
        let cart_id = self.ledger.record(items, now).id;
        self.router.show_list();

        info!(cart_id, item_count, "delivery request submitted");
        Ok(Event::RequestSubmitted {
            cart_id,
            item_count,
        })
    }

    fn accept_delivery(&mut self, cart_id: u32) -> CoreResult<Event> {
        match self.ledger.accept(cart_id) {
            AcceptOutcome::Accepted => {
                info!(cart_id, "delivery accepted");
                Ok(Event::DeliveryAccepted { cart_id })
            }
            AcceptOutcome::Unchanged(status) => Ok(Event::AcceptIgnored { cart_id, status }),
            AcceptOutcome::NotFound => match self.policy {
                Policy::Permissive => Ok(Event::UnknownRequestIgnored { cart_id }),
                Policy::Strict => Err(CoreError::RequestNotFound(cart_id)),
            },
        }
    }

    // -------------------------------------------------------------------------
    // Read access
    // -------------------------------------------------------------------------

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn view(&self) -> &View {
        self.router.current()
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn policy(&self) -> Policy {
        self.policy
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn run(app: &mut AppState, action: Action) -> Event {
        app.dispatch(action, Utc::now()).unwrap()
    }

    #[test]
    fn test_startup_state() {
        let app = AppState::new();
        assert_eq!(app.view(), &View::List);
        assert!(app.cart().is_empty());
        assert!(app.ledger().is_empty());
        assert_eq!(app.policy(), Policy::Permissive);
    }

    #[test]
    fn test_add_same_item_twice() {
        let mut app = AppState::new();

        let first = run(&mut app, Action::AddItem(1));
        let second = run(&mut app, Action::AddItem(1));

        assert_eq!(
            first,
            Event::ItemAdded {
                item_id: 1,
                already_in_cart: false
            }
        );
        assert_eq!(
            second,
            Event::ItemAdded {
                item_id: 1,
                already_in_cart: true
            }
        );
        assert_eq!(app.cart().len(), 1);
    }

    #[test]
    fn test_add_does_not_change_view() {
        let mut app = AppState::new();
        run(&mut app, Action::ShowDetail(2));
        run(&mut app, Action::AddItem(2));
        assert_eq!(app.view().kind(), ViewKind::Detail);
    }

    #[test]
    fn test_submit_snapshots_and_empties_cart() {
        let mut app = AppState::new();
        run(&mut app, Action::AddItem(1));
        run(&mut app, Action::AddItem(2));
        run(&mut app, Action::ShowCart);

        let event = run(&mut app, Action::SubmitRequest);

        assert_eq!(event, Event::RequestSubmitted { cart_id: 1, item_count: 2 });
        assert!(app.cart().is_empty());
        assert_eq!(app.view(), &View::List);

        let ids: Vec<u32> = app.ledger().get(1).unwrap().items.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_later_cart_changes_do_not_touch_submitted_request() {
        let mut app = AppState::new();
        run(&mut app, Action::AddItem(1));
        run(&mut app, Action::SubmitRequest);
        let snapshot = app.ledger().get(1).unwrap().items.clone();

        run(&mut app, Action::AddItem(3));
        run(&mut app, Action::AddItem(4));

        assert_eq!(app.ledger().get(1).unwrap().items, snapshot);
        assert_eq!(app.cart().len(), 2);
    }

    #[test]
    fn test_submit_empty_cart_fails_without_side_effects() {
        let mut app = AppState::new();
        run(&mut app, Action::ShowCart);

        let result = app.dispatch(Action::SubmitRequest, Utc::now());

        assert_eq!(result, Err(CoreError::EmptyCart));
        assert!(app.ledger().is_empty());
        assert_eq!(app.view().kind(), ViewKind::Cart);
    }

    #[test]
    fn test_unknown_item() {
        let mut app = AppState::new();
        assert_eq!(
            app.dispatch(Action::ShowDetail(99), Utc::now()),
            Err(CoreError::ItemNotFound(99))
        );
        assert_eq!(
            app.dispatch(Action::AddItem(0), Utc::now()),
            Err(CoreError::ItemNotFound(0))
        );
        assert_eq!(app.view(), &View::List);
        assert!(app.cart().is_empty());
    }

    #[test]
    fn test_accept_twice_is_noop() {
        let mut app = AppState::new();
        run(&mut app, Action::AddItem(2));
        run(&mut app, Action::SubmitRequest);

        assert_eq!(
            run(&mut app, Action::AcceptDelivery(1)),
            Event::DeliveryAccepted { cart_id: 1 }
        );
        assert_eq!(
            run(&mut app, Action::AcceptDelivery(1)),
            Event::AcceptIgnored { cart_id: 1, status: RequestStatus::Processing }
        );
        assert_eq!(app.ledger().get(1).unwrap().status, RequestStatus::Processing);
    }

    #[test]
    fn test_accept_unknown_permissive() {
        let mut app = AppState::new();
        run(&mut app, Action::AddItem(1));
        run(&mut app, Action::SubmitRequest);
        let before = app.ledger().clone();

        let event = run(&mut app, Action::AcceptDelivery(5));

        assert_eq!(event, Event::UnknownRequestIgnored { cart_id: 5 });
        assert_eq!(app.ledger(), &before);
    }

    #[test]
    fn test_accept_unknown_strict() {
        let mut app = AppState::with_policy(Policy::Strict);
        let result = app.dispatch(Action::AcceptDelivery(5), Utc::now());
        assert_eq!(result, Err(CoreError::RequestNotFound(5)));
        assert!(app.ledger().is_empty());
    }

    #[test]
    fn test_full_scenario() {
        let mut app = AppState::new();

        run(&mut app, Action::ShowDetail(1));
        let item = app.view().selected_item().unwrap().clone();
        assert_eq!(item.name, "Electronics Package");

        run(&mut app, Action::AddItem(item.id));
        assert_eq!(app.cart().items(), &[item.clone()]);

        run(&mut app, Action::ShowCart);
        run(&mut app, Action::SubmitRequest);
        let entries = app.ledger().entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id, 1);
        assert_eq!(entries[0].items, vec![item]);
        assert_eq!(entries[0].status, RequestStatus::Pending);

        run(&mut app, Action::ShowDevTools);
        run(&mut app, Action::AcceptDelivery(1));
        assert_eq!(app.ledger().entries()[0].status, RequestStatus::Processing);
    }

    #[test]
    fn test_request_timestamp_comes_from_dispatch() {
        let mut app = AppState::new();
        let now = Utc::now();
        app.dispatch(Action::AddItem(4), now).unwrap();
        app.dispatch(Action::SubmitRequest, now).unwrap();
        assert_eq!(app.ledger().get(1).unwrap().requested_at, now);
    }

    #[test]
    fn test_event_json_shape() {
        let event = Event::ItemAdded {
            item_id: 3,
            already_in_cart: true,
        };
        let value = serde_json::to_value(event).unwrap();
        assert_eq!(value["event"], "itemAdded");
        assert_eq!(value["itemId"], 3);
        assert_eq!(value["alreadyInCart"], true);
    }
}
