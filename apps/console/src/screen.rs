//! # Screen DTOs
//!
//! Serializable snapshots of the active view, built after every command.
//! The plain renderer prints them as text; `--format json` prints them as-is.

use parcel_core::{AppState, DeliveryItem, ItemStatus, RequestStatus, RequestedCart, View};
use serde::Serialize;

use crate::state::ConfigState;

/// Snapshot of whatever view is active.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "view", rename_all = "camelCase")]
pub enum Screen {
    #[serde(rename_all = "camelCase")]
    List {
        cart_size: usize,
        items: Vec<ItemRow>,
        summary: Vec<StatusCount>,
    },

    #[serde(rename_all = "camelCase")]
    Detail {
        cart_size: usize,
        item: ItemRow,
        in_cart: bool,
    },

    #[serde(rename_all = "camelCase")]
    Cart {
        cart_size: usize,
        items: Vec<ItemRow>,
        can_request: bool,
    },

    #[serde(rename_all = "camelCase")]
    DevTools {
        cart_size: usize,
        operator: String,
        pending: usize,
        processing: usize,
        requests: Vec<RequestRow>,
    },
}

/// How many catalog items carry one status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusCount {
    pub status: ItemStatus,
    pub count: usize,
}

/// One delivery item as displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemRow {
    pub id: u32,
    pub name: String,
    pub status: ItemStatus,
    pub destination: String,
    pub availability: String,
}

impl From<&DeliveryItem> for ItemRow {
    fn from(item: &DeliveryItem) -> Self {
        ItemRow {
            id: item.id,
            name: item.name.clone(),
            status: item.status,
            destination: item.destination.clone(),
            availability: item.availability.clone(),
        }
    }
}

/// One ledger entry as displayed to the delivery agent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestRow {
    pub id: u32,
    pub status: RequestStatus,
    pub can_accept: bool,
    /// Formatted with the configured date layout.
    pub requested: String,
    pub item_count: usize,
    pub items: Vec<ItemRow>,
}

impl RequestRow {
    fn from_cart(cart: &RequestedCart, config: &ConfigState) -> Self {
        RequestRow {
            id: cart.id,
            status: cart.status,
            can_accept: cart.is_pending(),
            requested: config.format_request_date(&cart.requested_at),
            item_count: cart.item_count(),
            items: cart.items.iter().map(ItemRow::from).collect(),
        }
    }
}

impl Screen {
    pub fn cart_size(&self) -> usize {
        match self {
            Screen::List { cart_size, .. }
            | Screen::Detail { cart_size, .. }
            | Screen::Cart { cart_size, .. }
            | Screen::DevTools { cart_size, .. } => *cart_size,
        }
    }

    /// Builds the snapshot for the app's active view.
    pub fn capture(app: &AppState, config: &ConfigState) -> Self {
        let cart_size = app.cart().len();

        match app.view() {
            View::List => Screen::List {
                cart_size,
                items: app.catalog().items().iter().map(ItemRow::from).collect(),
                summary: ItemStatus::ALL
                    .iter()
                    .map(|&status| StatusCount {
                        status,
                        count: app.catalog().with_status(status).count(),
                    })
                    .collect(),
            },
            View::Detail(item) => Screen::Detail {
                cart_size,
                item: ItemRow::from(item),
                in_cart: app.cart().contains(item.id),
            },
            View::Cart => Screen::Cart {
                cart_size,
                items: app.cart().items().iter().map(ItemRow::from).collect(),
                can_request: !app.cart().is_empty(),
            },
            View::DevTools => Screen::DevTools {
                cart_size,
                operator: config.operator.clone(),
                pending: app.ledger().pending().count(),
                processing: app.ledger().count(RequestStatus::Processing),
                requests: app
                    .ledger()
                    .entries()
                    .iter()
                    .map(|cart| RequestRow::from_cart(cart, config))
                    .collect(),
            },
        }
    }
}
