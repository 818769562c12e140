//! # View Router
//!
//! Tracks which of the four screens is active.
//!
//! ```text
//!            show_detail(item)
//!   ┌──────┐ ───────────────► ┌──────────────┐
//!   │ List │                  │ Detail(item) │
//!   └──────┘ ◄─────────────── └──────────────┘
//!    ▲  ▲       show_list
//!    │  │ show_list                  show_cart / show_dev_tools
//!    │  └──────────── ┌──────┐ ◄──── from any state
//!    │                │ Cart │
//!    │  show_list     └──────┘
//!    └─────────────── ┌──────────┐
//!                     │ DevTools │
//!                     └──────────┘
//! ```
//!
//! Every transition replaces the whole [`View`], so the payload of the
//! previous screen (e.g. the selected item) cannot outlive it.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::types::DeliveryItem;

/// The active screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum View {
    #[default]
    List,
    Detail(DeliveryItem),
    Cart,
    DevTools,
}

impl View {
    pub fn kind(&self) -> ViewKind {
        match self {
            View::List => ViewKind::List,
            View::Detail(_) => ViewKind::Detail,
            View::Cart => ViewKind::Cart,
            View::DevTools => ViewKind::DevTools,
        }
    }

    /// The item shown by the detail screen, if that screen is active.
    pub fn selected_item(&self) -> Option<&DeliveryItem> {
        match self {
            View::Detail(item) => Some(item),
            _ => None,
        }
    }
}

/// Payload-free tag of a [`View`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ViewKind {
    List,
    Detail,
    Cart,
    DevTools,
}

/// Owns the active [`View`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewRouter {
    current: View,
}

impl ViewRouter {
    /// Starts on the list screen.
    pub fn new() -> Self {
        ViewRouter {
            current: View::List,
        }
    }

    pub fn show_list(&mut self) -> ViewKind {
        self.replace(View::List)
    }

    /// Caller guarantees `item` comes from the catalog.
    pub fn show_detail(&mut self, item: DeliveryItem) -> ViewKind {
        self.replace(View::Detail(item))
    }

    pub fn show_cart(&mut self) -> ViewKind {
        self.replace(View::Cart)
    }

    pub fn show_dev_tools(&mut self) -> ViewKind {
        self.replace(View::DevTools)
    }

    pub fn current(&self) -> &View {
        &self.current
    }

    pub fn kind(&self) -> ViewKind {
        self.current.kind()
    }

    fn replace(&mut self, next: View) -> ViewKind {
        trace!(from = ?self.current.kind(), to = ?next.kind(), "view transition");
        self.current = next;
        self.current.kind()
    }
}
