//! # Domain Types
//!
//! Core domain types used throughout Parcel Desk.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  DeliveryItem   │   │  RequestedCart  │   │  RequestStatus  │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (u32)       │   │  id (u32)       │   │  Pending        │       │
//! │  │  name           │   │  items (copy)   │   │  Processing     │       │
//! │  │  status         │   │  requested_at   │   │  Delivered (*)  │       │
//! │  │  destination    │   │  status         │   └─────────────────┘       │
//! │  │  availability   │   └─────────────────┘                              │
//! │  └─────────────────┘                                                    │
//! │                                                                         │
//! │  (*) representable, but no operation ever produces it                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Pattern
//! A `RequestedCart` owns clones of the items that were in the cart when the
//! request was submitted. Later cart changes never reach it.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Item Status
// =============================================================================

/// Shipping status shown on a catalog item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum ItemStatus {
    #[serde(rename = "In Transit")]
    InTransit,
    #[serde(rename = "Out for Delivery")]
    OutForDelivery,
    #[serde(rename = "Processing")]
    Processing,
    #[serde(rename = "Delivered")]
    Delivered,
}

impl ItemStatus {
    /// All statuses, in catalog display order.
    pub const ALL: [ItemStatus; 4] = [
        ItemStatus::InTransit,
        ItemStatus::OutForDelivery,
        ItemStatus::Processing,
        ItemStatus::Delivered,
    ];

    /// Human-readable label.
    pub const fn label(&self) -> &'static str {
        match self {
            ItemStatus::InTransit => "In Transit",
            ItemStatus::OutForDelivery => "Out for Delivery",
            ItemStatus::Processing => "Processing",
            ItemStatus::Delivered => "Delivered",
        }
    }
}

impl fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Delivery Item
// =============================================================================

/// A delivery item from the built-in catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DeliveryItem {
    /// Unique within the catalog.
    pub id: u32,

    /// Display name.
    pub name: String,

    /// Current shipping status.
    pub status: ItemStatus,

    /// Free-text delivery address.
    pub destination: String,

    /// Free-text delivery speed, e.g. "Next Day Delivery".
    pub availability: String,
}

impl DeliveryItem {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        status: ItemStatus,
        destination: impl Into<String>,
        availability: impl Into<String>,
    ) -> Self {
        DeliveryItem {
            id,
            name: name.into(),
            status,
            destination: destination.into(),
            availability: availability.into(),
        }
    }
}

// =============================================================================
// Request Status
// =============================================================================

/// Workflow status of a submitted delivery request.
///
/// ## Transitions
/// ```text
/// Pending ──accept──► Processing        Delivered
///                                       (no trigger exists)
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum RequestStatus {
    /// Waiting for a delivery agent.
    #[default]
    Pending,
    /// Accepted by a delivery agent.
    Processing,
    /// Never set by any operation.
    Delivered,
}

impl RequestStatus {
    pub const fn label(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "Pending",
            RequestStatus::Processing => "Processing",
            RequestStatus::Delivered => "Delivered",
        }
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Requested Cart
// =============================================================================

/// A submitted cart, tracked in the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct RequestedCart {
    /// Sequential id, `ledger length + 1` at submission time.
    pub id: u32,

    /// Items in the cart at submission (frozen).
    pub items: Vec<DeliveryItem>,

    /// When the request was submitted.
    #[ts(as = "String")]
    pub requested_at: DateTime<Utc>,

    pub status: RequestStatus,
}

impl RequestedCart {
    /// Number of items in the request.
    #[inline]
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.status == RequestStatus::Pending
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_status_labels() {
        assert_eq!(ItemStatus::InTransit.to_string(), "In Transit");
        assert_eq!(ItemStatus::OutForDelivery.label(), "Out for Delivery");
        assert_eq!(ItemStatus::ALL.len(), 4);
    }

    #[test]
    fn test_item_status_serializes_as_label() {
        let json = serde_json::to_string(&ItemStatus::OutForDelivery).unwrap();
        assert_eq!(json, "\"Out for Delivery\"");
    }

    #[test]
    fn test_request_status_default() {
        assert_eq!(RequestStatus::default(), RequestStatus::Pending);
        assert_eq!(RequestStatus::Processing.to_string(), "Processing");
    }

    #[test]
    fn test_requested_cart_json_shape() {
        let cart = RequestedCart {
            id: 1,
            items: vec![DeliveryItem::new(
                1,
                "Electronics Package",
                ItemStatus::InTransit,
                "123 Tech Street, Silicon Valley",
                "Next Day Delivery",
            )],
            requested_at: Utc::now(),
            status: RequestStatus::Pending,
        };

        let value = serde_json::to_value(&cart).unwrap();
        assert_eq!(value["id"], 1);
        assert_eq!(value["status"], "Pending");
        assert_eq!(value["items"][0]["status"], "In Transit");
        assert!(value.get("requestedAt").is_some());
        assert!(cart.is_pending());
        assert_eq!(cart.item_count(), 1);
    }
}
