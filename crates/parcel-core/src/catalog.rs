//! # Static Catalog
//!
//! The fixed set of delivery items available at startup.
//!
//! The catalog is read-only: items are never created, edited, or removed at
//! runtime. Lookups are linear scans, which is plenty for four records.

use crate::error::{CoreError, CoreResult};
use crate::types::{DeliveryItem, ItemStatus};

/// Read-only catalog of delivery items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    items: Vec<DeliveryItem>,
}

impl Catalog {
    /// The built-in catalog of four items.
    pub fn builtin() -> Self {
        Catalog {
            items: vec![
                DeliveryItem::new(
                    1,
                    "Electronics Package",
                    ItemStatus::InTransit,
                    "123 Tech Street, Silicon Valley",
                    "Next Day Delivery",
                ),
                DeliveryItem::new(
                    2,
                    "Fashion Items",
                    ItemStatus::OutForDelivery,
                    "456 Fashion Ave, New York",
                    "Same Day Delivery",
                ),
                DeliveryItem::new(
                    3,
                    "Books Bundle",
                    ItemStatus::Processing,
                    "789 Library Road, Boston",
                    "2-3 Business Days",
                ),
                DeliveryItem::new(
                    4,
                    "Home Decor",
                    ItemStatus::Delivered,
                    "321 Home Street, Chicago",
                    "Standard Shipping",
                ),
            ],
        }
    }

    /// Looks up an item by id.
    pub fn get(&self, id: u32) -> Option<&DeliveryItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Looks up an item by id, failing with [`CoreError::ItemNotFound`].
    pub fn require(&self, id: u32) -> CoreResult<&DeliveryItem> {
        self.get(id).ok_or(CoreError::ItemNotFound(id))
    }

    /// All items in display order.
    pub fn items(&self) -> &[DeliveryItem] {
        &self.items
    }

    /// Items currently carrying the given status.
    pub fn with_status(&self, status: ItemStatus) -> impl Iterator<Item = &DeliveryItem> + '_ {
        self.items.iter().filter(move |item| item.status == status)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Catalog::builtin()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
