//! # Cart
//!
//! The transient collection of items the operator wants delivered.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Operator Action          Core Call               Cart Change           │
//! │  ───────────────          ─────────               ───────────           │
//! │                                                                         │
//! │  add (new id) ───────────► add_item() ──────────► items.push(item)     │
//! │                                                                         │
//! │  add (same id) ──────────► add_item() ──────────► (unchanged)          │
//! │                                                                         │
//! │  request ────────────────► take() ──────────────► items drained        │
//! │                                                                         │
//! │  cart ───────────────────► items() ─────────────► (read only)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::types::DeliveryItem;

/// Result of [`Cart::add_item`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// The item was appended.
    Added,
    /// An item with the same id was already in the cart; nothing changed.
    AlreadyPresent,
}

/// The cart.
///
/// ## Invariants
/// - Items are unique by `id` (adding the same item again is a no-op)
/// - Insertion order is preserved
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    items: Vec<DeliveryItem>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { items: Vec::new() }
    }

    /// Appends an item unless one with the same id is already present.
    pub fn add_item(&mut self, item: &DeliveryItem) -> AddOutcome {
        if self.contains(item.id) {
            return AddOutcome::AlreadyPresent;
        }

        self.items.push(item.clone());
        AddOutcome::Added
    }

    /// Drains the cart, returning its contents in insertion order.
    pub fn take(&mut self) -> Vec<DeliveryItem> {
        std::mem::take(&mut self.items)
    }

    pub fn contains(&self, id: u32) -> bool {
        self.items.iter().any(|i| i.id == id)
    }

    pub fn items(&self) -> &[DeliveryItem] {
        &self.items
    }

    /// Returns the number of unique items in the cart.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn test_cart_add_item() {
        let catalog = Catalog::builtin();
        let mut cart = Cart::new();

        let outcome = cart.add_item(catalog.get(1).unwrap());

        assert_eq!(outcome, AddOutcome::Added);
        assert_eq!(cart.len(), 1);
        assert!(cart.contains(1));
    }

    #[test]
    fn test_cart_add_same_item_twice_keeps_one() {
        let catalog = Catalog::builtin();
        let mut cart = Cart::new();
        let item = catalog.get(2).unwrap();

        cart.add_item(item);
        let outcome = cart.add_item(item);

        assert_eq!(outcome, AddOutcome::AlreadyPresent);
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_cart_preserves_insertion_order() {
        let catalog = Catalog::builtin();
        let mut cart = Cart::new();

        for id in [3, 1, 4] {
            cart.add_item(catalog.get(id).unwrap());
        }

        let ids: Vec<u32> = cart.items().iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![3, 1, 4]);
    }

    #[test]
    fn test_cart_take_empties() {
        let catalog = Catalog::builtin();
        let mut cart = Cart::new();
        cart.add_item(catalog.get(1).unwrap());
        cart.add_item(catalog.get(2).unwrap());

        let taken = cart.take();

        assert_eq!(taken.len(), 2);
        assert!(cart.is_empty());
    }
}
