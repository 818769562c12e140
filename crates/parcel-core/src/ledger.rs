//! # Delivery-Request Ledger
//!
//! Append-only log of submitted carts; the delivery agent's work queue.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Ledger Lifecycle                                     │
//! │                                                                         │
//! │  record(items) ──► RequestedCart { id: len+1, status: Pending }        │
//! │                            │                                            │
//! │                       accept(id)                                        │
//! │                            │                                            │
//! │                            ▼                                            │
//! │                    status: Processing ──accept(id)──► (unchanged)      │
//! │                                                                         │
//! │  Entries are never removed, so `len + 1` stays unique.                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use tracing::trace;

use crate::types::{DeliveryItem, RequestStatus, RequestedCart};

/// Result of [`Ledger::accept`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AcceptOutcome {
    /// The request moved from Pending to Processing.
    Accepted,
    /// The request exists but was not Pending; it keeps this status.
    Unchanged(RequestStatus),
    /// No request carries this id.
    NotFound,
}

/// Append-only log of [`RequestedCart`] records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger {
    entries: Vec<RequestedCart>,
}

impl Ledger {
    pub fn new() -> Self {
        Ledger {
            entries: Vec::new(),
        }
    }

    /// Appends a new Pending request holding `items`.
    ///
    /// The id is the current entry count plus one.
    pub fn record(
        &mut self,
        items: Vec<DeliveryItem>,
        requested_at: DateTime<Utc>,
    ) -> &RequestedCart {
        let id = self.next_id();
        trace!(cart_id = id, items = items.len(), "recording delivery request");

        let index = self.entries.len();
        self.entries.push(RequestedCart {
            id,
            items,
            requested_at,
            status: RequestStatus::Pending,
        });
        &self.entries[index]
    }

    /// Moves a Pending request to Processing.
    ///
    /// Any other status is left alone, so repeated accepts are harmless.
    pub fn accept(&mut self, id: u32) -> AcceptOutcome {
        match self.entries.iter_mut().find(|c| c.id == id) {
            None => AcceptOutcome::NotFound,
            Some(cart) if cart.status == RequestStatus::Pending => {
                cart.status = RequestStatus::Processing;
                AcceptOutcome::Accepted
            }
            Some(cart) => AcceptOutcome::Unchanged(cart.status),
        }
    }

    /// Id the next recorded request will receive.
    pub fn next_id(&self) -> u32 {
        u32::try_from(self.entries.len()).map_or(u32::MAX, |len| len.saturating_add(1))
    }

    pub fn get(&self, id: u32) -> Option<&RequestedCart> {
        self.entries.iter().find(|c| c.id == id)
    }

    /// All requests, oldest first.
    pub fn entries(&self) -> &[RequestedCart] {
        &self.entries
    }

    /// Requests still waiting for an agent.
    pub fn pending(&self) -> impl Iterator<Item = &RequestedCart> + '_ {
        self.entries.iter().filter(|c| c.is_pending())
    }

    pub fn count(&self, status: RequestStatus) -> usize {
        self.entries.iter().filter(|c| c.status == status).count()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn items(ids: &[u32]) -> Vec<DeliveryItem> {
        let catalog = Catalog::builtin();
        ids.iter().map(|id| catalog.get(*id).unwrap().clone()).collect()
    }

    #[test]
    fn test_record_assigns_sequential_ids() {
        let mut ledger = Ledger::new();

        let first = ledger.record(items(&[1]), Utc::now()).id;
        let second = ledger.record(items(&[2, 3]), Utc::now()).id;

        assert_eq!((first, second), (1, 2));
        assert_eq!(ledger.next_id(), 3);
        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.count(RequestStatus::Pending), 2);
    }

    #[test]
    fn test_next_id_on_empty_ledger() {
        let ledger = Ledger::new();
        assert_eq!(ledger.next_id(), 1);
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_accept_pending_then_again() {
        let mut ledger = Ledger::new();
        ledger.record(items(&[1]), Utc::now());

        assert_eq!(ledger.accept(1), AcceptOutcome::Accepted);
        assert_eq!(ledger.get(1).unwrap().status, RequestStatus::Processing);

        assert_eq!(
            ledger.accept(1),
            AcceptOutcome::Unchanged(RequestStatus::Processing)
        );
        assert_eq!(ledger.get(1).unwrap().status, RequestStatus::Processing);
    }

    #[test]
    fn test_accept_unknown_leaves_ledger_unchanged() {
        let mut ledger = Ledger::new();
        ledger.record(items(&[1, 2]), Utc::now());
        let before = ledger.clone();

        assert_eq!(ledger.accept(7), AcceptOutcome::NotFound);
        assert_eq!(ledger, before);
    }

    #[test]
    fn test_accept_touches_only_matching_entry() {
        let mut ledger = Ledger::new();
        ledger.record(items(&[1]), Utc::now());
        ledger.record(items(&[2]), Utc::now());

        ledger.accept(2);

        assert_eq!(ledger.get(1).unwrap().status, RequestStatus::Pending);
        assert_eq!(ledger.get(2).unwrap().status, RequestStatus::Processing);
        assert_eq!(ledger.pending().count(), 1);
    }
}
