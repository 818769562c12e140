//! # parcel-core: Pure Workflow Logic for Parcel Desk
//!
//! This crate is the **heart** of Parcel Desk. It holds the delivery catalog,
//! the cart, the delivery-request ledger and the view router, all driven by
//! one reducer with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Parcel Desk Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Console (apps/console)                       │   │
//! │  │    list ──► show ──► add ──► cart ──► request ──► devtools     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ Action                                 │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ parcel-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  catalog  │  │   cart    │  │  ledger   │  │   view    │  │   │
//! │  │   │ 4 items   │  │ dedup ids │  │ Pending → │  │ List/...  │  │   │
//! │  │   │ read-only │  │ ordered   │  │ Processing│  │ one active│  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                    app::AppState::dispatch                      │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO PERSISTENCE • NO NETWORK                         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ Event / CoreError                      │
//! │                                ▼                                        │
//! │                       rendered by the console                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (DeliveryItem, RequestedCart, statuses)
//! - [`catalog`] - The built-in, read-only item catalog
//! - [`cart`] - Deduplicating cart
//! - [`ledger`] - Append-only log of delivery requests
//! - [`view`] - Which screen is active
//! - [`app`] - Session state and the reducer tying it all together
//! - [`error`] - Domain error types

// =============================================================================
// Module Declarations
// =============================================================================

pub mod app;
pub mod cart;
pub mod catalog;
pub mod error;
pub mod ledger;
pub mod types;
pub mod view;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use app::{Action, AppState, Event, Policy};
pub use cart::{AddOutcome, Cart};
pub use catalog::Catalog;
pub use error::{CoreError, CoreResult};
pub use ledger::{AcceptOutcome, Ledger};
pub use types::*;
pub use view::{View, ViewKind, ViewRouter};
