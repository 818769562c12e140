//! # Error Types
//!
//! Domain-specific error types for parcel-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  parcel-core errors (this file)                                        │
//! │  └── CoreError        - Unknown ids, violated preconditions            │
//! │                                                                         │
//! │  console errors (in app)                                               │
//! │  └── ApiError         - What the operator sees (code + message)        │
//! │                                                                         │
//! │  Flow: CoreError → ApiError → rendered notice                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## What Is NOT an Error
//! Adding an item that is already in the cart and accepting a request that is
//! no longer pending are reported through [`crate::app::Event`] values, not
//! errors. The ledger and cart stay untouched in both cases.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core workflow errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Catalog has no item with this id.
    ///
    /// ## When This Occurs
    /// - `ShowDetail` or `AddItem` with an id outside the built-in catalog
    #[error("Delivery item not found: {0}")]
    ItemNotFound(u32),

    /// Ledger has no requested cart with this id.
    ///
    /// Only raised under [`crate::app::Policy::Strict`]; the permissive policy
    /// turns this into an ignored event.
    #[error("Delivery request not found: {0}")]
    RequestNotFound(u32),

    /// A delivery request was submitted with nothing in the cart.
    ///
    /// ## User Workflow
    /// ```text
    /// Open Cart (0 items)
    ///      │
    ///      ▼
    /// request
    ///      │
    ///      ▼
    /// EmptyCart
    ///      │
    ///      ▼
    /// UI shows: "Cannot request delivery: the cart is empty"
    /// ```
    #[error("Cannot request delivery: the cart is empty")]
    EmptyCart,
}

impl CoreError {
    /// True for the "unknown id" family of errors.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            CoreError::ItemNotFound(_) | CoreError::RequestNotFound(_)
        )
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
