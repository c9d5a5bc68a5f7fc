//! # folio-core: Pure Business Logic for the Folio Storefront
//!
//! This crate is the **heart** of the Folio commerce core. It contains all
//! business logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Folio Architecture                            │
//! │                                                                     │
//! │  ┌─────────────────────────────────────────────────────────────┐   │
//! │  │                 Storefront UI (out of scope)                │   │
//! │  │   Product pages ──► Cart page ──► Wishlist ──► Compare      │   │
//! │  └───────────────────────────┬─────────────────────────────────┘   │
//! │                              │                                      │
//! │  ┌───────────────────────────▼─────────────────────────────────┐   │
//! │  │                    folio-store                              │   │
//! │  │   CartStore, WishlistStore, CompareStore, CurrencyContext,  │   │
//! │  │   OverlayCoordinator, StickyBar                             │   │
//! │  └───────────────────────────┬─────────────────────────────────┘   │
//! │                              │                                      │
//! │  ┌───────────────────────────▼─────────────────────────────────┐   │
//! │  │              ★ folio-core (THIS CRATE) ★                    │   │
//! │  │                                                             │   │
//! │  │  ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌───────────┐ ┌─────┐ │   │
//! │  │  │  types  │ │  money  │ │ pricing │ │validation │ │ nav │ │   │
//! │  │  │ Product │ │  Money  │ │ unit/   │ │  rules    │ │Items│ │   │
//! │  │  │ Format  │ │  (bps)  │ │ line/   │ │  checks   │ │     │ │   │
//! │  │  │Currency │ │         │ │shipping │ │           │ │     │ │   │
//! │  │  └─────────┘ └─────────┘ └─────────┘ └───────────┘ └─────┘ │   │
//! │  │                                                             │   │
//! │  │  NO I/O • NO GLOBALS • NO NETWORK • PURE FUNCTIONS          │   │
//! │  └─────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, BookFormat, Currency)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`pricing`] - Unit/line prices, subtotals, free-shipping progress
//! - [`error`] - Domain error types
//! - [`validation`] - Business rule validation
//! - [`nav`] - Tagged navigation item model
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Network, file system, and ambient globals are FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use folio_core::money::Money;
//! use folio_core::types::{BookFormat, Currency};
//!
//! // Create money from cents (never from floats!)
//! let base = Money::from_cents(2995); // $29.95
//!
//! // A hardcover costs 1.5x the base price, rounded half-up
//! let hardcover = base.apply_bps(BookFormat::Hardcover.multiplier_bps());
//! assert_eq!(hardcover.cents(), 4493); // $44.93
//!
//! // Convert to euro at the configured rate
//! let eur = base.apply_bps(Currency::Eur.rate_bps());
//! assert_eq!(eur.cents(), 2755); // €27.55
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod nav;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use folio_core::Money` instead of
// `use folio_core::money::Money`

pub use error::{CoreError, CoreResult};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum distinct lines allowed in a single cart
///
/// ## Business Reason
/// Prevents runaway carts and ensures reasonable order sizes.
pub const MAX_CART_LINES: usize = 100;

/// Maximum quantity of a single line in the cart
///
/// ## Business Reason
/// Prevents accidental over-ordering (e.g., typing 1000 instead of 10).
pub const MAX_LINE_QUANTITY: u32 = 999;

/// Maximum products on the compare page
///
/// The compare table renders at most four columns; a fifth product is
/// rejected rather than silently evicting one.
pub const COMPARE_CAP: usize = 4;

/// Free-shipping threshold in cents ($1000.00), in the base currency
pub const FREE_SHIPPING_THRESHOLD_CENTS: i64 = 100_000;
