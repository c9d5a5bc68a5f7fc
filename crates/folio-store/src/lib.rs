//! # folio-store: Shared Commerce State for the Folio Storefront
//!
//! Every mutable piece of state the storefront's views share lives here,
//! behind cheaply cloneable handles.
//!
//! ## State Map
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Shared State Handles                          │
//! │                                                                     │
//! │  Catalog (read-only) ──► CartStore ──► subtotal / shipping bar     │
//! │        │                                                            │
//! │        ├──► WishlistStore ──► wishlist page                        │
//! │        └──► CompareStore  ──► compare table (max 4)                │
//! │                                                                     │
//! │  CurrencyContext ──► every price display (orthogonal input)        │
//! │                                                                     │
//! │  OverlayCoordinator ──► body scroll lock (no commerce deps)        │
//! │  StickyBar          ──► sticky purchase bar (no commerce deps)     │
//! │                                                                     │
//! │  Handles are Clone; all clones observe the same state. Mutations   │
//! │  run under each store's lock and complete before the next one.     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`catalog`] - Read-only product collection, loaded once
//! - [`cart`] - Cart lines with snapshotted prices
//! - [`lists`] - Wishlist and compare sets
//! - [`currency`] - Selected currency + price formatting
//! - [`overlay`] - Open overlays and the scroll-lock invariant
//! - [`sticky`] - Sticky purchase bar visibility

pub mod cart;
pub mod catalog;
pub mod currency;
pub mod lists;
pub mod overlay;
pub mod sticky;

pub use cart::{CartLine, CartStore, LineId};
pub use catalog::Catalog;
pub use currency::CurrencyContext;
pub use lists::{CompareStore, WishlistStore};
pub use overlay::{NoopScrollLock, Overlay, OverlayCoordinator, ScrollLock};
pub use sticky::StickyBar;
