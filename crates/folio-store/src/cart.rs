//! # Cart Store
//!
//! Manages the shopping cart shared by every view of the storefront.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Cart Store Operations                            │
//! │                                                                     │
//! │  UI Action               Store Call              State Change       │
//! │  ─────────               ──────────              ────────────       │
//! │                                                                     │
//! │  Add To Cart ───────────► add_item() ──────────► merge or push     │
//! │                                                                     │
//! │  +/- Stepper ───────────► change_quantity() ───► qty = max(0, ±δ)  │
//! │                                     │                               │
//! │                                     └── qty 0 ─► line removed      │
//! │                                                                     │
//! │  Remove Link ───────────► remove_line() ───────► line removed      │
//! │                                                  (no-op if gone)    │
//! │                                                                     │
//! │  Cart Page ─────────────► lines()/subtotal() ──► (read only)       │
//! │                                                                     │
//! │  NOTE: all operations acquire the store's mutex, so two UI events   │
//! │  can never interleave their mutations of the same cart.             │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;
use uuid::Uuid;

use folio_core::pricing::{self, ShippingProgress};
use folio_core::validation::validate_quantity;
use folio_core::{
    BookFormat, CoreError, CoreResult, Money, Product, ProductId, MAX_CART_LINES,
    MAX_LINE_QUANTITY,
};

// =============================================================================
// Line Identity
// =============================================================================

/// Identifier of one cart line, assigned by the store when the line is
/// created. Stable for the line's whole lifetime; never reused.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS,
)]
#[serde(transparent)]
#[ts(export)]
pub struct LineId(#[ts(as = "String")] Uuid);

impl LineId {
    fn new() -> Self {
        LineId(Uuid::new_v4())
    }
}

// =============================================================================
// Cart Line
// =============================================================================

/// One line in the cart.
///
/// ## Snapshot Rule
/// `unit_price_cents` is captured when the line is created and never
/// re-derived: if the catalog price or a format multiplier changes later,
/// existing lines keep the price the customer saw when they added them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    /// Store-assigned line identity.
    pub id: LineId,

    /// Product this line refers to.
    pub product_id: ProductId,

    /// Format selected when the line was created. Part of the merge key:
    /// the same book in hardcover and e-book makes two lines.
    pub format: BookFormat,

    /// Quantity, always >= 1 while the line exists.
    pub quantity: u32,

    /// Unit price in cents at add time (frozen).
    pub unit_price_cents: i64,

    /// When this line was first added.
    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

impl CartLine {
    fn new(product: &Product, format: BookFormat, quantity: u32) -> Self {
        CartLine {
            id: LineId::new(),
            product_id: product.id,
            format,
            quantity,
            unit_price_cents: pricing::unit_price(product, format).cents(),
            added_at: Utc::now(),
        }
    }

    /// The snapshotted unit price.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.unit_price_cents)
    }

    /// Line total: snapshotted unit price × quantity.
    #[inline]
    pub fn line_total(&self) -> Money {
        pricing::line_total(self.unit_price(), self.quantity)
    }
}

// =============================================================================
// Cart (inner state)
// =============================================================================

/// The cart's lines.
///
/// ## Invariants
/// - Lines are unique by `(product_id, format)` (adding merges quantity)
/// - Quantity is never 0 (reaching 0 removes the line)
/// - At most [`MAX_CART_LINES`] lines, [`MAX_LINE_QUANTITY`] per line
#[derive(Debug, Default)]
struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    fn add_item(
        &mut self,
        product: &Product,
        format: BookFormat,
        quantity: u32,
    ) -> CoreResult<LineId> {
        validate_quantity(quantity)?;

        // Merge by (product, format); the original snapshot price stays.
        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|l| l.product_id == product.id && l.format == format)
        {
            let merged = line.quantity + quantity;
            if merged > MAX_LINE_QUANTITY {
                return Err(CoreError::InvalidQuantity {
                    requested: merged,
                    max: MAX_LINE_QUANTITY,
                });
            }
            line.quantity = merged;
            return Ok(line.id);
        }

        if self.lines.len() >= MAX_CART_LINES {
            return Err(CoreError::CartFull {
                max: MAX_CART_LINES,
            });
        }

        let line = CartLine::new(product, format, quantity);
        let id = line.id;
        self.lines.push(line);
        Ok(id)
    }

    fn change_quantity(&mut self, line_id: LineId, delta: i64) -> CoreResult<u32> {
        let Some(pos) = self.lines.iter().position(|l| l.id == line_id) else {
            // Same stale-UI race as removing a missing line: succeed trivially.
            return Ok(0);
        };

        let new_quantity = (self.lines[pos].quantity as i64 + delta).max(0);
        if new_quantity == 0 {
            self.lines.remove(pos);
            return Ok(0);
        }
        if new_quantity > MAX_LINE_QUANTITY as i64 {
            return Err(CoreError::InvalidQuantity {
                requested: new_quantity as u32,
                max: MAX_LINE_QUANTITY,
            });
        }

        self.lines[pos].quantity = new_quantity as u32;
        Ok(new_quantity as u32)
    }

    fn remove_line(&mut self, line_id: LineId) {
        self.lines.retain(|l| l.id != line_id);
    }

    fn subtotal(&self) -> Money {
        pricing::cart_subtotal(self.lines.iter().map(|l| (l.unit_price(), l.quantity)))
    }
}

// =============================================================================
// Cart Store (shared handle)
// =============================================================================

/// Shared cart handle.
///
/// Clones share one cart; methods serialize through an internal mutex so
/// that each operation runs to completion before the next is applied.
/// The store is the sole mutator of its lines — consumers only ever see
/// cloned-out snapshots from [`CartStore::lines`].
#[derive(Debug, Clone, Default)]
pub struct CartStore {
    inner: Arc<Mutex<Cart>>,
}

impl CartStore {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `quantity` of `product` in `format`.
    ///
    /// ## Behavior
    /// - Quantity must be >= 1, else `InvalidQuantity`
    /// - An existing `(product, format)` line merges quantities and keeps
    ///   its snapshotted unit price
    /// - Otherwise a new line snapshots the unit price now
    pub fn add_item(
        &self,
        product: &Product,
        format: BookFormat,
        quantity: u32,
    ) -> CoreResult<LineId> {
        let mut cart = self.inner.lock().expect("cart mutex poisoned");
        let id = cart.add_item(product, format, quantity)?;
        debug!(product = %product.id, %format, quantity, "cart add");
        Ok(id)
    }

    /// Adjusts a line's quantity by `delta`, clamping at zero.
    ///
    /// Returns the resulting quantity. A result of 0 means the line was
    /// removed (delete-on-zero: a zero-quantity line is never visible).
    /// An unknown line id trivially yields 0, mirroring idempotent removal.
    pub fn change_quantity(&self, line_id: LineId, delta: i64) -> CoreResult<u32> {
        let mut cart = self.inner.lock().expect("cart mutex poisoned");
        let quantity = cart.change_quantity(line_id, delta)?;
        debug!(delta, quantity, "cart quantity change");
        Ok(quantity)
    }

    /// Removes a line unconditionally. Removing a line that is already
    /// gone is a no-op, not an error.
    pub fn remove_line(&self, line_id: LineId) {
        let mut cart = self.inner.lock().expect("cart mutex poisoned");
        cart.remove_line(line_id);
        debug!("cart line removed");
    }

    /// Empties the cart.
    pub fn clear(&self) {
        let mut cart = self.inner.lock().expect("cart mutex poisoned");
        cart.lines.clear();
        debug!("cart cleared");
    }

    /// Snapshot of the current lines, in add order.
    pub fn lines(&self) -> Vec<CartLine> {
        self.inner.lock().expect("cart mutex poisoned").lines.clone()
    }

    /// Number of distinct lines.
    pub fn line_count(&self) -> usize {
        self.inner.lock().expect("cart mutex poisoned").lines.len()
    }

    /// Total quantity across all lines.
    pub fn total_quantity(&self) -> u32 {
        self.inner
            .lock()
            .expect("cart mutex poisoned")
            .lines
            .iter()
            .map(|l| l.quantity)
            .sum()
    }

    /// True if the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.inner.lock().expect("cart mutex poisoned").lines.is_empty()
    }

    /// Subtotal over snapshotted line prices.
    pub fn subtotal(&self) -> Money {
        self.inner.lock().expect("cart mutex poisoned").subtotal()
    }

    /// Free-shipping progress for the current subtotal.
    pub fn free_shipping_progress(&self, threshold: Money) -> CoreResult<ShippingProgress> {
        pricing::free_shipping_progress(self.subtotal(), threshold)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
