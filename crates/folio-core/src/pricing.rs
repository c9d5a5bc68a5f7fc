//! # Pricing Engine
//!
//! Pure price derivation: format-adjusted unit prices, discounted sale
//! prices, line totals, cart subtotals, and free-shipping progress.
//!
//! ## Price Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                        Pricing Flow                                 │
//! │                                                                     │
//! │  Product.price_cents ──► unit_price(format) ──► snapshot in cart   │
//! │          │                                            │             │
//! │          └──► sale_unit_price (discount %)            ▼             │
//! │                                              line_total × quantity  │
//! │                                                       │             │
//! │                                                       ▼             │
//! │                                              cart_subtotal          │
//! │                                                       │             │
//! │                                                       ▼             │
//! │                                         free_shipping_progress      │
//! │                                                                     │
//! │  SNAPSHOT RULE: cart_subtotal sums prices captured at add time.    │
//! │  Later catalog or multiplier changes never move an existing line.  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreResult;
use crate::money::Money;
use crate::types::{BookFormat, Product};
use crate::validation::validate_threshold;

// =============================================================================
// Unit & Line Prices
// =============================================================================

/// Price of one unit of `product` in the given format.
///
/// Base price × format multiplier, rounded half-up to whole cents.
#[inline]
pub fn unit_price(product: &Product, format: BookFormat) -> Money {
    product.price().apply_bps(format.multiplier_bps())
}

/// Unit price with the product's discount percentage applied.
///
/// The discount applies after the format multiplier, so a 10%-off
/// hardcover is 10% off the hardcover price, not the base price.
pub fn sale_unit_price(product: &Product, format: BookFormat) -> Money {
    let list = unit_price(product, format);
    match product.discount_percent {
        Some(pct) => list.apply_percent_discount(pct),
        None => list,
    }
}

/// List/sale price pair for a product in a format, for price displays
/// that show a struck-through list price next to the final price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PriceDetails {
    /// Format-adjusted price before discount.
    pub list_price: Money,
    /// Price actually charged (list minus discount).
    pub final_price: Money,
    /// Discount percentage applied, 0 if none.
    pub discount_percent: u8,
}

/// Computes the list/final price pair for a product in a format.
pub fn price_details(product: &Product, format: BookFormat) -> PriceDetails {
    PriceDetails {
        list_price: unit_price(product, format),
        final_price: sale_unit_price(product, format),
        discount_percent: product.discount_percent.unwrap_or(0),
    }
}

/// Total for one cart line: snapshotted unit price × quantity.
#[inline]
pub fn line_total(unit_price_snapshot: Money, quantity: u32) -> Money {
    unit_price_snapshot.multiply_quantity(quantity as i64)
}

/// Sums cart lines as (snapshotted unit price, quantity) pairs.
///
/// Takes the snapshot, never the live catalog price: an existing line's
/// contribution is fixed at what the customer saw when they added it.
pub fn cart_subtotal<I>(lines: I) -> Money
where
    I: IntoIterator<Item = (Money, u32)>,
{
    lines
        .into_iter()
        .fold(Money::zero(), |acc, (price, qty)| acc + line_total(price, qty))
}

// =============================================================================
// Free Shipping
// =============================================================================

/// Progress towards the free-shipping threshold.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ShippingProgress {
    /// Amount still to spend before shipping is free. Zero once reached.
    pub remaining: Money,
    /// Progress percentage, capped at 100. Display only.
    pub percent: f64,
}

impl ShippingProgress {
    /// True once the subtotal has reached the threshold.
    #[inline]
    pub fn unlocked(&self) -> bool {
        self.remaining.is_zero()
    }
}

/// Computes free-shipping progress for a subtotal against a threshold.
///
/// Fails with `InvalidThreshold` unless the threshold is strictly positive.
///
/// ## Example
/// ```rust
/// use folio_core::money::Money;
/// use folio_core::pricing::free_shipping_progress;
///
/// let progress =
///     free_shipping_progress(Money::from_cents(35_985), Money::from_cents(100_000)).unwrap();
/// assert_eq!(progress.remaining.cents(), 64_015);
/// assert!((progress.percent - 35.985).abs() < 1e-9);
/// ```
pub fn free_shipping_progress(subtotal: Money, threshold: Money) -> CoreResult<ShippingProgress> {
    validate_threshold(threshold)?;

    let remaining = Money::from_cents((threshold.cents() - subtotal.cents()).max(0));
    let percent = (subtotal.cents() as f64 * 100.0 / threshold.cents() as f64).min(100.0);

    Ok(ShippingProgress { remaining, percent })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use crate::types::ProductId;

    fn book(price_cents: i64, discount_percent: Option<u8>) -> Product {
        Product {
            id: ProductId(20),
            title: "A Prayer For Owen Meany".to_string(),
            author: "JOHN IRVING".to_string(),
            price_cents,
            discount_percent,
            rating: 4,
            image: "owen-meany.webp".to_string(),
            description: "Hosmer's best friend.".to_string(),
        }
    }

    #[test]
    fn test_unit_price_applies_format_multiplier() {
        let product = book(2995, None);

        // Paperback ×1.0
        assert_eq!(unit_price(&product, BookFormat::Paperback).cents(), 2995);
        // Hardcover ×1.5: $44.925 → $44.93 (half-up)
        assert_eq!(unit_price(&product, BookFormat::Hardcover).cents(), 4493);
        // E-book ×0.7: $20.965 → $20.97
        assert_eq!(unit_price(&product, BookFormat::Ebook).cents(), 2097);
        // Audiobook ×1.2: $35.94 exact
        assert_eq!(unit_price(&product, BookFormat::Audiobook).cents(), 3594);
    }

    #[test]
    fn test_unit_price_matches_round2_of_base_times_multiplier() {
        // For all formats: unit_price == round2(base × multiplier)
        let product = book(1999, None);
        for format in BookFormat::ALL {
            let expected =
                (1999i128 * format.multiplier_bps() as i128 + 5000) / 10000;
            assert_eq!(unit_price(&product, format).cents() as i128, expected);
        }
    }

    #[test]
    fn test_sale_unit_price_discounts_after_multiplier() {
        // $20.00 hardcover → $30.00 list, 10% off → $27.00
        let product = book(2000, Some(10));
        assert_eq!(unit_price(&product, BookFormat::Hardcover).cents(), 3000);
        assert_eq!(sale_unit_price(&product, BookFormat::Hardcover).cents(), 2700);
    }

    #[test]
    fn test_price_details() {
        let product = book(2000, Some(25));
        let details = price_details(&product, BookFormat::Paperback);
        assert_eq!(details.list_price.cents(), 2000);
        assert_eq!(details.final_price.cents(), 1500);
        assert_eq!(details.discount_percent, 25);

        let full_price = price_details(&book(2000, None), BookFormat::Paperback);
        assert_eq!(full_price.list_price, full_price.final_price);
        assert_eq!(full_price.discount_percent, 0);
    }

    #[test]
    fn test_cart_subtotal_sums_snapshots() {
        // The source cart scenario: $29.95 × 2 + $299.95 × 1 = $359.85
        let lines = vec![
            (Money::from_cents(2995), 2u32),
            (Money::from_cents(29_995), 1u32),
        ];
        assert_eq!(cart_subtotal(lines).cents(), 35_985);
    }

    #[test]
    fn test_cart_subtotal_empty_is_zero() {
        assert_eq!(cart_subtotal(std::iter::empty()), Money::zero());
    }

    #[test]
    fn test_free_shipping_progress_formula() {
        // Subtotal $359.85 against the $1000 threshold
        let progress = free_shipping_progress(
            Money::from_cents(35_985),
            Money::from_cents(crate::FREE_SHIPPING_THRESHOLD_CENTS),
        )
        .unwrap();
        assert_eq!(progress.remaining.cents(), 64_015);
        assert!((progress.percent - 35.985).abs() < 1e-9);
        assert!(!progress.unlocked());
    }

    #[test]
    fn test_free_shipping_progress_caps_at_threshold() {
        let progress = free_shipping_progress(
            Money::from_cents(150_000),
            Money::from_cents(100_000),
        )
        .unwrap();
        assert_eq!(progress.remaining, Money::zero());
        assert_eq!(progress.percent, 100.0);
        assert!(progress.unlocked());
    }

    #[test]
    fn test_free_shipping_progress_rejects_bad_threshold() {
        let err =
            free_shipping_progress(Money::from_cents(100), Money::zero()).unwrap_err();
        assert_eq!(err, CoreError::InvalidThreshold { cents: 0 });

        let err = free_shipping_progress(Money::from_cents(100), Money::from_cents(-1))
            .unwrap_err();
        assert_eq!(err, CoreError::InvalidThreshold { cents: -1 });
    }
}
