//! # Validation Module
//!
//! Input validation for cart and pricing operations.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                              │
//! │                                                                     │
//! │  Layer 1: Storefront UI (TypeScript)                                │
//! │  ├── Quantity steppers clamp at 1                                   │
//! │  └── Immediate user feedback                                        │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 2: THIS MODULE (Rust)                                        │
//! │  ├── Business rule validation                                       │
//! │  └── Typed errors the presentation layer surfaces                   │
//! │                                                                     │
//! │  The UI clamp is a convenience; the core rules are authoritative.   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use folio_core::validation::validate_quantity;
//!
//! // Validate quantity before a cart operation
//! validate_quantity(5).unwrap();
//! assert!(validate_quantity(0).is_err());
//! ```

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::MAX_LINE_QUANTITY;

/// Validates a requested cart quantity.
///
/// ## Rules
/// - Must be at least 1 (a zero-quantity line never enters the cart)
/// - Must not exceed [`MAX_LINE_QUANTITY`]
pub fn validate_quantity(quantity: u32) -> CoreResult<()> {
    if quantity == 0 || quantity > MAX_LINE_QUANTITY {
        return Err(CoreError::InvalidQuantity {
            requested: quantity,
            max: MAX_LINE_QUANTITY,
        });
    }
    Ok(())
}

/// Validates a free-shipping threshold.
///
/// ## Rules
/// - Must be strictly positive (progress division needs a nonzero base)
pub fn validate_threshold(threshold: Money) -> CoreResult<()> {
    if !threshold.is_positive() {
        return Err(CoreError::InvalidThreshold {
            cents: threshold.cents(),
        });
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantity_bounds() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(MAX_LINE_QUANTITY).is_ok());

        assert_eq!(
            validate_quantity(0).unwrap_err(),
            CoreError::InvalidQuantity {
                requested: 0,
                max: MAX_LINE_QUANTITY
            }
        );
        assert!(validate_quantity(MAX_LINE_QUANTITY + 1).is_err());
    }

    #[test]
    fn test_threshold_must_be_positive() {
        assert!(validate_threshold(Money::from_cents(1)).is_ok());
        assert!(validate_threshold(Money::zero()).is_err());
        assert!(validate_threshold(Money::from_cents(-100)).is_err());
    }
}
