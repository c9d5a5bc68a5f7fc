//! # Error Types
//!
//! Domain-specific error types for folio-core.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                 │
//! │                                                                     │
//! │  folio-core errors (this file)                                     │
//! │  └── CoreError  - every recoverable domain failure                 │
//! │                                                                     │
//! │  Flow: store operation → CoreError → presentation layer → user     │
//! │                                                                     │
//! │  The core never logs these and never crashes the process on them;  │
//! │  surfacing them is the presentation layer's job.                   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (product id, cap, etc.)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

use crate::types::ProductId;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These errors represent business rule violations or invalid input.
/// They should be caught and translated to user-friendly messages.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// Quantity outside the accepted range.
    ///
    /// ## When This Occurs
    /// - Adding to cart with quantity 0
    /// - A merge or increment pushing a line past [`crate::MAX_LINE_QUANTITY`]
    #[error("Quantity must be between 1 and {max}, got {requested}")]
    InvalidQuantity { requested: u32, max: u32 },

    /// A format string that is not one of the recognized book formats.
    ///
    /// Formats are a closed enum past this boundary; this error only exists
    /// where UI strings enter the core (`BookFormat::from_str`).
    #[error("Unrecognized format: {0}")]
    InvalidFormat(String),

    /// Free-shipping threshold must be strictly positive.
    #[error("Free-shipping threshold must be positive, got {cents} cents")]
    InvalidThreshold { cents: i64 },

    /// A currency code that is not in the supported set.
    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),

    /// Compare page is at capacity.
    ///
    /// Existing entries are never evicted to make room; the caller must
    /// remove one explicitly first.
    #[error("Compare list is full (max {cap} products)")]
    CompareFull { cap: usize },

    /// Product cannot be found in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// Cart has exceeded maximum allowed distinct lines.
    #[error("Cart cannot have more than {max} lines")]
    CartFull { max: usize },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::InvalidQuantity {
            requested: 0,
            max: 999,
        };
        assert_eq!(err.to_string(), "Quantity must be between 1 and 999, got 0");

        let err = CoreError::CompareFull { cap: 4 };
        assert_eq!(err.to_string(), "Compare list is full (max 4 products)");

        let err = CoreError::UnknownCurrency("XYZ".to_string());
        assert_eq!(err.to_string(), "Unknown currency: XYZ");
    }

    #[test]
    fn test_not_found_message_includes_id() {
        let err = CoreError::ProductNotFound(ProductId(20));
        assert_eq!(err.to_string(), "Product not found: 20");
    }
}
