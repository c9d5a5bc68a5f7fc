//! # Domain Types
//!
//! Core domain types used throughout the Folio commerce core.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                │
//! │                                                                     │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐   │
//! │  │    Product      │   │   BookFormat    │   │    Currency     │   │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │   │
//! │  │  id (u32)       │   │  Paperback      │   │  Usd … Mxn      │   │
//! │  │  title, author  │   │  Hardcover      │   │  symbol         │   │
//! │  │  price_cents    │   │  Ebook          │   │  rate (bps)     │   │
//! │  │  discount %     │   │  Audiobook      │   │                 │   │
//! │  │  rating (0-5)   │   │  multiplier     │   │                 │   │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘   │
//! │                                                                     │
//! │  Multipliers and rates are basis points (10000 = ×1.0), applied    │
//! │  through Money::apply_bps with half-up rounding.                   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::CoreError;
use crate::money::Money;

// =============================================================================
// Product Identity
// =============================================================================

/// Product identifier.
///
/// The catalog keys products by small integers; identity never changes
/// after load.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(transparent)]
#[ts(export)]
pub struct ProductId(pub u32);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product in the catalog.
///
/// Immutable after catalog load: the cart snapshots prices instead of
/// referring back here, so later catalog edits never alter existing lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier.
    pub id: ProductId,

    /// Display title.
    pub title: String,

    /// Author name as shown on cards and the cart page.
    pub author: String,

    /// Base price in cents, before any format multiplier. Positive.
    pub price_cents: i64,

    /// Optional discount percentage (0-100) off the list price.
    /// Out-of-range records are clamped to 100 at catalog load.
    pub discount_percent: Option<u8>,

    /// Star rating, 0-5.
    pub rating: u8,

    /// Image asset reference.
    pub image: String,

    /// Long-form description.
    pub description: String,
}

impl Product {
    /// Returns the base price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }
}

// =============================================================================
// Book Format
// =============================================================================

/// The packaging formats a product can be purchased in.
///
/// Each format scales the product's base price by a fixed basis-point
/// multiplier. The set is closed: anything else is rejected at the string
/// boundary by [`BookFormat::from_str`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum BookFormat {
    Paperback,
    Hardcover,
    Ebook,
    Audiobook,
}

impl BookFormat {
    /// All recognized formats, in display order.
    pub const ALL: [BookFormat; 4] = [
        BookFormat::Paperback,
        BookFormat::Hardcover,
        BookFormat::Ebook,
        BookFormat::Audiobook,
    ];

    /// Price multiplier in basis points (10000 = ×1.0).
    #[inline]
    pub const fn multiplier_bps(&self) -> u32 {
        match self {
            BookFormat::Paperback => 10_000, // ×1.0
            BookFormat::Hardcover => 15_000, // ×1.5
            BookFormat::Ebook => 7_000,      // ×0.7
            BookFormat::Audiobook => 12_000, // ×1.2
        }
    }

    /// Human-readable label, matching the storefront's format selector.
    pub const fn label(&self) -> &'static str {
        match self {
            BookFormat::Paperback => "Paperback",
            BookFormat::Hardcover => "Hardcover",
            BookFormat::Ebook => "E-Book",
            BookFormat::Audiobook => "Audiobook",
        }
    }
}

impl Default for BookFormat {
    fn default() -> Self {
        BookFormat::Paperback
    }
}

impl fmt::Display for BookFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for BookFormat {
    type Err = CoreError;

    /// Parses a format selector value, case-insensitively.
    ///
    /// Accepts both "E-Book" (display label) and "ebook".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "paperback" => Ok(BookFormat::Paperback),
            "hardcover" => Ok(BookFormat::Hardcover),
            "e-book" | "ebook" => Ok(BookFormat::Ebook),
            "audiobook" => Ok(BookFormat::Audiobook),
            _ => Err(CoreError::InvalidFormat(s.to_string())),
        }
    }
}

// =============================================================================
// Currency
// =============================================================================

/// Supported display currencies.
///
/// USD is the base currency all catalog prices are stored in; the other
/// rates are fixed session multipliers, not live quotes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Usd,
    Eur,
    Gbp,
    Cad,
    Aud,
    Jpy,
    Cny,
    Inr,
    Brl,
    Mxn,
}

impl Currency {
    /// All supported currencies, in the order the selector lists them.
    pub const ALL: [Currency; 10] = [
        Currency::Usd,
        Currency::Eur,
        Currency::Gbp,
        Currency::Cad,
        Currency::Aud,
        Currency::Jpy,
        Currency::Cny,
        Currency::Inr,
        Currency::Brl,
        Currency::Mxn,
    ];

    /// ISO 4217 code.
    pub const fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
            Currency::Cad => "CAD",
            Currency::Aud => "AUD",
            Currency::Jpy => "JPY",
            Currency::Cny => "CNY",
            Currency::Inr => "INR",
            Currency::Brl => "BRL",
            Currency::Mxn => "MXN",
        }
    }

    /// Display symbol, as shown next to prices.
    pub const fn symbol(&self) -> &'static str {
        match self {
            Currency::Usd => "$",
            Currency::Eur => "€",
            Currency::Gbp => "£",
            Currency::Cad => "C$",
            Currency::Aud => "A$",
            Currency::Jpy => "¥",
            Currency::Cny => "¥",
            Currency::Inr => "₹",
            Currency::Brl => "R$",
            Currency::Mxn => "$",
        }
    }

    /// Conversion rate from USD in basis points (10000 = ×1.0).
    #[inline]
    pub const fn rate_bps(&self) -> u32 {
        match self {
            Currency::Usd => 10_000,    // ×1.00
            Currency::Eur => 9_200,     // ×0.92
            Currency::Gbp => 7_900,     // ×0.79
            Currency::Cad => 13_600,    // ×1.36
            Currency::Aud => 15_200,    // ×1.52
            Currency::Jpy => 1_472_000, // ×147.20
            Currency::Cny => 72_500,    // ×7.25
            Currency::Inr => 831_000,   // ×83.10
            Currency::Brl => 50_500,    // ×5.05
            Currency::Mxn => 171_500,   // ×17.15
        }
    }
}

impl Default for Currency {
    fn default() -> Self {
        Currency::Usd
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = CoreError;

    /// Parses a currency selection.
    ///
    /// The selector renders entries like "EUR €"; only the leading code is
    /// significant, matched case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().split_whitespace().next().unwrap_or("");
        match code.to_ascii_uppercase().as_str() {
            "USD" => Ok(Currency::Usd),
            "EUR" => Ok(Currency::Eur),
            "GBP" => Ok(Currency::Gbp),
            "CAD" => Ok(Currency::Cad),
            "AUD" => Ok(Currency::Aud),
            "JPY" => Ok(Currency::Jpy),
            "CNY" => Ok(Currency::Cny),
            "INR" => Ok(Currency::Inr),
            "BRL" => Ok(Currency::Brl),
            "MXN" => Ok(Currency::Mxn),
            _ => Err(CoreError::UnknownCurrency(s.to_string())),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
