//! # Currency Context
//!
//! The process-wide currency selection and the price formatting every
//! display goes through.
//!
//! ## Consistency Contract
//! All clones of the handle read the same selection, so a change is
//! immediately visible to every consumer on its next read. Consumers that
//! need a push (e.g. a header badge) register a callback with
//! [`CurrencyContext::subscribe`] and are notified on every change.

use std::sync::{Arc, Mutex};

use tracing::debug;

use folio_core::{CoreResult, Currency, Money};

/// Change-notification callback.
type Subscriber = Box<dyn Fn(Currency) + Send>;

/// Shared currency selection handle.
///
/// Catalog prices are stored in the base currency (USD); this context
/// converts and renders them in whatever the user selected. Constructed
/// explicitly and passed to consumers — there is no hidden global, so
/// tests build a fresh instance each.
#[derive(Clone, Default)]
pub struct CurrencyContext {
    selected: Arc<Mutex<Currency>>,
    subscribers: Arc<Mutex<Vec<Subscriber>>>,
}

impl CurrencyContext {
    /// Creates a context with the default selection (USD).
    pub fn new() -> Self {
        Self::default()
    }

    /// The active currency.
    pub fn selected(&self) -> Currency {
        *self.selected.lock().expect("currency mutex poisoned")
    }

    /// Selects a currency by code.
    ///
    /// Accepts the plain code ("EUR") or a selector entry ("EUR €");
    /// anything else fails with `UnknownCurrency`. Subscribers are
    /// notified only on an actual change.
    pub fn select(&self, code: &str) -> CoreResult<Currency> {
        let currency: Currency = code.parse()?;

        {
            let mut selected = self.selected.lock().expect("currency mutex poisoned");
            if *selected == currency {
                return Ok(currency);
            }
            *selected = currency;
        }
        debug!(currency = %currency, "currency selected");

        // The list is checked out for the duration of the notification so
        // a callback may re-enter the context (subscribe, select) without
        // deadlocking on the subscriber mutex.
        let notifying = std::mem::take(
            &mut *self.subscribers.lock().expect("subscriber mutex poisoned"),
        );
        for subscriber in &notifying {
            subscriber(currency);
        }

        let mut subscribers = self.subscribers.lock().expect("subscriber mutex poisoned");
        // Callbacks registered mid-notification keep their spot after the
        // existing list; they see the next change, not this one.
        let registered_during = std::mem::replace(&mut *subscribers, notifying);
        subscribers.extend(registered_during);
        Ok(currency)
    }

    /// Registers a callback invoked with the new currency on every change.
    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn(Currency) + Send + 'static,
    {
        self.subscribers
            .lock()
            .expect("subscriber mutex poisoned")
            .push(Box::new(callback));
    }

    /// Converts a base-currency amount and renders it with the active
    /// symbol, two decimals.
    ///
    /// ## Example
    /// ```rust
    /// use folio_core::Money;
    /// use folio_store::CurrencyContext;
    ///
    /// let currency = CurrencyContext::new();
    /// currency.select("EUR").unwrap();
    /// assert_eq!(currency.format(Money::from_cents(10_000)), "€92.00");
    /// ```
    pub fn format(&self, amount: Money) -> String {
        let currency = self.selected();
        let converted = amount.apply_bps(currency.rate_bps());
        let sign = if converted.is_negative() { "-" } else { "" };
        format!(
            "{}{}{}.{:02}",
            sign,
            currency.symbol(),
            converted.major().abs(),
            converted.minor()
        )
    }
}

impl std::fmt::Debug for CurrencyContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CurrencyContext")
            .field("selected", &self.selected())
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_defaults_to_usd() {
        let currency = CurrencyContext::new();
        assert_eq!(currency.selected(), Currency::Usd);
        assert_eq!(currency.format(Money::from_cents(2995)), "$29.95");
    }

    #[test]
    fn test_eur_conversion_is_exact() {
        // $100.00 at ×0.92 must be exactly €92.00
        let currency = CurrencyContext::new();
        currency.select("EUR").unwrap();
        assert_eq!(currency.format(Money::from_cents(10_000)), "€92.00");
    }

    #[test]
    fn test_select_accepts_selector_entries() {
        let currency = CurrencyContext::new();
        assert_eq!(currency.select("GBP £").unwrap(), Currency::Gbp);
        assert_eq!(currency.selected(), Currency::Gbp);
    }

    #[test]
    fn test_select_unknown_fails_and_keeps_selection() {
        let currency = CurrencyContext::new();
        currency.select("EUR").unwrap();

        assert!(currency.select("DOGE").is_err());
        assert_eq!(currency.selected(), Currency::Eur);
    }

    #[test]
    fn test_change_visible_through_all_clones() {
        let currency = CurrencyContext::new();
        let header = currency.clone();
        let cart_page = currency.clone();

        currency.select("INR").unwrap();
        assert_eq!(header.selected(), Currency::Inr);
        assert_eq!(cart_page.selected(), Currency::Inr);
    }

    #[test]
    fn test_subscribers_notified_on_change_only() {
        let currency = CurrencyContext::new();
        let calls = Arc::new(AtomicUsize::new(0));

        let seen = Arc::clone(&calls);
        currency.subscribe(move |cur| {
            assert_eq!(cur, Currency::Eur);
            seen.fetch_add(1, Ordering::SeqCst);
        });

        currency.select("EUR").unwrap();
        // Re-selecting the active currency is not a change
        currency.select("EUR").unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_callback_may_subscribe_during_notification() {
        let currency = CurrencyContext::new();
        let nested_calls = Arc::new(AtomicUsize::new(0));

        let handle = currency.clone();
        let nested = Arc::clone(&nested_calls);
        currency.subscribe(move |_| {
            let nested = Arc::clone(&nested);
            handle.subscribe(move |_| {
                nested.fetch_add(1, Ordering::SeqCst);
            });
        });

        // Registers a nested callback; it must not see this change
        currency.select("EUR").unwrap();
        assert_eq!(nested_calls.load(Ordering::SeqCst), 0);

        // The nested callback sees the next one
        currency.select("GBP").unwrap();
        assert_eq!(nested_calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_callback_may_select_during_notification() {
        let currency = CurrencyContext::new();
        let calls = Arc::new(AtomicUsize::new(0));

        let handle = currency.clone();
        let seen = Arc::clone(&calls);
        currency.subscribe(move |cur| {
            seen.fetch_add(1, Ordering::SeqCst);
            // Bounce EUR straight to GBP from inside the callback
            if cur == Currency::Eur {
                handle.select("GBP").unwrap();
            }
        });

        currency.select("EUR").unwrap();
        assert_eq!(currency.selected(), Currency::Gbp);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_jpy_formats_with_yen_symbol() {
        let currency = CurrencyContext::new();
        currency.select("JPY").unwrap();
        // $10.00 × 147.20 = ¥1472.00
        assert_eq!(currency.format(Money::from_cents(1000)), "¥1472.00");
    }
}
