//! # Sticky Bar Visibility
//!
//! Derives the "show sticky purchase bar" flag from the page's scroll
//! position. The bar slides in once the reader scrolls past the product's
//! main add-to-cart block and slides back out near the footer.
//!
//! The derivation is pure and cheap: the host feeds every scroll event
//! straight in, no debouncing required. Recomputing with the same position
//! is idempotent.

use std::sync::{Arc, Mutex};

use tracing::trace;

#[derive(Debug)]
struct StickyState {
    /// Scroll offset of the primary add-to-cart control's bottom edge.
    start: f64,
    /// Scroll offset where the bar should retire (e.g. footer top).
    end: f64,
    visible: bool,
}

/// Shared sticky-bar visibility handle.
///
/// Visible while the position has passed `start` and not yet passed
/// `end`. Positions exactly on a boundary count as not yet passed.
#[derive(Debug, Clone)]
pub struct StickyBar {
    inner: Arc<Mutex<StickyState>>,
}

impl StickyBar {
    /// Creates a controller for the given boundaries.
    ///
    /// `start` is where the bar appears, `end` where it disappears again;
    /// both are scroll offsets in the host's units (pixels, typically).
    pub fn new(start: f64, end: f64) -> Self {
        StickyBar {
            inner: Arc::new(Mutex::new(StickyState {
                start,
                end,
                visible: false,
            })),
        }
    }

    /// Re-anchors the boundaries after a relayout (resize, image load).
    ///
    /// Visibility is recomputed on the next scroll event; hosts that want
    /// an immediate update call [`StickyBar::on_scroll`] right after.
    pub fn set_bounds(&self, start: f64, end: f64) {
        let mut state = self.inner.lock().expect("sticky mutex poisoned");
        state.start = start;
        state.end = end;
    }

    /// Feeds a scroll position and returns the derived visibility.
    pub fn on_scroll(&self, position: f64) -> bool {
        let mut state = self.inner.lock().expect("sticky mutex poisoned");
        let visible = position > state.start && position < state.end;
        if visible != state.visible {
            trace!(position, visible, "sticky bar visibility change");
            state.visible = visible;
        }
        visible
    }

    /// The last derived visibility.
    pub fn is_visible(&self) -> bool {
        self.inner.lock().expect("sticky mutex poisoned").visible
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_before_start() {
        let sticky = StickyBar::new(400.0, 3000.0);
        assert!(!sticky.on_scroll(0.0));
        assert!(!sticky.on_scroll(399.9));
        assert!(!sticky.is_visible());
    }

    #[test]
    fn test_visible_between_boundaries() {
        let sticky = StickyBar::new(400.0, 3000.0);
        assert!(sticky.on_scroll(401.0));
        assert!(sticky.is_visible());
        assert!(sticky.on_scroll(2999.0));
    }

    #[test]
    fn test_hidden_past_end() {
        let sticky = StickyBar::new(400.0, 3000.0);
        sticky.on_scroll(1000.0);
        assert!(!sticky.on_scroll(3500.0));
        assert!(!sticky.is_visible());
    }

    #[test]
    fn test_boundaries_are_exclusive() {
        let sticky = StickyBar::new(400.0, 3000.0);
        // Sitting exactly on a boundary has not passed it
        assert!(!sticky.on_scroll(400.0));
        assert!(!sticky.on_scroll(3000.0));
    }

    #[test]
    fn test_recompute_is_idempotent() {
        let sticky = StickyBar::new(400.0, 3000.0);
        for _ in 0..3 {
            assert!(sticky.on_scroll(500.0));
        }
        assert!(sticky.is_visible());
    }

    #[test]
    fn test_set_bounds_relayout() {
        let sticky = StickyBar::new(400.0, 3000.0);
        assert!(sticky.on_scroll(500.0));

        // Page grew: the add-to-cart block moved down past us
        sticky.set_bounds(800.0, 4000.0);
        assert!(!sticky.on_scroll(500.0));
        assert!(sticky.on_scroll(900.0));
    }

    #[test]
    fn test_scrolling_back_up_hides_again() {
        let sticky = StickyBar::new(400.0, 3000.0);
        assert!(sticky.on_scroll(1000.0));
        assert!(!sticky.on_scroll(100.0));
        assert!(!sticky.is_visible());
    }
}
