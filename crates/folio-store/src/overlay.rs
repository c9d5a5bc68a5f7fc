//! # Overlay Coordinator
//!
//! Tracks which modal-like surfaces are open and owns the single rule that
//! follows: page scrolling is disabled exactly while at least one overlay
//! is open.
//!
//! ## Scroll Lock Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Scroll Lock Transitions                          │
//! │                                                                     │
//! │  open(Coupon)        {} → {Coupon}          lock()   (0 → 1)       │
//! │  open(Upsell)        {Coupon} → {C, U}      (already locked)       │
//! │  close(Coupon)       {C, U} → {Upsell}      (still locked)         │
//! │  close(Upsell)       {Upsell} → {}          unlock() (1 → 0)       │
//! │                                                                     │
//! │  teardown()/Drop     anything → {}          unlock() if locked     │
//! │                                                                     │
//! │  INVARIANT: scroll_locked() == !open_set.is_empty(), always.        │
//! │  The host's scroll is never left disabled after the UI goes away.   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The host page injects a [`ScrollLock`] implementation; the coordinator
//! never touches the DOM (or any other surface) itself.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

// =============================================================================
// Overlay Identifiers
// =============================================================================

/// The overlay surfaces the storefront can open.
///
/// Independent and order-insensitive: any subset may be open at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Overlay {
    Coupon,
    Upsell,
    CrossSell,
    MobileNav,
    SearchDrawer,
}

// =============================================================================
// Scroll Lock Seam
// =============================================================================

/// Host hook for disabling/enabling page scroll.
///
/// Calls are edge-triggered: `lock` fires only on the first overlay
/// opening, `unlock` only when the last one closes (or on teardown).
pub trait ScrollLock: Send {
    /// Disable page scrolling.
    fn lock(&self);
    /// Re-enable page scrolling.
    fn unlock(&self);
}

/// No-op lock for hosts without a scroll surface (tests, SSR).
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopScrollLock;

impl ScrollLock for NoopScrollLock {
    fn lock(&self) {}
    fn unlock(&self) {}
}

// =============================================================================
// Coordinator
// =============================================================================

struct OverlayState {
    open: HashSet<Overlay>,
    scroll: Box<dyn ScrollLock>,
}

// Teardown safety net: if the UI goes away with overlays still open, the
// last handle's drop restores scrolling.
impl Drop for OverlayState {
    fn drop(&mut self) {
        if !self.open.is_empty() {
            self.scroll.unlock();
        }
    }
}

/// Shared overlay-set handle.
#[derive(Clone)]
pub struct OverlayCoordinator {
    inner: Arc<Mutex<OverlayState>>,
}

impl OverlayCoordinator {
    /// Creates a coordinator driving the given scroll lock.
    pub fn new(scroll: impl ScrollLock + 'static) -> Self {
        OverlayCoordinator {
            inner: Arc::new(Mutex::new(OverlayState {
                open: HashSet::new(),
                scroll: Box::new(scroll),
            })),
        }
    }

    /// Opens an overlay. Opening an already-open overlay is a no-op.
    pub fn open(&self, overlay: Overlay) {
        let mut state = self.inner.lock().expect("overlay mutex poisoned");
        let was_locked = !state.open.is_empty();
        if state.open.insert(overlay) {
            debug!(?overlay, open = state.open.len(), "overlay opened");
        }
        if !was_locked && !state.open.is_empty() {
            state.scroll.lock();
        }
    }

    /// Closes an overlay. Closing one that is not open is a no-op.
    pub fn close(&self, overlay: Overlay) {
        let mut state = self.inner.lock().expect("overlay mutex poisoned");
        if state.open.remove(&overlay) {
            debug!(?overlay, open = state.open.len(), "overlay closed");
            if state.open.is_empty() {
                state.scroll.unlock();
            }
        }
    }

    /// True if this overlay is currently open.
    pub fn is_open(&self, overlay: Overlay) -> bool {
        self.inner
            .lock()
            .expect("overlay mutex poisoned")
            .open
            .contains(&overlay)
    }

    /// Number of overlays currently open.
    pub fn open_count(&self) -> usize {
        self.inner.lock().expect("overlay mutex poisoned").open.len()
    }

    /// The derived flag: scrolling is locked iff any overlay is open.
    pub fn scroll_locked(&self) -> bool {
        self.open_count() > 0
    }

    /// Closes everything and unconditionally restores scrolling.
    ///
    /// Called when the whole UI unmounts; safe to call with nothing open.
    pub fn teardown(&self) {
        let mut state = self.inner.lock().expect("overlay mutex poisoned");
        if !state.open.is_empty() {
            state.open.clear();
            state.scroll.unlock();
            debug!("overlay teardown");
        }
    }
}

impl Default for OverlayCoordinator {
    fn default() -> Self {
        Self::new(NoopScrollLock)
    }
}

impl std::fmt::Debug for OverlayCoordinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OverlayCoordinator")
            .field("open_count", &self.open_count())
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
