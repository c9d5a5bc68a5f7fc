//! # Wishlist & Compare Stores
//!
//! Two sets of product references with toggle semantics. Structurally the
//! same store; kept as separate types because the domain treats them
//! differently: the wishlist is an unbounded, ordered gallery, while the
//! compare table renders at most [`COMPARE_CAP`] columns.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use tracing::debug;

use folio_core::{CoreError, CoreResult, Product, ProductId, COMPARE_CAP};

use crate::catalog::Catalog;

// =============================================================================
// Product Set (shared internals)
// =============================================================================

/// An insertion-ordered set of product ids.
///
/// The vec preserves display order; the hash set answers membership in
/// O(1). Both are updated together and only by this type.
#[derive(Debug, Default)]
struct ProductSet {
    order: Vec<ProductId>,
    members: HashSet<ProductId>,
}

impl ProductSet {
    /// Flips membership: inserts if absent, removes if present.
    /// Returns the resulting membership.
    fn toggle(&mut self, id: ProductId) -> bool {
        if self.members.remove(&id) {
            self.order.retain(|&m| m != id);
            false
        } else {
            self.members.insert(id);
            self.order.push(id);
            true
        }
    }

    /// Like [`ProductSet::toggle`], but refuses to grow past `cap`.
    /// Existing members are never evicted to make room.
    fn toggle_capped(&mut self, id: ProductId, cap: usize) -> CoreResult<bool> {
        if !self.members.contains(&id) && self.members.len() >= cap {
            return Err(CoreError::CompareFull { cap });
        }
        Ok(self.toggle(id))
    }

    fn contains(&self, id: ProductId) -> bool {
        self.members.contains(&id)
    }

    fn resolve(&self, catalog: &Catalog) -> Vec<Product> {
        self.order
            .iter()
            .filter_map(|&id| catalog.get(id).ok().cloned())
            .collect()
    }
}

// =============================================================================
// Wishlist Store
// =============================================================================

/// Shared wishlist handle. Unbounded; insertion order is display order.
#[derive(Debug, Clone, Default)]
pub struct WishlistStore {
    inner: Arc<Mutex<ProductSet>>,
}

impl WishlistStore {
    /// Creates an empty wishlist.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the product if absent, removes it if present.
    /// Returns whether the product is now in the wishlist.
    pub fn toggle(&self, id: ProductId) -> bool {
        let mut set = self.inner.lock().expect("wishlist mutex poisoned");
        let present = set.toggle(id);
        debug!(product = %id, present, "wishlist toggle");
        present
    }

    /// O(1) membership check.
    pub fn contains(&self, id: ProductId) -> bool {
        self.inner
            .lock()
            .expect("wishlist mutex poisoned")
            .contains(id)
    }

    /// Member ids in insertion order.
    pub fn ids(&self) -> Vec<ProductId> {
        self.inner
            .lock()
            .expect("wishlist mutex poisoned")
            .order
            .clone()
    }

    /// Members resolved against the catalog, in insertion order.
    pub fn list(&self, catalog: &Catalog) -> Vec<Product> {
        self.inner
            .lock()
            .expect("wishlist mutex poisoned")
            .resolve(catalog)
    }

    /// Number of wishlisted products.
    pub fn len(&self) -> usize {
        self.inner
            .lock()
            .expect("wishlist mutex poisoned")
            .order
            .len()
    }

    /// True if nothing is wishlisted.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// =============================================================================
// Compare Store
// =============================================================================

/// Shared compare-list handle, capped at [`COMPARE_CAP`] products.
#[derive(Debug, Clone, Default)]
pub struct CompareStore {
    inner: Arc<Mutex<ProductSet>>,
}

impl CompareStore {
    /// Creates an empty compare list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the product if absent, removes it if present.
    ///
    /// Adding a new product when the list already holds [`COMPARE_CAP`]
    /// fails with `CompareFull` and leaves the list untouched; toggling a
    /// current member off always succeeds.
    pub fn toggle(&self, id: ProductId) -> CoreResult<bool> {
        let mut set = self.inner.lock().expect("compare mutex poisoned");
        let present = set.toggle_capped(id, COMPARE_CAP)?;
        debug!(product = %id, present, "compare toggle");
        Ok(present)
    }

    /// O(1) membership check.
    pub fn contains(&self, id: ProductId) -> bool {
        self.inner
            .lock()
            .expect("compare mutex poisoned")
            .contains(id)
    }

    /// Member ids.
    pub fn ids(&self) -> Vec<ProductId> {
        self.inner
            .lock()
            .expect("compare mutex poisoned")
            .order
            .clone()
    }

    /// Members resolved against the catalog.
    pub fn list(&self, catalog: &Catalog) -> Vec<Product> {
        self.inner
            .lock()
            .expect("compare mutex poisoned")
            .resolve(catalog)
    }

    /// Number of products being compared.
    pub fn len(&self) -> usize {
        self.inner
            .lock()
            .expect("compare mutex poisoned")
            .order
            .len()
    }

    /// True if nothing is being compared.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u32) -> Product {
        Product {
            id: ProductId(id),
            title: format!("Book {}", id),
            author: "Author".to_string(),
            price_cents: 1000,
            discount_percent: None,
            rating: 3,
            image: format!("{}.webp", id),
            description: String::new(),
        }
    }

    fn catalog(ids: &[u32]) -> Catalog {
        Catalog::new(ids.iter().map(|&id| product(id)).collect())
    }

    #[test]
    fn test_wishlist_toggle_is_membership_flip() {
        let wishlist = WishlistStore::new();

        assert!(wishlist.toggle(ProductId(1)));
        assert!(wishlist.contains(ProductId(1)));

        // Toggling twice restores the original membership
        assert!(!wishlist.toggle(ProductId(1)));
        assert!(!wishlist.contains(ProductId(1)));
        assert!(wishlist.is_empty());
    }

    #[test]
    fn test_wishlist_no_duplicates() {
        let wishlist = WishlistStore::new();
        wishlist.toggle(ProductId(1));
        wishlist.toggle(ProductId(1));
        wishlist.toggle(ProductId(1));

        assert_eq!(wishlist.len(), 1);
        assert_eq!(wishlist.ids(), vec![ProductId(1)]);
    }

    #[test]
    fn test_wishlist_preserves_insertion_order() {
        let wishlist = WishlistStore::new();
        wishlist.toggle(ProductId(3));
        wishlist.toggle(ProductId(1));
        wishlist.toggle(ProductId(2));

        let cat = catalog(&[1, 2, 3]);
        let titles: Vec<String> =
            wishlist.list(&cat).into_iter().map(|p| p.title).collect();
        assert_eq!(titles, vec!["Book 3", "Book 1", "Book 2"]);
    }

    #[test]
    fn test_wishlist_reinsert_moves_to_end() {
        let wishlist = WishlistStore::new();
        wishlist.toggle(ProductId(1));
        wishlist.toggle(ProductId(2));
        wishlist.toggle(ProductId(1)); // off
        wishlist.toggle(ProductId(1)); // back on, now newest

        assert_eq!(wishlist.ids(), vec![ProductId(2), ProductId(1)]);
    }

    #[test]
    fn test_compare_cap_rejects_fifth_product() {
        let compare = CompareStore::new();
        for id in 1..=4 {
            assert!(compare.toggle(ProductId(id)).unwrap());
        }

        let err = compare.toggle(ProductId(5)).unwrap_err();
        assert_eq!(err, CoreError::CompareFull { cap: COMPARE_CAP });

        // The existing four are untouched
        assert_eq!(compare.len(), 4);
        for id in 1..=4 {
            assert!(compare.contains(ProductId(id)));
        }
    }

    #[test]
    fn test_compare_toggle_off_works_at_cap() {
        let compare = CompareStore::new();
        for id in 1..=4 {
            compare.toggle(ProductId(id)).unwrap();
        }

        // Removing a member is always allowed, then there is room again
        assert!(!compare.toggle(ProductId(2)).unwrap());
        assert!(compare.toggle(ProductId(5)).unwrap());
        assert_eq!(compare.len(), 4);
    }

    #[test]
    fn test_list_resolves_against_catalog() {
        let compare = CompareStore::new();
        compare.toggle(ProductId(2)).unwrap();
        compare.toggle(ProductId(9)).unwrap(); // not in catalog

        let cat = catalog(&[1, 2, 3]);
        let resolved = compare.list(&cat);
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].id, ProductId(2));
    }

    #[test]
    fn test_clones_share_state() {
        let wishlist = WishlistStore::new();
        let view = wishlist.clone();
        wishlist.toggle(ProductId(1));
        assert!(view.contains(ProductId(1)));
    }
}
