//! # Catalog
//!
//! Read-only collection of products, loaded once at startup. Source of
//! truth for product identity and base price; never mutated afterwards.

use std::collections::HashMap;

use folio_core::{CoreError, CoreResult, Product, ProductId};

/// The product catalog.
///
/// Holds every product in load order plus an id index for O(1) lookup.
/// There is deliberately no mutation API: the cart snapshots prices
/// precisely so that nothing ever needs to write back here.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
    index: HashMap<ProductId, usize>,
}

impl Catalog {
    /// Builds a catalog from a product list.
    ///
    /// If the same id appears twice the last record wins, matching a
    /// keyed-by-id data file; the shadowed record is dropped, so `all`
    /// and `len` agree with `get`. Discount percentages are clamped to
    /// 100 on the way in.
    pub fn new(products: Vec<Product>) -> Self {
        let mut index = HashMap::new();
        let mut deduped: Vec<Product> = Vec::with_capacity(products.len());
        for mut product in products {
            if let Some(pct) = product.discount_percent.as_mut() {
                *pct = (*pct).min(100);
            }
            match index.get(&product.id) {
                Some(&slot) => deduped[slot] = product,
                None => {
                    index.insert(product.id, deduped.len());
                    deduped.push(product);
                }
            }
        }
        Catalog {
            products: deduped,
            index,
        }
    }

    /// Looks up a product by id.
    pub fn get(&self, id: ProductId) -> CoreResult<&Product> {
        self.index
            .get(&id)
            .map(|&i| &self.products[i])
            .ok_or(CoreError::ProductNotFound(id))
    }

    /// All products in load order.
    pub fn all(&self) -> &[Product] {
        &self.products
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// True if the catalog holds no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
