//! In-memory product store.
//!
//! The collection lives behind an `Arc` and is copied on write: a
//! [`Snapshot`] handed out before a mutation keeps seeing the old
//! collection. `revision` increases on every mutation that changed the
//! collection and on nothing else, so derived views can key caches on it.

use std::sync::Arc;
use stockroom_types::{Product, ProductDraft, ProductId};

/// Read-only view of the collection at one revision
pub type Snapshot = Arc<Vec<Product>>;

/// Monotonic identifier source owned by the store.
///
/// Never hands out the same id twice, including ids freed by deletes. Once
/// `u64::MAX` has been issued the generator is exhausted and yields nothing.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    next: Option<u64>,
}

impl IdGenerator {
    /// Start one past the largest id in `products` (or at 1).
    pub fn after(products: &[Product]) -> Self {
        let max = products.iter().map(|p| p.id.get()).max().unwrap_or(0);
        Self {
            next: max.checked_add(1),
        }
    }

    pub fn next_id(&mut self) -> Option<ProductId> {
        let id = self.next?;
        self.next = id.checked_add(1);
        Some(ProductId::new(id))
    }
}

#[derive(Debug, Clone)]
pub struct ProductStore {
    products: Snapshot,
    ids: IdGenerator,
    revision: u64,
}

impl Default for ProductStore {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl ProductStore {
    pub fn new(products: Vec<Product>) -> Self {
        let ids = IdGenerator::after(&products);
        Self {
            products: Arc::new(products),
            ids,
            revision: 0,
        }
    }

    /// Append a new product with a fresh identifier.
    ///
    /// Returns `None` and leaves the collection untouched when the id space
    /// is exhausted.
    pub fn add(&mut self, draft: ProductDraft) -> Option<Product> {
        let product = Product::from_draft(self.ids.next_id()?, draft);
        Arc::make_mut(&mut self.products).push(product.clone());
        self.revision += 1;
        Some(product)
    }

    /// Replace the product with the same id.
    ///
    /// Returns `false` and leaves the collection untouched when no product
    /// has that id.
    pub fn update(&mut self, product: Product) -> bool {
        let Some(index) = self.position(product.id) else {
            return false;
        };

        Arc::make_mut(&mut self.products)[index] = product;
        self.revision += 1;
        true
    }

    /// Delete the product with `id`, returning it if it existed
    pub fn remove(&mut self, id: ProductId) -> Option<Product> {
        let index = self.position(id)?;
        let removed = Arc::make_mut(&mut self.products).remove(index);
        self.revision += 1;
        Some(removed)
    }

    /// The whole collection in insertion order
    pub fn all(&self) -> Snapshot {
        Arc::clone(&self.products)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn position(&self, id: ProductId) -> Option<usize> {
        self.products.iter().position(|p| p.id == id)
    }
}
