use super::CatalogBackend;
use crate::error::{Result, StockroomError};
use crate::model::{NewProduct, Product, ProductPatch};

/// The catalog manager: sole authority over contents, id assignment, and
/// durability.
///
/// Generic over [`CatalogBackend`] so the same CRUD logic runs against a
/// file ([`super::FileStore`]) or memory ([`super::InMemoryStore`]).
///
/// The catalog is loaded once at construction and written through on every
/// successful mutation. Each mutation builds the successor catalog, persists
/// it, and only then commits it to memory, so the in-memory state and the
/// backing store can never disagree: a failed write leaves both at the
/// pre-operation state.
pub struct ProductStore<B: CatalogBackend> {
    backend: B,
    products: Vec<Product>,
    last_id: u64,
}

impl<B: CatalogBackend> ProductStore<B> {
    /// Open a store over `backend`.
    ///
    /// An absent, unreadable, or malformed backing catalog is recoverable:
    /// the store starts empty. The id counter resumes from the largest id
    /// found, so ids stay unique across process restarts.
    pub fn open(backend: B) -> Self {
        let products = backend.load().ok().flatten().unwrap_or_default();
        let last_id = products.iter().map(|p| p.id).max().unwrap_or(0);
        Self {
            backend,
            products,
            last_id,
        }
    }

    /// Validate `new`, assign it the next id, append it, and persist.
    ///
    /// Fails with [`StockroomError::MissingFields`] or
    /// [`StockroomError::InvalidPrice`] on bad input, and with
    /// [`StockroomError::DuplicateCode`] when another product already
    /// carries the code. No failure mutates the catalog.
    pub fn add(&mut self, new: NewProduct) -> Result<Product> {
        new.validate()?;
        if self.products.iter().any(|p| p.code == new.code) {
            return Err(StockroomError::DuplicateCode(new.code));
        }

        let product = new.into_product(self.last_id + 1);

        let mut next = self.products.clone();
        next.push(product.clone());
        self.backend.save(&next)?;

        self.products = next;
        self.last_id = product.id;
        Ok(product)
    }

    /// The current in-memory catalog, in insertion order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Look up a product by id.
    pub fn get(&self, id: u64) -> Result<&Product> {
        self.products
            .iter()
            .find(|p| p.id == id)
            .ok_or(StockroomError::ProductNotFound(id))
    }

    /// Merge `patch` onto the product with `id` and persist.
    ///
    /// Only fields set in the patch change; the id never does. The merged
    /// record is held to the same field rules as `add`, and setting `code`
    /// to another product's code fails with
    /// [`StockroomError::DuplicateCode`], so the catalog invariants survive
    /// updates as well as adds.
    pub fn update(&mut self, id: u64, patch: ProductPatch) -> Result<Product> {
        let index = self
            .products
            .iter()
            .position(|p| p.id == id)
            .ok_or(StockroomError::ProductNotFound(id))?;

        let mut updated = self.products[index].clone();
        patch.apply(&mut updated);
        updated.validate()?;

        let taken = self
            .products
            .iter()
            .any(|p| p.id != id && p.code == updated.code);
        if taken {
            return Err(StockroomError::DuplicateCode(updated.code));
        }

        let mut next = self.products.clone();
        next[index] = updated.clone();
        self.backend.save(&next)?;

        self.products = next;
        Ok(updated)
    }

    /// Remove the product with `id` and persist.
    ///
    /// A missing id fails with [`StockroomError::ProductNotFound`] and
    /// performs no write. Deleted ids are never reassigned.
    pub fn delete(&mut self, id: u64) -> Result<()> {
        let next: Vec<Product> = self
            .products
            .iter()
            .filter(|p| p.id != id)
            .cloned()
            .collect();
        if next.len() == self.products.len() {
            return Err(StockroomError::ProductNotFound(id));
        }

        self.backend.save(&next)?;
        self.products = next;
        Ok(())
    }
}
