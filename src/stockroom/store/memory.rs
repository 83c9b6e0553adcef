use super::product_store::ProductStore;
use super::CatalogBackend;
use crate::error::{Result, StockroomError};
use crate::model::Product;
use std::cell::RefCell;

/// In-memory catalog store for tests and ephemeral use.
pub type InMemoryStore = ProductStore<MemBackend>;

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        ProductStore::open(MemBackend::new())
    }
}

/// Keeps the serialized catalog in a memory slot instead of a file.
/// `None` plays the role of "the file does not exist yet".
///
/// Uses `RefCell` for interior mutability since the store is
/// single-threaded, which lets the `CatalogBackend` trait keep `&self` for
/// all methods.
#[derive(Default)]
pub struct MemBackend {
    catalog: RefCell<Option<Vec<Product>>>,
    simulate_write_error: RefCell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }
}

impl CatalogBackend for MemBackend {
    fn load(&self) -> Result<Option<Vec<Product>>> {
        Ok(self.catalog.borrow().clone())
    }

    fn save(&self, catalog: &[Product]) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(StockroomError::Io(std::io::Error::other(
                "simulated write error",
            )));
        }
        *self.catalog.borrow_mut() = Some(catalog.to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(id: u64, code: &str) -> Product {
        Product {
            id,
            title: "Dragon".to_string(),
            description: "3D print".to_string(),
            price: 9000.0,
            thumbnail: "img1.jpg".to_string(),
            code: code.to_string(),
            stock: 50,
        }
    }

    #[test]
    fn fresh_backend_has_no_catalog() {
        let backend = MemBackend::new();
        assert!(backend.load().unwrap().is_none());
    }

    #[test]
    fn save_then_load_round_trips() {
        let backend = MemBackend::new();
        let catalog = vec![sample(1, "ABC123"), sample(2, "DEF456")];
        backend.save(&catalog).unwrap();
        assert_eq!(backend.load().unwrap().unwrap(), catalog);
    }

    #[test]
    fn saving_empty_catalog_is_distinct_from_absent() {
        let backend = MemBackend::new();
        backend.save(&[]).unwrap();
        assert_eq!(backend.load().unwrap(), Some(Vec::new()));
    }
}
