//! # Storage Layer
//!
//! Persistence for the catalog sits behind the [`CatalogBackend`] trait so
//! the CRUD logic in [`ProductStore`] never knows whether it is talking to a
//! file or to memory.
//!
//! ## Implementations
//!
//! - [`fs::FileBackend`]: production storage — the whole catalog as one JSON
//!   array in a single file, rewritten atomically on every mutation.
//! - [`memory::MemBackend`]: in-memory storage for tests and for callers who
//!   want an ephemeral catalog with identical semantics.
//!
//! ## Storage Format
//!
//! For `FileBackend`:
//! ```text
//! products.json    # the entire catalog, a pretty-printed JSON array
//! ```
//!
//! The catalog is the unit of persistence. There is no per-record or delta
//! write: `save` always replaces the full serialized sequence, which keeps
//! the round-trip property trivial to uphold.

use crate::error::Result;
use crate::model::Product;

pub mod fs;
pub mod memory;
pub mod product_store;

pub use fs::{FileBackend, FileStore};
pub use memory::{InMemoryStore, MemBackend};
pub use product_store::ProductStore;

/// Abstract interface for raw catalog I/O.
///
/// The backend handles the "how" of storage (filesystem vs memory), while
/// `ProductStore` handles the "what" (validation, id assignment, uniqueness).
pub trait CatalogBackend {
    /// Load the full catalog.
    ///
    /// Returns `Ok(None)` when the backing location does not exist yet.
    /// Returns `Err` only on actual failures (permissions, disk errors,
    /// malformed content).
    fn load(&self) -> Result<Option<Vec<Product>>>;

    /// Persist the full catalog, replacing whatever was there.
    ///
    /// MUST be atomic (e.g. write to tmp then rename) so a failed write
    /// never leaves a half-written catalog behind.
    fn save(&self, catalog: &[Product]) -> Result<()>;
}
