//! # Stockroom Architecture
//!
//! Stockroom is a small persistence library: a file-backed catalog of
//! product records with CRUD operations and duplicate-code validation, for a
//! single owning process. There is no CLI, no server, and no concurrency
//! model here — any such wrapper is an external caller of the five
//! operations below.
//!
//! ## The Two-Layer Design
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Catalog Layer (store/product_store.rs)                     │
//! │  - ProductStore<B>: validation, id assignment, uniqueness,  │
//! │    merge-update, write-through persistence                  │
//! │  - add / products / get / update / delete                   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract CatalogBackend trait                            │
//! │  - FileBackend (production), MemBackend (testing/ephemeral) │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Consistency Rule
//!
//! Every mutation builds the successor catalog, persists it, and only then
//! commits it in memory. Either the operation fully succeeds (memory and
//! backing file agree) or fully fails (both still hold the pre-operation
//! state). There is no partial-success state.
//!
//! ## Error Policy
//!
//! All failures — missing fields, duplicate codes, unknown ids, storage
//! trouble — are explicit [`error::StockroomError`] values for callers to
//! branch on. Nothing in this crate writes to stdout/stderr, panics on bad
//! input, or exits the process. A missing or corrupt catalog file at open
//! time is recoverable: the store starts empty.
//!
//! ## Module Overview
//!
//! - [`store`]: the [`store::ProductStore`] manager plus storage backends
//! - [`model`]: core data types ([`model::Product`], [`model::NewProduct`],
//!   [`model::ProductPatch`])
//! - [`config`]: data-file location configuration
//! - [`error`]: error types

pub mod config;
pub mod error;
pub mod model;
pub mod store;

pub use config::StockroomConfig;
pub use error::{Result, StockroomError};
pub use model::{NewProduct, Product, ProductPatch};
pub use store::{FileStore, InMemoryStore, ProductStore};
