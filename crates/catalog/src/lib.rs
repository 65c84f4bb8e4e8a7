//! Catalog domain module.
//!
//! This crate contains the storefront's product records and the in-memory
//! catalog collection, implemented purely as deterministic domain logic
//! (no IO, no HTTP, no storage).

pub mod product;
pub mod store;

pub use product::{Product, ProductChanges, ProductDraft};
pub use store::CatalogStore;
