//! In-memory catalog collection.
//!
//! Insertion order is preserved: the filter engine is a stable filter, so the
//! order products enter the catalog is the order they leave it.

use chrono::{DateTime, Utc};
use tracing::debug;

use greenbasket_core::{DomainError, DomainResult, ProductId};

use crate::product::{Product, ProductChanges, ProductDraft};

/// The catalog store: an insertion-ordered collection of product records.
///
/// All mutations take an explicit `occurred_at` so behavior stays
/// deterministic under test.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogStore {
    items: Vec<Product>,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// All products, in insertion order.
    pub fn products(&self) -> &[Product] {
        &self.items
    }

    /// Owned copy of the current catalog, for a filter pass over a stable view.
    pub fn snapshot(&self) -> Vec<Product> {
        self.items.clone()
    }

    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.items.iter().find(|p| p.id_typed() == *id)
    }

    /// Validate and add a product. Duplicate identifiers are a conflict.
    pub fn add(&mut self, draft: ProductDraft, occurred_at: DateTime<Utc>) -> DomainResult<()> {
        if self.get(&draft.id).is_some() {
            return Err(DomainError::conflict("product already exists"));
        }
        let product = Product::new(draft, occurred_at)?;
        debug!(product_id = %product.id_typed(), name = product.name(), "product added");
        self.items.push(product);
        Ok(())
    }

    /// Apply a partial update to an existing product.
    pub fn update(
        &mut self,
        id: &ProductId,
        changes: ProductChanges,
        occurred_at: DateTime<Utc>,
    ) -> DomainResult<()> {
        let product = self
            .items
            .iter_mut()
            .find(|p| p.id_typed() == *id)
            .ok_or_else(DomainError::not_found)?;
        product.apply_changes(changes, occurred_at)?;
        debug!(product_id = %id, "product updated");
        Ok(())
    }

    /// Flip a product's stock flag.
    pub fn set_stock(
        &mut self,
        id: &ProductId,
        in_stock: bool,
        occurred_at: DateTime<Utc>,
    ) -> DomainResult<()> {
        let product = self
            .items
            .iter_mut()
            .find(|p| p.id_typed() == *id)
            .ok_or_else(DomainError::not_found)?;
        product.set_in_stock(in_stock, occurred_at);
        debug!(product_id = %id, in_stock, "stock changed");
        Ok(())
    }

    /// Remove a product, returning the removed record.
    pub fn remove(&mut self, id: &ProductId) -> DomainResult<Product> {
        let pos = self
            .items
            .iter()
            .position(|p| p.id_typed() == *id)
            .ok_or_else(DomainError::not_found)?;
        let removed = self.items.remove(pos);
        debug!(product_id = %id, "product removed");
        Ok(removed)
    }
}
