//! A browse session: selection state wired to synchronous re-filtering.
//!
//! The presentation layer mutates the selection through explicit actions;
//! every mutation re-filters against the supplied catalog snapshot, and the
//! latest pass simply supersedes the previous result. Each pass reads an
//! immutable snapshot and writes a fresh result collection.

use tracing::debug;

use greenbasket_catalog::Product;
use greenbasket_core::SessionId;

use crate::config::{CategoryGroups, PriceRange};
use crate::engine::filter_products;
use crate::selection::FilterSelection;

/// Per-user filter state for one catalog-browsing session.
#[derive(Debug, Clone)]
pub struct BrowseSession {
    id: SessionId,
    groups: CategoryGroups,
    selection: FilterSelection,
    /// `None` until the first filter pass; `Some(empty)` is a real result
    /// ("no products matched"), not an unapplied state.
    results: Option<Vec<Product>>,
}

impl BrowseSession {
    pub fn new(groups: CategoryGroups) -> Self {
        Self {
            id: SessionId::new(),
            groups,
            selection: FilterSelection::new(),
            results: None,
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    pub fn groups(&self) -> &CategoryGroups {
        &self.groups
    }

    /// The latest filter result, or `None` when no pass has run yet.
    pub fn results(&self) -> Option<&[Product]> {
        self.results.as_deref()
    }

    /// Re-filter after the catalog snapshot changed.
    pub fn refresh(&mut self, products: &[Product]) {
        let filtered: Vec<Product> = filter_products(products, &self.selection, &self.groups)
            .into_iter()
            .cloned()
            .collect();
        debug!(
            session_id = %self.id,
            total = products.len(),
            matched = filtered.len(),
            "filter pass"
        );
        self.results = Some(filtered);
    }

    pub fn set_search(&mut self, text: impl Into<String>, products: &[Product]) {
        self.selection.set_search(text);
        self.refresh(products);
    }

    pub fn select_category(&mut self, label: impl Into<String>, products: &[Product]) {
        self.selection.select_category(label);
        self.refresh(products);
    }

    pub fn toggle_brand(&mut self, brand: &str, products: &[Product]) {
        self.selection.toggle_brand(brand);
        self.refresh(products);
    }

    pub fn toggle_price_range(&mut self, range: PriceRange, products: &[Product]) {
        self.selection.toggle_price_range(range);
        self.refresh(products);
    }

    pub fn clear_filters(&mut self, products: &[Product]) {
        self.selection.clear_filters();
        self.refresh(products);
    }
}
