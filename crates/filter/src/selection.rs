//! Transient, session-scoped filter criteria.

use serde::{Deserialize, Serialize};

use greenbasket_core::ValueObject;

use crate::config::{ALL_CATEGORIES, PriceRange};

/// The combined set of active search/category/brand/price criteria.
///
/// A value object mutated only by explicit user actions; it lives for the
/// duration of a browse session and is never persisted. The search text is
/// shared application-wide (the header search box), so [`clear_filters`]
/// leaves it untouched.
///
/// [`clear_filters`]: FilterSelection::clear_filters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSelection {
    search: String,
    category: String,
    brand: Option<String>,
    price_range: Option<PriceRange>,
}

impl FilterSelection {
    pub fn new() -> Self {
        Self {
            search: String::new(),
            category: ALL_CATEGORIES.to_string(),
            brand: None,
            price_range: None,
        }
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn brand(&self) -> Option<&str> {
        self.brand.as_deref()
    }

    pub fn price_range(&self) -> Option<&PriceRange> {
        self.price_range.as_ref()
    }

    /// True when no criterion beyond the stock rule is active.
    pub fn is_default(&self) -> bool {
        self.search.is_empty()
            && self.category == ALL_CATEGORIES
            && self.brand.is_none()
            && self.price_range.is_none()
    }

    /// Replace the shared search text. Empty text deactivates the criterion.
    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search = text.into();
    }

    /// Select a category group. Always sets: selecting [`ALL_CATEGORIES`] is
    /// the only way to deselect (no toggle-off, unlike brand/price).
    pub fn select_category(&mut self, label: impl Into<String>) {
        self.category = label.into();
    }

    /// Select a brand, or deselect it when it is already selected.
    pub fn toggle_brand(&mut self, brand: &str) {
        if self.brand.as_deref() == Some(brand) {
            self.brand = None;
        } else {
            self.brand = Some(brand.to_string());
        }
    }

    /// Select a price range, or deselect it when the same range (by value)
    /// is already selected.
    pub fn toggle_price_range(&mut self, range: PriceRange) {
        if self.price_range.as_ref() == Some(&range) {
            self.price_range = None;
        } else {
            self.price_range = Some(range);
        }
    }

    /// Reset category to [`ALL_CATEGORIES`] and unset brand and price range.
    /// The search text is independently scoped and stays as-is.
    pub fn clear_filters(&mut self) {
        self.category = ALL_CATEGORIES.to_string();
        self.brand = None;
        self.price_range = None;
    }
}

impl Default for FilterSelection {
    fn default() -> Self {
        Self::new()
    }
}

impl ValueObject for FilterSelection {}
