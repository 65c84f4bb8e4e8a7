//! Static filter configuration: category groups and price ranges.
//!
//! Both are configuration data shipped with the storefront, not runtime
//! state. [`CategoryGroups`] is built once and never mutated afterwards.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use greenbasket_core::ValueObject;

/// Sentinel category label meaning "no category criterion".
pub const ALL_CATEGORIES: &str = "All";

/// A labeled, inclusive price interval. `max: None` means unbounded above.
///
/// Prices are in the smallest currency unit, matching
/// [`greenbasket_catalog::Product::offer_price`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    label: String,
    min: u64,
    max: Option<u64>,
}

impl PriceRange {
    pub fn new(label: impl Into<String>, min: u64, max: Option<u64>) -> Self {
        Self {
            label: label.into(),
            min,
            max,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn min(&self) -> u64 {
        self.min
    }

    pub fn max(&self) -> Option<u64> {
        self.max
    }

    /// Inclusive containment; an unbounded range only checks the minimum.
    pub fn contains(&self, price: u64) -> bool {
        price >= self.min && self.max.is_none_or(|max| price <= max)
    }
}

impl ValueObject for PriceRange {}

/// The storefront's default price ladder.
pub fn default_price_ranges() -> Vec<PriceRange> {
    vec![
        PriceRange::new("Less than Rs 20", 0, Some(20)),
        PriceRange::new("Rs 21 to Rs 50", 21, Some(50)),
        PriceRange::new("Rs 51 to Rs 100", 51, Some(100)),
        PriceRange::new("Rs 101 to Rs 200", 101, Some(200)),
        PriceRange::new("Rs 201 to Rs 500", 201, Some(500)),
        PriceRange::new("More than Rs 500", 501, None),
    ]
}

/// Selectable category labels rendered by the storefront sidebar, including
/// the [`ALL_CATEGORIES`] sentinel.
pub fn storefront_category_labels() -> &'static [&'static str] {
    &[
        ALL_CATEGORIES,
        "Fruits & Vegetables",
        "Exotic Fruits & Veggies",
        "Exotic Fruits",
        "Exotic Vegetables",
        "Drinks",
        "Instant",
        "Dairy Products",
        "Bakery",
        "Grains & Cereals",
    ]
}

/// Brands carried by the storefront.
pub fn storefront_brands() -> &'static [&'static str] {
    &[
        "Farmogo",
        "fresho!",
        "Simply Fresh",
        "Supa Corn",
        "SV Agri Carisma",
        "Tadaa",
        "Trikaya",
    ]
}

/// Immutable lookup table mapping a selectable group label to the literal
/// category strings it covers (many raw category values normalize to one
/// selectable group).
///
/// Labels without an explicit mapping fall back to the label itself as the
/// single literal to match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryGroups {
    groups: BTreeMap<String, Vec<String>>,
}

impl CategoryGroups {
    /// Build a lookup table from `(label, literals)` pairs.
    pub fn from_groups<L, I, S>(groups: I) -> Self
    where
        I: IntoIterator<Item = (L, Vec<S>)>,
        L: Into<String>,
        S: Into<String>,
    {
        Self {
            groups: groups
                .into_iter()
                .map(|(label, literals)| {
                    (
                        label.into(),
                        literals.into_iter().map(Into::into).collect(),
                    )
                })
                .collect(),
        }
    }

    /// The storefront's shipped group table.
    pub fn storefront_defaults() -> Self {
        Self::from_groups([
            (
                "Fruits & Vegetables",
                vec!["Fruits & Vegetables", "Vegetables", "Fruits"],
            ),
            ("Exotic Fruits & Veggies", vec!["Exotic Fruits & Veggies"]),
            ("Exotic Fruits", vec!["Exotic Fruits"]),
            ("Exotic Vegetables", vec!["Exotic Vegetables"]),
            ("drink", vec!["drink"]),
            ("Instant Food", vec!["Instant Food"]),
            ("Dairy Products", vec!["Dairy Products"]),
            ("Bakery & Breads", vec!["Bakery & Breads"]),
            ("Grains & Cereals", vec!["Grains", "Cereals", "Grains & Cereals"]),
        ])
    }

    /// Literals a label expands to, when an explicit mapping exists.
    pub fn expansion(&self, label: &str) -> Option<&[String]> {
        self.groups.get(label).map(Vec::as_slice)
    }

    /// Whether a product's raw category value belongs to the group `label`.
    ///
    /// The category matches when it equals, or contains as a substring, any
    /// literal in the label's expansion (case-insensitive). Unknown labels
    /// use the label itself as the single literal.
    pub fn matches(&self, label: &str, category: &str) -> bool {
        let category = category.to_lowercase();
        match self.expansion(label) {
            Some(literals) => literals
                .iter()
                .any(|lit| category.contains(&lit.to_lowercase())),
            None => category.contains(&label.to_lowercase()),
        }
    }
}

impl Default for CategoryGroups {
    fn default() -> Self {
        Self::storefront_defaults()
    }
}
