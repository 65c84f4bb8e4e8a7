//! Filter engine for the storefront catalog.
//!
//! Pure, deterministic product filtering: a [`FilterSelection`] applied to a
//! catalog snapshot yields the ordered subset of in-stock products matching
//! every active criterion. No IO, no hidden state; re-filtering the same
//! snapshot with the same selection always yields the same result.

pub mod config;
pub mod engine;
pub mod selection;
pub mod session;

pub use config::{
    CategoryGroups, PriceRange, ALL_CATEGORIES, default_price_ranges, storefront_brands,
    storefront_category_labels,
};
pub use engine::{filter_products, matches_selection};
pub use selection::FilterSelection;
pub use session::BrowseSession;
