use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use greenbasket_core::{DomainError, DomainResult, Entity, ProductId};

/// Input for creating a product record.
///
/// `category` and `brand` are free-form and optional: legacy records in the
/// storefront exist without either, and the filter layer treats absence as
/// "never matches an active criterion".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub id: ProductId,
    pub name: String,
    pub description: Vec<String>,
    pub category: Option<String>,
    pub brand: Option<String>,
    /// List price in the smallest currency unit.
    pub price: u64,
    /// Displayed/offer price in the smallest currency unit.
    pub offer_price: u64,
}

/// Partial update for a product record. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductChanges {
    pub name: Option<String>,
    pub description: Option<Vec<String>>,
    pub category: Option<String>,
    pub brand: Option<String>,
    pub price: Option<u64>,
    pub offer_price: Option<u64>,
}

impl ProductChanges {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// A catalog product record.
///
/// Owned by the catalog store; read-only to the filter engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    description: Vec<String>,
    category: Option<String>,
    brand: Option<String>,
    price: u64,
    offer_price: u64,
    in_stock: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Product {
    /// Validate and create a product record. New products are in stock.
    pub fn new(draft: ProductDraft, occurred_at: DateTime<Utc>) -> DomainResult<Self> {
        if draft.name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        if draft.offer_price > draft.price {
            return Err(DomainError::validation(
                "offer price cannot exceed list price",
            ));
        }

        Ok(Self {
            id: draft.id,
            name: draft.name,
            description: draft.description,
            category: draft.category,
            brand: draft.brand,
            price: draft.price,
            offer_price: draft.offer_price,
            in_stock: true,
            created_at: occurred_at,
            updated_at: occurred_at,
        })
    }

    pub fn id_typed(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &[String] {
        &self.description
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn brand(&self) -> Option<&str> {
        self.brand.as_deref()
    }

    pub fn price(&self) -> u64 {
        self.price
    }

    pub fn offer_price(&self) -> u64 {
        self.offer_price
    }

    pub fn in_stock(&self) -> bool {
        self.in_stock
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Apply a partial update, re-validating the resulting record.
    pub fn apply_changes(
        &mut self,
        changes: ProductChanges,
        occurred_at: DateTime<Utc>,
    ) -> DomainResult<()> {
        if let Some(name) = &changes.name {
            if name.trim().is_empty() {
                return Err(DomainError::validation("name cannot be empty"));
            }
        }

        let price = changes.price.unwrap_or(self.price);
        let offer_price = changes.offer_price.unwrap_or(self.offer_price);
        if offer_price > price {
            return Err(DomainError::validation(
                "offer price cannot exceed list price",
            ));
        }

        if let Some(name) = changes.name {
            self.name = name;
        }
        if let Some(description) = changes.description {
            self.description = description;
        }
        if let Some(category) = changes.category {
            self.category = Some(category);
        }
        if let Some(brand) = changes.brand {
            self.brand = Some(brand);
        }
        self.price = price;
        self.offer_price = offer_price;
        self.updated_at = occurred_at;
        Ok(())
    }

    pub fn set_in_stock(&mut self, in_stock: bool, occurred_at: DateTime<Utc>) {
        self.in_stock = in_stock;
        self.updated_at = occurred_at;
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
