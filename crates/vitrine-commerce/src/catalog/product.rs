//! Product type.

use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Stock level at or below which a product shows the "last units" badge.
pub const LAST_UNITS_THRESHOLD: u32 = 2;

/// A product in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Unit price.
    pub price: Money,
    /// Description shown on the product card.
    pub description: String,
    /// Image URL.
    pub image: String,
    /// Display category (e.g., "Vestidos").
    pub category: String,
    /// Size labels, in display order.
    pub sizes: Vec<String>,
    /// Units in stock. Zero means sold out.
    pub stock: u32,
}

impl Product {
    /// Create a product with no sizes and no stock.
    pub fn new(id: u32, name: impl Into<String>, price: Money) -> Self {
        Self {
            id: ProductId::new(id),
            name: name.into(),
            price,
            description: String::new(),
            image: String::new(),
            category: String::new(),
            sizes: Vec::new(),
            stock: 0,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_sizes<I, S>(mut self, sizes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sizes = sizes.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_stock(mut self, stock: u32) -> Self {
        self.stock = stock;
        self
    }

    /// Check if the product can be purchased.
    pub fn is_available(&self) -> bool {
        self.stock > 0
    }

    /// Check if the product is down to its last few units.
    pub fn is_last_units(&self) -> bool {
        self.is_available() && self.stock <= LAST_UNITS_THRESHOLD
    }

    /// Check if a size label is offered.
    pub fn has_size(&self, size: &str) -> bool {
        self.sizes.iter().any(|s| s == size)
    }
}
