//! Product catalog module.
//!
//! The catalog is an immutable, ordered list of products. It is built once
//! (from the built-in seed or a JSON feed) and only read afterwards.

mod product;
mod seed;

pub use product::{Product, LAST_UNITS_THRESHOLD};

use std::collections::HashSet;
use std::path::Path;

use crate::error::CommerceError;
use crate::ids::ProductId;

/// An immutable, ordered set of products with unique ids.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate or zero ids and negative prices.
    pub fn new(products: Vec<Product>) -> Result<Self, CommerceError> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if product.id.get() == 0 {
                return Err(CommerceError::InvalidProductId);
            }
            if !seen.insert(product.id) {
                return Err(CommerceError::DuplicateProduct(product.id.get()));
            }
            if product.price.is_negative() {
                return Err(CommerceError::InvalidPrice {
                    product_id: product.id.get(),
                    price: product.price.to_decimal(),
                });
            }
        }
        Ok(Self { products })
    }

    /// The storefront's built-in catalog.
    pub fn seed() -> Self {
        Self {
            products: seed::products(),
        }
    }

    /// Parse a catalog feed: a JSON array of products.
    pub fn from_json(json: &str) -> Result<Self, CommerceError> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        let catalog = Self::new(products)?;
        tracing::debug!(products = catalog.len(), "catalog feed parsed");
        Ok(catalog)
    }

    /// Read and parse a catalog feed from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CommerceError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&content)
    }

    /// Serialize the catalog as a JSON feed.
    pub fn to_json(&self) -> Result<String, CommerceError> {
        Ok(serde_json::to_string_pretty(&self.products)?)
    }

    /// Get a product by ID.
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Get a product by ID, failing when it is missing.
    pub fn require(&self, id: ProductId) -> Result<&Product, CommerceError> {
        self.get(id)
            .ok_or(CommerceError::ProductNotFound(id.get()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Products with stock left, in catalog order.
    pub fn available(&self) -> impl Iterator<Item = &Product> {
        self.products.iter().filter(|p| p.is_available())
    }

    /// Products in a category, in catalog order.
    pub fn in_category<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a Product> {
        self.products.iter().filter(move |p| p.category == category)
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = Vec::new();
        for product in &self.products {
            if !categories.contains(&product.category.as_str()) {
                categories.push(&product.category);
            }
        }
        categories
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::seed()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.iter()
    }
}
