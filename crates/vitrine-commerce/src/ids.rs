//! Newtype IDs for type-safe identifiers.
//!
//! Catalog products are keyed by a positive integer; cart lines by a string
//! key derived from the product, the chosen size and a per-store sequence.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a catalog product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(u32);

impl ProductId {
    /// Create a product ID.
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the numeric value.
    pub fn get(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// Identity key of a cart line.
///
/// Generated once when a `(product, size)` pair first enters the cart and
/// never recomputed afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CartItemId(String);

impl CartItemId {
    /// Create a new ID from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Build the key for a line from its product, size and sequence number.
    pub(crate) fn for_line(product_id: ProductId, size: &str, seq: u64) -> Self {
        Self(format!("{}-{}-{}", product_id, size, seq))
    }

    /// Get the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for CartItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for CartItemId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for CartItemId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for CartItemId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
