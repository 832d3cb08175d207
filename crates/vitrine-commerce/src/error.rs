//! Commerce error types.

use thiserror::Error;

/// Errors that can occur at the edges of the storefront domain.
///
/// Cart operations themselves never fail; these cover catalog loading,
/// checkout configuration and handing a link to the platform.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Product not found.
    #[error("Product not found: {0}")]
    ProductNotFound(u32),

    /// Two catalog entries share an id.
    #[error("Duplicate product id in catalog: {0}")]
    DuplicateProduct(u32),

    /// Size not offered by the product.
    #[error("Size {size:?} is not offered for product {product_id}")]
    SizeNotOffered { product_id: u32, size: String },

    /// Product id zero is reserved.
    #[error("Product ids must be positive")]
    InvalidProductId,

    /// Negative or non-finite price in a catalog feed.
    #[error("Invalid price for product {product_id}: {price}")]
    InvalidPrice { product_id: u32, price: f64 },

    /// Checkout configuration is unusable.
    #[error("Invalid checkout configuration: {0}")]
    InvalidCheckoutConfig(String),

    /// The platform could not open the checkout link.
    #[error("Failed to open checkout link: {0}")]
    LinkOpenFailed(String),

    /// I/O error while reading a catalog feed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::SerializationError(e.to_string())
    }
}
