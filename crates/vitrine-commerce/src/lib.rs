//! Storefront domain types and logic for Vitrine.
//!
//! This crate provides the pieces of a small storefront:
//!
//! - **Catalog**: immutable list of products with sizes and stock
//! - **Cart**: session-scoped cart store with line items and derived totals
//! - **Checkout**: order summary message and the messaging deep link that
//!   replaces an in-app payment flow
//!
//! # Example
//!
//! ```rust
//! use vitrine_commerce::prelude::*;
//!
//! let catalog = Catalog::seed();
//! let dress = catalog.get(ProductId::new(1)).unwrap();
//!
//! let mut cart = CartStore::new();
//! cart.add(dress, "M", 2);
//!
//! assert_eq!(cart.count(), 1);
//! assert_eq!(cart.total().display(), "R$ 319.80");
//!
//! let link = cart.checkout_link(&CheckoutConfig::default()).unwrap().unwrap();
//! assert!(link.url().starts_with("https://wa.me/5511962209599?text="));
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;

pub use error::CommerceError;
pub use ids::{CartItemId, ProductId};
pub use money::Money;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::{CartItemId, ProductId};
    pub use crate::money::Money;

    // Catalog
    pub use crate::catalog::{Catalog, Product};

    // Cart
    pub use crate::cart::{CartEvent, CartItem, CartStore};

    // Checkout
    pub use crate::checkout::{CheckoutConfig, CheckoutLink, CheckoutMessage, LinkOpener};
}
