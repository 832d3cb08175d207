//! Cart line items.

use crate::catalog::Product;
use crate::ids::{CartItemId, ProductId};
use crate::money::Money;
use serde::{Deserialize, Deserializer, Serialize};

/// A line in the cart: a product snapshot taken at add time, the chosen
/// size and how many units of it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    /// Product as it was when first added.
    #[serde(flatten)]
    pub product: Product,
    /// Size label picked from `product.sizes`.
    pub selected_size: String,
    /// Units of this product and size. Zero is read as one.
    #[serde(default, deserialize_with = "quantity_or_zero")]
    pub quantity: u32,
    /// Identity key of this line.
    pub cart_id: CartItemId,
}

/// Snapshots may carry `"quantity": null`; keep it as zero so it reads as one.
fn quantity_or_zero<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    Ok(Option::<u32>::deserialize(deserializer)?.unwrap_or(0))
}

impl CartItem {
    pub(crate) fn new(
        product: &Product,
        size: impl Into<String>,
        quantity: u32,
        cart_id: CartItemId,
    ) -> Self {
        Self {
            product: product.clone(),
            selected_size: size.into(),
            quantity,
            cart_id,
        }
    }

    pub fn product_id(&self) -> ProductId {
        self.product.id
    }

    pub fn name(&self) -> &str {
        &self.product.name
    }

    pub fn unit_price(&self) -> Money {
        self.product.price
    }

    /// Quantity used for totals and messages; a missing or zero quantity
    /// counts as a single unit.
    pub fn effective_quantity(&self) -> u32 {
        if self.quantity == 0 {
            1
        } else {
            self.quantity
        }
    }

    /// Unit price times effective quantity.
    pub fn subtotal(&self) -> Money {
        self.product.price * self.effective_quantity()
    }

    /// Whether this line holds the given product and size.
    pub fn matches(&self, product_id: ProductId, size: &str) -> bool {
        self.product.id == product_id && self.selected_size == size
    }
}
