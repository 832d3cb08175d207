//! Shopping cart module.
//!
//! Contains the session cart store and its line items.

mod item;
mod store;

pub use item::CartItem;
pub use store::{CartEvent, CartStore};
