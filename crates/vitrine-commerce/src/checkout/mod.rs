//! Checkout module.
//!
//! Checkout is a messaging deep link carrying a human-readable order
//! summary. There is no payment step and no server round-trip.

mod config;
mod link;
mod message;

pub use config::{CheckoutConfig, DEFAULT_MESSAGING_DOMAIN, DEFAULT_PHONE_NUMBER, DEFAULT_STORE_NAME};
pub use link::{encode_component, CheckoutLink, LinkOpener};
pub use message::CheckoutMessage;
