//! The session cart store.

use std::fmt;

use crate::cart::CartItem;
use crate::catalog::Product;
use crate::checkout::{CheckoutConfig, CheckoutLink, CheckoutMessage, LinkOpener};
use crate::error::CommerceError;
use crate::ids::{CartItemId, ProductId};
use crate::money::Money;

/// A change to the cart, delivered to subscribers after it is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartEvent {
    /// A new line was created.
    ItemAdded {
        cart_id: CartItemId,
        product_id: ProductId,
        size: String,
        quantity: u32,
    },
    /// An existing line absorbed more units.
    QuantityIncreased { cart_id: CartItemId, quantity: u32 },
    /// A line was removed.
    ItemRemoved { cart_id: CartItemId },
    /// Every line was removed.
    Cleared,
    /// The drawer visibility changed.
    DrawerToggled { open: bool },
}

type Listener = Box<dyn FnMut(&CartEvent)>;

/// Shopping cart for one browsing session.
///
/// Line items are kept in insertion order. Totals and counts are computed
/// from the current lines on every call, so they can never go stale.
///
/// ```
/// use vitrine_commerce::prelude::*;
///
/// let catalog = Catalog::seed();
/// let mut cart = CartStore::new();
///
/// let dress = catalog.get(ProductId::new(1)).unwrap();
/// let line = cart.add(dress, "M", 1);
/// cart.add(dress, "M", 1);
///
/// assert_eq!(cart.count(), 1);
/// assert_eq!(cart.get(&line).unwrap().quantity, 2);
/// ```
#[derive(Default)]
pub struct CartStore {
    items: Vec<CartItem>,
    drawer_open: bool,
    next_seq: u64,
    listeners: Vec<Listener>,
}

impl CartStore {
    /// Create an empty cart with the drawer closed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add units of a product in a given size.
    ///
    /// A line that already holds the same product and size absorbs the
    /// quantity; otherwise a new line is appended. Opens the drawer either
    /// way. Stock is not reserved or enforced here.
    pub fn add(&mut self, product: &Product, size: &str, quantity: u32) -> CartItemId {
        if !product.has_size(size) {
            tracing::warn!(product_id = %product.id, size, "size not offered by product");
        }

        let (cart_id, event) = if let Some(existing) = self
            .items
            .iter_mut()
            .find(|i| i.matches(product.id, size))
        {
            existing.quantity = existing.quantity.saturating_add(quantity);
            tracing::debug!(
                cart_id = %existing.cart_id,
                quantity = existing.quantity,
                "cart line quantity increased"
            );
            let event = CartEvent::QuantityIncreased {
                cart_id: existing.cart_id.clone(),
                quantity: existing.quantity,
            };
            (existing.cart_id.clone(), event)
        } else {
            let cart_id = CartItemId::for_line(product.id, size, self.next_seq);
            self.next_seq += 1;
            self.items
                .push(CartItem::new(product, size, quantity, cart_id.clone()));
            tracing::debug!(%cart_id, quantity, "cart line added");
            let event = CartEvent::ItemAdded {
                cart_id: cart_id.clone(),
                product_id: product.id,
                size: size.to_string(),
                quantity,
            };
            (cart_id, event)
        };

        if let Some(line) = self.get(&cart_id) {
            if line.effective_quantity() > product.stock {
                tracing::warn!(
                    product_id = %product.id,
                    quantity = line.effective_quantity(),
                    stock = product.stock,
                    "cart quantity exceeds stock"
                );
            }
        }

        self.emit(event);
        self.set_drawer(true);
        cart_id
    }

    /// Remove the line with the given key. Unknown keys are ignored.
    pub fn remove(&mut self, cart_id: &CartItemId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|i| &i.cart_id != cart_id);
        let removed = self.items.len() < len_before;
        if removed {
            tracing::debug!(%cart_id, "cart line removed");
            self.emit(CartEvent::ItemRemoved {
                cart_id: cart_id.clone(),
            });
        }
        removed
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.items.clear();
        self.emit(CartEvent::Cleared);
    }

    /// Sum of unit price times effective quantity over all lines.
    pub fn total(&self) -> Money {
        self.items.iter().map(CartItem::subtotal).sum()
    }

    /// Number of distinct lines, not units.
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Number of units across all lines.
    pub fn unit_count(&self) -> u64 {
        self.items
            .iter()
            .map(|i| u64::from(i.effective_quantity()))
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Lines in insertion order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn get(&self, cart_id: &CartItemId) -> Option<&CartItem> {
        self.items.iter().find(|i| &i.cart_id == cart_id)
    }

    pub fn is_drawer_open(&self) -> bool {
        self.drawer_open
    }

    /// Flip the drawer visibility.
    pub fn toggle_drawer(&mut self) {
        self.set_drawer(!self.drawer_open);
    }

    fn set_drawer(&mut self, open: bool) {
        if self.drawer_open != open {
            self.drawer_open = open;
            self.emit(CartEvent::DrawerToggled { open });
        }
    }

    /// Register a callback invoked after every cart change.
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(&CartEvent) + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    fn emit(&mut self, event: CartEvent) {
        for listener in &mut self.listeners {
            listener(&event);
        }
    }

    /// Order summary text, or `None` when the cart is empty.
    pub fn build_checkout_message(&self, config: &CheckoutConfig) -> Option<String> {
        CheckoutMessage::from_items(&self.items, config).map(|m| m.into_text())
    }

    /// Messaging deep link carrying the order summary, or `None` when the
    /// cart is empty. The destination is validated before anything is built.
    pub fn checkout_link(
        &self,
        config: &CheckoutConfig,
    ) -> Result<Option<CheckoutLink>, CommerceError> {
        config.validate()?;
        let link =
            CheckoutMessage::from_items(&self.items, config).map(|m| CheckoutLink::new(config, &m));
        Ok(link)
    }

    /// Build the checkout link and hand it to `opener`.
    ///
    /// An empty cart is a no-op and returns `Ok(None)`.
    pub fn checkout(
        &self,
        config: &CheckoutConfig,
        opener: &dyn LinkOpener,
    ) -> Result<Option<CheckoutLink>, CommerceError> {
        let Some(link) = self.checkout_link(config)? else {
            tracing::debug!("checkout requested on empty cart");
            return Ok(None);
        };
        tracing::info!(lines = self.count(), total = %self.total(), "opening checkout link");
        opener.open_in_new_context(link.url())?;
        Ok(Some(link))
    }
}

impl fmt::Debug for CartStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartStore")
            .field("items", &self.items)
            .field("drawer_open", &self.drawer_open)
            .field("next_seq", &self.next_seq)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn dress() -> Product {
        Product::new(1, "Vestido Floral Verão", Money::from_decimal(159.90))
            .with_sizes(["P", "M", "G"])
            .with_stock(10)
    }

    fn jacket() -> Product {
        Product::new(4, "Jaqueta de Couro Eco", Money::from_decimal(329.90))
            .with_sizes(["P", "M", "G"])
            .with_stock(2)
    }

    #[test]
    fn test_new_cart_is_empty_and_closed() {
        let cart = CartStore::new();
        assert!(cart.is_empty());
        assert!(!cart.is_drawer_open());
        assert_eq!(cart.total(), Money::zero());
    }

    #[test]
    fn test_add_same_item_increases_quantity() {
        let mut cart = CartStore::new();
        let first = cart.add(&dress(), "M", 1);
        let second = cart.add(&dress(), "M", 2);

        assert_eq!(first, second);
        assert_eq!(cart.count(), 1);
        assert_eq!(cart.items()[0].quantity, 3);
    }

    #[test]
    fn test_different_sizes_are_distinct_lines() {
        let mut cart = CartStore::new();
        let m = cart.add(&dress(), "M", 1);
        let g = cart.add(&dress(), "G", 1);

        assert_ne!(m, g);
        assert_eq!(cart.count(), 2);
    }

    #[test]
    fn test_count_ignores_quantities() {
        let mut cart = CartStore::new();
        cart.add(&dress(), "M", 5);
        cart.add(&jacket(), "P", 1);
        assert_eq!(cart.count(), 2);
        assert_eq!(cart.unit_count(), 6);
    }

    #[test]
    fn test_total_tracks_add_and_remove() {
        let mut cart = CartStore::new();
        cart.add(&dress(), "M", 2);
        let jacket_line = cart.add(&jacket(), "P", 1);
        assert_eq!(cart.total().display_amount(), "649.70");

        cart.remove(&jacket_line);
        assert_eq!(cart.total().display_amount(), "319.80");
    }

    #[test]
    fn test_remove_unknown_is_noop() {
        let mut cart = CartStore::new();
        cart.add(&dress(), "M", 1);
        let before: Vec<CartItem> = cart.items().to_vec();

        assert!(!cart.remove(&CartItemId::new("99-M-0")));
        assert_eq!(cart.items(), before.as_slice());
    }

    #[test]
    fn test_readd_after_remove_gets_fresh_id() {
        let mut cart = CartStore::new();
        let first = cart.add(&dress(), "M", 1);
        cart.remove(&first);
        let second = cart.add(&dress(), "M", 1);
        assert_ne!(first, second);
    }

    #[test]
    fn test_add_opens_drawer() {
        let mut cart = CartStore::new();
        cart.add(&dress(), "M", 1);
        assert!(cart.is_drawer_open());

        cart.toggle_drawer();
        assert!(!cart.is_drawer_open());

        cart.add(&dress(), "M", 1);
        assert!(cart.is_drawer_open());
    }

    #[test]
    fn test_over_stock_is_accepted() {
        let mut cart = CartStore::new();
        cart.add(&jacket(), "P", 5);
        assert_eq!(cart.items()[0].quantity, 5);
    }

    #[test]
    fn test_clear() {
        let mut cart = CartStore::new();
        cart.add(&dress(), "M", 1);
        cart.clear();
        assert!(cart.is_empty());
        assert!(cart.build_checkout_message(&CheckoutConfig::default()).is_none());
    }

    #[test]
    fn test_subscribers_see_events_in_order() {
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);

        let mut cart = CartStore::new();
        cart.subscribe(move |e| sink.borrow_mut().push(e.clone()));

        let line = cart.add(&dress(), "M", 1);
        cart.add(&dress(), "M", 1);
        cart.remove(&line);

        let events = events.borrow();
        assert_eq!(events.len(), 4);
        assert!(matches!(events[0], CartEvent::ItemAdded { quantity: 1, .. }));
        assert_eq!(events[1], CartEvent::DrawerToggled { open: true });
        assert!(matches!(events[2], CartEvent::QuantityIncreased { quantity: 2, .. }));
        assert_eq!(events[3], CartEvent::ItemRemoved { cart_id: line.clone() });
    }
}
