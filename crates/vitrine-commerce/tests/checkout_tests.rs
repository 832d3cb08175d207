//! End-to-end cart and checkout behaviour through the public API.

use std::cell::RefCell;

use vitrine_commerce::checkout::encode_component;
use vitrine_commerce::prelude::*;

#[derive(Default)]
struct RecordingOpener {
    opened: RefCell<Vec<String>>,
}

impl LinkOpener for RecordingOpener {
    fn open_in_new_context(&self, url: &str) -> Result<(), CommerceError> {
        self.opened.borrow_mut().push(url.to_string());
        Ok(())
    }
}

struct FailingOpener;

impl LinkOpener for FailingOpener {
    fn open_in_new_context(&self, _url: &str) -> Result<(), CommerceError> {
        Err(CommerceError::LinkOpenFailed("no browser".to_string()))
    }
}

fn seeded_cart() -> CartStore {
    let catalog = Catalog::seed();
    let dress = catalog.get(ProductId::new(1)).unwrap();
    let jacket = catalog.get(ProductId::new(4)).unwrap();

    let mut cart = CartStore::new();
    cart.add(dress, "M", 2);
    cart.add(jacket, "P", 1);
    cart
}

#[test]
fn test_storefront_order_example() {
    let cart = seeded_cart();

    assert_eq!(cart.total().display_amount(), "649.70");
    assert_eq!(cart.count(), 2);

    let message = cart
        .build_checkout_message(&CheckoutConfig::default())
        .unwrap();
    let lines: Vec<&str> = message.lines().collect();

    assert_eq!(
        lines.first(),
        Some(&"Olá Almeida Modas! Gostaria de finalizar o seguinte pedido:")
    );
    assert!(lines.contains(&"1. *(2x) Vestido Floral Verão*"));
    assert!(lines.contains(&"   Valor: R$ 319.80"));
    assert!(lines.contains(&"2. *(1x) Jaqueta de Couro Eco*"));
    assert!(lines.contains(&"   Valor: R$ 329.90"));
    assert_eq!(lines.last(), Some(&"*TOTAL FINAL: R$ 649.70*"));
    assert_eq!(lines[lines.len() - 2], "--------------------");

    let first = message.find("1. *(2x)").unwrap();
    let second = message.find("2. *(1x)").unwrap();
    assert!(first < second);
}

#[test]
fn test_checkout_link_encodes_message() {
    let cart = seeded_cart();
    let config = CheckoutConfig::default();

    let message = cart.build_checkout_message(&config).unwrap();
    let link = cart.checkout_link(&config).unwrap().unwrap();

    assert_eq!(
        link.url(),
        format!(
            "https://wa.me/5511962209599?text={}",
            encode_component(&message)
        )
    );
    assert!(link.url().ends_with("*TOTAL%20FINAL%3A%20R%24%20649.70*"));
    assert_eq!(link.total().centavos(), 64970);
}

#[test]
fn test_checkout_opens_link_once() {
    let cart = seeded_cart();
    let opener = RecordingOpener::default();

    let link = cart
        .checkout(&CheckoutConfig::default(), &opener)
        .unwrap()
        .unwrap();

    assert_eq!(opener.opened.borrow().as_slice(), &[link.url().to_string()]);
}

#[test]
fn test_checkout_empty_cart_is_noop() {
    let cart = CartStore::new();
    let opener = RecordingOpener::default();

    let result = cart.checkout(&CheckoutConfig::default(), &opener).unwrap();

    assert!(result.is_none());
    assert!(opener.opened.borrow().is_empty());
    assert!(cart.build_checkout_message(&CheckoutConfig::default()).is_none());
}

#[test]
fn test_checkout_propagates_opener_failure() {
    let cart = seeded_cart();
    let result = cart.checkout(&CheckoutConfig::default(), &FailingOpener);
    assert!(matches!(result, Err(CommerceError::LinkOpenFailed(_))));
}

#[test]
fn test_checkout_rejects_bad_config_before_opening() {
    let cart = seeded_cart();
    let opener = RecordingOpener::default();
    let config = CheckoutConfig::default().with_phone_number("");

    assert!(cart.checkout(&config, &opener).is_err());
    assert!(opener.opened.borrow().is_empty());
}

#[test]
fn test_checkout_link_rejects_url_as_domain() {
    let cart = seeded_cart();
    let config = CheckoutConfig::default().with_messaging_domain("https://wa.me");

    assert!(matches!(
        cart.checkout_link(&config),
        Err(CommerceError::InvalidCheckoutConfig(_))
    ));
}

#[test]
fn test_custom_destination() {
    let cart = seeded_cart();
    let config = CheckoutConfig::default()
        .with_messaging_domain("api.whatsapp.com")
        .with_phone_number("5521999999999");

    let link = cart.checkout_link(&config).unwrap().unwrap();
    assert!(link
        .to_string()
        .starts_with("https://api.whatsapp.com/5521999999999?text=Ol%C3%A1%20"));
}

#[test]
fn test_removing_every_line_empties_checkout() {
    let mut cart = seeded_cart();
    let ids: Vec<CartItemId> = cart.items().iter().map(|i| i.cart_id.clone()).collect();
    for id in &ids {
        assert!(cart.remove(id));
    }
    assert!(cart.is_empty());
    assert_eq!(cart.total(), Money::zero());
    assert!(cart
        .checkout_link(&CheckoutConfig::default())
        .unwrap()
        .is_none());
}
