//! Order summary text sent through the messaging link.

use std::fmt::Write as _;

use crate::cart::CartItem;
use crate::checkout::CheckoutConfig;
use crate::money::Money;

const SEPARATOR: &str = "--------------------";

/// The rendered order summary.
///
/// The layout is read by a person on the receiving end and must stay
/// byte-for-byte stable:
///
/// ```text
/// Olá Almeida Modas! Gostaria de finalizar o seguinte pedido:
///
/// 1. *(2x) Vestido Floral Verão*
///    Tamanho: M
///    Valor: R$ 319.80
///
/// --------------------
/// *TOTAL FINAL: R$ 319.80*
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutMessage {
    text: String,
    total: Money,
    lines: usize,
}

impl CheckoutMessage {
    /// Render the summary for a list of cart lines, or `None` if the list is
    /// empty.
    pub fn from_items(items: &[CartItem], config: &CheckoutConfig) -> Option<Self> {
        if items.is_empty() {
            return None;
        }

        let prefix = &config.currency_prefix;
        let mut text = format!(
            "Olá {}! Gostaria de finalizar o seguinte pedido:\n\n",
            config.store_name
        );

        for (index, item) in items.iter().enumerate() {
            // Writing into a String cannot fail.
            let _ = write!(
                text,
                "{}. *({}x) {}*\n   Tamanho: {}\n   Valor: {} {}\n\n",
                index + 1,
                item.effective_quantity(),
                item.name(),
                item.selected_size,
                prefix,
                item.subtotal().display_amount(),
            );
        }

        let total: Money = items.iter().map(CartItem::subtotal).sum();
        let _ = write!(
            text,
            "{}\n*TOTAL FINAL: {} {}*",
            SEPARATOR,
            prefix,
            total.display_amount()
        );

        Some(Self {
            text,
            total,
            lines: items.len(),
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn into_text(self) -> String {
        self.text
    }

    /// Total stated in the last line.
    pub fn total(&self) -> Money {
        self.total
    }

    /// Number of numbered item lines.
    pub fn line_count(&self) -> usize {
        self.lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Product;
    use crate::ids::CartItemId;

    fn item(id: u32, name: &str, price: f64, size: &str, quantity: u32) -> CartItem {
        let product = Product::new(id, name, Money::from_decimal(price)).with_sizes([size]);
        CartItem::new(&product, size, quantity, CartItemId::new(format!("{id}-{size}-0")))
    }

    #[test]
    fn test_empty_has_no_message() {
        assert!(CheckoutMessage::from_items(&[], &CheckoutConfig::default()).is_none());
    }

    #[test]
    fn test_exact_layout() {
        let items = vec![
            item(1, "Vestido Floral Verão", 159.90, "M", 2),
            item(4, "Jaqueta de Couro Eco", 329.90, "P", 1),
        ];
        let message = CheckoutMessage::from_items(&items, &CheckoutConfig::default()).unwrap();

        let expected = "Olá Almeida Modas! Gostaria de finalizar o seguinte pedido:\n\n\
            1. *(2x) Vestido Floral Verão*\n   Tamanho: M\n   Valor: R$ 319.80\n\n\
            2. *(1x) Jaqueta de Couro Eco*\n   Tamanho: P\n   Valor: R$ 329.90\n\n\
            --------------------\n*TOTAL FINAL: R$ 649.70*";
        assert_eq!(message.text(), expected);
        assert_eq!(message.line_count(), 2);
        assert_eq!(message.total().centavos(), 64970);
    }

    #[test]
    fn test_zero_quantity_rendered_as_one() {
        let items = vec![item(2, "Blusa Social Branca", 89.90, "GG", 0)];
        let message = CheckoutMessage::from_items(&items, &CheckoutConfig::default()).unwrap();
        assert!(message.text().contains("1. *(1x) Blusa Social Branca*"));
        assert!(message.text().ends_with("*TOTAL FINAL: R$ 89.90*"));
    }

    #[test]
    fn test_store_name_in_greeting() {
        let items = vec![item(2, "Blusa Social Branca", 89.90, "P", 1)];
        let config = CheckoutConfig::default().with_store_name("Loja Teste");
        let message = CheckoutMessage::from_items(&items, &config).unwrap();
        assert!(message
            .text()
            .starts_with("Olá Loja Teste! Gostaria de finalizar o seguinte pedido:\n\n"));
    }
}
