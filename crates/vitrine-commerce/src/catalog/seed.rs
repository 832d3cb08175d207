//! Built-in storefront catalog.

use crate::catalog::Product;
use crate::money::Money;

pub(super) fn products() -> Vec<Product> {
    vec![
        Product::new(1, "Vestido Floral Verão", Money::from_decimal(159.90))
            .with_description(
                "Tecido leve e fluido, perfeito para dias quentes. Estampa exclusiva floral com fundo claro.",
            )
            .with_image("https://images.unsplash.com/photo-1572804013309-59a88b7e92f1?auto=format&fit=crop&w=500&q=80")
            .with_category("Vestidos")
            .with_sizes(["P", "M", "G"])
            .with_stock(10),
        Product::new(2, "Blusa Social Branca", Money::from_decimal(89.90))
            .with_description(
                "Essencial para o guarda-roupa. Corte moderno e tecido que não amassa fácil.",
            )
            .with_image("https://images.unsplash.com/photo-1598532163474-6864f9cf17ab?auto=format&fit=crop&w=500&q=80")
            .with_category("Blusas")
            .with_sizes(["P", "M", "G", "GG"])
            .with_stock(5),
        Product::new(3, "Calça Jeans Skinny (Esgotada)", Money::from_decimal(199.90))
            .with_description(
                "Jeans com elastano que modela o corpo com conforto total. Lavagem escura.",
            )
            .with_image("https://images.unsplash.com/photo-1541099649105-f69ad21f3246?auto=format&fit=crop&w=500&q=80")
            .with_category("Calças")
            .with_sizes(["36", "38", "40", "42", "44"])
            .with_stock(0),
        Product::new(4, "Jaqueta de Couro Eco", Money::from_decimal(329.90))
            .with_description(
                "Estilo e atitude. Jaqueta em material sintético de alta durabilidade com zíperes reforçados.",
            )
            .with_image("https://images.unsplash.com/photo-1520975954732-35dd22299614?auto=format&fit=crop&w=500&q=80")
            .with_category("Casacos")
            .with_sizes(["P", "M", "G"])
            .with_stock(2),
    ]
}
