//! Catalog browsing commands.

use anyhow::Result;
use vitrine_commerce::catalog::Product;
use vitrine_commerce::ProductId;

use super::{CatalogArgs, ProductArgs};
use crate::context::Context;
use crate::output::{price_label, stock_badge};

/// Run the catalog command.
pub fn run(args: CatalogArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;

    let products: Vec<&Product> = catalog
        .iter()
        .filter(|p| !args.available || p.is_available())
        .filter(|p| args.category.as_deref().map_or(true, |c| p.category == c))
        .collect();

    if ctx.output.is_json() {
        ctx.output.json(&products);
        return Ok(());
    }

    ctx.output.header(&format!("Catálogo ({} produtos)", products.len()));

    if products.is_empty() {
        ctx.output.info("No products match");
        return Ok(());
    }

    let widths = [4, 32, 12, 12, 18];
    ctx.output
        .table_row(&["ID", "NAME", "CATEGORY", "PRICE", "STOCK"], &widths);
    for product in products {
        let id = product.id.to_string();
        let price = price_label(&ctx.config.checkout.currency_prefix, product.price);
        let badge = stock_badge(product.stock, product.is_last_units());
        ctx.output.table_row(
            &[
                id.as_str(),
                product.name.as_str(),
                product.category.as_str(),
                price.as_str(),
                badge.as_str(),
            ],
            &widths,
        );
    }

    Ok(())
}

/// Run the product command.
pub fn show(args: ProductArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;
    let product = catalog.require(ProductId::new(args.id))?;

    if ctx.output.is_json() {
        ctx.output.json(product);
        return Ok(());
    }

    ctx.output.header(&product.name);
    ctx.output.kv("id", &product.id.to_string());
    ctx.output.kv(
        "price",
        &price_label(&ctx.config.checkout.currency_prefix, product.price),
    );
    ctx.output.kv("category", &product.category);
    ctx.output.kv("sizes", &product.sizes.join(", "));
    ctx.output
        .kv("stock", &stock_badge(product.stock, product.is_last_units()));
    if !product.description.is_empty() {
        ctx.output.kv("description", &product.description);
    }
    if !product.image.is_empty() {
        ctx.output.kv("image", &product.image);
    }

    Ok(())
}
