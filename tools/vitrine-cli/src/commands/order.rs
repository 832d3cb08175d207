//! Build an order and its checkout link.

use std::process::Command;

use anyhow::{bail, Context as _, Result};
use dialoguer::Confirm;
use serde::Serialize;
use vitrine_commerce::cart::CartStore;
use vitrine_commerce::checkout::LinkOpener;
use vitrine_commerce::{CommerceError, ProductId};

use super::OrderArgs;
use crate::context::Context;
use crate::output::price_label;

/// One `ID:SIZE[:QTY]` argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderLine {
    pub product_id: ProductId,
    pub size: String,
    pub quantity: u32,
}

impl OrderLine {
    pub fn parse(spec: &str) -> Result<Self> {
        let parts: Vec<&str> = spec.split(':').collect();
        let (id, size, quantity) = match parts.as_slice() {
            [id, size] => (*id, *size, "1"),
            [id, size, quantity] => (*id, *size, *quantity),
            _ => bail!("Invalid item '{}': expected ID:SIZE[:QTY]", spec),
        };

        let id: u32 = id
            .trim()
            .parse()
            .with_context(|| format!("Invalid product id in '{}'", spec))?;
        let quantity: u32 = quantity
            .trim()
            .parse()
            .with_context(|| format!("Invalid quantity in '{}'", spec))?;
        let size = size.trim();

        if size.is_empty() {
            bail!("Missing size in '{}'", spec);
        }
        if quantity == 0 {
            bail!("Quantity must be positive in '{}'", spec);
        }

        Ok(Self {
            product_id: ProductId::new(id),
            size: size.to_string(),
            quantity,
        })
    }
}

/// Opens links with the desktop's default handler.
struct SystemOpener;

/// Desktop handler invocation for `url`. The URL is passed as a single
/// argument and never goes through a shell, so `%XX` escapes reach the
/// browser untouched.
fn opener_command(url: &str) -> Command {
    let mut command = if cfg!(target_os = "macos") {
        Command::new("open")
    } else if cfg!(target_os = "windows") {
        let mut c = Command::new("rundll32");
        c.arg("url.dll,FileProtocolHandler");
        c
    } else {
        Command::new("xdg-open")
    };
    command.arg(url);
    command
}

impl LinkOpener for SystemOpener {
    fn open_in_new_context(&self, url: &str) -> Result<(), CommerceError> {
        let status = opener_command(url)
            .status()
            .map_err(|e| CommerceError::LinkOpenFailed(e.to_string()))?;

        if !status.success() {
            return Err(CommerceError::LinkOpenFailed(format!(
                "opener exited with {}",
                status
            )));
        }
        Ok(())
    }
}

#[derive(Serialize)]
struct OrderSummary<'a> {
    lines: Vec<LineSummary<'a>>,
    count: usize,
    total: String,
    message: String,
    link: String,
}

#[derive(Serialize)]
struct LineSummary<'a> {
    cart_id: &'a str,
    product_id: u32,
    name: &'a str,
    size: &'a str,
    quantity: u32,
    subtotal: String,
}

/// Run the order command.
pub fn run(args: OrderArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;
    let checkout = ctx.config.checkout_config();
    checkout.validate()?;

    let lines = args
        .items
        .iter()
        .map(|spec| OrderLine::parse(spec))
        .collect::<Result<Vec<_>>>()?;

    let mut cart = CartStore::new();
    for line in &lines {
        let product = catalog.require(line.product_id)?;
        if !product.has_size(&line.size) {
            return Err(CommerceError::SizeNotOffered {
                product_id: product.id.get(),
                size: line.size.clone(),
            }
            .into());
        }
        if !product.is_available() {
            bail!("{} is sold out", product.name);
        }
        cart.add(product, &line.size, line.quantity);
    }

    for item in cart.items() {
        if item.quantity > item.product.stock {
            ctx.output.warn(&format!(
                "{} ({}): {} requested, {} in stock",
                item.name(),
                item.selected_size,
                item.quantity,
                item.product.stock
            ));
        }
    }

    let message = cart
        .build_checkout_message(&checkout)
        .context("Cart is empty")?;
    let link = cart.checkout_link(&checkout)?.context("Cart is empty")?;

    if ctx.output.is_json() {
        let summary = OrderSummary {
            lines: cart
                .items()
                .iter()
                .map(|i| LineSummary {
                    cart_id: i.cart_id.as_str(),
                    product_id: i.product_id().get(),
                    name: i.name(),
                    size: &i.selected_size,
                    quantity: i.effective_quantity(),
                    subtotal: i.subtotal().display_amount(),
                })
                .collect(),
            count: cart.count(),
            total: cart.total().display_amount(),
            message,
            link: link.url().to_string(),
        };
        ctx.output.json(&summary);
    } else {
        let prefix = checkout.currency_prefix.as_str();
        ctx.output.header(&format!("Pedido ({} itens)", cart.count()));
        for item in cart.items() {
            ctx.output.list_item(&format!(
                "{}x {} ({}) = {}",
                item.effective_quantity(),
                item.name(),
                item.selected_size,
                price_label(prefix, item.subtotal())
            ));
        }
        ctx.output.kv("total", &price_label(prefix, cart.total()));

        ctx.output.header("Mensagem");
        ctx.output.line(&message);

        ctx.output.header("Link");
        ctx.output.line(link.url());
    }

    if args.open {
        if !args.yes {
            let confirmed = Confirm::new()
                .with_prompt("Open checkout link?")
                .default(true)
                .interact()?;

            if !confirmed {
                ctx.output.warn("Checkout cancelled");
                return Ok(());
            }
        }

        cart.checkout(&checkout, &SystemOpener)?;
        ctx.output.success("Checkout link opened");
    }

    Ok(())
}
