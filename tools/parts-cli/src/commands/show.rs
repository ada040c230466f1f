//! Show command - one product with its related products.

use anyhow::{bail, Result};
use parts_catalog::search::DetailParams;
use parts_catalog::{Product, ProductId};
use parts_views::pages::DetailView;

use super::ShowArgs;
use crate::context::Context;
use crate::output::stock_badge;

/// Run the show command.
pub async fn run(args: ShowArgs, ctx: &Context) -> Result<()> {
    let id = args.id.trim();
    if id.is_empty() {
        bail!("Product ID must not be empty");
    }

    let catalog = ctx.load_catalog(args.source.as_deref()).await?;
    let params = DetailParams {
        id: Some(ProductId::new(id)),
    };

    match DetailView::resolve(&catalog, &params, &ctx.config.view_config()) {
        DetailView::Found { product, related } => {
            if ctx.output.is_json() {
                ctx.output.json(&serde_json::json!({
                    "product": product,
                    "related": related,
                }));
            } else {
                print_product(ctx, product);
                print_related(ctx, &related);
            }
            Ok(())
        }
        DetailView::NotFound { id, available } => {
            let sample: Vec<&str> = available.iter().map(|id| id.as_str()).collect();
            bail!(
                "Product not found: {}. Available product IDs: {}",
                id,
                sample.join(", ")
            )
        }
        DetailView::MissingId => bail!("Product ID must not be empty"),
    }
}

fn or_na(value: &str) -> &str {
    if value.is_empty() {
        "N/A"
    } else {
        value
    }
}

fn print_product(ctx: &Context, product: &Product) {
    ctx.output.header(&product.name);
    ctx.output.kv("ID", product.id.as_str());
    ctx.output.kv("SKU", or_na(product.part_number()));
    ctx.output.kv("OEM", or_na(product.oem_number()));
    ctx.output.kv("Brand", &product.brand);
    ctx.output.kv("Category", &product.category);
    ctx.output.kv("Price", &product.detail_price());
    ctx.output.kv(
        "Stock",
        &format!("{} ({})", stock_badge(product.stock_status), product.stock_label()),
    );
    if let Some(lead_time) = &product.lead_time {
        ctx.output.kv("Lead time", lead_time);
    }
    if !product.model.is_empty() {
        ctx.output.kv("Models", &product.model_display(", "));
    }

    if !product.specifications.is_empty() {
        ctx.output.header("Specifications");
        for (key, value) in &product.specifications {
            ctx.output.kv(key, value);
        }
    }

    if !product.features.is_empty() {
        ctx.output.header("Features");
        for feature in &product.features {
            ctx.output.list_item(feature);
        }
    }
}

fn print_related(ctx: &Context, related: &[&Product]) {
    if related.is_empty() {
        return;
    }

    ctx.output.header("Related Products");
    for product in related {
        ctx.output.list_item(&format!(
            "{}  {}  {}",
            product.id,
            product.name,
            or_na(product.part_number())
        ));
    }
}
