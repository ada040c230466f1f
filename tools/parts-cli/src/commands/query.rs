//! Query command - search and page through the catalog.

use anyhow::Result;
use parts_catalog::{Page, Product, QueryEngine, QueryState};
use serde::Serialize;

use super::QueryArgs;
use crate::context::Context;
use crate::output::stock_badge;

/// JSON shape of a query result.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct QueryReport<'a> {
    search_text: &'a str,
    page: u32,
    total_pages: u32,
    total_count: usize,
    items: &'a [&'a Product],
}

/// Run the query command.
pub async fn run(args: QueryArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.load_catalog(args.source.as_deref()).await?;
    let engine = QueryEngine::new(args.page_size.unwrap_or(ctx.config.listing.page_size));

    let state = QueryState::new(args.search.as_str(), clamp_request(args.page));
    let page = engine.query(&catalog, &state);

    if ctx.output.is_json() {
        ctx.output.json(&QueryReport {
            search_text: &state.search_text,
            page: page.page,
            total_pages: page.total_pages,
            total_count: page.total_count,
            items: &page.items,
        });
        return Ok(());
    }

    print_page(ctx, &args.search, &page);

    Ok(())
}

/// Requested page as the state type; anything below 1 asks for page 1.
fn clamp_request(page: i64) -> u32 {
    page.clamp(1, u32::MAX as i64) as u32
}

fn print_page(ctx: &Context, search: &str, page: &Page<&Product>) {
    let search = search.trim();
    if search.is_empty() {
        ctx.output.header("Products");
    } else {
        ctx.output.header(&format!("Products matching \"{}\"", search));
    }

    if page.is_empty() {
        ctx.output.info("No products found");
        return;
    }

    let widths = [12, 40, 14, 18, 12];
    ctx.output
        .table_row(&["ID", "NAME", "PART #", "MODELS", "STOCK"], &widths);
    for product in &page.items {
        let models = product.model_display(", ");
        let stock = stock_badge(product.stock_status);
        ctx.output.table_row(
            &[
                product.id.as_str(),
                &product.name,
                product.part_number(),
                &models,
                &stock,
            ],
            &widths,
        );
    }

    let pager = page.pager();
    println!();
    ctx.output.info(&format!(
        "Page {} of {} | Showing {}-{} of {} products",
        pager.page,
        pager.total_pages,
        pager.start_item(),
        pager.end_item(),
        pager.total_count
    ));
}
