//! Render command - writes a full HTML page.

use std::fs;
use std::sync::Arc;

use anyhow::{Context as _, Result};
use parts_catalog::search::DetailParams;
use parts_catalog::{Catalog, LoadError, ProductId, QueryState};
use parts_views::pages::{render_detail_page, render_home, render_list_error, ListPage};
use parts_views::{ViewConfig, DETAIL_PAGE};

use super::{RenderArgs, RenderPage};
use crate::context::Context;

/// Run the render command.
///
/// A catalog that fails to load still produces a page: the error state
/// the browser would show.
pub async fn run(args: RenderArgs, ctx: &Context) -> Result<()> {
    let store = ctx.catalog_store(args.source.as_deref())?;
    let catalog = ctx.fetch_catalog(&store).await;
    if let Err(e) = &catalog {
        ctx.output.warn(&format!("{}; rendering the error state", e));
    }

    let html = render_page(&args.page, catalog.as_ref(), &ctx.config.view_config());

    match &args.output {
        Some(path) => {
            let path = ctx.resolve_path(path);
            fs::write(&path, &html)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            ctx.output
                .success(&format!("Wrote {} ({} bytes)", path.display(), html.len()));
        }
        None => print!("{}", html),
    }

    Ok(())
}

/// HTML for `page`, or its load-error state.
fn render_page(
    page: &RenderPage,
    catalog: Result<&Arc<Catalog>, &LoadError>,
    config: &ViewConfig,
) -> String {
    match page {
        RenderPage::Home => render_home(catalog.map(|c| &**c), config),
        RenderPage::List { search, page } => {
            let query_string = QueryState {
                search_text: search.trim().to_string(),
                page: (*page).clamp(1, u32::MAX as i64) as u32,
            }
            .to_query_string();
            match catalog {
                Ok(catalog) => ListPage::from_location(Arc::clone(catalog), config, &query_string).render(),
                Err(error) => render_list_error(error, config, &query_string),
            }
        }
        RenderPage::Detail { id } => {
            let url = format!(
                "{}?{}",
                DETAIL_PAGE,
                DetailParams::link(&ProductId::new(id.trim()))
            );
            render_detail_page(catalog.map(|c| &**c), &url, config)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Arc<Catalog> {
        let products = (1..=30)
            .map(|i| {
                parts_catalog::Product::new(ProductId::sequential(i), format!("Part {}", i), "komatsu")
                    .with_models(["PC200-8"])
            })
            .collect();
        Arc::new(Catalog::new(products).unwrap())
    }

    #[test]
    fn test_list_page_is_clamped() {
        let catalog = catalog();
        let html = render_page(
            &RenderPage::List {
                search: "pc200".to_string(),
                page: 9,
            },
            Ok(&catalog),
            &ViewConfig::default(),
        );
        assert!(html.contains("Page 3 of 3 | Showing 25-30 of 30 products"));
    }

    #[test]
    fn test_detail_page() {
        let catalog = catalog();
        let html = render_page(
            &RenderPage::Detail {
                id: "KWSK-000002".to_string(),
            },
            Ok(&catalog),
            &ViewConfig::default(),
        );
        assert!(html.contains("<h1>Part 2</h1>"));
    }

    #[test]
    fn test_load_error_renders_error_state() {
        let error = LoadError::MissingProducts;
        let html = render_page(&RenderPage::Home, Err(&error), &ViewConfig::default());
        assert!(html.contains("Failed to load featured products."));
    }
}
