//! Home page with the featured product selection.

use parts_catalog::{Catalog, LoadError};

use crate::config::ViewConfig;
use crate::links::LIST_PAGE;
use crate::sections::render_product_grid;
use crate::shell::{HeadContent, NavItem, Shell};

/// Render the home page. A failed load shows an inline message in place of
/// the featured grid; the rest of the page still renders.
pub fn render_home(catalog: Result<&Catalog, &LoadError>, config: &ViewConfig) -> String {
    let featured = match catalog {
        Ok(catalog) => {
            let products = catalog.featured(config.featured_count);
            tracing::debug!(count = products.len(), "rendering featured products");
            render_product_grid(products, "home-products-grid")
        }
        Err(error) => {
            tracing::warn!(%error, "home page rendered without products");
            r#"<div class="products-grid" id="home-products-grid"><p class="load-error">Failed to load featured products.</p></div>"#
                .to_string()
        }
    };

    let content = format!(
        r#"<section class="hero">
    <h1>Genuine and Aftermarket Excavator Parts</h1>
    <p>Hydraulic, engine, undercarriage and electrical parts for every major brand.</p>
    <a href="{list}" class="btn-primary">Browse Parts</a>
</section>
<section class="featured-products">
    <h2>Featured Products</h2>
    {featured}
    <div class="view-all">
        <a href="{list}" class="btn-primary">ALL PRODUCTS</a>
    </div>
</section>
"#,
        list = LIST_PAGE,
        featured = featured,
    );

    Shell::new(
        HeadContent::new(format!("{} - Home", config.site_name))
            .with_meta("description", "Excavator replacement parts catalog")
            .with_stylesheet("css/style.css"),
        &config.site_name,
        NavItem::Home,
    )
    .wrap(&content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use parts_catalog::Product;

    fn catalog(n: usize) -> Catalog {
        Catalog::new(
            (1..=n)
                .map(|i| Product::new(format!("p{}", i), format!("Part {}", i), "komatsu"))
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_first_eight_products_featured() {
        let html = render_home(Ok(&catalog(20)), &ViewConfig::default());
        assert_eq!(html.matches("class=\"product-card\"").count(), 8);
        assert!(html.contains("data-product-id=\"p8\""));
        assert!(!html.contains("data-product-id=\"p9\""));
    }

    #[test]
    fn test_empty_catalog_empty_grid() {
        let html = render_home(Ok(&Catalog::default()), &ViewConfig::default());
        assert!(html.contains(r#"<div class="products-grid" id="home-products-grid"></div>"#));
    }

    #[test]
    fn test_load_failure_message() {
        let error = LoadError::Transport("offline".to_string());
        let html = render_home(Err(&error), &ViewConfig::default());
        assert!(html.contains("Failed to load featured products."));
        assert!(html.contains("ALL PRODUCTS"));
    }
}
