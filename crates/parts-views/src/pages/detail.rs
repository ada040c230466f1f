//! Product detail page.

use parts_catalog::search::DetailParams;
use parts_catalog::{Catalog, LoadError, Product, ProductId};

use crate::config::ViewConfig;
use crate::sections::{
    render_breadcrumb, render_load_error, render_missing_id, render_not_found,
    render_product_detail, render_related,
};
use crate::shell::{HeadContent, NavItem, Shell};

/// Ids listed on the not-found page.
pub const NOT_FOUND_SAMPLE_IDS: usize = 5;

/// What the detail page resolved to.
#[derive(Debug)]
pub enum DetailView<'a> {
    Found {
        product: &'a Product,
        related: Vec<&'a Product>,
    },
    NotFound {
        id: ProductId,
        available: Vec<&'a ProductId>,
    },
    MissingId,
}

impl<'a> DetailView<'a> {
    /// Resolve `params` against the catalog.
    pub fn resolve(catalog: &'a Catalog, params: &DetailParams, config: &ViewConfig) -> Self {
        let Some(id) = &params.id else {
            return DetailView::MissingId;
        };

        match catalog.get(id.as_str()) {
            Ok(product) => DetailView::Found {
                product,
                related: catalog.related(product, config.related_count),
            },
            Err(e) => {
                tracing::debug!(error = %e, "detail lookup missed");
                DetailView::NotFound {
                    id: id.clone(),
                    available: catalog.sample_ids(NOT_FOUND_SAMPLE_IDS),
                }
            }
        }
    }

    pub fn product(&self) -> Option<&'a Product> {
        match self {
            DetailView::Found { product, .. } => Some(*product),
            _ => None,
        }
    }
}

/// Render the detail page for `url` (path plus query and fragment).
pub fn render_detail_page(
    catalog: Result<&Catalog, &LoadError>,
    url: &str,
    config: &ViewConfig,
) -> String {
    let params = DetailParams::from_url(url);

    let (title, content) = match catalog {
        Err(error) => (
            "Product".to_string(),
            render_load_error("Failed to load product", error, url),
        ),
        Ok(catalog) => match DetailView::resolve(catalog, &params, config) {
            DetailView::Found { product, related } => (
                product.name.clone(),
                format!(
                    "{}\n<section id=\"product-detail-content\">{}</section>\n{}",
                    render_breadcrumb(product),
                    render_product_detail(product),
                    render_related(&related)
                ),
            ),
            DetailView::NotFound { id, available } => (
                "Product not found".to_string(),
                render_not_found(id.as_str(), &available),
            ),
            DetailView::MissingId => ("Product".to_string(), render_missing_id(url)),
        },
    };

    Shell::new(
        HeadContent::new(format!("{} - {}", title, config.site_name))
            .with_stylesheet("css/style.css"),
        &config.site_name,
        NavItem::Products,
    )
    .wrap(&content)
}
