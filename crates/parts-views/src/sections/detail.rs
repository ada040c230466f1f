//! Product detail section and related products.

use parts_catalog::Product;

use crate::escape::html_escape;
use crate::links::LIST_PAGE;
use crate::sections::card::{brand_or_unknown, render_product_grid};

/// Main image when a product has none.
pub const PLACEHOLDER_DETAIL_IMAGE: &str =
    "https://via.placeholder.com/600x400/1a365d/ffffff?text=Product+Image";

/// Text shown when a product has no description.
pub const DEFAULT_DESCRIPTION: &str = "Product description will be placed here...";

/// Breadcrumb trail ending at the product name.
pub fn render_breadcrumb(product: &Product) -> String {
    format!(
        r#"<nav class="breadcrumb" aria-label="Breadcrumb">
    <a href="index.html">Home</a> / <a href="{}">Products</a> / <span id="breadcrumb-product">{}</span>
</nav>"#,
        LIST_PAGE,
        html_escape(&product.name)
    )
}

/// Render the detail grid: gallery on the left, information on the right.
pub fn render_product_detail(product: &Product) -> String {
    format!(
        r#"<div class="product-detail-grid">
    {}
    <div class="product-info-detail">
        <div class="product-header"><h1>{}</h1></div>
        {}
        <div class="detail-price">
            <span class="price-label">Price:</span>
            <span class="price-placeholder">{}</span>
        </div>
        {}
        <div class="action-buttons">
            <a href="{}" class="btn-secondary">Back to List</a>
        </div>
    </div>
</div>"#,
        render_gallery(product),
        html_escape(&product.name),
        render_meta(product),
        html_escape(&product.detail_price()),
        render_tabs(product),
        LIST_PAGE
    )
}

fn render_gallery(product: &Product) -> String {
    let (main_url, main_alt) = match product.primary_image() {
        Some(image) => (image.url.clone(), image.alt_or(&image.url).to_string()),
        None => (
            PLACEHOLDER_DETAIL_IMAGE.to_string(),
            format!(
                "{} {} - main product image",
                brand_or_unknown(product),
                product.name
            ),
        ),
    };

    let thumbnails = if product.images.len() > 1 {
        let items: String = product
            .images
            .iter()
            .enumerate()
            .map(|(index, image)| {
                format!(
                    r#"<div class="thumbnail{}" data-index="{}"><img src="{}" alt="{}"></div>"#,
                    if index == 0 { " active" } else { "" },
                    index,
                    html_escape(&image.url),
                    html_escape(image.alt_or(&image.url))
                )
            })
            .collect();
        format!(r#"<div class="thumbnail-images">{}</div>"#, items)
    } else {
        String::new()
    };

    format!(
        r#"<div class="product-images">
        <div class="main-image"><img src="{}" alt="{}" id="main-product-image"></div>
        {}
    </div>"#,
        html_escape(&main_url),
        html_escape(&main_alt),
        thumbnails
    )
}

fn render_meta(product: &Product) -> String {
    let or_na = |value: &str| {
        if value.is_empty() {
            "N/A".to_string()
        } else {
            html_escape(value)
        }
    };
    let status = product.stock_status;

    format!(
        r#"<div class="product-meta-detail">
            <div><strong>SKU:</strong> {} | <strong>OEM:</strong> {}</div>
            <div class="stock-info {}">
                <i class="fas fa-{}"></i>
                <span>{}</span>
            </div>
            <div><strong>Lead Time:</strong> {}</div>
            <div><strong>Compatible Models:</strong> {}</div>
        </div>"#,
        or_na(product.part_number()),
        or_na(product.oem_number()),
        status.css_class(),
        status.icon(),
        html_escape(&product.stock_label()),
        or_na(product.lead_time.as_deref().unwrap_or("")),
        or_na(&product.model_display(", ")),
    )
}

fn render_tabs(product: &Product) -> String {
    let description = product
        .description
        .as_deref()
        .filter(|d| !d.is_empty())
        .unwrap_or(DEFAULT_DESCRIPTION);

    let features = if product.features.is_empty() {
        String::new()
    } else {
        let items: String = product
            .features
            .iter()
            .map(|f| format!("<li>{}</li>", html_escape(f)))
            .collect();
        format!(r#"<ul class="feature-list">{}</ul>"#, items)
    };

    let specs = if product.specifications.is_empty() {
        "<p>No specifications available.</p>".to_string()
    } else {
        let rows: String = product
            .specifications
            .iter()
            .map(|(key, value)| {
                format!(
                    "<tr><td>{}</td><td>{}</td></tr>",
                    html_escape(key),
                    html_escape(value)
                )
            })
            .collect();
        format!(r#"<table class="spec-table">{}</table>"#, rows)
    };

    let compatibility = if product.compatibility.is_empty() {
        "<p>No compatibility information available.</p>".to_string()
    } else {
        let items: String = product
            .compatibility
            .iter()
            .map(|model| format!("<li>{}</li>", html_escape(model)))
            .collect();
        format!(r#"<ul class="compatibility-list">{}</ul>"#, items)
    };

    format!(
        r#"<div class="tab-content">
            <section id="tab-description" class="tab-pane">
                <h2>Description</h2>
                <p>{}</p>
                {}
            </section>
            <section id="tab-specs" class="tab-pane">
                <h2>Specifications</h2>
                {}
            </section>
            <section id="tab-compatibility" class="tab-pane">
                <h2>Compatibility</h2>
                {}
            </section>
        </div>"#,
        html_escape(description),
        features,
        specs,
        compatibility
    )
}

/// Related products section; empty when there are none.
pub fn render_related(related: &[&Product]) -> String {
    if related.is_empty() {
        return String::new();
    }

    format!(
        r#"<section class="related-products" id="related-products-section">
    <h2>Related Products</h2>
    {}
</section>"#,
        render_product_grid(related.iter().copied(), "related-products-grid")
    )
}
