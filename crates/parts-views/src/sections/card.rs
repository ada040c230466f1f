//! Product card and grid.

use parts_catalog::Product;

use crate::escape::html_escape;
use crate::links::detail_href;

/// Image shown when a product has none.
pub const PLACEHOLDER_IMAGE: &str =
    "https://via.placeholder.com/280x180/1a365d/ffffff?text=Product+Image";

/// Render a grid of product cards.
pub fn render_product_grid<'a, I>(products: I, grid_id: &str) -> String
where
    I: IntoIterator<Item = &'a Product>,
{
    let cards: String = products.into_iter().map(render_product_card).collect();

    format!(
        r#"<div class="products-grid" id="{}">{}</div>"#,
        html_escape(grid_id),
        cards
    )
}

/// Render a single product card.
pub fn render_product_card(product: &Product) -> String {
    let href = html_escape(&detail_href(&product.id));
    let (image_url, image_alt) = match product.primary_image() {
        Some(image) => (image.url.as_str(), image.alt_or(&image.url).to_string()),
        None => (
            PLACEHOLDER_IMAGE,
            format!("{} {} - product image", brand_or_unknown(product), product.name),
        ),
    };

    let models = product.model_display(", ");
    let models_html = if models.is_empty() {
        String::new()
    } else {
        format!(
            r#"<div class="product-brand">For: {}</div>"#,
            html_escape(&models)
        )
    };

    let price_html = match product.list_price() {
        Some(price) => format!(
            r#"<div class="price-container">
            <span class="price-label">Price:</span>
            <span class="price-value">{}</span>
        </div>"#,
            html_escape(&price)
        ),
        None => String::new(),
    };

    let part_number = if product.part_number().is_empty() {
        "N/A"
    } else {
        product.part_number()
    };

    format!(
        r#"
<div class="product-card" data-product-id="{id}">
    <div class="product-image">
        <img src="{src}" alt="{alt}" loading="lazy">
    </div>
    <div class="product-info">
        <h3 class="product-name"><a href="{href}">{name}</a></h3>
        <div class="product-meta">
            <div class="product-brand">Part#: {part}</div>
            {models}
        </div>
        {price}
        <div class="product-actions">
            <a href="{href}" class="btn-primary">View Details</a>
        </div>
    </div>
</div>"#,
        id = html_escape(product.id.as_str()),
        src = html_escape(image_url),
        alt = html_escape(&image_alt),
        href = href,
        name = html_escape(&product.name),
        part = html_escape(part_number),
        models = models_html,
        price = price_html,
    )
}

pub(crate) fn brand_or_unknown(product: &Product) -> &str {
    if product.brand.is_empty() {
        "Unknown"
    } else {
        &product.brand
    }
}
