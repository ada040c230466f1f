//! Loading failure, empty and not-found states.

use parts_catalog::{LoadError, ProductId};

use crate::escape::html_escape;
use crate::links::{DETAIL_PAGE, LIST_PAGE};

/// Catalog could not be loaded. Offers a retry link back to `retry_href`.
pub fn render_load_error(title: &str, error: &LoadError, retry_href: &str) -> String {
    format!(
        r#"<div class="error-state">
    <h3>{}</h3>
    <p>Error: {}</p>
    <p class="hint">Make sure the catalog document is reachable, then try again.</p>
    <a href="{}" class="btn-primary">Retry</a>
</div>"#,
        html_escape(title),
        html_escape(&error.to_string()),
        html_escape(retry_href)
    )
}

/// No products match the search.
pub fn render_empty_results(search_text: &str) -> String {
    let detail = if search_text.trim().is_empty() {
        "The catalog is empty.".to_string()
    } else {
        format!(
            "No products match \"{}\". Try a part number, brand or model.",
            html_escape(search_text.trim())
        )
    };

    format!(
        r#"<div class="empty-state" id="empty-state">
    <h3>No products found</h3>
    <p>{}</p>
</div>"#,
        detail
    )
}

/// The requested product id is not in the catalog.
pub fn render_not_found(id: &str, available: &[&ProductId]) -> String {
    let ids = available
        .iter()
        .map(|id| html_escape(id.as_str()))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        r#"<div class="empty-state">
    <h2>Product not found</h2>
    <p>The product with ID "{}" doesn't exist.</p>
    <p class="hint">Available product IDs: {}...</p>
    <a href="{}" class="btn-primary">Back to Products</a>
</div>"#,
        html_escape(id),
        ids,
        LIST_PAGE
    )
}

/// The detail page was opened without an id.
pub fn render_missing_id(current_url: &str) -> String {
    format!(
        r#"<div class="error-state">
    <h3>Missing Product ID</h3>
    <p>No product ID was found in the URL.</p>
    <p class="hint">Example: <code>{}?id=K3V112DT-hydraulic-pump</code></p>
    <p class="hint">Current URL: {}</p>
    <a href="{}" class="btn-primary">Back to Products</a>
</div>"#,
        DETAIL_PAGE,
        html_escape(current_url),
        LIST_PAGE
    )
}
