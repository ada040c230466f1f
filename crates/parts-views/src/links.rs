//! Site URLs.

use parts_catalog::search::DetailParams;
use parts_catalog::{ProductId, QueryState};

pub const HOME_PAGE: &str = "index.html";
pub const LIST_PAGE: &str = "products.html";
pub const DETAIL_PAGE: &str = "product-detail.html";

/// Link to a product's detail page.
pub fn detail_href(id: &ProductId) -> String {
    format!("{}?{}", DETAIL_PAGE, DetailParams::link(id))
}

/// Link to the list page showing `state`.
pub fn list_href(state: &QueryState) -> String {
    let query = state.to_query_string();
    if query.is_empty() {
        LIST_PAGE.to_string()
    } else {
        format!("{}?{}", LIST_PAGE, query)
    }
}
