//! Search result summary shown above the grid.

use crate::escape::html_escape;
use crate::links::LIST_PAGE;

/// Render the "N products found" banner. Empty when there is no search.
pub fn render_search_info(search_text: &str, match_count: usize) -> String {
    if search_text.trim().is_empty() {
        return String::new();
    }

    let noun = if match_count == 1 { "product" } else { "products" };

    format!(
        r#"<div class="search-results-info" id="search-results-info">
    Found <span id="search-count">{}</span> {} matching "<strong>{}</strong>"
    <a href="{}" class="search-clear" id="search-clear">Clear search</a>
</div>"#,
        match_count,
        noun,
        html_escape(search_text.trim()),
        LIST_PAGE
    )
}
