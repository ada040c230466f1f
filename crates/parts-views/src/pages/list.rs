//! Product list page: search, pagination and history navigation.

use std::sync::Arc;

use parts_catalog::{Catalog, LoadError, Page, Product, QueryEngine, QueryState, Transition};

use crate::config::ViewConfig;
use crate::links::list_href;
use crate::sections::{
    render_empty_results, render_load_error, render_pagination, render_product_grid,
    render_search_info,
};
use crate::shell::{HeadContent, NavItem, Shell};

/// Controller for the list page.
///
/// Owns the catalog handle, the query engine and the current query state.
/// Every state change goes through the engine's transition rules, and the
/// initial load and history navigation share one reconciliation path.
#[derive(Debug, Clone)]
pub struct ListPage {
    catalog: Arc<Catalog>,
    engine: QueryEngine,
    state: QueryState,
    site_name: String,
}

impl ListPage {
    /// Build the page for a location's query string (`?page=2&search=pc200`).
    pub fn from_location(catalog: Arc<Catalog>, config: &ViewConfig, query_string: &str) -> Self {
        let engine = config.engine();
        let (state, _) = engine.reconcile(&catalog, query_string);

        Self {
            catalog,
            engine,
            state,
            site_name: config.site_name.clone(),
        }
    }

    pub fn state(&self) -> &QueryState {
        &self.state
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The page currently shown.
    pub fn current(&self) -> Page<&Product> {
        self.engine.query(&self.catalog, &self.state)
    }

    /// Apply a new search. Always returns to page 1.
    pub fn search(&mut self, text: &str) {
        self.state = self.state.with_search(text);
        tracing::debug!(search = %self.state.search_text, "search applied");
    }

    /// Navigate to `page`. Returns `false` (and changes nothing) when the
    /// page is current or out of range.
    pub fn go_to_page(&mut self, page: i64) -> bool {
        let total_pages = self.current().total_pages;

        match self.state.go_to_page(page, total_pages) {
            Transition::Changed(state) => {
                self.state = state;
                true
            }
            Transition::Unchanged => false,
        }
    }

    /// Restore state after back/forward navigation.
    pub fn pop_state(&mut self, query_string: &str) {
        let (state, _) = self.engine.reconcile(&self.catalog, query_string);
        self.state = state;
    }

    /// URL to push into history for the current state.
    pub fn location(&self) -> String {
        list_href(&self.state)
    }

    /// Page content without the document shell.
    pub fn render_content(&self) -> String {
        let page = self.current();
        let pager = page.pager();

        let results = if page.is_empty() {
            render_empty_results(&self.state.search_text)
        } else {
            render_product_grid(page.items.iter().copied(), "products-grid")
        };

        format!(
            r#"<section class="products-page">
    <h1>All Products</h1>
    {}
    {}
    {}
    {}
</section>
"#,
            render_search_info(&self.state.search_text, page.total_count),
            render_pagination(&pager, &self.state, "pagination-top"),
            results,
            render_pagination(&pager, &self.state, "pagination-bottom"),
        )
    }

    /// Full HTML document.
    pub fn render(&self) -> String {
        list_shell(&self.site_name, &self.state.search_text).wrap(&self.render_content())
    }
}

/// List page shown when the catalog failed to load.
pub fn render_list_error(error: &LoadError, config: &ViewConfig, query_string: &str) -> String {
    let state = QueryState::from_query_string(query_string);
    let content = render_load_error("Failed to load products", error, &list_href(&state));
    list_shell(&config.site_name, &state.search_text).wrap(&content)
}

fn list_shell(site_name: &str, search_text: &str) -> Shell {
    Shell::new(
        HeadContent::new(format!("{} - Products", site_name)).with_stylesheet("css/style.css"),
        site_name,
        NavItem::Products,
    )
    .with_search_text(search_text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Arc<Catalog> {
        let products = (1..=30)
            .map(|i| {
                let brand = if i <= 10 { "hitachi" } else { "komatsu" };
                Product::new(format!("p{}", i), format!("Part {}", i), brand)
            })
            .collect();
        Arc::new(Catalog::new(products).unwrap())
    }

    #[test]
    fn test_initial_location_clamped() {
        let page = ListPage::from_location(catalog(), &ViewConfig::default(), "?page=9");
        assert_eq!(page.state().page, 3);
        assert_eq!(page.location(), "products.html?page=3");
    }

    #[test]
    fn test_search_resets_page() {
        let mut page = ListPage::from_location(catalog(), &ViewConfig::default(), "page=2");
        page.search("Hitachi");
        assert_eq!(page.state(), &QueryState::new("Hitachi", 1));
        assert_eq!(page.current().total_count, 10);
        assert_eq!(page.location(), "products.html?search=Hitachi");
    }

    #[test]
    fn test_go_to_page_rules() {
        let mut page = ListPage::from_location(catalog(), &ViewConfig::default(), "");
        assert!(!page.go_to_page(1));
        assert!(!page.go_to_page(4));
        assert!(page.go_to_page(3));
        assert_eq!(page.current().items.len(), 6);
    }

    #[test]
    fn test_pop_state_reconciles() {
        let mut page = ListPage::from_location(catalog(), &ViewConfig::default(), "");
        page.pop_state("?page=2&search=komatsu");
        assert_eq!(page.state(), &QueryState::new("komatsu", 2));

        page.pop_state("");
        assert_eq!(page.state(), &QueryState::default());
    }

    #[test]
    fn test_render_empty_search() {
        let mut page = ListPage::from_location(catalog(), &ViewConfig::default(), "");
        page.search("zx999");
        let html = page.render();
        assert!(html.contains("No products found"));
        assert!(html.contains("Page 1 of 1 | Showing 0-0 of 0 products"));
        assert!(html.contains(r#"value="zx999""#));
    }

    #[test]
    fn test_render_grid_and_pagers() {
        let page = ListPage::from_location(catalog(), &ViewConfig::default(), "page=2");
        let html = page.render_content();
        assert_eq!(html.matches("class=\"product-card\"").count(), 12);
        assert!(html.contains(r#"id="pagination-top""#));
        assert!(html.contains(r#"id="pagination-bottom""#));
        assert!(!html.contains("search-results-info"));
    }

    #[test]
    fn test_error_page_keeps_location_for_retry() {
        let html = render_list_error(
            &LoadError::Parse("expected value".to_string()),
            &ViewConfig::default(),
            "page=2&search=pump",
        );
        assert!(html.contains("Failed to load products"));
        assert!(html.contains(r#"href="products.html?page=2&amp;search=pump""#));
    }
}
