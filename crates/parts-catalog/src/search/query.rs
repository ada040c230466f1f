//! Query state, transitions and the query engine.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::{Catalog, Product};
use crate::search::matching::{filter, normalize};
use crate::search::params::{
    encode_component, get_param, parse_page, PAGE_PARAM, SEARCH_PARAM,
};
use crate::search::results::{paginate, Page};

/// Products per list page.
pub const DEFAULT_PAGE_SIZE: usize = 12;

/// What the list page is showing: search text plus a 1-indexed page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryState {
    pub search_text: String,
    pub page: u32,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            search_text: String::new(),
            page: 1,
        }
    }
}

/// Result of a requested state change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    Changed(QueryState),
    Unchanged,
}

impl Transition {
    pub fn is_changed(&self) -> bool {
        matches!(self, Transition::Changed(_))
    }
}

impl QueryState {
    /// Build a state; the text is trimmed and the page kept at least 1.
    pub fn new(search_text: impl Into<String>, page: u32) -> Self {
        Self {
            search_text: search_text.into().trim().to_string(),
            page: page.max(1),
        }
    }

    /// Normalized search token.
    pub fn token(&self) -> String {
        normalize(&self.search_text)
    }

    /// New search. Always starts back at page 1.
    pub fn with_search(&self, text: &str) -> Self {
        Self::new(text, 1)
    }

    /// Explicit page navigation.
    ///
    /// Requests for the current page or outside `1..=total_pages` are
    /// ignored rather than clamped.
    pub fn go_to_page(&self, requested: i64, total_pages: u32) -> Transition {
        if requested < 1 || requested > i64::from(total_pages) || requested == i64::from(self.page)
        {
            return Transition::Unchanged;
        }

        Transition::Changed(Self {
            search_text: self.search_text.clone(),
            page: requested as u32,
        })
    }

    /// Decode `page` and `search` from a query string.
    ///
    /// Malformed or non-positive pages become 1; the upper bound is applied
    /// by [`QueryEngine::reconcile`].
    pub fn from_query_string(qs: &str) -> Self {
        let page = parse_page(get_param(qs, PAGE_PARAM).as_deref());
        let search = get_param(qs, SEARCH_PARAM).unwrap_or_default();

        Self::new(search, page.clamp(1, i64::from(u32::MAX)) as u32)
    }

    /// Encode as a query string, omitting defaults.
    ///
    /// Returns an empty string for the default state.
    pub fn to_query_string(&self) -> String {
        let mut pairs = Vec::with_capacity(2);
        if self.page > 1 {
            pairs.push(format!("{}={}", PAGE_PARAM, self.page));
        }
        if !self.search_text.is_empty() {
            pairs.push(format!("{}={}", SEARCH_PARAM, encode_component(&self.search_text)));
        }
        pairs.join("&")
    }
}

/// Filters and paginates a catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryEngine {
    page_size: usize,
}

impl Default for QueryEngine {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl QueryEngine {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Evaluate `state` against `catalog`. The page is clamped, never rejected.
    pub fn query<'a>(&self, catalog: &'a Catalog, state: &QueryState) -> Page<&'a Product> {
        let token = state.token();
        let matched = filter(catalog.products(), &token);
        let page = paginate(&matched, i64::from(state.page), self.page_size);

        debug!(
            token = %token,
            requested = state.page,
            page = page.page,
            total_pages = page.total_pages,
            matches = page.total_count,
            "evaluated catalog query"
        );

        page
    }

    /// Rebuild the state from navigation parameters and evaluate it.
    ///
    /// Used both for the first render and for history navigation. The
    /// returned state carries the page actually shown.
    pub fn reconcile<'a>(
        &self,
        catalog: &'a Catalog,
        query_string: &str,
    ) -> (QueryState, Page<&'a Product>) {
        let mut state = QueryState::from_query_string(query_string);
        let page = self.query(catalog, &state);
        state.page = page.page;
        (state, page)
    }
}
