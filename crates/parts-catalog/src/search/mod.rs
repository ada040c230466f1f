//! Catalog search and pagination.
//!
//! Everything here is synchronous and read-only over a `&Catalog`.

mod matching;
pub mod params;
mod query;
mod results;
mod window;

pub use matching::{filter, matches, normalize};
pub use params::DetailParams;
pub use query::{QueryEngine, QueryState, Transition, DEFAULT_PAGE_SIZE};
pub use results::{clamp_page, paginate, total_pages, Page, Pager};
pub use window::{page_window, PageLink, WINDOW_SIZE};
