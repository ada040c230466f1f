//! Domain types and query engine for the excavator parts catalog.
//!
//! This crate provides:
//!
//! - **Catalog**: Products, the catalog document codec, and an id-indexed `Catalog`
//! - **Search**: Search normalization, stable filtering, clamped pagination,
//!   pager windows and navigation parameters
//!
//! # Example
//!
//! ```rust,ignore
//! use parts_catalog::prelude::*;
//!
//! let catalog = Catalog::from_json(&bytes)?;
//! let engine = QueryEngine::default();
//!
//! let (state, page) = engine.reconcile(&catalog, "page=2&search=pc200");
//! for product in &page.items {
//!     println!("{} {}", product.id, product.name);
//! }
//! println!("page {} of {}", page.page, page.total_pages);
//! ```

pub mod error;
pub mod ids;

pub mod catalog;
pub mod search;

pub use catalog::{Catalog, CatalogDocument, Product, StockStatus};
pub use error::{CatalogError, LoadError};
pub use ids::*;
pub use search::{Page, Pager, QueryEngine, QueryState, Transition, DEFAULT_PAGE_SIZE};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::{CatalogError, LoadError};
    pub use crate::ids::*;

    // Catalog
    pub use crate::catalog::{
        BrandSummary, Catalog, CatalogDocument, CatalogMeta, CategorySummary, PriceTag, Product,
        ProductImage, StockStatus,
    };

    // Search
    pub use crate::search::{
        filter, matches, normalize, page_window, paginate, DetailParams, Page, PageLink, Pager,
        QueryEngine, QueryState, Transition, DEFAULT_PAGE_SIZE,
    };
}
