//! Catalog data access.
//!
//! This crate provides:
//! - `CatalogSource` - Where the catalog document comes from (file, HTTP, memory)
//! - `CatalogStore` - Loads the catalog once and shares it
//! - `TimeoutConfig` - Timeouts for remote sources
//! - `FetchError` - Transport failures, convertible into `LoadError`

mod client;
mod source;
mod store;
mod timeout;

pub use client::*;
pub use source::*;
pub use store::*;
pub use timeout::*;
