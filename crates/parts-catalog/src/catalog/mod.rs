//! Product catalog module.
//!
//! Contains products, the catalog document and the indexed `Catalog`.

mod collection;
mod document;
mod product;

pub use collection::Catalog;
pub use document::{BrandSummary, CatalogDocument, CatalogMeta, CategorySummary};
pub use product::{
    PriceTag, Product, ProductImage, StockStatus, CONTACT_FOR_PRICING, PRICE_RANGE_SPEC,
};
