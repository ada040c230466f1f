//! The catalog document (`products.json`).

use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::error::LoadError;
use crate::ids::{BrandId, CategoryId};

/// Document-level counters written by the generator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct CatalogMeta {
    #[serde(default)]
    pub total_products: u32,
    #[serde(default)]
    pub products_per_page: u32,
    #[serde(default)]
    pub total_pages: u32,
    /// ISO date (`YYYY-MM-DD`).
    #[serde(default)]
    pub last_updated: String,
}

/// Category with its product count.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategorySummary {
    pub id: CategoryId,
    pub name: String,
    #[serde(default)]
    pub count: u32,
}

/// Brand with its product count.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BrandSummary {
    pub id: BrandId,
    pub name: String,
    #[serde(default)]
    pub count: u32,
}

/// The full catalog document.
#[derive(Debug, Clone, Serialize, PartialEq, Default)]
pub struct CatalogDocument {
    pub meta: CatalogMeta,
    pub categories: Vec<CategorySummary>,
    pub brands: Vec<BrandSummary>,
    pub products: Vec<Product>,
}

/// Wire shape: every section is optional so a missing `products` can be
/// told apart from an empty one.
#[derive(Deserialize)]
struct RawDocument {
    #[serde(default)]
    meta: CatalogMeta,
    #[serde(default)]
    categories: Vec<CategorySummary>,
    #[serde(default)]
    brands: Vec<BrandSummary>,
    #[serde(default)]
    products: Option<Vec<Product>>,
}

impl CatalogDocument {
    /// Decode a document from JSON bytes.
    pub fn from_json(bytes: &[u8]) -> Result<Self, LoadError> {
        let raw: RawDocument = serde_json::from_slice(bytes)?;
        let products = raw.products.ok_or(LoadError::MissingProducts)?;

        Ok(Self {
            meta: raw.meta,
            categories: raw.categories,
            brands: raw.brands,
            products,
        })
    }

    /// Encode as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_document() {
        let json = br#"{
            "meta": {"totalProducts": 1, "productsPerPage": 15, "totalPages": 1, "lastUpdated": "2026-10-18"},
            "categories": [{"id": "hydraulic", "name": "Hydraulic Components", "count": 1}],
            "brands": [{"id": "komatsu", "name": "Komatsu", "count": 1}],
            "products": [{"id": "KWSK-000001", "name": "Komatsu PC200-8 Pumps"}]
        }"#;
        let doc = CatalogDocument::from_json(json).unwrap();
        assert_eq!(doc.meta.products_per_page, 15);
        assert_eq!(doc.categories[0].id.as_str(), "hydraulic");
        assert_eq!(doc.brands[0].count, 1);
        assert_eq!(doc.products.len(), 1);
    }

    #[test]
    fn test_missing_products_is_error() {
        let err = CatalogDocument::from_json(br#"{"meta": {}}"#).unwrap_err();
        assert_eq!(err, LoadError::MissingProducts);
    }

    #[test]
    fn test_null_products_is_error() {
        let err = CatalogDocument::from_json(br#"{"products": null}"#).unwrap_err();
        assert_eq!(err, LoadError::MissingProducts);
    }

    #[test]
    fn test_empty_products_is_ok() {
        let doc = CatalogDocument::from_json(br#"{"products": []}"#).unwrap();
        assert!(doc.products.is_empty());
        assert_eq!(doc.meta, CatalogMeta::default());
    }

    #[test]
    fn test_not_json_is_parse_error() {
        let err = CatalogDocument::from_json(b"<html>404</html>").unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));
    }

    #[test]
    fn test_roundtrip_through_json() {
        let doc = CatalogDocument {
            products: vec![Product::new("KWSK-000001", "Pump", "komatsu")],
            ..Default::default()
        };
        let json = doc.to_json_pretty().unwrap();
        let decoded = CatalogDocument::from_json(json.as_bytes()).unwrap();
        assert_eq!(decoded, doc);
    }
}
