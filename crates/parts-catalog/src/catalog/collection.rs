//! The loaded, read-only catalog with an id index.

use std::collections::HashMap;

use crate::catalog::{BrandSummary, CatalogDocument, CatalogMeta, CategorySummary, Product};
use crate::error::{CatalogError, LoadError};
use crate::ids::ProductId;

/// An immutable product collection in document order.
///
/// Ids are unique; construction fails otherwise.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    meta: CatalogMeta,
    categories: Vec<CategorySummary>,
    brands: Vec<BrandSummary>,
    products: Vec<Product>,
    index: HashMap<ProductId, usize>,
}

impl Catalog {
    /// Build a catalog from a product list.
    pub fn new(products: Vec<Product>) -> Result<Self, LoadError> {
        Self::from_document(CatalogDocument {
            products,
            ..Default::default()
        })
    }

    /// Build a catalog from a decoded document, indexing products by id.
    pub fn from_document(document: CatalogDocument) -> Result<Self, LoadError> {
        let mut index = HashMap::with_capacity(document.products.len());
        for (position, product) in document.products.iter().enumerate() {
            if index.insert(product.id.clone(), position).is_some() {
                return Err(LoadError::DuplicateId(product.id.to_string()));
            }
        }

        Ok(Self {
            meta: document.meta,
            categories: document.categories,
            brands: document.brands,
            products: document.products,
            index,
        })
    }

    /// Decode and index a JSON catalog document.
    pub fn from_json(bytes: &[u8]) -> Result<Self, LoadError> {
        let catalog = Self::from_document(CatalogDocument::from_json(bytes)?)?;
        tracing::debug!(products = catalog.len(), "decoded catalog document");
        Ok(catalog)
    }

    /// All products in document order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn meta(&self) -> &CatalogMeta {
        &self.meta
    }

    pub fn categories(&self) -> &[CategorySummary] {
        &self.categories
    }

    pub fn brands(&self) -> &[BrandSummary] {
        &self.brands
    }

    /// Look up a product by id.
    pub fn find_by_id(&self, id: &str) -> Option<&Product> {
        self.index.get(id).map(|&position| &self.products[position])
    }

    /// Look up a product by id, failing with `ProductNotFound`.
    pub fn get(&self, id: &str) -> Result<&Product, CatalogError> {
        self.find_by_id(id)
            .ok_or_else(|| CatalogError::ProductNotFound(id.to_string()))
    }

    /// The first `count` products, used as the home page selection.
    pub fn featured(&self, count: usize) -> &[Product] {
        &self.products[..count.min(self.products.len())]
    }

    /// Up to `count` other products sharing the category or the brand of
    /// `product`, in catalog order.
    pub fn related(&self, product: &Product, count: usize) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.id != product.id)
            .filter(|p| p.category == product.category || p.brand == product.brand)
            .take(count)
            .collect()
    }

    /// The first `count` ids, for "did you mean" hints.
    pub fn sample_ids(&self, count: usize) -> Vec<&ProductId> {
        self.products.iter().take(count).map(|p| &p.id).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, brand: &str, category: &str) -> Product {
        let mut p = Product::new(id, format!("Part {}", id), brand);
        p.category = category.to_string();
        p
    }

    fn sample() -> Catalog {
        Catalog::new(vec![
            product("1", "komatsu", "hydraulic"),
            product("2", "komatsu", "engine"),
            product("3", "hitachi", "hydraulic"),
            product("4", "volvo", "electrical"),
            product("5", "komatsu", "undercarriage"),
        ])
        .unwrap()
    }

    #[test]
    fn test_find_by_id() {
        let catalog = sample();
        assert_eq!(catalog.find_by_id("3").unwrap().brand, "hitachi");
        assert!(catalog.find_by_id("missing").is_none());
    }

    #[test]
    fn test_get_not_found() {
        let catalog = sample();
        assert_eq!(
            catalog.get("nope").unwrap_err(),
            CatalogError::ProductNotFound("nope".to_string())
        );
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let err = Catalog::new(vec![
            product("1", "komatsu", "hydraulic"),
            product("1", "volvo", "engine"),
        ])
        .unwrap_err();
        assert_eq!(err, LoadError::DuplicateId("1".to_string()));
    }

    #[test]
    fn test_featured_is_prefix() {
        let catalog = sample();
        let featured: Vec<_> = catalog.featured(3).iter().map(|p| p.id.as_str()).collect();
        assert_eq!(featured, vec!["1", "2", "3"]);
        assert_eq!(catalog.featured(100).len(), 5);
        assert!(Catalog::default().featured(8).is_empty());
    }

    #[test]
    fn test_related_by_category_or_brand() {
        let catalog = sample();
        let current = catalog.find_by_id("1").unwrap();
        let related: Vec<_> = catalog
            .related(current, 6)
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(related, vec!["2", "3", "5"]);
    }

    #[test]
    fn test_related_respects_limit() {
        let catalog = sample();
        let current = catalog.find_by_id("1").unwrap();
        assert_eq!(catalog.related(current, 1).len(), 1);
    }

    #[test]
    fn test_from_json() {
        let catalog = Catalog::from_json(
            br#"{"products": [{"id": "a", "name": "A"}, {"id": "b", "name": "B"}]}"#,
        )
        .unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.sample_ids(1), vec![&ProductId::new("a")]);
    }
}
