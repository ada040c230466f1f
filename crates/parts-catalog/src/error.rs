//! Catalog error types.

use thiserror::Error;

/// Failure to obtain a usable catalog.
///
/// Load errors are retryable: a failed load leaves no cached state behind, so
/// the next attempt fetches again.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// The backing document could not be fetched.
    #[error("Failed to fetch catalog: {0}")]
    Transport(String),

    /// The payload is not a valid catalog document.
    #[error("Malformed catalog document: {0}")]
    Parse(String),

    /// The document has no `products` field.
    #[error("Malformed catalog document: missing `products` field")]
    MissingProducts,

    /// Two products share an identifier.
    #[error("Duplicate product id: {0}")]
    DuplicateId(String),
}

impl From<serde_json::Error> for LoadError {
    fn from(e: serde_json::Error) -> Self {
        LoadError::Parse(e.to_string())
    }
}

/// Errors from catalog lookups.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Product not found.
    #[error("Product not found: {0}")]
    ProductNotFound(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_from_serde() {
        let err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let load: LoadError = err.into();
        assert!(matches!(load, LoadError::Parse(_)));
    }

    #[test]
    fn test_display() {
        assert_eq!(
            CatalogError::ProductNotFound("KWSK-000001".into()).to_string(),
            "Product not found: KWSK-000001"
        );
        assert_eq!(
            LoadError::MissingProducts.to_string(),
            "Malformed catalog document: missing `products` field"
        );
    }
}
