//! The load-once catalog store.

use std::sync::Arc;
use std::time::Instant;

use parts_catalog::{Catalog, LoadError, Product};
use tokio::sync::OnceCell;

use crate::source::CatalogSource;

/// Loads the catalog document once and hands out shared references.
///
/// Concurrent `load` calls made while a fetch is in flight wait for that
/// fetch instead of starting their own. A failed load caches nothing.
pub struct CatalogStore<S> {
    source: S,
    catalog: OnceCell<Arc<Catalog>>,
}

impl<S: CatalogSource> CatalogStore<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            catalog: OnceCell::new(),
        }
    }

    /// Return the catalog, fetching and decoding it on first use.
    pub async fn load(&self) -> Result<Arc<Catalog>, LoadError> {
        let catalog = self
            .catalog
            .get_or_try_init(|| async {
                let started = Instant::now();
                let location = self.source.describe();

                let result = match self.source.fetch().await {
                    Ok(bytes) => Catalog::from_json(&bytes),
                    Err(e) => Err(LoadError::from(e)),
                };

                match result {
                    Ok(catalog) => {
                        tracing::info!(
                            source = %location,
                            products = catalog.len(),
                            elapsed_ms = started.elapsed().as_millis() as u64,
                            "catalog loaded"
                        );
                        Ok(Arc::new(catalog))
                    }
                    Err(e) => {
                        tracing::warn!(source = %location, error = %e, "catalog load failed");
                        Err(e)
                    }
                }
            })
            .await?;

        Ok(Arc::clone(catalog))
    }

    /// Whether a catalog has been loaded successfully.
    pub fn is_loaded(&self) -> bool {
        self.catalog.initialized()
    }

    /// The cached catalog, if loaded.
    pub fn cached(&self) -> Option<Arc<Catalog>> {
        self.catalog.get().cloned()
    }

    /// Look up a product in the cached catalog.
    ///
    /// Returns `None` before the first successful load.
    pub fn find_by_id(&self, id: &str) -> Option<&Product> {
        self.catalog.get().and_then(|catalog| catalog.find_by_id(id))
    }

    /// Where the document is loaded from.
    pub fn describe(&self) -> String {
        self.source.describe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::StaticSource;

    #[tokio::test]
    async fn test_load_and_find() {
        let store = CatalogStore::new(StaticSource::new(
            br#"{"products": [{"id": "KWSK-000001", "name": "Main Pump"}]}"#.to_vec(),
        ));

        assert!(!store.is_loaded());
        assert!(store.find_by_id("KWSK-000001").is_none());

        let catalog = store.load().await.unwrap();
        assert_eq!(catalog.len(), 1);
        assert!(store.is_loaded());
        assert_eq!(store.find_by_id("KWSK-000001").unwrap().name, "Main Pump");
    }

    #[tokio::test]
    async fn test_malformed_document() {
        let store = CatalogStore::new(StaticSource::new(b"{\"meta\": {}}".to_vec()));
        assert_eq!(store.load().await.unwrap_err(), LoadError::MissingProducts);
        assert!(!store.is_loaded());
        assert!(store.cached().is_none());
    }
}
