//! Where the catalog document comes from.

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;

use crate::client::{FetchClient, FetchError};
use crate::timeout::TimeoutConfig;

/// A backing store for the catalog document.
///
/// Sources only move bytes; decoding happens in the store.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch the raw document.
    async fn fetch(&self) -> Result<Vec<u8>, FetchError>;

    /// Human-readable location, for logs and diagnostics.
    fn describe(&self) -> String;
}

#[async_trait]
impl<S: CatalogSource + ?Sized> CatalogSource for Arc<S> {
    async fn fetch(&self) -> Result<Vec<u8>, FetchError> {
        (**self).fetch().await
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

#[async_trait]
impl<S: CatalogSource + ?Sized> CatalogSource for Box<S> {
    async fn fetch(&self) -> Result<Vec<u8>, FetchError> {
        (**self).fetch().await
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

/// A document on the local filesystem.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CatalogSource for FileSource {
    async fn fetch(&self) -> Result<Vec<u8>, FetchError> {
        tokio::fs::read(&self.path).await.map_err(|source| FetchError::Io {
            path: self.path.display().to_string(),
            source,
        })
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// A document served over HTTP(S).
#[derive(Debug, Clone)]
pub struct HttpSource {
    url: String,
    client: FetchClient,
}

impl HttpSource {
    pub fn new(url: impl Into<String>, timeout: TimeoutConfig) -> Result<Self, FetchError> {
        Ok(Self {
            url: url.into(),
            client: FetchClient::new(timeout)?,
        })
    }
}

#[async_trait]
impl CatalogSource for HttpSource {
    async fn fetch(&self) -> Result<Vec<u8>, FetchError> {
        self.client.get_bytes(&self.url).await
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

/// An in-memory document.
#[derive(Debug, Clone)]
pub struct StaticSource {
    bytes: Arc<[u8]>,
}

impl StaticSource {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into().into(),
        }
    }
}

#[async_trait]
impl CatalogSource for StaticSource {
    async fn fetch(&self) -> Result<Vec<u8>, FetchError> {
        Ok(self.bytes.to_vec())
    }

    fn describe(&self) -> String {
        format!("<memory: {} bytes>", self.bytes.len())
    }
}

/// Whether `location` names an `http://` or `https://` URL. The scheme is
/// matched case-insensitively.
pub fn is_remote_location(location: &str) -> bool {
    let lower = location.trim_start().to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Pick a source for a configured location: HTTP for `http://` and
/// `https://` URLs, the filesystem otherwise.
pub fn source_from_location(
    location: &str,
    timeout: TimeoutConfig,
) -> Result<Box<dyn CatalogSource>, FetchError> {
    if is_remote_location(location) {
        Ok(Box::new(HttpSource::new(location, timeout)?))
    } else {
        Ok(Box::new(FileSource::new(location)))
    }
}
