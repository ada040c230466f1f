//! HTTP fetch client for remote catalog documents.

use std::time::Instant;

use parts_catalog::LoadError;

use crate::timeout::TimeoutConfig;

/// Error type for fetch operations.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("HTTP error: {status} for {url}")]
    Http { status: u16, url: String },

    #[error("Timeout after {0:?}")]
    Timeout(std::time::Duration),

    #[error("Request error: {0}")]
    Request(String),
}

impl From<FetchError> for LoadError {
    fn from(e: FetchError) -> Self {
        LoadError::Transport(e.to_string())
    }
}

/// Fetches raw documents over HTTP with a total timeout.
#[derive(Debug, Clone)]
pub struct FetchClient {
    client: reqwest::Client,
    timeout: TimeoutConfig,
}

impl FetchClient {
    pub fn new(timeout: TimeoutConfig) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("parts-catalog/", env!("CARGO_PKG_VERSION")))
            .connect_timeout(timeout.connect)
            .build()
            .map_err(|e| FetchError::Request(e.to_string()))?;

        Ok(Self { client, timeout })
    }

    pub fn timeout(&self) -> TimeoutConfig {
        self.timeout
    }

    /// GET `url` and return the body. Non-2xx responses are errors.
    pub async fn get_bytes(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let started = Instant::now();

        let request = async {
            let response = self
                .client
                .get(url)
                .send()
                .await
                .map_err(|e| FetchError::Request(e.to_string()))?;

            let status = response.status();
            if !status.is_success() {
                return Err(FetchError::Http {
                    status: status.as_u16(),
                    url: url.to_string(),
                });
            }

            response
                .bytes()
                .await
                .map(|body| body.to_vec())
                .map_err(|e| FetchError::Request(e.to_string()))
        };

        let body = tokio::time::timeout(self.timeout.total, request)
            .await
            .map_err(|_| FetchError::Timeout(self.timeout.total))??;

        tracing::debug!(
            url,
            bytes = body.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "fetched remote document"
        );

        Ok(body)
    }
}
