//! CLI configuration (`parts.toml`).

use std::path::PathBuf;

use anyhow::{Context, Result};
use parts_catalog::DEFAULT_PAGE_SIZE;
use parts_data::TimeoutConfig;
use parts_views::{ViewConfig, DEFAULT_DEBOUNCE, DEFAULT_FEATURED_COUNT, DEFAULT_RELATED_COUNT};
use serde::{Deserialize, Serialize};

/// Config file names searched for, in order.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["parts.toml", ".parts.toml", "parts.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Where the catalog document lives.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// List and page settings.
    #[serde(default)]
    pub listing: ListingConfig,

    /// Data generator settings.
    #[serde(default)]
    pub generator: GeneratorConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }

    /// Save config to a file.
    pub fn save(&self, path: &str) -> Result<()> {
        let content = if path.ends_with(".json") {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path))
    }

    /// Settings handed to the page renderers.
    pub fn view_config(&self) -> ViewConfig {
        ViewConfig {
            page_size: self.listing.page_size,
            featured_count: self.listing.featured_count,
            related_count: self.listing.related_count,
            debounce_ms: self.listing.debounce_ms,
            ..ViewConfig::default()
        }
    }

    /// Problems that make the config unusable.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.catalog.source.trim().is_empty() {
            errors.push("catalog.source must not be empty".to_string());
        }
        if self.catalog.timeout_ms == 0 {
            errors.push("catalog.timeout_ms must be greater than 0".to_string());
        }
        if self.listing.page_size == 0 {
            errors.push("listing.page_size must be greater than 0".to_string());
        }
        if self.generator.output.as_os_str().is_empty() {
            errors.push("generator.output must not be empty".to_string());
        }

        errors
    }
}

/// Catalog source configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// File path or http(s) URL of the catalog document.
    #[serde(default = "default_source")]
    pub source: String,

    /// Total timeout for remote sources, in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_source() -> String {
    "products.json".to_string()
}

fn default_timeout_ms() -> u64 {
    TimeoutConfig::default().total.as_millis() as u64
}

impl CatalogConfig {
    pub fn timeout(&self) -> TimeoutConfig {
        TimeoutConfig::from_millis(self.timeout_ms)
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            source: default_source(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

/// List page settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingConfig {
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    #[serde(default = "default_featured_count")]
    pub featured_count: usize,

    #[serde(default = "default_related_count")]
    pub related_count: usize,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_debounce_ms() -> u64 {
    DEFAULT_DEBOUNCE.as_millis() as u64
}

fn default_featured_count() -> usize {
    DEFAULT_FEATURED_COUNT
}

fn default_related_count() -> usize {
    DEFAULT_RELATED_COUNT
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            debounce_ms: default_debounce_ms(),
            featured_count: default_featured_count(),
            related_count: default_related_count(),
        }
    }
}

/// Data generator settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Where `parts generate` writes the document.
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Fixed RNG seed for reproducible catalogs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

fn default_output() -> PathBuf {
    PathBuf::from("products.json")
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output: default_output(),
            seed: None,
        }
    }
}

/// Generate a default parts.toml config file.
pub fn generate_default_config() -> String {
    format!(
        r#"# Excavator parts catalog configuration

[catalog]
# File path or http(s) URL
source = "products.json"
timeout_ms = {timeout}

[listing]
page_size = {page_size}
debounce_ms = {debounce}
featured_count = {featured}
related_count = {related}

[generator]
output = "products.json"
# seed = 42
"#,
        timeout = default_timeout_ms(),
        page_size = DEFAULT_PAGE_SIZE,
        debounce = default_debounce_ms(),
        featured = DEFAULT_FEATURED_COUNT,
        related = DEFAULT_RELATED_COUNT,
    )
}
