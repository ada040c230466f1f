//! CLI execution context.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context as _, Result};
use parts_catalog::{Catalog, LoadError};
use parts_data::{is_remote_location, source_from_location, CatalogSource, CatalogStore};

use crate::config::{CliConfig, CONFIG_FILE_NAMES};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Where the configuration came from, if a file was found.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = if let Some(path) = config_path {
            (CliConfig::load(path)?, Some(PathBuf::from(path)))
        } else {
            // Try to find config in current directory or parent directories
            match find_config(&cwd) {
                Some((config, path)) => (config, Some(path)),
                None => (CliConfig::default(), None),
            }
        };

        if let Some(path) = &config_path {
            tracing::debug!(path = %path.display(), "using config file");
        }

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
        })
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.cwd.join(path)
        }
    }

    /// Catalog source from config, or `source_override` when given.
    ///
    /// Relative file paths resolve against the working directory.
    pub fn catalog_source(&self, source_override: Option<&str>) -> Result<Box<dyn CatalogSource>> {
        let location = source_override.unwrap_or(&self.config.catalog.source);
        let location = if is_remote_location(location) {
            location.to_string()
        } else {
            self.resolve_path(Path::new(location)).display().to_string()
        };

        source_from_location(&location, self.config.catalog.timeout())
            .with_context(|| format!("Failed to set up catalog source: {}", location))
    }

    /// Store over the configured (or overridden) source.
    pub fn catalog_store(
        &self,
        source_override: Option<&str>,
    ) -> Result<CatalogStore<Box<dyn CatalogSource>>> {
        Ok(CatalogStore::new(self.catalog_source(source_override)?))
    }

    /// Load through `store`, showing a spinner while the fetch runs.
    pub async fn fetch_catalog(
        &self,
        store: &CatalogStore<Box<dyn CatalogSource>>,
    ) -> Result<Arc<Catalog>, LoadError> {
        let spinner = self
            .output
            .spinner(&format!("Loading catalog from {}", store.describe()));
        let result = store.load().await;
        spinner.finish_and_clear();

        if let Ok(catalog) = &result {
            self.output
                .debug(&format!("Loaded {} products", catalog.len()));
        }
        result
    }

    /// Load the catalog, failing the command on error.
    pub async fn load_catalog(&self, source_override: Option<&str>) -> Result<Arc<Catalog>> {
        let store = self.catalog_store(source_override)?;
        self.fetch_catalog(&store)
            .await
            .with_context(|| format!("Failed to load catalog from {}", store.describe()))
    }
}

/// Find config file in directory tree.
fn find_config(start: &Path) -> Option<(CliConfig, PathBuf)> {
    let mut current = start.to_path_buf();
    loop {
        for name in CONFIG_FILE_NAMES {
            let config_path = current.join(name);
            if config_path.exists() {
                match CliConfig::load(config_path.to_str()?) {
                    Ok(config) => return Some((config, config_path)),
                    Err(e) => tracing::warn!(path = %config_path.display(), error = %e, "ignoring unreadable config"),
                }
            }
        }

        if !current.pop() {
            break;
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_config_in_parent() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("parts.toml"),
            "[listing]\npage_size = 30\n",
        )
        .unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();

        let (config, path) = find_config(&nested).unwrap();
        assert_eq!(config.listing.page_size, 30);
        assert_eq!(path, dir.path().join("parts.toml"));
    }

    #[test]
    fn test_relative_source_resolves_against_cwd() {
        let ctx = Context {
            config: CliConfig::default(),
            config_path: None,
            output: Output::new(false, true),
            cwd: PathBuf::from("/srv/site"),
        };
        let source = ctx.catalog_source(None).unwrap();
        assert_eq!(source.describe(), "/srv/site/products.json");

        let source = ctx.catalog_source(Some("https://parts.example/p.json")).unwrap();
        assert_eq!(source.describe(), "https://parts.example/p.json");
    }

    #[test]
    fn test_uppercase_scheme_stays_remote() {
        let ctx = Context {
            config: CliConfig::default(),
            config_path: None,
            output: Output::new(false, true),
            cwd: PathBuf::from("/work"),
        };
        let source = ctx
            .catalog_source(Some("HTTPS://parts.example/products.json"))
            .unwrap();
        assert_eq!(source.describe(), "HTTPS://parts.example/products.json");
    }
}
