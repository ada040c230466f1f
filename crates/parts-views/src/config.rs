//! Rendering and interaction settings.

use std::time::Duration;

use parts_catalog::{QueryEngine, DEFAULT_PAGE_SIZE};
use serde::{Deserialize, Serialize};

/// Products on the home page.
pub const DEFAULT_FEATURED_COUNT: usize = 8;
/// Related products on the detail page.
pub const DEFAULT_RELATED_COUNT: usize = 6;
/// Quiet interval before a search keystroke burst is applied.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// Knobs shared by the page renderers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    pub page_size: usize,
    pub featured_count: usize,
    pub related_count: usize,
    pub debounce_ms: u64,
    /// Site name used in page titles and the header.
    pub site_name: String,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            featured_count: DEFAULT_FEATURED_COUNT,
            related_count: DEFAULT_RELATED_COUNT,
            debounce_ms: DEFAULT_DEBOUNCE.as_millis() as u64,
            site_name: "Excavator Parts".to_string(),
        }
    }
}

impl ViewConfig {
    pub fn engine(&self) -> QueryEngine {
        QueryEngine::new(self.page_size)
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ViewConfig::default();
        assert_eq!(config.engine().page_size(), 12);
        assert_eq!(config.featured_count, 8);
        assert_eq!(config.related_count, 6);
        assert_eq!(config.debounce(), Duration::from_millis(300));
    }

    #[test]
    fn test_zero_page_size_still_pages() {
        let config = ViewConfig {
            page_size: 0,
            ..Default::default()
        };
        assert_eq!(config.engine().page_size(), 1);
    }
}
