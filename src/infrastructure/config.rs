//! Configuration infrastructure
//!
//! Scraper-wide settings with serde-backed defaults and a JSON file loader,
//! plus constants and the reference selector preset for the documented
//! example site (books.toscrape.com).

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tokio::fs;
use tracing::info;

use super::http_client::HttpClientConfig;
use super::parsing::{RatingStrategy, SelectorConfig};

/// Complete scraper configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScraperConfig {
    /// HTTP client settings (user agent, timeout).
    #[serde(default)]
    pub http: HttpClientConfig,

    /// Delay between page requests in a multi-page run, in milliseconds.
    /// Zero disables the delay.
    #[serde(default = "default_request_delay_ms")]
    pub request_delay_ms: u64,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

const fn default_request_delay_ms() -> u64 {
    1000
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            http: HttpClientConfig::default(),
            request_delay_ms: default_request_delay_ms(),
            logging: LoggingConfig::default(),
        }
    }
}

impl ScraperConfig {
    /// Load configuration from a JSON file.
    pub async fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }
}

/// Load a selector set from a JSON file with keys `container` (required)
/// and optionally `name`, `price`, `rating`, `rating_strategy`,
/// `clean_price`.
pub async fn load_selectors(path: &Path) -> Result<SelectorConfig> {
    let content = fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read selector file {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse selector file {}", path.display()))
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: "error", "warn", "info", "debug", "trace"
    pub level: String,

    /// Enable console output
    pub console_output: bool,

    /// Enable file output
    pub file_output: bool,

    /// Enable JSON formatted logs for the file output
    pub json_format: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            console_output: true,
            file_output: true,
            json_format: false,
        }
    }
}

/// Constants for books.toscrape.com, the reference site that explicitly
/// allows scraping. Its listing structure is the fixture for tests and the
/// target of the example binaries.
pub mod books_toscrape {
    use super::{RatingStrategy, SelectorConfig};

    /// Base URL for the site
    pub const BASE_URL: &str = "https://books.toscrape.com/";

    /// Catalogue page URL for a 1-based page number.
    pub fn catalogue_page_url(page: u32) -> String {
        let base = url::Url::parse(BASE_URL).expect("static base URL is valid");
        base.join(&format!("catalogue/page-{page}.html"))
            .expect("static catalogue path joins cleanly")
            .to_string()
    }

    /// Reference selector set for the site's listing pages. Ratings are
    /// encoded as a class suffix (`star-rating Three`), hence the
    /// star-class strategy.
    pub fn selectors() -> SelectorConfig {
        SelectorConfig {
            container: "article.product_pod".to_string(),
            name: Some("h3 a".to_string()),
            price: Some("p.price_color".to_string()),
            rating: Some("p.star-rating".to_string()),
            rating_strategy: RatingStrategy::StarClass,
            clean_price: true,
        }
    }
}
