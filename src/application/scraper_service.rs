//! Scraping workflow: fetch -> parse -> extract -> export
//!
//! Everything here is strictly sequential. Multi-page runs iterate over page
//! URLs one at a time with an optional delay between requests; a failed page
//! is logged and skipped so one bad page never poisons the whole batch.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Result;
use thiserror::Error;
use tracing::{debug, error, info, warn};

use crate::domain::ProductBatch;
use crate::infrastructure::{
    ExtractError, FetchError, HttpClient, ProductExtractor, ScraperConfig, SelectorConfig,
    csv_export::{self, ExportError},
    parsing,
};

/// Failures of a scraping run. Data absence (no containers, unmatched
/// fields) is not represented here - that is a normal outcome.
#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Extract(#[from] ExtractError),

    #[error(transparent)]
    Export(#[from] ExportError),
}

/// Orchestrates scraping runs against one or more listing pages.
pub struct ScraperService {
    client: HttpClient,
    config: ScraperConfig,
}

impl ScraperService {
    /// Create a service from configuration.
    pub fn new(config: ScraperConfig) -> Result<Self> {
        let client = HttpClient::new(config.http.clone())?;
        Ok(Self { client, config })
    }

    /// Fetch one page and extract its products.
    ///
    /// Fetch failures and invalid selector syntax propagate unchanged. An
    /// empty batch is a valid result, logged as a warning.
    pub async fn scrape_page(
        &self,
        url: &str,
        selectors: &SelectorConfig,
    ) -> Result<ProductBatch, ScrapeError> {
        let extractor = ProductExtractor::new(selectors)?;
        self.scrape_page_with(url, &extractor).await
    }

    async fn scrape_page_with(
        &self,
        url: &str,
        extractor: &ProductExtractor,
    ) -> Result<ProductBatch, ScrapeError> {
        info!("Fetching URL: {}", url);
        let markup = self.client.fetch_text(url).await?;
        info!("Page fetched successfully ({} bytes)", markup.len());

        let document = parsing::parse_document(&markup);
        let batch = extractor.extract(&document);

        if batch.is_empty() {
            warn!("No products found on {}", url);
        } else {
            info!("Extracted {} product(s) from {}", batch.len(), url);
            for (index, record) in batch.iter().enumerate() {
                debug!("Product {}: {}", index + 1, record.name);
            }
        }

        Ok(batch)
    }

    /// Scrape several pages in sequence, accumulating one combined batch.
    ///
    /// Pages are fetched strictly one after another with the configured
    /// delay in between. A page that fails to fetch is logged at ERROR and
    /// skipped; invalid selector syntax aborts before the first request
    /// since no page could succeed.
    pub async fn scrape_pages<I>(
        &self,
        urls: I,
        selectors: &SelectorConfig,
    ) -> Result<ProductBatch, ScrapeError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let extractor = ProductExtractor::new(selectors)?;
        let delay = Duration::from_millis(self.config.request_delay_ms);

        let mut combined = ProductBatch::new();
        let mut first = true;

        for url in urls {
            if !first && !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            first = false;

            let url = url.as_ref();
            match self.scrape_page_with(url, &extractor).await {
                Ok(batch) => combined.append(batch),
                Err(e) => error!("Skipping page {}: {}", url, e),
            }
        }

        info!("Collected {} product(s) in total", combined.len());
        Ok(combined)
    }

    /// Complete workflow for one page: fetch, extract, and write CSV.
    /// Returns the output path.
    pub async fn run(
        &self,
        url: &str,
        selectors: &SelectorConfig,
        output_path: &Path,
    ) -> Result<PathBuf, ScrapeError> {
        let batch = self.scrape_page(url, selectors).await?;
        let path = csv_export::export_batch(&batch, output_path)?;
        info!(
            "Data exported successfully to {} ({} record(s))",
            path.display(),
            batch.len()
        );
        Ok(path)
    }

    /// Get the configuration.
    pub fn config(&self) -> &ScraperConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_builds_from_default_config() {
        let service = ScraperService::new(ScraperConfig::default());
        assert!(service.is_ok());
    }

    #[tokio::test]
    async fn invalid_selector_aborts_multi_page_run() {
        let service = ScraperService::new(ScraperConfig::default()).unwrap();
        let selectors = SelectorConfig::container_only("div[[[");

        let result = service
            .scrape_pages(["http://localhost:1/page-1"], &selectors)
            .await;
        assert!(matches!(result, Err(ScrapeError::Extract(_))));
    }

    #[tokio::test]
    async fn unreachable_page_is_skipped_not_fatal() {
        let service = ScraperService::new(ScraperConfig {
            request_delay_ms: 0,
            ..Default::default()
        })
        .unwrap();
        let selectors = SelectorConfig::container_only(".product");

        // Nothing listens on this port; both pages fail and are skipped.
        let batch = service
            .scrape_pages(
                ["http://127.0.0.1:1/a", "http://127.0.0.1:1/b"],
                &selectors,
            )
            .await
            .unwrap();
        assert!(batch.is_empty());
    }
}
