//! Multi-page scrape of the books.toscrape.com catalogue.
//!
//! Walks the first three catalogue pages in sequence with the configured
//! delay between requests and writes the combined batch to `all_books.csv`.

use std::path::Path;

use anyhow::Result;
use shopscrape::{ScraperConfig, ScraperService, books_toscrape, init_logging_with_config};

const PAGES: u32 = 3;

#[tokio::main]
async fn main() -> Result<()> {
    let config = ScraperConfig::default();
    init_logging_with_config(config.logging.clone())?;

    let service = ScraperService::new(config)?;
    let selectors = books_toscrape::selectors();

    let urls: Vec<String> = (1..=PAGES).map(books_toscrape::catalogue_page_url).collect();
    println!(
        "Scraping {} pages, {} ms between requests...",
        PAGES,
        service.config().request_delay_ms
    );
    let batch = service.scrape_pages(&urls, &selectors).await?;

    println!("Collected {} products from {} pages", batch.len(), PAGES);

    let path = shopscrape::export_batch(&batch, Path::new("all_books.csv"))?;
    println!("Data saved to: {}", path.display());

    Ok(())
}
