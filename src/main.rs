//! Predefined scrape of books.toscrape.com, the reference site that
//! explicitly allows scraping. Extracts name/price/rating from the front
//! page listing and writes them to `books.csv`.

use std::path::Path;

use anyhow::Result;
use shopscrape::{ScraperConfig, ScraperService, books_toscrape, init_logging_with_config};

#[tokio::main]
async fn main() -> Result<()> {
    let config = ScraperConfig::default();
    init_logging_with_config(config.logging.clone())?;

    let service = ScraperService::new(config)?;
    let selectors = books_toscrape::selectors();

    let batch = service
        .scrape_page(books_toscrape::BASE_URL, &selectors)
        .await?;

    println!("Extracted {} products", batch.len());
    for (i, product) in batch.iter().take(3).enumerate() {
        println!("\n{}. {}", i + 1, product.name);
        println!("   Price: {}", product.price);
        println!("   Rating: {}", product.rating);
    }

    let output = Path::new("books.csv");
    let path = shopscrape::export_batch(&batch, output)?;
    println!("\nScraping completed! Data saved to: {}", path.display());

    Ok(())
}
