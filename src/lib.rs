//! shopscrape - Selector-driven e-commerce product scraper
//!
//! Fetches listing pages, extracts product fields (name, price, rating)
//! using caller-supplied CSS selectors, and writes the results to CSV.
//! A field that matches nothing gets a placeholder; a page with no products
//! yields an empty batch; only network/IO failures and invalid selector
//! syntax are errors.

// Module declarations
pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-export the public surface for one-import usage
pub use application::{ScrapeError, ScraperService};
pub use domain::{FIELD_PLACEHOLDER, ProductBatch, ProductRecord};
pub use infrastructure::{
    ExtractError, FetchError, HttpClient, HttpClientConfig, LoggingConfig, ProductExtractor,
    RatingStrategy, ScraperConfig, SelectorConfig, books_toscrape, default_output_path,
    export_batch, init_logging, init_logging_with_config, load_selectors, parse_document,
};
