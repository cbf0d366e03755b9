//! Infrastructure layer for HTTP fetching, HTML parsing, and CSV output
//!
//! External collaborators with narrow interfaces: the page fetcher, the
//! selector-driven extractor, the CSV exporter, plus logging and
//! configuration plumbing.

pub mod config;
pub mod csv_export;
pub mod http_client;
pub mod logging;
pub mod parsing;

// Re-export commonly used items
pub use config::{LoggingConfig, ScraperConfig, books_toscrape, load_selectors};
pub use csv_export::{ExportError, default_output_path, export_batch};
pub use http_client::{FetchError, HttpClient, HttpClientConfig};
pub use logging::{get_log_directory, init_logging, init_logging_with_config};
pub use parsing::{
    ExtractError, ExtractResult, ProductExtractor, RatingStrategy, SelectorConfig, StarRating,
    parse_document,
};
