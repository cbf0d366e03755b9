//! HTML parsing infrastructure
//!
//! Selector-driven extraction of product records from listing pages, with the
//! selector set supplied per run. Document parsing itself rides on
//! `scraper`'s permissive html5ever tree and effectively always succeeds;
//! only selector *syntax* errors are fatal, and those surface at
//! configuration time.

pub mod config;
pub mod error;
pub mod extractor;

// Re-export public types
pub use config::{RatingStrategy, SelectorConfig};
pub use error::{ExtractError, ExtractResult};
pub use extractor::{ProductExtractor, StarRating};

use scraper::Html;

/// Parse raw markup into a queryable document tree. Best-effort: malformed
/// input still produces a tree.
pub fn parse_document(raw_markup: &str) -> Html {
    Html::parse_document(raw_markup)
}
