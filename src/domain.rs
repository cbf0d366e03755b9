//! Domain module - Core entities for scraped product data
//!
//! Modern Rust module organization (Rust 2018+ style):
//! - Each module is its own file in the domain/ directory
//! - Public exports are defined here for convenience

pub mod product;

// Re-export commonly used items for convenience
pub use product::{FIELD_PLACEHOLDER, ProductBatch, ProductRecord};
