//! Application layer - orchestration of fetch, parse, extract, and export
//!
//! Composes the infrastructure pieces into single-page and multi-page runs
//! and owns the log stream around the (log-free) extraction core.

pub mod scraper_service;

pub use scraper_service::{ScrapeError, ScraperService};
