//! Selector configuration for product extraction
//!
//! Maps field roles to CSS selector strings. The container selector is
//! required; every other field is optional and falls back to the placeholder
//! for the whole run when absent.

use serde::{Deserialize, Serialize};

/// How the rating field is read off the matched element.
///
/// Sites disagree here: some put the rating in text ("4.5 out of 5"), others
/// encode it as a CSS class (books.toscrape uses `star-rating Three`). The
/// strategy is per-run configuration rather than a hardcoded convention.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RatingStrategy {
    /// Trimmed text content of the matched element.
    #[default]
    Text,
    /// Last class token of the matched element, mapped through the
    /// One..Five star table when it is a known word.
    StarClass,
}

/// CSS selectors for one site's listing structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectorConfig {
    /// Selector for the element wrapping one product's data. Required.
    pub container: String,

    /// Selector for the product name, scoped to a container.
    #[serde(default)]
    pub name: Option<String>,

    /// Selector for the price element, scoped to a container.
    #[serde(default)]
    pub price: Option<String>,

    /// Selector for the rating element, scoped to a container.
    #[serde(default)]
    pub rating: Option<String>,

    /// Rating post-processing strategy.
    #[serde(default)]
    pub rating_strategy: RatingStrategy,

    /// Strip price text down to currency symbol and digits.
    #[serde(default = "default_clean_price")]
    pub clean_price: bool,
}

const fn default_clean_price() -> bool {
    true
}

impl SelectorConfig {
    /// Container-only configuration; all fields stay at the placeholder.
    pub fn container_only(container: impl Into<String>) -> Self {
        Self {
            container: container.into(),
            name: None,
            price: None,
            rating: None,
            rating_strategy: RatingStrategy::default(),
            clean_price: true,
        }
    }
}
