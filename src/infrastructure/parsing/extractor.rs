//! Selector-driven product extraction - the core of the scraper
//!
//! Given a parsed document and a [`SelectorConfig`], finds every container
//! element and pulls name/price/rating out of each one independently. A field
//! whose selector matches nothing gets the placeholder; the record is still
//! emitted. One malformed product block never fails the batch - uncontrolled
//! third-party markup is not guaranteed to match a site's typical structure
//! on every instance.
//!
//! The extractor performs no logging; callers own the log stream.

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use super::config::{RatingStrategy, SelectorConfig};
use super::error::{ExtractError, ExtractResult};
use crate::domain::{FIELD_PLACEHOLDER, ProductBatch, ProductRecord};

/// Leading currency symbol plus the numeric run, e.g. "£51.77" or "$1,299".
static PRICE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[£$€¥₩]?\s*\d[\d.,]*").unwrap());

/// Star rating encoded as a CSS class word, as on books.toscrape.com
/// (`<p class="star-rating Three">`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StarRating {
    One,
    Two,
    Three,
    Four,
    Five,
}

impl StarRating {
    /// Fixed word-to-rating lookup. Anything else is not a star word.
    pub fn from_word(word: &str) -> Option<Self> {
        match word {
            "One" => Some(Self::One),
            "Two" => Some(Self::Two),
            "Three" => Some(Self::Three),
            "Four" => Some(Self::Four),
            "Five" => Some(Self::Five),
            _ => None,
        }
    }

    /// Normalized numeric value as a string, "1" through "5".
    pub fn value(self) -> &'static str {
        match self {
            Self::One => "1",
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
        }
    }
}

/// Parser for extracting product records from listing pages.
///
/// All selectors are compiled at construction, so invalid selector syntax
/// surfaces as a configuration error before any page is touched, and
/// [`ProductExtractor::extract`] itself cannot fail.
pub struct ProductExtractor {
    container: Selector,
    name: Option<Selector>,
    price: Option<Selector>,
    rating: Option<Selector>,
    rating_strategy: RatingStrategy,
    clean_price: bool,
}

impl ProductExtractor {
    /// Compile the configured selectors.
    pub fn new(config: &SelectorConfig) -> ExtractResult<Self> {
        Ok(Self {
            container: compile_selector("container", &config.container)?,
            name: compile_optional("name", config.name.as_deref())?,
            price: compile_optional("price", config.price.as_deref())?,
            rating: compile_optional("rating", config.rating.as_deref())?,
            rating_strategy: config.rating_strategy,
            clean_price: config.clean_price,
        })
    }

    /// Extract one record per container element, in document order.
    ///
    /// Zero matching containers is a valid outcome and yields an empty
    /// batch. The batch length always equals the container count.
    pub fn extract(&self, document: &Html) -> ProductBatch {
        let mut batch = ProductBatch::new();
        for container in document.select(&self.container) {
            batch.push(self.extract_record(container));
        }
        batch
    }

    fn extract_record(&self, container: ElementRef<'_>) -> ProductRecord {
        let name = self
            .select_text(container, self.name.as_ref())
            .unwrap_or_else(|| FIELD_PLACEHOLDER.to_string());

        let price = self
            .select_text(container, self.price.as_ref())
            .map(|text| {
                if self.clean_price {
                    clean_price_text(&text)
                } else {
                    text
                }
            })
            .unwrap_or_else(|| FIELD_PLACEHOLDER.to_string());

        let rating = self
            .rating
            .as_ref()
            .and_then(|selector| first_match(container, selector))
            .and_then(|element| self.rating_value(element))
            .unwrap_or_else(|| FIELD_PLACEHOLDER.to_string());

        ProductRecord {
            name,
            price,
            rating,
        }
    }

    /// First non-empty trimmed text match within the container only.
    fn select_text(
        &self,
        container: ElementRef<'_>,
        selector: Option<&Selector>,
    ) -> Option<String> {
        first_match(container, selector?).and_then(element_text)
    }

    fn rating_value(&self, element: ElementRef<'_>) -> Option<String> {
        match self.rating_strategy {
            RatingStrategy::Text => element_text(element),
            RatingStrategy::StarClass => rating_from_classes(element),
        }
    }
}

/// Scoped lookup: first descendant of `container` matching `selector`.
fn first_match<'a>(container: ElementRef<'a>, selector: &Selector) -> Option<ElementRef<'a>> {
    container.select(selector).next()
}

fn element_text(element: ElementRef<'_>) -> Option<String> {
    let text = element.text().collect::<String>().trim().to_string();
    (!text.is_empty()).then_some(text)
}

/// Map a star word class to its numeric value. Unmapped class tokens pass
/// through raw; an element with no classes yields nothing.
fn rating_from_classes(element: ElementRef<'_>) -> Option<String> {
    let classes: Vec<&str> = element.value().classes().collect();

    if let Some(rating) = classes
        .iter()
        .find_map(|class| StarRating::from_word(class))
    {
        return Some(rating.value().to_string());
    }

    // Best effort: hand back the last class token so the caller still sees
    // what the site encoded, e.g. "star-rating Half" -> "Half".
    classes.last().map(|class| (*class).to_string())
}

/// Keep the currency symbol and the numeric run; drop surrounding noise like
/// "Sale!" or "incl. VAT". Text with no digits passes through untouched.
fn clean_price_text(text: &str) -> String {
    match PRICE_PATTERN.find(text) {
        Some(price) => price.as_str().split_whitespace().collect(),
        None => text.to_string(),
    }
}

fn compile_selector(field: &str, selector: &str) -> ExtractResult<Selector> {
    Selector::parse(selector)
        .map_err(|e| ExtractError::invalid_selector(field, selector, e))
}

fn compile_optional(field: &str, selector: Option<&str>) -> ExtractResult<Option<Selector>> {
    selector.map(|s| compile_selector(field, s)).transpose()
}
