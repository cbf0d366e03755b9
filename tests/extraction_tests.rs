//! End-to-end extraction tests over a reference listing page.
//!
//! The fixture mirrors the books.toscrape.com front page structure: 20
//! product cards with the price in `p.price_color` and the rating encoded as
//! a star class (`star-rating Three`).

use shopscrape::{
    FIELD_PLACEHOLDER, ProductBatch, ProductExtractor, ProductRecord, SelectorConfig,
    books_toscrape, export_batch, parse_document,
};

const LISTING: &str = include_str!("fixtures/listing.html");

fn reference_batch() -> ProductBatch {
    let extractor = ProductExtractor::new(&books_toscrape::selectors()).unwrap();
    extractor.extract(&parse_document(LISTING))
}

#[test]
fn reference_listing_yields_twenty_records() {
    let batch = reference_batch();
    assert_eq!(batch.len(), 20);
}

#[test]
fn every_record_has_a_non_empty_name() {
    for record in &reference_batch() {
        assert!(!record.name.is_empty());
        assert_ne!(record.name, FIELD_PLACEHOLDER);
    }
}

#[test]
fn ratings_map_through_the_star_table() {
    let batch = reference_batch();
    for record in &batch {
        assert!(
            ["1", "2", "3", "4", "5"].contains(&record.rating.as_str()),
            "unexpected rating {:?}",
            record.rating
        );
    }
    // Spot-check known cards: first is Three stars, fifth is Five.
    assert_eq!(batch.records()[0].rating, "3");
    assert_eq!(batch.records()[4].rating, "5");
}

#[test]
fn records_follow_document_order() {
    let batch = reference_batch();
    assert_eq!(batch.records()[0].name, "A Light in the Attic");
    assert_eq!(batch.records()[1].name, "Tipping the Velvet");
    assert_eq!(batch.records()[19].name, "It's Only the Himalayas");
}

#[test]
fn prices_keep_currency_symbol_and_digits() {
    let batch = reference_batch();
    assert_eq!(batch.records()[0].price, "£51.77");
    for record in &batch {
        assert!(record.price.starts_with('£'), "price {:?}", record.price);
    }
}

#[test]
fn unmatched_container_selector_yields_empty_batch() {
    let selectors = SelectorConfig::container_only("article.no_such_thing");
    let extractor = ProductExtractor::new(&selectors).unwrap();
    let batch = extractor.extract(&parse_document(LISTING));
    assert!(batch.is_empty());
}

#[test]
fn unmatched_field_selector_fills_placeholders_without_dropping_records() {
    let mut selectors = books_toscrape::selectors();
    selectors.price = Some("p.no_such_price".to_string());

    let extractor = ProductExtractor::new(&selectors).unwrap();
    let batch = extractor.extract(&parse_document(LISTING));

    assert_eq!(batch.len(), 20);
    for record in &batch {
        assert_eq!(record.price, FIELD_PLACEHOLDER);
        assert_ne!(record.name, FIELD_PLACEHOLDER);
    }
}

#[test]
fn invalid_container_selector_errors_instead_of_empty_batch() {
    let selectors = SelectorConfig::container_only("article[[[");
    assert!(ProductExtractor::new(&selectors).is_err());
}

#[test]
fn csv_round_trip_preserves_the_batch() {
    let batch = reference_batch();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("books.csv");
    export_batch(&batch, &path).unwrap();

    let mut reader = csv::Reader::from_path(&path).unwrap();
    assert_eq!(
        reader.headers().unwrap(),
        &csv::StringRecord::from(vec!["name", "price", "rating"])
    );

    let read_back: Vec<ProductRecord> = reader.deserialize().collect::<Result<_, _>>().unwrap();
    assert_eq!(read_back.len(), batch.len());
    assert_eq!(read_back, batch.records());
}
