use serde::{Deserialize, Serialize};

/// Default value for a field whose selector matched nothing.
pub const FIELD_PLACEHOLDER: &str = "N/A";

/// Product information extracted from one listing container.
///
/// Fields are plain strings straight off the page (post cleanup); a field
/// whose selector matched nothing holds [`FIELD_PLACEHOLDER`]. Records are
/// created once per container and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub name: String,
    pub price: String,
    pub rating: String,
}

impl ProductRecord {
    /// Record with every field set to the placeholder.
    pub fn placeholder() -> Self {
        Self {
            name: FIELD_PLACEHOLDER.to_string(),
            price: FIELD_PLACEHOLDER.to_string(),
            rating: FIELD_PLACEHOLDER.to_string(),
        }
    }

    /// True if at least one field holds real extracted content.
    pub fn has_any_field(&self) -> bool {
        [&self.name, &self.price, &self.rating]
            .iter()
            .any(|f| f.as_str() != FIELD_PLACEHOLDER)
    }
}

/// Ordered set of records produced by one extraction pass over one page.
///
/// Order matches document order of the container elements. Multi-page runs
/// accumulate by plain concatenation; there is no deduplication and no
/// identity beyond position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductBatch {
    records: Vec<ProductRecord>,
}

impl ProductBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: ProductRecord) {
        self.records.push(record);
    }

    /// Append another batch's records, preserving both orders.
    pub fn append(&mut self, other: ProductBatch) {
        self.records.extend(other.records);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[ProductRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ProductRecord> {
        self.records.iter()
    }
}

impl From<Vec<ProductRecord>> for ProductBatch {
    fn from(records: Vec<ProductRecord>) -> Self {
        Self { records }
    }
}

impl IntoIterator for ProductBatch {
    type Item = ProductRecord;
    type IntoIter = std::vec::IntoIter<ProductRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a ProductBatch {
    type Item = &'a ProductRecord;
    type IntoIter = std::slice::Iter<'a, ProductRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
