//! Builders for MongoDB filter, sort and projection documents.
//!
//! Conditions on distinct fields are ANDed implicitly by the server.

use mongodb::bson::{Bson, Document};

/// Builder for constructing filter documents.
///
/// # Example
/// ```ignore
/// let filter = FilterBuilder::new()
///     .eq("in_stock", true)
///     .gt("published_year", 2010)
///     .build();
/// ```
#[derive(Debug, Clone, Default)]
pub struct FilterBuilder {
    conditions: Document,
}

impl FilterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an exact-match condition, replacing any earlier condition on `field`.
    pub fn eq(mut self, field: &str, value: impl Into<Bson>) -> Self {
        self.conditions.insert(field, value.into());
        self
    }

    /// Adds a strict lower bound on `field`, replacing any earlier condition on it.
    pub fn gt(mut self, field: &str, value: impl Into<Bson>) -> Self {
        let mut condition = Document::new();
        condition.insert("$gt", value.into());
        self.conditions.insert(field, condition);
        self
    }

    pub fn build(self) -> Document {
        self.conditions
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    /// Returns the numeric direction used in sort and index key documents.
    pub fn as_i32(&self) -> i32 {
        match self {
            SortOrder::Ascending => 1,
            SortOrder::Descending => -1,
        }
    }
}

/// Builds an ordered sort (or index key) document from `(field, order)` pairs.
pub fn sort_keys(keys: &[(&str, SortOrder)]) -> Document {
    keys.iter()
        .map(|(field, order)| (field.to_string(), Bson::Int32(order.as_i32())))
        .collect()
}

/// Builds an inclusion projection over `fields` that also drops `_id`.
pub fn projection(fields: &[&str]) -> Document {
    let mut projection: Document = fields
        .iter()
        .map(|field| (field.to_string(), Bson::Int32(1)))
        .collect();
    projection.insert("_id", 0);
    projection
}
