//! Aggregation pipelines run against the book collection.
//!
//! Grouping, averaging and bucketing all happen on the server; these functions
//! only build the stage documents.

use mongodb::bson::{Bson, Document, doc};

use crate::models::BucketKey;

/// Label of the `$bucket` overflow group.
pub const OVERFLOW_BUCKET: &str = "Other";

/// Mean price per genre, projected to `{ genre, avgPrice }`.
pub fn average_price_by_genre() -> Vec<Document> {
    vec![
        doc! { "$group": { "_id": "$genre", "avgPrice": { "$avg": "$price" } } },
        doc! { "$project": { "genre": "$_id", "avgPrice": 1, "_id": 0 } },
        doc! { "$sort": { "genre": 1 } },
    ]
}

/// Authors ranked by number of books, projected to `{ author, bookCount }`.
///
/// Ties on count are broken by author name ascending.
pub fn top_authors(limit: i64) -> Vec<Document> {
    vec![
        doc! { "$group": { "_id": "$author", "count": { "$sum": 1 } } },
        doc! { "$sort": { "count": -1, "_id": 1 } },
        doc! { "$limit": limit },
        doc! { "$project": { "author": "$_id", "bookCount": "$count", "_id": 0 } },
    ]
}

/// Half-open publication year ranges `[b[i], b[i+1])` with an overflow bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearBuckets {
    boundaries: Vec<i32>,
}

impl YearBuckets {
    /// The bucket the server assigns `year` to.
    pub fn classify(&self, year: i32) -> BucketKey {
        self.boundaries
            .windows(2)
            .find(|w| w[0] <= year && year < w[1])
            .map(|w| BucketKey::LowerBound(w[0]))
            .unwrap_or_else(|| BucketKey::Label(OVERFLOW_BUCKET.to_string()))
    }

    /// `$bucket` on `published_year` counting records per range.
    pub fn pipeline(&self) -> Vec<Document> {
        let boundaries: Vec<Bson> = self.boundaries.iter().map(|&b| Bson::Int32(b)).collect();
        vec![doc! {
            "$bucket": {
                "groupBy": "$published_year",
                "boundaries": boundaries,
                "default": OVERFLOW_BUCKET,
                "output": { "count": { "$sum": 1 } },
            }
        }]
    }
}

impl Default for YearBuckets {
    fn default() -> Self {
        Self {
            boundaries: vec![1900, 1950, 2000, 2050],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundary_year_opens_next_bucket() {
        let buckets = YearBuckets::default();
        assert_eq!(buckets.classify(1949), BucketKey::LowerBound(1900));
        assert_eq!(buckets.classify(1950), BucketKey::LowerBound(1950));
        assert_eq!(buckets.classify(1900), BucketKey::LowerBound(1900));
        assert_eq!(buckets.classify(2049), BucketKey::LowerBound(2000));
    }

    #[test]
    fn test_out_of_range_years_overflow() {
        let buckets = YearBuckets::default();
        let other = BucketKey::Label(OVERFLOW_BUCKET.to_string());
        assert_eq!(buckets.classify(1813), other);
        assert_eq!(buckets.classify(1899), other);
        assert_eq!(buckets.classify(2050), other);
    }

    #[test]
    fn test_bucket_stage() {
        let pipeline = YearBuckets::default().pipeline();
        assert_eq!(pipeline.len(), 1);

        let stage = pipeline[0].get_document("$bucket").unwrap();
        assert_eq!(stage.get_str("groupBy").unwrap(), "$published_year");
        assert_eq!(stage.get_str("default").unwrap(), "Other");
        assert_eq!(
            stage.get_array("boundaries").unwrap(),
            &vec![
                Bson::Int32(1900),
                Bson::Int32(1950),
                Bson::Int32(2000),
                Bson::Int32(2050)
            ]
        );
    }

    #[test]
    fn test_top_authors_breaks_ties_by_name() {
        let pipeline = top_authors(1);
        assert_eq!(pipeline[1], doc! { "$sort": { "count": -1, "_id": 1 } });
        assert_eq!(pipeline[2], doc! { "$limit": 1_i64 });
    }

    #[test]
    fn test_average_price_groups_by_genre() {
        let pipeline = average_price_by_genre();
        let group = pipeline[0].get_document("$group").unwrap();
        assert_eq!(group.get_str("_id").unwrap(), "$genre");
        assert_eq!(
            group.get_document("avgPrice").unwrap(),
            &doc! { "$avg": "$price" }
        );
    }
}
