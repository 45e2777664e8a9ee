//! Database seeding utilities.

use bookstore::{Book, BookStore, StoreError};
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Database error: {0}")]
    Store(#[from] StoreError),
}

/// Database seeder for inserting generated books.
pub struct Seeder<'a> {
    store: &'a BookStore,
}

impl<'a> Seeder<'a> {
    /// Creates a new seeder writing through the given store.
    pub fn new(store: &'a BookStore) -> Self {
        Self { store }
    }

    /// Seeds books with one `insert_many` call and returns the inserted count.
    ///
    /// No retry or partial-success handling: any driver error is returned as is.
    pub async fn seed_books(&self, books: &[Book]) -> Result<usize, SeedError> {
        info!(
            "Seeding {} books into {}...",
            books.len(),
            self.store.collection_name()
        );

        let inserted = self.store.insert_books(books).await?;
        if inserted != books.len() {
            warn!("Server reported {inserted} of {} books inserted", books.len());
        }

        info!("Inserted {inserted} books.");
        Ok(inserted)
    }
}
