//! Test data generation for the PLP bookstore.
//!
//! This crate provides the sample book catalog (ten literal classics plus
//! numbered synthetic books) and a seeder that bulk-inserts it.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use test_data::prelude::*;
//!
//! let store = BookStore::connect(&StoreConfig::from_env()).await?;
//! let books = BookGenerator::new().catalog();
//! let inserted = Seeder::new(&store).seed_books(&books).await?;
//! store.shutdown().await;
//! ```

pub mod config;
pub mod db;
pub mod generators;

// Re-export core types from bookstore crate
pub use bookstore::{Book, BookStore, StoreConfig};

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::config::{SYNTHETIC_GENRES, SeedConfig, SyntheticConfig};
    pub use crate::db::{SeedError, Seeder};
    pub use crate::generators::BookGenerator;
    pub use crate::{Book, BookStore, StoreConfig};
}
