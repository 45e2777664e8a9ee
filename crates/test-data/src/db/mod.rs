//! Database integration for seeding test data.
//!
//! The [`Seeder`] inserts generated books into the collection in a single
//! bulk request.

mod seeder;

pub use seeder::{SeedError, Seeder};
