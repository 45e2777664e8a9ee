//! Book record generators for test data.
//!
//! - [`BookGenerator::classics`]: ten fixed, well-known titles
//! - [`BookGenerator::synthetic`]: numbered sample books with values derived from their index

pub mod book;

pub use book::{BookGenerator, CLASSICS_COUNT};
