//! Canned queries, updates, aggregation pipelines and index diagnostics for the
//! PLP bookstore collection.
//!
//! The `queries` binary connects once, runs [`runner::QueryRunner::run_all`] and
//! always closes the connection afterwards. All filtering, grouping and index
//! selection is executed by the MongoDB server.

pub mod config;
pub mod database;
pub mod errors;
pub mod models;
pub mod pagination;
pub mod pipelines;
pub mod query_builder;
pub mod runner;

pub use config::StoreConfig;
pub use database::BookStore;
pub use errors::StoreError;
pub use models::Book;

use tracing_subscriber::EnvFilter;

/// Installs the fmt subscriber, honouring `RUST_LOG` and defaulting to `info`.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}
