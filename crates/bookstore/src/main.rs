//! Runs the bookstore query script.
//!
//! Run with:
//! ```
//! MONGODB_URI=mongodb://localhost:27017 cargo run -p bookstore --bin queries
//! ```

use bookstore::runner::QueryRunner;
use bookstore::{BookStore, StoreConfig, init_logging};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    let config = StoreConfig::from_env();
    let store = BookStore::connect(&config).await.inspect_err(|e| {
        tracing::error!("Could not connect to MongoDB: {e}");
    })?;

    let result = match QueryRunner::new(&store) {
        Ok(runner) => runner.run_all().await,
        Err(e) => Err(e),
    };
    if let Err(e) = &result {
        tracing::error!("Query script aborted: {e}");
    }

    store.shutdown().await;
    result?;
    Ok(())
}
