//! Default seed script - inserts the sample book catalog
//!
//! Run with:
//! ```
//! cargo run -p test-data --bin seed
//! ```

use bookstore::init_logging;
use test_data::prelude::*;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    let config = StoreConfig::from_env();
    let store = BookStore::connect(&config).await.inspect_err(|e| {
        tracing::error!("Could not connect to MongoDB: {e}");
    })?;

    let books = BookGenerator::new().catalog();
    let result = Seeder::new(&store).seed_books(&books).await;

    match &result {
        Ok(inserted) => {
            tracing::info!("Seed completed!");
            tracing::info!("  Books: {inserted}");
        }
        Err(e) => tracing::error!("Seeding failed: {e}"),
    }

    store.shutdown().await;
    result?;
    Ok(())
}
