use futures::TryStreamExt;
use mongodb::{
    Client, Collection, Database, IndexModel,
    bson::{self, Document, doc},
};
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::config::StoreConfig;
use crate::errors::StoreError;
use crate::models::{AuthorBookCount, Book, BookSummary, GenreAveragePrice, YearBucket};
use crate::pagination::Page;
use crate::pipelines::{self, YearBuckets};
use crate::query_builder::{FilterBuilder, SortOrder, projection, sort_keys};

/// Verbosity passed to the `explain` command.
pub const EXPLAIN_VERBOSITY: &str = "executionStats";

/// Handle on the book collection. Owns the only client of a run; call
/// [`BookStore::shutdown`] once finished.
#[derive(Clone)]
pub struct BookStore {
    client: Client,
    database: Database,
    books: Collection<Book>,
}

impl BookStore {
    /// Connects and pings the server so unreachable or unauthenticated
    /// deployments fail here rather than on the first query.
    pub async fn connect(config: &StoreConfig) -> Result<Self, StoreError> {
        let client = Client::with_uri_str(&config.uri)
            .await
            .map_err(StoreError::Connection)?;
        let database = client.database(&config.database);

        database
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(StoreError::Connection)?;

        info!(
            "Connected to MongoDB ({}.{})",
            config.database, config.collection
        );

        let books = database.collection::<Book>(&config.collection);
        Ok(Self {
            client,
            database,
            books,
        })
    }

    pub fn collection_name(&self) -> &str {
        self.books.name()
    }

    /// Closes every pooled connection.
    pub async fn shutdown(self) {
        let Self { client, .. } = self;
        client.shutdown().await;
        info!("Connection closed");
    }

    /// Inserts all books in one request and returns the count the server reports.
    pub async fn insert_books(&self, books: &[Book]) -> Result<usize, StoreError> {
        if books.is_empty() {
            return Ok(0);
        }
        let result = self
            .books
            .insert_many(books)
            .await
            .map_err(StoreError::operation("insert_many"))?;
        Ok(result.inserted_ids.len())
    }

    pub async fn count_books(&self) -> Result<u64, StoreError> {
        self.books
            .count_documents(doc! {})
            .await
            .map_err(StoreError::operation("count_documents"))
    }

    /// Drops the collection along with its indexes.
    pub async fn drop_collection(&self) -> Result<(), StoreError> {
        self.books
            .drop()
            .await
            .map_err(StoreError::operation("drop"))
    }

    pub async fn find_books(&self, filter: Document) -> Result<Vec<Book>, StoreError> {
        debug!(?filter, "find");
        let cursor = self
            .books
            .find(filter)
            .await
            .map_err(StoreError::operation("find"))?;
        cursor
            .try_collect()
            .await
            .map_err(StoreError::operation("find"))
    }

    pub async fn find_by_genre(&self, genre: &str) -> Result<Vec<Book>, StoreError> {
        self.find_books(FilterBuilder::new().eq("genre", genre).build())
            .await
    }

    pub async fn find_by_author(&self, author: &str) -> Result<Vec<Book>, StoreError> {
        self.find_books(FilterBuilder::new().eq("author", author).build())
            .await
    }

    /// Books with `published_year` strictly greater than `year`.
    pub async fn find_published_after(&self, year: i32) -> Result<Vec<Book>, StoreError> {
        self.find_books(FilterBuilder::new().gt("published_year", year).build())
            .await
    }

    /// In-stock books published after `year`, projected to title, author and price.
    pub async fn find_in_stock_after(&self, year: i32) -> Result<Vec<BookSummary>, StoreError> {
        let filter = FilterBuilder::new()
            .eq("in_stock", true)
            .gt("published_year", year)
            .build();

        let cursor = self
            .books
            .clone_with_type::<BookSummary>()
            .find(filter)
            .projection(projection(&["title", "author", "price"]))
            .await
            .map_err(StoreError::operation("find"))?;
        cursor
            .try_collect()
            .await
            .map_err(StoreError::operation("find"))
    }

    /// Full scan ordered by price, returning at most `limit` books.
    pub async fn books_by_price(
        &self,
        order: SortOrder,
        limit: i64,
    ) -> Result<Vec<Book>, StoreError> {
        let cursor = self
            .books
            .find(doc! {})
            .sort(sort_keys(&[("price", order)]))
            .limit(limit)
            .await
            .map_err(StoreError::operation("find"))?;
        cursor
            .try_collect()
            .await
            .map_err(StoreError::operation("find"))
    }

    /// One page of the collection ordered by ascending price.
    pub async fn price_page(&self, page: Page) -> Result<Vec<Book>, StoreError> {
        debug!(page = page.number(), skip = page.skip(), "price page");
        let cursor = self
            .books
            .find(doc! {})
            .sort(sort_keys(&[("price", SortOrder::Ascending)]))
            .skip(page.skip())
            .limit(page.limit())
            .await
            .map_err(StoreError::operation("find"))?;
        cursor
            .try_collect()
            .await
            .map_err(StoreError::operation("find"))
    }

    /// Sets the price of the first book titled `title`; returns the modified count.
    pub async fn update_price(&self, title: &str, price: f64) -> Result<u64, StoreError> {
        let result = self
            .books
            .update_one(
                doc! { "title": title },
                doc! { "$set": { "price": price } },
            )
            .await
            .map_err(StoreError::operation("update_one"))?;
        Ok(result.modified_count)
    }

    /// Deletes the first book titled `title`; returns the deleted count.
    pub async fn delete_by_title(&self, title: &str) -> Result<u64, StoreError> {
        let result = self
            .books
            .delete_one(doc! { "title": title })
            .await
            .map_err(StoreError::operation("delete_one"))?;
        Ok(result.deleted_count)
    }

    /// Runs `pipeline` and decodes each output document as `T`.
    pub async fn aggregate<T: DeserializeOwned>(
        &self,
        pipeline: Vec<Document>,
    ) -> Result<Vec<T>, StoreError> {
        debug!(stages = pipeline.len(), "aggregate");
        let cursor = self
            .books
            .aggregate(pipeline)
            .await
            .map_err(StoreError::operation("aggregate"))?;
        let documents: Vec<Document> = cursor
            .try_collect()
            .await
            .map_err(StoreError::operation("aggregate"))?;

        documents
            .into_iter()
            .map(|document| bson::from_document(document).map_err(StoreError::from))
            .collect()
    }

    pub async fn average_price_by_genre(&self) -> Result<Vec<GenreAveragePrice>, StoreError> {
        self.aggregate(pipelines::average_price_by_genre()).await
    }

    /// The author with the most books, ties going to the alphabetically first name.
    pub async fn top_author(&self) -> Result<Option<AuthorBookCount>, StoreError> {
        let mut top = self.aggregate(pipelines::top_authors(1)).await?;
        Ok(top.pop())
    }

    pub async fn count_by_year_bucket(
        &self,
        buckets: &YearBuckets,
    ) -> Result<Vec<YearBucket>, StoreError> {
        self.aggregate(buckets.pipeline()).await
    }

    /// Creates an index over `keys` and returns its server-assigned name.
    pub async fn create_index(&self, keys: &[(&str, SortOrder)]) -> Result<String, StoreError> {
        let model = IndexModel::builder().keys(sort_keys(keys)).build();
        let result = self
            .books
            .create_index(model)
            .await
            .map_err(StoreError::operation("create_index"))?;
        info!("Created index {}", result.index_name);
        Ok(result.index_name)
    }

    /// Explains `find(filter)` with execution statistics, optionally forcing an
    /// index via `hint`.
    pub async fn explain_find(
        &self,
        filter: Document,
        hint: Option<Document>,
    ) -> Result<Document, StoreError> {
        let mut find = doc! {
            "find": self.books.name(),
            "filter": filter,
        };
        if let Some(hint) = hint {
            find.insert("hint", hint);
        }

        self.database
            .run_command(doc! { "explain": find, "verbosity": EXPLAIN_VERBOSITY })
            .await
            .map_err(StoreError::operation("explain"))
    }
}
