//! The fixed bookstore query script.
//!
//! Steps run strictly in order and each prints its result to stdout. The first
//! failing step aborts the rest.

use mongodb::bson::{Bson, Document, doc};
use serde::Serialize;
use tracing::debug;

use crate::database::BookStore;
use crate::errors::StoreError;
use crate::pagination::{DEFAULT_PER_PAGE, Page};
use crate::pipelines::YearBuckets;
use crate::query_builder::SortOrder;

pub const FANTASY_GENRE: &str = "Fantasy";
pub const RECENT_YEAR: i32 = 2000;
pub const FEATURED_AUTHOR: &str = "George Orwell";
pub const REPRICED_TITLE: &str = "1984";
pub const NEW_PRICE: f64 = 12.99;
pub const ABSENT_TITLE: &str = "Some Old Title";
pub const IN_STOCK_SINCE_YEAR: i32 = 2010;
pub const TOP_N: i64 = 5;
pub const PAGE_NUMBER: u64 = 2;
pub const PER_PAGE: u64 = DEFAULT_PER_PAGE;

/// Runs the bookstore script against a connected [`BookStore`].
pub struct QueryRunner<'a> {
    store: &'a BookStore,
    page: Page,
    buckets: YearBuckets,
}

impl<'a> QueryRunner<'a> {
    pub fn new(store: &'a BookStore) -> Result<Self, StoreError> {
        Ok(Self {
            store,
            page: Page::new(PAGE_NUMBER, PER_PAGE)?,
            buckets: YearBuckets::default(),
        })
    }

    pub fn with_page(mut self, page: Page) -> Self {
        self.page = page;
        self
    }

    pub async fn run_all(&self) -> Result<(), StoreError> {
        self.basic_crud().await?;
        self.advanced_queries().await?;
        self.aggregations().await?;
        self.indexing().await?;
        println!("\nAll tasks complete.");
        Ok(())
    }

    pub async fn basic_crud(&self) -> Result<(), StoreError> {
        section("Basic CRUD Operations");

        heading("2.1", &format!("Find all '{FANTASY_GENRE}' books"));
        print_json(&self.store.find_by_genre(FANTASY_GENRE).await?);

        heading("2.2", &format!("Books published after {RECENT_YEAR}"));
        print_json(&self.store.find_published_after(RECENT_YEAR).await?);

        heading("2.3", &format!("Books by '{FEATURED_AUTHOR}'"));
        print_json(&self.store.find_by_author(FEATURED_AUTHOR).await?);

        heading(
            "2.4",
            &format!("Update price of '{REPRICED_TITLE}' to {NEW_PRICE}"),
        );
        let modified = self.store.update_price(REPRICED_TITLE, NEW_PRICE).await?;
        println!("Modified count: {modified}");

        heading("2.5", &format!("Delete book titled '{ABSENT_TITLE}'"));
        let deleted = self.store.delete_by_title(ABSENT_TITLE).await?;
        println!("Deleted count: {deleted}");

        Ok(())
    }

    pub async fn advanced_queries(&self) -> Result<(), StoreError> {
        section("Advanced Queries");

        heading(
            "3.1",
            &format!(
                "In-stock & published after {IN_STOCK_SINCE_YEAR} (project title, author, price)"
            ),
        );
        print_json(&self.store.find_in_stock_after(IN_STOCK_SINCE_YEAR).await?);

        heading("3.2", &format!("Books sorted by price ascending (first {TOP_N})"));
        print_json(&self.store.books_by_price(SortOrder::Ascending, TOP_N).await?);

        heading("3.3", &format!("Books sorted by price descending (first {TOP_N})"));
        print_json(&self.store.books_by_price(SortOrder::Descending, TOP_N).await?);

        heading(
            "3.4",
            &format!(
                "Pagination (page {}), {} per page, price asc",
                self.page.number(),
                self.page.per_page()
            ),
        );
        print_json(&self.store.price_page(self.page).await?);

        Ok(())
    }

    pub async fn aggregations(&self) -> Result<(), StoreError> {
        section("Aggregation Pipeline");

        heading("4.1", "Average price by genre");
        print_json(&self.store.average_price_by_genre().await?);

        heading("4.2", "Author with the most books");
        print_json(&self.store.top_author().await?);

        heading("4.3", "Count books by publication period");
        print_json(&self.store.count_by_year_bucket(&self.buckets).await?);

        Ok(())
    }

    pub async fn indexing(&self) -> Result<(), StoreError> {
        section("Indexing & Performance Analysis");

        heading("5.1", "Creating index on 'title'");
        let title_index = self
            .store
            .create_index(&[("title", SortOrder::Ascending)])
            .await?;
        println!("{title_index}");

        heading(
            "5.2",
            "Creating compound index on 'author' and 'published_year'",
        );
        let compound_index = self
            .store
            .create_index(&[
                ("author", SortOrder::Ascending),
                ("published_year", SortOrder::Descending),
            ])
            .await?;
        println!("{compound_index}");

        let filter = doc! { "title": REPRICED_TITLE };

        heading(
            "5.3",
            &format!("Explain find({{ title: '{REPRICED_TITLE}' }}) without hint"),
        );
        print_document(self.store.explain_find(filter.clone(), None).await?);

        heading(
            "5.3",
            &format!("Explain find({{ title: '{REPRICED_TITLE}' }}) with hint {title_index}"),
        );
        print_document(
            self.store
                .explain_find(filter, Some(doc! { "title": 1 }))
                .await?,
        );

        Ok(())
    }
}

fn section(name: &str) {
    debug!(section = name, "starting");
    println!("\n=== {name} ===");
}

fn heading(step: &str, description: &str) {
    println!("\n{step}. {description}:");
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{json}"),
        Err(e) => tracing::warn!("Could not render result: {e}"),
    }
}

fn print_document(document: Document) {
    print_json(&Bson::Document(document).into_relaxed_extjson());
}
