//! Connection settings for the bookstore collection.

use serde::{Deserialize, Serialize};

pub const DEFAULT_URI: &str = "mongodb://localhost:27017";
pub const DATABASE_NAME: &str = "plp_bookstore";
pub const COLLECTION_NAME: &str = "books";

/// Environment variable naming the connection string (local or Atlas).
pub const URI_ENV: &str = "MONGODB_URI";

/// Where the book collection lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// MongoDB connection string.
    pub uri: String,
    /// Database name.
    pub database: String,
    /// Collection name within the database.
    pub collection: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            uri: DEFAULT_URI.to_string(),
            database: DATABASE_NAME.to_string(),
            collection: COLLECTION_NAME.to_string(),
        }
    }
}

impl StoreConfig {
    /// Reads the connection string from `MONGODB_URI`, loading a `.env` file first
    /// if one is present. Falls back to the local default.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_uri(std::env::var(URI_ENV).ok())
    }

    fn from_uri(uri: Option<String>) -> Self {
        match uri.filter(|u| !u.trim().is_empty()) {
            Some(uri) => Self {
                uri,
                ..Self::default()
            },
            None => Self::default(),
        }
    }

    pub fn with_database(mut self, database: impl Into<String>) -> Self {
        self.database = database.into();
        self
    }

    pub fn with_collection(mut self, collection: impl Into<String>) -> Self {
        self.collection = collection.into();
        self
    }
}
