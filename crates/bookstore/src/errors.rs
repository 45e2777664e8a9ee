use mongodb::bson;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Connection error: {0}")]
    Connection(#[source] mongodb::error::Error),

    #[error("{operation} failed: {source}")]
    Operation {
        operation: &'static str,
        #[source]
        source: mongodb::error::Error,
    },

    #[error("Unexpected document shape: {0}")]
    Decode(#[from] bson::de::Error),

    #[error("Invalid page {page} with {per_page} per page")]
    InvalidPage { page: u64, per_page: u64 },
}

impl StoreError {
    /// Returns a closure tagging a driver error with the operation that raised it.
    pub(crate) fn operation(operation: &'static str) -> impl FnOnce(mongodb::error::Error) -> Self {
        move |source| StoreError::Operation { operation, source }
    }
}
