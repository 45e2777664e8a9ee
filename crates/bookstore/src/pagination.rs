//! Page arithmetic for sorted scans.

use crate::errors::StoreError;

/// Default number of records per page.
pub const DEFAULT_PER_PAGE: u64 = 5;

/// A 1-based page of a sorted result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    page: u64,
    per_page: u64,
    skip: u64,
    limit: i64,
}

impl Page {
    /// Both `page` and `per_page` must be at least 1, `per_page` must fit a
    /// cursor limit and the records preceding the page must be countable.
    pub fn new(page: u64, per_page: u64) -> Result<Self, StoreError> {
        let invalid = || StoreError::InvalidPage { page, per_page };
        if page == 0 || per_page == 0 {
            return Err(invalid());
        }
        let limit = i64::try_from(per_page).map_err(|_| invalid())?;
        let skip = (page - 1).checked_mul(per_page).ok_or_else(invalid)?;
        Ok(Self {
            page,
            per_page,
            skip,
            limit,
        })
    }

    pub fn number(&self) -> u64 {
        self.page
    }

    pub fn per_page(&self) -> u64 {
        self.per_page
    }

    /// Number of records preceding this page.
    pub fn skip(&self) -> u64 {
        self.skip
    }

    /// Cursor limit for this page; always positive.
    pub fn limit(&self) -> i64 {
        self.limit
    }
}
