//! Configuration types for sample book generation.

use serde::{Deserialize, Serialize};

/// Genre labels cycled through by synthetic records.
pub const SYNTHETIC_GENRES: [&str; 5] = ["Fiction", "Non-Fiction", "Mystery", "Sci-Fi", "Biography"];

/// Configuration for seeding operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedConfig {
    /// Number of synthetic books appended after the literal classics.
    pub synthetic_count: usize,

    /// Whether to include the ten literal classics.
    pub include_classics: bool,

    /// Generation parameters for synthetic books.
    pub synthetic: SyntheticConfig,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            synthetic_count: 40,
            include_classics: true,
            synthetic: SyntheticConfig::default(),
        }
    }
}

/// Deterministic parameters for synthetic book `i` (0-based).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyntheticConfig {
    /// Genre is `genres[i % genres.len()]`.
    pub genres: Vec<String>,
    /// Number used in the first title, author and publisher ("Sample Book 11").
    pub first_number: usize,
    /// Year is `base_year + i % year_span`.
    pub base_year: i32,
    pub year_span: usize,
    /// Price is `base_price + i % price_steps`.
    pub base_price: f64,
    pub price_steps: usize,
    /// Page count is `base_pages + i * pages_step`.
    pub base_pages: i32,
    pub pages_step: i32,
}

impl Default for SyntheticConfig {
    fn default() -> Self {
        Self {
            genres: SYNTHETIC_GENRES.iter().map(|g| g.to_string()).collect(),
            first_number: 11,
            base_year: 1980,
            year_span: 40,
            base_price: 5.99,
            price_steps: 10,
            base_pages: 150,
            pages_step: 5,
        }
    }
}
