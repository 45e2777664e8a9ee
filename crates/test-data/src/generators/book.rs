//! Sample book generation.

use bookstore::Book;

use crate::config::{SeedConfig, SyntheticConfig};

/// Title, author, genre, year, price, in stock, pages, publisher.
type ClassicRow = (&'static str, &'static str, &'static str, i32, f64, bool, i32, &'static str);

const CLASSICS: &[ClassicRow] = &[
    ("1984", "George Orwell", "Dystopian", 1949, 9.99, true, 328, "Secker & Warburg"),
    ("To Kill a Mockingbird", "Harper Lee", "Classic", 1960, 8.99, true, 281, "J.B. Lippincott & Co."),
    ("The Great Gatsby", "F. Scott Fitzgerald", "Classic", 1925, 10.99, true, 180, "Charles Scribner's Sons"),
    ("Brave New World", "Aldous Huxley", "Science Fiction", 1932, 11.99, true, 268, "Chatto & Windus"),
    ("Moby Dick", "Herman Melville", "Adventure", 1851, 12.99, false, 635, "Harper & Brothers"),
    ("Pride and Prejudice", "Jane Austen", "Romance", 1813, 7.99, true, 279, "T. Egerton"),
    ("The Hobbit", "J.R.R. Tolkien", "Fantasy", 1937, 9.49, true, 310, "George Allen & Unwin"),
    ("Fahrenheit 451", "Ray Bradbury", "Dystopian", 1953, 8.49, true, 194, "Ballantine Books"),
    ("Jane Eyre", "Charlotte Brontë", "Gothic", 1847, 10.49, false, 500, "Smith, Elder & Co."),
    ("The Catcher in the Rye", "J.D. Salinger", "Classic", 1951, 9.99, true, 214, "Little, Brown and Company"),
];

/// Number of literal classics.
pub const CLASSICS_COUNT: usize = CLASSICS.len();

/// Generates the sample catalog. Output is fully deterministic.
pub struct BookGenerator {
    config: SeedConfig,
}

impl BookGenerator {
    /// Creates a new book generator with default configuration.
    pub fn new() -> Self {
        Self {
            config: SeedConfig::default(),
        }
    }

    /// Creates a generator with custom configuration.
    pub fn with_config(config: SeedConfig) -> Self {
        Self { config }
    }

    /// The ten literal classics covering varied genres, eras and stock states.
    pub fn classics() -> Vec<Book> {
        CLASSICS
            .iter()
            .map(
                |&(title, author, genre, year, price, in_stock, pages, publisher)| {
                    Book::new(title, author, genre, year, price, in_stock, pages, publisher)
                },
            )
            .collect()
    }

    /// Generates `count` numbered sample books.
    pub fn synthetic(&self, count: usize) -> Vec<Book> {
        (0..count)
            .map(|i| synthetic_book(&self.config.synthetic, i))
            .collect()
    }

    /// Classics (if enabled) followed by the configured number of synthetic books.
    pub fn catalog(&self) -> Vec<Book> {
        let mut books = if self.config.include_classics {
            Self::classics()
        } else {
            Vec::new()
        };
        books.extend(self.synthetic(self.config.synthetic_count));
        books
    }
}

impl Default for BookGenerator {
    fn default() -> Self {
        Self::new()
    }
}

fn synthetic_book(config: &SyntheticConfig, i: usize) -> Book {
    let number = i + config.first_number;
    let genre = if config.genres.is_empty() {
        "General"
    } else {
        config.genres[i % config.genres.len()].as_str()
    };
    let year_offset = (i % config.year_span.max(1)) as i32;
    let price_offset = (i % config.price_steps.max(1)) as f64;

    Book::new(
        format!("Sample Book {number}"),
        format!("Author {number}"),
        genre,
        config.base_year + year_offset,
        config.base_price + price_offset,
        i % 2 == 0,
        config.base_pages + i as i32 * config.pages_step,
        format!("Publisher {number}"),
    )
}
