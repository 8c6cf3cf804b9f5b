//! Book repository - Supplies the catalog's book record.

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

use crate::config::CATALOG_BOOK_TITLE;
use crate::domain::{Author, Book};
use crate::errors::AppResult;

/// Book repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait BookRepository: Send + Sync {
    /// Resolve the book record for an already-resolved author.
    ///
    /// The supplied author is carried into the returned book unchanged.
    fn get_book(&self, author: Author) -> AppResult<Book>;
}

/// In-memory book repository returning a fixed title.
///
/// The title is constant regardless of which author is passed; there is
/// no per-author lookup.
pub struct BookStore;

impl BookStore {
    /// Create a new book store
    pub fn new() -> Self {
        Self
    }
}

impl Default for BookStore {
    fn default() -> Self {
        Self::new()
    }
}

impl BookRepository for BookStore {
    fn get_book(&self, author: Author) -> AppResult<Book> {
        Ok(Book::new(CATALOG_BOOK_TITLE, author))
    }
}
