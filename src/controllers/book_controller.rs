//! Book controller - External-facing boundary for book lookups.

use std::sync::Arc;

use crate::domain::Book;
use crate::errors::AppResult;
use crate::services::BookService;

/// Boundary component exposing the book service to an embedding caller.
///
/// In a full system this is where an HTTP handler or RPC method would
/// sit; here the boundary is a plain in-process call. The controller
/// performs no translation, validation, or formatting.
pub struct BookController {
    book_service: Arc<dyn BookService>,
}

impl BookController {
    /// Create a new controller with its service collaborator
    pub fn new(book_service: Arc<dyn BookService>) -> Self {
        Self { book_service }
    }

    /// Fetch the catalog's book; the service result is returned unchanged
    pub fn get_book(&self) -> AppResult<Book> {
        self.book_service.get_book()
    }
}
