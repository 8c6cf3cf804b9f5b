//! Book service - Composes the author and book lookups.
//!
//! SOLID (SRP): Handles the book lookup use case only.
//! DDD: Orchestrates repositories; holds no domain state of its own.

use std::sync::Arc;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

use crate::domain::Book;
use crate::errors::AppResult;
use crate::infra::{AuthorRepository, BookRepository};

/// Book service trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait BookService: Send + Sync {
    /// Resolve the catalog's book together with its author
    fn get_book(&self) -> AppResult<Book>;
}

/// Concrete implementation of BookService composing two repositories.
pub struct BookManager<A, B>
where
    A: AuthorRepository,
    B: BookRepository,
{
    author_repository: Arc<A>,
    book_repository: Arc<B>,
}

impl<A, B> BookManager<A, B>
where
    A: AuthorRepository,
    B: BookRepository,
{
    /// Create a new book service instance with its repository collaborators
    pub fn new(author_repository: Arc<A>, book_repository: Arc<B>) -> Self {
        Self {
            author_repository,
            book_repository,
        }
    }
}

impl<A, B> BookService for BookManager<A, B>
where
    A: AuthorRepository,
    B: BookRepository,
{
    fn get_book(&self) -> AppResult<Book> {
        // The book lookup needs the resolved author, so the calls are sequenced.
        let author = self.author_repository.get_author()?;
        self.book_repository.get_book(author)
    }
}
