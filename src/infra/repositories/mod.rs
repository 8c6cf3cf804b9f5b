//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over data access, following the
//! Repository pattern for clean separation of concerns. The concrete
//! stores here are in-memory stubs standing in for real storage.

mod author_repository;
mod book_repository;

pub use author_repository::{AuthorRepository, AuthorStore};
pub use book_repository::{BookRepository, BookStore};

// Export mocks for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use author_repository::MockAuthorRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use book_repository::MockBookRepository;
