//! Infrastructure layer - Data access
//!
//! The only backing system here is the in-memory catalog; the repository
//! traits keep the seam where a database would plug in.

pub mod repositories;

pub use repositories::{AuthorRepository, AuthorStore, BookRepository, BookStore};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::{MockAuthorRepository, MockBookRepository};
