//! Service Container - Centralized service access.
//!
//! SOLID (SRP): Manages service lifecycle and access.
//! SOLID (DIP): Depends on service traits, not implementations.

use std::sync::Arc;

use super::{BookManager, BookService};
use crate::infra::{AuthorStore, BookStore};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Service container trait for dependency injection.
///
/// Provides centralized access to all application services.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait ServiceContainer: Send + Sync {
    /// Get book service
    fn books(&self) -> Arc<dyn BookService>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    book_service: Arc<dyn BookService>,
}

impl Services {
    /// Create a new service container with all services initialized
    pub fn new(book_service: Arc<dyn BookService>) -> Self {
        Self { book_service }
    }

    /// Assemble the container from the built-in in-memory stores.
    ///
    /// This is the single place where concrete repository and service
    /// implementations are wired together.
    pub fn from_defaults() -> Self {
        let author_repository = Arc::new(AuthorStore::new());
        let book_repository = Arc::new(BookStore::new());
        let book_service = Arc::new(BookManager::new(author_repository, book_repository));

        Self { book_service }
    }
}

impl ServiceContainer for Services {
    fn books(&self) -> Arc<dyn BookService> {
        self.book_service.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Author, Book};

    #[test]
    fn default_wiring_resolves_the_catalog_book() {
        let services = Services::from_defaults();

        let book = services.books().get_book().unwrap();

        assert_eq!(
            book,
            Book::new("The Great Gatsby", Author::new("F. Scott Fitzgerald"))
        );
    }
}
