//! Author repository - Supplies the catalog's author record.

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

use crate::config::CATALOG_AUTHOR_NAME;
use crate::domain::Author;
use crate::errors::AppResult;

/// Author repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait AuthorRepository: Send + Sync {
    /// Resolve the author record
    fn get_author(&self) -> AppResult<Author>;
}

/// In-memory author repository returning a fixed record.
///
/// Stands in for a real data store; every call yields the same value.
pub struct AuthorStore;

impl AuthorStore {
    /// Create a new author store
    pub fn new() -> Self {
        Self
    }
}

impl Default for AuthorStore {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthorRepository for AuthorStore {
    fn get_author(&self) -> AppResult<Author> {
        Ok(Author::new(CATALOG_AUTHOR_NAME))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_author_is_deterministic() {
        let repo = AuthorStore::new();

        let first = repo.get_author().unwrap();
        let second = repo.get_author().unwrap();

        assert_eq!(first, Author::new("F. Scott Fitzgerald"));
        assert_eq!(first, second);
    }
}
