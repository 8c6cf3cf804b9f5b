//! Book domain entity.

use serde::{Deserialize, Serialize};

use super::Author;

/// Book domain entity.
///
/// DDD: Value object - immutable, compared by field values.
/// Holds its author by value; a book cannot be constructed without a
/// resolved author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    pub author: Author,
}

impl Book {
    /// Create a new book for an already-resolved author
    pub fn new(title: impl Into<String>, author: Author) -> Self {
        Self {
            title: title.into(),
            author,
        }
    }
}

impl std::fmt::Display for Book {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} by {}", self.title, self.author)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn books_with_equal_fields_are_equal() {
        let a = Book::new("The Great Gatsby", Author::new("F. Scott Fitzgerald"));
        let b = Book::new("The Great Gatsby", Author::new("F. Scott Fitzgerald"));

        assert_eq!(a, b);
    }

    #[test]
    fn books_differing_in_any_field_are_unequal() {
        let book = Book::new("The Great Gatsby", Author::new("F. Scott Fitzgerald"));

        let other_title = Book::new("Tender Is the Night", Author::new("F. Scott Fitzgerald"));
        let other_author = Book::new("The Great Gatsby", Author::new("Harper Lee"));

        assert_ne!(book, other_title);
        assert_ne!(book, other_author);
    }

    #[test]
    fn book_renders_title_and_author() {
        let book = Book::new("The Great Gatsby", Author::new("F. Scott Fitzgerald"));

        assert_eq!(book.to_string(), "The Great Gatsby by F. Scott Fitzgerald");
    }
}
