//! Book service unit tests.

use std::sync::Arc;

use mockall::predicate::eq;

use bookshelf::domain::{Author, Book};
use bookshelf::errors::AppError;
use bookshelf::infra::{MockAuthorRepository, MockBookRepository};
use bookshelf::services::{BookManager, BookService};

#[test]
fn test_get_book_composes_author_and_book() {
    let mut author_repo = MockAuthorRepository::new();
    author_repo
        .expect_get_author()
        .returning(|| Ok(Author::new("F. Scott Fitzgerald")));

    let mut book_repo = MockBookRepository::new();
    book_repo
        .expect_get_book()
        .with(eq(Author::new("F. Scott Fitzgerald")))
        .returning(|author| Ok(Book::new("The Great Gatsby", author)));

    let service = BookManager::new(Arc::new(author_repo), Arc::new(book_repo));
    let result = service.get_book();

    assert!(result.is_ok());
    assert_eq!(
        result.unwrap(),
        Book::new("The Great Gatsby", Author::new("F. Scott Fitzgerald"))
    );
}

#[test]
fn test_get_book_hands_resolved_author_to_book_repo() {
    let mut author_repo = MockAuthorRepository::new();
    author_repo
        .expect_get_author()
        .times(1)
        .returning(|| Ok(Author::new("Harper Lee")));

    let mut book_repo = MockBookRepository::new();
    book_repo
        .expect_get_book()
        .with(eq(Author::new("Harper Lee")))
        .times(1)
        .returning(|author| Ok(Book::new("The Great Gatsby", author)));

    let service = BookManager::new(Arc::new(author_repo), Arc::new(book_repo));
    let book = service.get_book().unwrap();

    assert_eq!(book.author, Author::new("Harper Lee"));
}

#[test]
fn test_get_book_propagates_author_repo_error() {
    let mut author_repo = MockAuthorRepository::new();
    author_repo
        .expect_get_author()
        .returning(|| Err(AppError::validation("author store unavailable")));

    let mut book_repo = MockBookRepository::new();
    book_repo.expect_get_book().never();

    let service = BookManager::new(Arc::new(author_repo), Arc::new(book_repo));
    let result = service.get_book();

    assert!(matches!(result.unwrap_err(), AppError::Validation(_)));
}

#[test]
fn test_get_book_propagates_book_repo_error() {
    let mut author_repo = MockAuthorRepository::new();
    author_repo
        .expect_get_author()
        .returning(|| Ok(Author::new("F. Scott Fitzgerald")));

    let mut book_repo = MockBookRepository::new();
    book_repo
        .expect_get_book()
        .returning(|_| Err(AppError::validation("book store unavailable")));

    let service = BookManager::new(Arc::new(author_repo), Arc::new(book_repo));
    let result = service.get_book();

    assert!(matches!(result.unwrap_err(), AppError::Validation(_)));
}
