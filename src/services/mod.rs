//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and infrastructure to fulfill
//! application use cases. They depend on abstractions (traits) for
//! dependency inversion.

mod book_service;
pub mod container;

// Service Container
pub use container::{ServiceContainer, Services};

// Service traits and implementations
pub use book_service::{BookManager, BookService};

#[cfg(any(test, feature = "test-utils"))]
pub use book_service::MockBookService;
#[cfg(any(test, feature = "test-utils"))]
pub use container::MockServiceContainer;
