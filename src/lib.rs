//! Bookshelf - A minimal layered catalog application
//!
//! This crate wires a controller, a service, and two repositories around
//! an in-memory book catalog, with explicit constructor injection instead
//! of a framework-managed container.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Core business entities
//! - **services**: Application use cases and business logic
//! - **infra**: Infrastructure concerns (in-memory data stores)
//! - **controllers**: Boundary components exposing service results
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Print the catalog's book
//! cargo run -- fetch
//!
//! # Same, as JSON
//! cargo run -- fetch --output json
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod controllers;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;

// Re-export commonly used types at crate root
pub use config::Config;
pub use controllers::BookController;
pub use domain::{Author, Book};
pub use errors::{AppError, AppResult};
