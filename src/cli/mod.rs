//! CLI module - Command-line interface for the application.
//!
//! Provides commands for:
//! - `fetch` - Resolve and print the catalog's book

pub mod args;

pub use args::{Cli, Commands};
