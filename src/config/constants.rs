//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Catalog
// =============================================================================

/// Author record served by the in-memory author store
pub const CATALOG_AUTHOR_NAME: &str = "F. Scott Fitzgerald";

/// Book title served by the in-memory book store
pub const CATALOG_BOOK_TITLE: &str = "The Great Gatsby";

// =============================================================================
// Output
// =============================================================================

/// Environment variable selecting the default output format
pub const ENV_OUTPUT_FORMAT: &str = "BOOKSHELF_OUTPUT";
