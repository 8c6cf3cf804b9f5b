//! Fetch command - Resolves the catalog's book and prints it.

use crate::cli::args::FetchArgs;
use crate::config::{Config, OutputFormat};
use crate::controllers::BookController;
use crate::errors::{AppError, AppResult};
use crate::services::{ServiceContainer, Services};

/// Execute the fetch command
pub fn execute(args: FetchArgs, config: Config) -> AppResult<()> {
    let format = match args.output.as_deref() {
        Some(value) => value.parse::<OutputFormat>().map_err(AppError::validation)?,
        None => config.output,
    };

    // Composition root: wire concrete instances explicitly.
    let services = Services::from_defaults();
    let controller = BookController::new(services.books());
    tracing::debug!("Services wired");

    let book = controller.get_book()?;
    tracing::info!(title = %book.title, author = %book.author, "Book resolved");

    match format {
        OutputFormat::Text => println!("{}", book),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&book)?),
    }

    Ok(())
}
