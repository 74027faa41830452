//! High-level catalog API for managing books.
//!
//! [`Catalog`] is the async facade every interface goes through. It validates
//! parameters, then runs the blocking SQLite work on the tokio blocking pool:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI / HTTP    │    │    Catalog      │    │    Database     │
//! │    handlers     │───▶│  (book_ops)     │───▶│   (via db/)     │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!     Interfaces          Validation            Data Persistence
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use shelf_core::{params::BookFields, CatalogBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let catalog = CatalogBuilder::new()
//!     .with_database_path(Some("/tmp/shelf.db"))
//!     .with_sample_data(true)
//!     .build()
//!     .await?;
//!
//! let book = catalog
//!     .create_book(&BookFields {
//!         title: "Al-Muwatta".to_string(),
//!         author: "Imam Malik".to_string(),
//!         ..Default::default()
//!     })
//!     .await?;
//! assert_eq!(book.language.as_deref(), Some("Arabic"));
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

pub mod book_ops;
pub mod builder;

#[cfg(test)]
mod tests;

pub use builder::CatalogBuilder;

/// Main catalog interface for managing books.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub(crate) db_path: PathBuf,
}

impl Catalog {
    /// Creates a new catalog backed by the given database path.
    pub(crate) fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }

    /// Path of the SQLite database file.
    pub fn database_path(&self) -> &std::path::Path {
        &self.db_path
    }
}
