//! Core library for the Shelf book catalog.
//!
//! This crate provides the business logic for tracking books: the SQLite
//! store, request parameters with boundary validation, the async
//! [`Catalog`] facade, and the presentation layers used by the front ends.
//!
//! # Presentation
//!
//! - **Domain Models** ([`models`]): plain data, serialised to JSON by the
//!   HTTP API
//! - **Display Wrappers** ([`display`]): markdown for the terminal
//! - **View** ([`view`]): the browser view-model and escaped HTML rendering
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use shelf_core::{params::{BookFields, ListBooks, UpdateStatus}, CatalogBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let catalog = CatalogBuilder::new()
//!     .with_database_path(Some("shelf.db"))
//!     .build()
//!     .await?;
//!
//! let book = catalog
//!     .create_book(&BookFields {
//!         title: "Riyadh as-Salihin".to_string(),
//!         author: "Imam an-Nawawi".to_string(),
//!         category: Some("Hadith".to_string()),
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! catalog
//!     .update_status(&UpdateStatus {
//!         id: book.id,
//!         reading_status: "in_progress".to_string(),
//!     })
//!     .await?;
//!
//! for book in catalog.list_books(&ListBooks::default()).await? {
//!     println!("{book}");
//! }
//! println!("{}", catalog.stats().await?);
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod db;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod view;

// Re-export commonly used types
pub use catalog::{Catalog, CatalogBuilder};
pub use db::Database;
pub use display::{
    Books, CreateResult, DeleteResult, LocalDateTime, OperationStatus, UpdateResult,
};
pub use error::{CatalogError, Result};
pub use models::{Book, BookFilter, CatalogStats, ReadingStatus};
pub use params::{BookFields, Id, ListBooks, ReplaceBook, UpdateStatus, ValidBook};
pub use view::Shelf;
