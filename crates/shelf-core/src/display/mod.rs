//! Display formatting functions and result types.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! the wrappers in this module add context such as "created", "updated" or
//! "deleted" messages and empty-collection handling. Everything here
//! produces markdown, which the CLI renders in the terminal.
//!
//! - [`collections`]: collection wrapper types ([`Books`])
//! - [`results`]: operation result types ([`CreateResult`], [`UpdateResult`],
//!   [`DeleteResult`])
//! - [`status`]: status and confirmation messages ([`OperationStatus`])
//! - [`datetime`]: date/time formatting utilities
//! - [`models`]: Display implementations for domain models
//!
//! # Example
//!
//! ```rust
//! use jiff::Timestamp;
//! use shelf_core::{
//!     display::{CreateResult, UpdateResult},
//!     models::{Book, ReadingStatus},
//! };
//!
//! let book = Book {
//!     id: 1,
//!     title: "Sahih Muslim".to_string(),
//!     author: "Imam Muslim".to_string(),
//!     description: None,
//!     category: Some("Hadith".to_string()),
//!     language: Some("Arabic".to_string()),
//!     pages: Some(1500),
//!     reading_status: ReadingStatus::NotStarted,
//!     date_added: Timestamp::now(),
//!     notes: None,
//! };
//!
//! let output = CreateResult::new(book.clone()).to_string();
//! assert!(output.contains("Added book with ID: 1"));
//!
//! let update = UpdateResult::with_changes(book, vec!["Status: completed".to_string()]);
//! assert!(update.to_string().contains("Changes made:"));
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

// Re-export commonly used types for convenience
pub use collections::Books;
pub use datetime::{LocalDate, LocalDateTime};
pub use results::{CreateResult, DeleteResult, UpdateResult};
pub use status::OperationStatus;
