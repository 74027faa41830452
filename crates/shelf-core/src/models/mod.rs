//! Data models for the book catalog.
//!
//! This module contains the domain types shared by the store, the async
//! catalog facade, the HTTP layer and the browser view-model. Display
//! implementations live in [`crate::display::models`] so that data and
//! presentation stay apart.
//!
//! - [`Book`]: the single persisted entity
//! - [`ReadingStatus`]: three-valued progress attached to every book
//! - [`BookFilter`]: list criteria with the reference [`BookFilter::matches`]
//!   predicate
//! - [`CatalogStats`]: total and per-status counts

pub mod book;
pub mod filters;
pub mod status;
pub mod summary;


pub use book::Book;
pub use filters::BookFilter;
pub use status::ReadingStatus;
pub use summary::CatalogStats;
