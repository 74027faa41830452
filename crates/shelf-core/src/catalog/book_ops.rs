//! Book operations for the Catalog.

use log::{debug, info};
use tokio::task;

use super::Catalog;
use crate::{
    db::Database,
    error::{CatalogError, Result},
    models::{Book, BookFilter, CatalogStats},
    params::{BookFields, Id, ListBooks, ReplaceBook, UpdateStatus},
};

impl Catalog {
    /// Runs a blocking closure against a fresh database connection.
    async fn with_database<T, F>(&self, f: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut Database) -> Result<T> + Send + 'static,
    {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            f(&mut db)
        })
        .await
        .map_err(CatalogError::task_join)?
    }

    /// Lists books matching the given criteria, newest first.
    ///
    /// Empty criteria return every book. An unknown status value is a
    /// validation error.
    pub async fn list_books(&self, params: &ListBooks) -> Result<Vec<Book>> {
        let filter = BookFilter::try_from(params)?;
        debug!("Listing books with {filter:?}");

        self.with_database(move |db| {
            if filter.is_empty() {
                db.list_books(None)
            } else {
                db.list_books(Some(&filter))
            }
        })
        .await
    }

    /// Retrieves a book by its ID.
    pub async fn get_book(&self, params: &Id) -> Result<Option<Book>> {
        let id = params.id;
        self.with_database(move |db| db.get_book(id)).await
    }

    /// Creates a new book.
    ///
    /// Title and author are required; language defaults to "Arabic".
    pub async fn create_book(&self, params: &BookFields) -> Result<Book> {
        let book = params.validate_new()?;

        let created = self.with_database(move |db| db.insert_book(&book)).await?;
        info!("Added book {} '{}'", created.id, created.title);
        Ok(created)
    }

    /// Changes only the reading status of a book and returns the updated
    /// record.
    pub async fn update_status(&self, params: &UpdateStatus) -> Result<Book> {
        let status = params.status()?;
        let id = params.id;

        let book = self
            .with_database(move |db| {
                if !db.update_reading_status(id, status)? {
                    return Err(CatalogError::BookNotFound { id });
                }
                db.get_book(id)?.ok_or(CatalogError::BookNotFound { id })
            })
            .await?;
        info!("Book {id} marked as {}", status.as_str());
        Ok(book)
    }

    /// Overwrites every mutable field of a book and returns the stored
    /// record.
    pub async fn replace_book(&self, params: &ReplaceBook) -> Result<Book> {
        let fields = params.fields.validate()?;
        let id = params.id;

        let book = self
            .with_database(move |db| {
                if !db.replace_book(id, &fields)? {
                    return Err(CatalogError::BookNotFound { id });
                }
                db.get_book(id)?.ok_or(CatalogError::BookNotFound { id })
            })
            .await?;
        info!("Updated book {id}");
        Ok(book)
    }

    /// Permanently deletes a book and returns the removed record.
    pub async fn delete_book(&self, params: &Id) -> Result<Book> {
        let id = params.id;

        let book = self
            .with_database(move |db| {
                let book = db.get_book(id)?.ok_or(CatalogError::BookNotFound { id })?;
                if !db.delete_book(id)? {
                    return Err(CatalogError::BookNotFound { id });
                }
                Ok(book)
            })
            .await?;
        info!("Deleted book {id} '{}'", book.title);
        Ok(book)
    }

    /// Returns the total and per-status counts.
    pub async fn stats(&self) -> Result<CatalogStats> {
        self.with_database(|db| db.stats()).await
    }

    /// Number of books in the catalog. Doubles as a store health check.
    pub async fn count_books(&self) -> Result<u64> {
        self.with_database(|db| db.count_books()).await
    }
}
