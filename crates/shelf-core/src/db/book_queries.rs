//! Book CRUD operations and queries.

use jiff::Timestamp;
use rusqlite::{params, params_from_iter, types::Type, Connection, OptionalExtension, Row};

use crate::{
    error::{CatalogError, DatabaseResultExt, Result},
    models::{Book, BookFilter, CatalogStats, ReadingStatus},
    params::ValidBook,
};

const BOOK_COLUMNS: &str =
    "id, title, author, description, category, language, pages, reading_status, date_added, notes";

const INSERT_BOOK_SQL: &str = "INSERT INTO books (title, author, description, category, language, pages, notes) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)";
const UPDATE_BOOK_SQL: &str = "UPDATE books SET title = ?1, author = ?2, description = ?3, category = ?4, language = ?5, pages = ?6, notes = ?7 WHERE id = ?8";
const UPDATE_STATUS_SQL: &str = "UPDATE books SET reading_status = ?1 WHERE id = ?2";
const DELETE_BOOK_SQL: &str = "DELETE FROM books WHERE id = ?1";
const COUNT_BOOKS_SQL: &str = "SELECT COUNT(*) FROM books";
const COUNT_BY_STATUS_SQL: &str = "SELECT COUNT(*) FROM books WHERE reading_status = ?1";

// Named list predicates. Each placeholder is bound, never interpolated.
const SEARCH_PREDICATE: &str = "(title LIKE ? ESCAPE '\\' OR author LIKE ? ESCAPE '\\' OR description LIKE ? ESCAPE '\\')";
const CATEGORY_PREDICATE: &str = "category = ?";
const STATUS_PREDICATE: &str = "reading_status = ?";
const LANGUAGE_PREDICATE: &str = "language = ?";

const LIST_ORDER: &str = " ORDER BY date_added DESC, id DESC";

impl super::Database {
    /// Inserts a new book and returns it as stored, with the `id` and
    /// `date_added` assigned by the database.
    pub fn insert_book(&mut self, book: &ValidBook) -> Result<Book> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        tx.execute(
            INSERT_BOOK_SQL,
            params![
                book.title,
                book.author,
                book.description,
                book.category,
                book.language,
                book.pages,
                book.notes
            ],
        )
        .db_context("Failed to insert book")?;

        let id = tx.last_insert_rowid() as u64;
        let stored = select_book(&tx, id)?.ok_or(CatalogError::BookNotFound { id })?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(stored)
    }

    /// Retrieves a book by its ID.
    pub fn get_book(&self, id: u64) -> Result<Option<Book>> {
        select_book(&self.connection, id)
    }

    /// Lists books matching the filter, newest first.
    pub fn list_books(&self, filter: Option<&BookFilter>) -> Result<Vec<Book>> {
        let mut query = format!("SELECT {BOOK_COLUMNS} FROM books");

        let mut conditions: Vec<&str> = Vec::new();
        let mut values: Vec<String> = Vec::new();

        if let Some(f) = filter {
            if let Some(ref search) = f.search {
                let pattern = format!("%{}%", escape_like(search));
                conditions.push(SEARCH_PREDICATE);
                values.extend([pattern.clone(), pattern.clone(), pattern]);
            }

            if let Some(ref category) = f.category {
                conditions.push(CATEGORY_PREDICATE);
                values.push(category.clone());
            }

            if let Some(status) = f.status {
                conditions.push(STATUS_PREDICATE);
                values.push(status.as_str().to_string());
            }

            if let Some(ref language) = f.language {
                conditions.push(LANGUAGE_PREDICATE);
                values.push(language.clone());
            }
        }

        if !conditions.is_empty() {
            query.push_str(" WHERE ");
            query.push_str(&conditions.join(" AND "));
        }

        query.push_str(LIST_ORDER);

        let mut stmt = self
            .connection
            .prepare(&query)
            .db_context("Failed to prepare query")?;

        let books = stmt
            .query_map(params_from_iter(values.iter()), book_from_row)
            .db_context("Failed to query books")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to read book row")?;

        Ok(books)
    }

    /// Sets the reading status of a book. Returns false when no row matched.
    pub fn update_reading_status(&self, id: u64, status: ReadingStatus) -> Result<bool> {
        let changed = self
            .connection
            .execute(UPDATE_STATUS_SQL, params![status.as_str(), sql_id(id)?])
            .db_context("Failed to update reading status")?;
        Ok(changed > 0)
    }

    /// Overwrites every mutable field of a book. Returns false when no row
    /// matched.
    pub fn replace_book(&self, id: u64, book: &ValidBook) -> Result<bool> {
        let changed = self
            .connection
            .execute(
                UPDATE_BOOK_SQL,
                params![
                    book.title,
                    book.author,
                    book.description,
                    book.category,
                    book.language,
                    book.pages,
                    book.notes,
                    sql_id(id)?
                ],
            )
            .db_context("Failed to update book")?;
        Ok(changed > 0)
    }

    /// Deletes a book. Returns false when no row matched.
    pub fn delete_book(&self, id: u64) -> Result<bool> {
        let changed = self
            .connection
            .execute(DELETE_BOOK_SQL, params![sql_id(id)?])
            .db_context("Failed to delete book")?;
        Ok(changed > 0)
    }

    /// Counts all books.
    pub fn count_books(&self) -> Result<u64> {
        count(&self.connection, COUNT_BOOKS_SQL, [])
    }

    /// Computes the total and per-status counts.
    ///
    /// The four counts are read inside one transaction and therefore agree
    /// with each other.
    pub fn stats(&mut self) -> Result<CatalogStats> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let by_status = |status: ReadingStatus| {
            count(&tx, COUNT_BY_STATUS_SQL, params![status.as_str()])
        };

        let stats = CatalogStats {
            total: count(&tx, COUNT_BOOKS_SQL, [])?,
            completed: by_status(ReadingStatus::Completed)?,
            in_progress: by_status(ReadingStatus::InProgress)?,
            not_started: by_status(ReadingStatus::NotStarted)?,
        };

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(stats)
    }
}

fn select_book(connection: &Connection, id: u64) -> Result<Option<Book>> {
    let query = format!("SELECT {BOOK_COLUMNS} FROM books WHERE id = ?1");
    connection
        .query_row(&query, params![sql_id(id)?], book_from_row)
        .optional()
        .db_context("Failed to query book")
}

/// Converts a book id to SQLite's signed rowid.
fn sql_id(id: u64) -> Result<i64> {
    i64::try_from(id)
        .map_err(|_| CatalogError::invalid_input("id").with_reason("is out of range"))
}

fn count<P: rusqlite::Params>(connection: &Connection, sql: &str, params: P) -> Result<u64> {
    connection
        .query_row(sql, params, |row| row.get::<_, i64>(0))
        .map(|n| n as u64)
        .db_context("Failed to count books")
}

/// Escapes `LIKE` wildcards so the term matches as a literal substring.
fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

fn book_from_row(row: &Row<'_>) -> rusqlite::Result<Book> {
    let status_str: String = row.get(7)?;
    let reading_status = status_str.parse::<ReadingStatus>().map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            7,
            Type::Text,
            Box::new(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("Invalid reading status: {status_str}"),
            )),
        )
    })?;

    let pages = row
        .get::<_, Option<i64>>(6)?
        .map(|p| u32::try_from(p).map_err(|_| rusqlite::Error::IntegralValueOutOfRange(6, p)))
        .transpose()?;

    Ok(Book {
        id: row.get::<_, i64>(0)? as u64,
        title: row.get(1)?,
        author: row.get(2)?,
        description: row.get(3)?,
        category: row.get(4)?,
        language: row.get(5)?,
        pages,
        reading_status,
        date_added: row.get::<_, String>(8)?.parse::<Timestamp>().map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(8, Type::Text, Box::new(e))
        })?,
        notes: row.get(9)?,
    })
}
