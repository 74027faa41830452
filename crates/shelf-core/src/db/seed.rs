//! Sample records inserted into an empty catalog.

use log::info;
use rusqlite::params;

use crate::error::{DatabaseResultExt, Result};

/// A sample record: title, author, description, category, language, pages.
type SampleBook = (
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    u32,
);

/// The fixed sample catalog.
pub const SAMPLE_BOOKS: [SampleBook; 5] = [
    (
        "Sahih al-Bukhari",
        "Imam al-Bukhari",
        "The most authentic collection of hadith compiled by Imam Muhammad al-Bukhari",
        "Hadith",
        "Arabic",
        2000,
    ),
    (
        "Sahih Muslim",
        "Imam Muslim",
        "One of the six major hadith collections in Sunni Islam",
        "Hadith",
        "Arabic",
        1500,
    ),
    (
        "Tafsir Ibn Kathir",
        "Ibn Kathir",
        "A classical Sunni tafsir (commentary) of the Quran",
        "Tafsir",
        "Arabic",
        3000,
    ),
    (
        "The Sealed Nectar",
        "Safi-ur-Rahman al-Mubarakpuri",
        "Biography of Prophet Muhammad (PBUH)",
        "Seerah",
        "English",
        600,
    ),
    (
        "Riyadh as-Salihin",
        "Imam an-Nawawi",
        "Collection of hadith for the training of beginners",
        "Hadith",
        "Arabic",
        400,
    ),
];

const SEED_BOOK_SQL: &str = "INSERT INTO books (title, author, description, category, language, pages) VALUES (?1, ?2, ?3, ?4, ?5, ?6)";

impl super::Database {
    /// Inserts [`SAMPLE_BOOKS`] when the table is empty.
    ///
    /// Returns the number of records inserted, zero when the catalog already
    /// held books.
    pub fn seed_sample_books(&mut self) -> Result<usize> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let existing: i64 = tx
            .query_row("SELECT COUNT(*) FROM books", [], |row| row.get(0))
            .db_context("Failed to count books")?;
        if existing > 0 {
            return Ok(0);
        }

        {
            let mut stmt = tx
                .prepare(SEED_BOOK_SQL)
                .db_context("Failed to prepare seed statement")?;
            for (title, author, description, category, language, pages) in SAMPLE_BOOKS {
                stmt.execute(params![title, author, description, category, language, pages])
                    .db_context("Failed to insert sample book")?;
            }
        }

        tx.commit().db_context("Failed to commit transaction")?;

        info!("Sample books inserted successfully");
        Ok(SAMPLE_BOOKS.len())
    }
}
