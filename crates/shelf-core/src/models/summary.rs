//! Aggregate counts over the catalog.

use serde::{Deserialize, Serialize};

use super::{Book, ReadingStatus};

/// Number of books overall and per reading status.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogStats {
    /// Number of books in the catalog
    pub total: u64,
    /// Books marked as completed
    pub completed: u64,
    /// Books currently being read
    pub in_progress: u64,
    /// Books not started yet
    pub not_started: u64,
}

impl CatalogStats {
    /// Tally a list of books held in memory.
    pub fn from_books<'a, I>(books: I) -> Self
    where
        I: IntoIterator<Item = &'a Book>,
    {
        books.into_iter().fold(Self::default(), |mut stats, book| {
            stats.total += 1;
            match book.reading_status {
                ReadingStatus::Completed => stats.completed += 1,
                ReadingStatus::InProgress => stats.in_progress += 1,
                ReadingStatus::NotStarted => stats.not_started += 1,
            }
            stats
        })
    }

    /// Count for a single status bucket.
    pub fn count(&self, status: ReadingStatus) -> u64 {
        match status {
            ReadingStatus::NotStarted => self.not_started,
            ReadingStatus::InProgress => self.in_progress,
            ReadingStatus::Completed => self.completed,
        }
    }
}
