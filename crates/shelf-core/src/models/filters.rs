//! Filter criteria for querying books.

use super::{Book, ReadingStatus};
use crate::{error::CatalogError, params::ListBooks, Result};

/// Filter options for querying books.
///
/// The same criteria drive the SQL query in [`crate::db`] and the in-memory
/// view in [`crate::view::Shelf`]; [`BookFilter::matches`] is the reference
/// predicate for both.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookFilter {
    /// Case-insensitive substring over title, author and description
    pub search: Option<String>,

    /// Exact category match
    pub category: Option<String>,

    /// Exact reading status match
    pub status: Option<ReadingStatus>,

    /// Exact language match
    pub language: Option<String>,
}

impl BookFilter {
    /// Returns true when no criterion is set.
    pub fn is_empty(&self) -> bool {
        self.search.is_none()
            && self.category.is_none()
            && self.status.is_none()
            && self.language.is_none()
    }

    /// Returns true when the book passes every criterion that is set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jiff::Timestamp;
    /// use shelf_core::models::{Book, BookFilter, ReadingStatus};
    ///
    /// let book = Book {
    ///     id: 1,
    ///     title: "Sahih Muslim".to_string(),
    ///     author: "Imam Muslim".to_string(),
    ///     description: None,
    ///     category: Some("Hadith".to_string()),
    ///     language: Some("Arabic".to_string()),
    ///     pages: Some(1500),
    ///     reading_status: ReadingStatus::NotStarted,
    ///     date_added: Timestamp::UNIX_EPOCH,
    ///     notes: None,
    /// };
    ///
    /// let filter = BookFilter {
    ///     search: Some("MUSLIM".to_string()),
    ///     category: Some("Hadith".to_string()),
    ///     ..Default::default()
    /// };
    /// assert!(filter.matches(&book));
    /// ```
    pub fn matches(&self, book: &Book) -> bool {
        self.matches_search(book)
            && self
                .category
                .as_ref()
                .is_none_or(|c| book.category.as_ref() == Some(c))
            && self.status.is_none_or(|s| book.reading_status == s)
            && self
                .language
                .as_ref()
                .is_none_or(|l| book.language.as_ref() == Some(l))
    }

    fn matches_search(&self, book: &Book) -> bool {
        let Some(term) = self.search.as_deref() else {
            return true;
        };
        let term = term.to_lowercase();
        book.title.to_lowercase().contains(&term)
            || book.author.to_lowercase().contains(&term)
            || book
                .description
                .as_deref()
                .is_some_and(|d| d.to_lowercase().contains(&term))
    }
}

impl TryFrom<&ListBooks> for BookFilter {
    type Error = CatalogError;

    /// Convert raw list parameters into typed criteria.
    ///
    /// Empty strings count as unset; an unknown status is rejected.
    fn try_from(params: &ListBooks) -> Result<Self> {
        let status = match non_blank(params.status.as_deref()) {
            Some(raw) => Some(raw.parse::<ReadingStatus>().map_err(|reason| {
                CatalogError::invalid_input("status").with_reason(reason)
            })?),
            None => None,
        };

        Ok(Self {
            search: non_blank(params.search.as_deref()).map(String::from),
            category: non_blank(params.category.as_deref()).map(String::from),
            status,
            language: non_blank(params.language.as_deref()).map(String::from),
        })
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
