//! Browser view-model and HTML rendering.
//!
//! [`Shelf`] is the application state behind the browser UI: the full list
//! fetched from the API plus the current filter criteria. The visible
//! subset is never edited directly; it is recomputed from
//! [`BookFilter::matches`] whenever either input changes. The same logic
//! ships to the browser in [`APP_JS`], and [`html`] renders the initial page
//! on the server.

pub mod html;

use crate::models::{Book, BookFilter, CatalogStats, ReadingStatus};

/// Browser runtime served at `/assets/app.js`.
pub const APP_JS: &str = include_str!("../../assets/app.js");

/// Stylesheet served at `/assets/style.css`.
pub const STYLE_CSS: &str = include_str!("../../assets/style.css");

/// Fetched books, current criteria, and the filtered view derived from them.
#[derive(Debug, Clone, Default)]
pub struct Shelf {
    books: Vec<Book>,
    criteria: BookFilter,
    visible: Vec<usize>,
}

impl Shelf {
    /// Creates a view over `books` with no criteria applied.
    pub fn new(books: Vec<Book>) -> Self {
        Self::with_criteria(books, BookFilter::default())
    }

    /// Creates a view over `books` filtered by `criteria`.
    pub fn with_criteria(books: Vec<Book>, criteria: BookFilter) -> Self {
        let mut shelf = Self {
            books,
            criteria,
            visible: Vec::new(),
        };
        shelf.refilter();
        shelf
    }

    /// Replaces the filter criteria.
    pub fn set_criteria(&mut self, criteria: BookFilter) {
        self.criteria = criteria;
        self.refilter();
    }

    /// Replaces the full list, e.g. after a reload.
    ///
    /// Mirrors `replaceBooks` in [`APP_JS`]; the server renders once and the
    /// browser owns later reloads.
    pub fn replace_books(&mut self, books: Vec<Book>) {
        self.books = books;
        self.refilter();
    }

    /// Applies a status change that the server has already accepted.
    ///
    /// Returns false when the book is not part of the fetched list. Mirrors
    /// `applyStatus` in [`APP_JS`].
    pub fn apply_status(&mut self, id: u64, status: ReadingStatus) -> bool {
        let Some(book) = self.books.iter_mut().find(|b| b.id == id) else {
            return false;
        };
        book.reading_status = status;
        self.refilter();
        true
    }

    /// Current criteria.
    pub fn criteria(&self) -> &BookFilter {
        &self.criteria
    }

    /// Every fetched book, in fetch order.
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Books passing the current criteria, in fetch order.
    pub fn visible(&self) -> impl Iterator<Item = &Book> {
        self.visible.iter().map(|&i| &self.books[i])
    }

    /// Number of books passing the current criteria.
    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }

    /// Counts over the full fetched list.
    pub fn stats(&self) -> CatalogStats {
        CatalogStats::from_books(&self.books)
    }

    /// Distinct categories present in the fetched list, sorted.
    pub fn categories(&self) -> Vec<&str> {
        distinct(self.books.iter().filter_map(|b| b.category.as_deref()))
    }

    /// Distinct languages present in the fetched list, sorted.
    pub fn languages(&self) -> Vec<&str> {
        distinct(self.books.iter().filter_map(|b| b.language.as_deref()))
    }

    fn refilter(&mut self) {
        self.visible = self
            .books
            .iter()
            .enumerate()
            .filter(|(_, book)| self.criteria.matches(book))
            .map(|(i, _)| i)
            .collect();
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut values: Vec<&str> = values.collect();
    values.sort_unstable();
    values.dedup();
    values
}
