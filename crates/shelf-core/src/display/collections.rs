//! Collection wrapper types for displaying groups of books.

use std::{fmt, ops::Index};

use crate::models::Book;

/// Newtype wrapper for displaying a list of books in compact form.
///
/// # Examples
///
/// ```rust
/// use shelf_core::display::Books;
///
/// let books = Books(Vec::new());
/// assert_eq!(books.to_string(), "No books found.\n");
/// ```
pub struct Books(pub Vec<Book>);

impl Books {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of books in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get an iterator over the books.
    pub fn iter(&self) -> std::slice::Iter<'_, Book> {
        self.0.iter()
    }
}

impl Index<usize> for Books {
    type Output = Book;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for Books {
    type Item = Book;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Books {
    type Item = &'a Book;
    type IntoIter = std::slice::Iter<'a, Book>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Books {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No books found.");
        }

        for book in &self.0 {
            writeln!(f, "## {} (ID: {})", book.title, book.id)?;
            writeln!(f)?;
            writeln!(f, "- **Author**: {}", book.author)?;
            writeln!(f, "- **Status**: {}", book.reading_status.label())?;
            if let Some(category) = &book.category {
                writeln!(f, "- **Category**: {category}")?;
            }
            if let Some(language) = &book.language {
                writeln!(f, "- **Language**: {language}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
