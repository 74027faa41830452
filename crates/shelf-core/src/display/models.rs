//! Display implementations for domain models.
//!
//! Markdown output for the terminal: a header with the book ID and title,
//! a metadata list, then the description and notes as paragraphs.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::models::{Book, CatalogStats, ReadingStatus};

impl fmt::Display for ReadingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.title)?;
        writeln!(f)?;

        writeln!(f, "- Author: {}", self.author)?;
        writeln!(f, "- Status: {}", self.reading_status.label())?;
        if let Some(category) = &self.category {
            writeln!(f, "- Category: {category}")?;
        }
        if let Some(language) = &self.language {
            writeln!(f, "- Language: {language}")?;
        }
        if let Some(pages) = self.pages {
            writeln!(f, "- Pages: {pages}")?;
        }
        writeln!(f, "- Added: {}", LocalDateTime(&self.date_added))?;

        if let Some(desc) = &self.description {
            writeln!(f)?;
            writeln!(f, "{desc}")?;
        }

        if let Some(notes) = &self.notes {
            writeln!(f, "\n## Notes")?;
            writeln!(f)?;
            writeln!(f, "{notes}")?;
        }

        Ok(())
    }
}

impl fmt::Display for CatalogStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Reading statistics")?;
        writeln!(f)?;
        writeln!(f, "- Total: {}", self.total)?;
        for status in ReadingStatus::ALL {
            writeln!(f, "- {}: {}", status.label(), self.count(status))?;
        }
        Ok(())
    }
}
