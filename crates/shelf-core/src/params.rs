//! Parameter structures for catalog operations
//!
//! These are the request schemas shared by every interface (CLI, HTTP).
//! Interface layers deserialize or parse user input into these types and
//! hand them to [`crate::Catalog`]; validation happens here, at the
//! boundary, before anything touches the store.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │   JSON bodies   │    │  Core Params    │
//! │  (clap derives) │───▶│ (serde derives) │───▶│  + validation   │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::{error::CatalogError, models::ReadingStatus, Result};

/// Language recorded for new books that do not name one.
pub const DEFAULT_LANGUAGE: &str = "Arabic";

/// Generic parameters for operations requiring just an ID.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Id {
    /// The ID of the book to operate on
    pub id: u64,
}

/// Writable fields of a book, as submitted by a client.
///
/// `title` and `author` default to empty so that a request omitting them
/// fails validation instead of failing to decode.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookFields {
    /// Title of the book (required)
    #[serde(default)]
    pub title: String,
    /// Author of the book (required)
    #[serde(default)]
    pub author: String,
    /// Optional summary
    #[serde(default)]
    pub description: Option<String>,
    /// Optional category
    #[serde(default)]
    pub category: Option<String>,
    /// Optional language
    #[serde(default)]
    pub language: Option<String>,
    /// Optional page count, must be positive
    #[serde(default)]
    pub pages: Option<i64>,
    /// Optional personal notes
    #[serde(default)]
    pub notes: Option<String>,
}

/// Book fields that passed validation and normalisation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidBook {
    pub title: String,
    pub author: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub language: Option<String>,
    pub pages: Option<u32>,
    pub notes: Option<String>,
}

impl BookFields {
    /// Validate and normalise the fields.
    ///
    /// Title and author are trimmed and must not be empty. Blank optional
    /// strings become `None`. Pages must be a positive integer.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shelf_core::params::BookFields;
    ///
    /// let fields = BookFields {
    ///     title: "  Sahih Muslim ".to_string(),
    ///     author: "Imam Muslim".to_string(),
    ///     description: Some("   ".to_string()),
    ///     ..Default::default()
    /// };
    /// let book = fields.validate().unwrap();
    /// assert_eq!(book.title, "Sahih Muslim");
    /// assert_eq!(book.description, None);
    ///
    /// assert!(BookFields::default().validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<ValidBook> {
        let title = required("title", &self.title)?;
        let author = required("author", &self.author)?;

        let pages = match self.pages {
            None => None,
            Some(pages) if pages <= 0 => {
                return Err(CatalogError::invalid_input("pages")
                    .with_reason("must be a positive integer"));
            }
            Some(pages) => Some(u32::try_from(pages).map_err(|_| {
                CatalogError::invalid_input("pages").with_reason("is too large")
            })?),
        };

        Ok(ValidBook {
            title,
            author,
            description: optional(self.description.as_deref()),
            category: optional(self.category.as_deref()),
            language: optional(self.language.as_deref()),
            pages,
            notes: optional(self.notes.as_deref()),
        })
    }

    /// Validate for insertion: like [`BookFields::validate`], then fill in
    /// [`DEFAULT_LANGUAGE`] when no language was given.
    pub fn validate_new(&self) -> Result<ValidBook> {
        let mut book = self.validate()?;
        if book.language.is_none() {
            book.language = Some(DEFAULT_LANGUAGE.to_string());
        }
        Ok(book)
    }
}

fn required(field: &str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CatalogError::invalid_input(field).with_reason("is required"));
    }
    Ok(trimmed.to_string())
}

fn optional(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(String::from)
}

/// Parameters for replacing every mutable field of a book.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReplaceBook {
    /// ID of the book to overwrite
    pub id: u64,
    /// New field values
    #[serde(flatten)]
    pub fields: BookFields,
}

/// Parameters for changing only the reading status.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateStatus {
    /// ID of the book to update
    pub id: u64,
    /// New status as received (`not_started`, `in_progress`, `completed`)
    #[serde(default)]
    pub reading_status: String,
}

impl UpdateStatus {
    /// Parse the requested status, rejecting anything outside the enum.
    pub fn status(&self) -> Result<ReadingStatus> {
        self.reading_status
            .parse::<ReadingStatus>()
            .map_err(|_| {
                CatalogError::invalid_input("reading_status").with_reason("Invalid reading status")
            })
    }
}

/// Parameters for listing books. Mirrors the list query string.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListBooks {
    /// Substring matched against title, author and description
    #[serde(default)]
    pub search: Option<String>,
    /// Exact category
    #[serde(default)]
    pub category: Option<String>,
    /// Exact reading status
    #[serde(default)]
    pub status: Option<String>,
    /// Exact language
    #[serde(default)]
    pub language: Option<String>,
}
