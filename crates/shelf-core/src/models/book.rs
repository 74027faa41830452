//! Book model definition.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::ReadingStatus;

/// A catalog entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Book {
    /// Unique identifier assigned by the store
    pub id: u64,

    /// Title of the book
    pub title: String,

    /// Author of the book
    pub author: String,

    /// Free-form summary of the book
    pub description: Option<String>,

    /// Category such as "Hadith" or "Tafsir"
    pub category: Option<String>,

    /// Language the copy is written in
    pub language: Option<String>,

    /// Page count
    pub pages: Option<u32>,

    /// Reading progress
    #[serde(default)]
    pub reading_status: ReadingStatus,

    /// Timestamp when the book was added (UTC), never changes afterwards
    pub date_added: Timestamp,

    /// Personal notes about the book
    pub notes: Option<String>,
}
