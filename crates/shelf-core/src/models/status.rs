//! Reading status enumeration for books.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of reading statuses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum ReadingStatus {
    /// Book has not been opened yet
    #[default]
    NotStarted,

    /// Book is being read
    InProgress,

    /// Book has been read to the end
    Completed,
}

impl ReadingStatus {
    /// Every status, in the order the UI presents them.
    pub const ALL: [ReadingStatus; 3] = [
        ReadingStatus::NotStarted,
        ReadingStatus::InProgress,
        ReadingStatus::Completed,
    ];

    /// Convert to the database and wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ReadingStatus::NotStarted => "not_started",
            ReadingStatus::InProgress => "in_progress",
            ReadingStatus::Completed => "completed",
        }
    }

    /// Human readable label.
    ///
    /// ```rust
    /// use shelf_core::models::ReadingStatus;
    ///
    /// assert_eq!(ReadingStatus::InProgress.label(), "In Progress");
    /// ```
    pub fn label(&self) -> &'static str {
        match self {
            ReadingStatus::NotStarted => "Not Started",
            ReadingStatus::InProgress => "In Progress",
            ReadingStatus::Completed => "Completed",
        }
    }

    /// CSS class used by the status selector on a book card.
    pub fn css_class(&self) -> &'static str {
        match self {
            ReadingStatus::NotStarted => "status-not-started",
            ReadingStatus::InProgress => "status-in-progress",
            ReadingStatus::Completed => "status-completed",
        }
    }
}

impl FromStr for ReadingStatus {
    type Err = String;

    /// Only the exact wire strings are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "not_started" => Ok(ReadingStatus::NotStarted),
            "in_progress" => Ok(ReadingStatus::InProgress),
            "completed" => Ok(ReadingStatus::Completed),
            _ => Err(format!("Invalid reading status: {s}")),
        }
    }
}
