//! Book domain model.
//!
//! # Responsibility
//! - Define the catalog record shared by the service and repository layers.
//! - Provide the title/author equality used for deduplication.
//!
//! # Invariants
//! - `id` is assigned by storage, is stable once assigned, and is never
//!   reused for another book.
//! - `count` is non-negative by construction and only ever increases.
//! - `name` and `author` are non-empty for every persisted book.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable storage-assigned identifier for a catalog record.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type BookId = i64;

/// Validation failures for book records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookValidationError {
    /// The title is empty or whitespace-only.
    EmptyName,
    /// The author is empty or whitespace-only.
    EmptyAuthor,
}

impl Display for BookValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "book name cannot be empty"),
            Self::EmptyAuthor => write!(f, "book author cannot be empty"),
        }
    }
}

impl Error for BookValidationError {}

/// Canonical catalog record.
///
/// `id` is `None` until the record has been persisted for the first time;
/// storage assigns the identifier on save and it stays fixed afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Storage-assigned identity. `None` for records not yet persisted.
    pub id: Option<BookId>,
    /// Book title.
    pub name: String,
    /// Author as a plain string; not a reference to another entity.
    pub author: String,
    /// Usage counter, incremented once per counted read.
    pub count: u32,
}

impl Book {
    /// Creates a new, not-yet-persisted book with a zero usage counter.
    pub fn new(name: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            author: author.into(),
            count: 0,
        }
    }

    /// Checks structural validity before persistence.
    ///
    /// # Errors
    /// - `EmptyName` when the title is blank.
    /// - `EmptyAuthor` when the author is blank.
    pub fn validate(&self) -> Result<(), BookValidationError> {
        if self.name.trim().is_empty() {
            return Err(BookValidationError::EmptyName);
        }
        if self.author.trim().is_empty() {
            return Err(BookValidationError::EmptyAuthor);
        }
        Ok(())
    }

    /// Returns whether two records describe the same work.
    ///
    /// # Contract
    /// - Compares exactly `(name, author)`, case-sensitively, with no
    ///   normalization.
    /// - Ignores `id` and `count`; two copies of the same work compare equal
    ///   even when their identities and counters differ.
    ///
    /// This is a deliberately narrower notion than structural equality and
    /// is meant for deduplication, not identity.
    pub fn same_title_and_author(&self, other: &Book) -> bool {
        self.author == other.author && self.name == other.name
    }
}
