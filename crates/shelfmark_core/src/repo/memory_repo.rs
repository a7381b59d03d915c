//! In-memory book repository.
//!
//! # Responsibility
//! - Provide a conforming `BookRepository` with no storage engine attached,
//!   for tests and for hosts embedding the core without SQLite.
//!
//! # Invariants
//! - Assigned ids are monotonic and never reused, matching the SQLite
//!   implementation's identity guarantees.
//! - Write paths enforce `Book::validate()` exactly like the SQLite path.

use crate::model::book::{Book, BookId};
use crate::repo::book_repo::{BookRepository, RepoResult};

/// Vec-backed repository. Lists return records in insertion order, which
/// callers must not rely on.
#[derive(Debug)]
pub struct MemoryBookRepository {
    books: Vec<Book>,
    next_id: BookId,
}

impl Default for MemoryBookRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBookRepository {
    pub fn new() -> Self {
        Self {
            books: Vec::new(),
            next_id: 1,
        }
    }

    /// Number of stored records, mainly useful in tests.
    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

impl BookRepository for MemoryBookRepository {
    fn list_books(&self) -> RepoResult<Vec<Book>> {
        Ok(self.books.clone())
    }

    fn list_books_by_author(&self, author: &str) -> RepoResult<Vec<Book>> {
        Ok(self
            .books
            .iter()
            .filter(|book| book.author == author)
            .cloned()
            .collect())
    }

    fn get_book(&self, id: BookId) -> RepoResult<Option<Book>> {
        Ok(self
            .books
            .iter()
            .find(|book| book.id == Some(id))
            .cloned())
    }

    fn save_book(&mut self, book: &Book) -> RepoResult<Book> {
        book.validate()?;

        let mut saved = book.clone();
        let id = match book.id {
            None => {
                let id = self.next_id;
                saved.id = Some(id);
                id
            }
            Some(id) => id,
        };

        // Keep future assignments above every id seen, including explicit ones.
        self.next_id = self.next_id.max(id.saturating_add(1));

        match self.books.iter_mut().find(|stored| stored.id == Some(id)) {
            Some(stored) => *stored = saved.clone(),
            None => self.books.push(saved.clone()),
        }

        Ok(saved)
    }
}
