//! Catalog use-case service.
//!
//! # Responsibility
//! - Provide stable read and counted-read entry points for core callers.
//! - Delegate persistence to repository implementations.
//!
//! # Invariants
//! - Service APIs never bypass repository validation/persistence contracts.
//! - The service layer remains storage-agnostic.
//! - Read operations return the repository's sequence unchanged.

use crate::model::book::{Book, BookId};
use crate::repo::book_repo::{BookRepository, RepoError, RepoResult};

/// Use-case service wrapper for catalog operations.
///
/// Owns its repository exclusively; the binding is fixed at construction
/// for the service's lifetime.
pub struct BookService<R: BookRepository> {
    repo: R,
}

impl<R: BookRepository> BookService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Lists every known book.
    ///
    /// # Contract
    /// - Passes the repository's sequence and errors through unchanged; no
    ///   transformation, no filtering, no retry.
    pub fn list_books(&self) -> RepoResult<Vec<Book>> {
        self.repo.list_books()
    }

    /// Lists books whose author matches exactly.
    ///
    /// # Contract
    /// - Same pass-through contract as `list_books`.
    /// - Zero matches is an empty list, not an error.
    pub fn list_books_by_author(&self, author: &str) -> RepoResult<Vec<Book>> {
        self.repo.list_books_by_author(author)
    }

    /// Fetches one book by id, counting the read.
    ///
    /// # Contract
    /// - Increments the usage counter by exactly one and persists the
    ///   updated record before returning it.
    /// - Returns `RepoError::NotFound` for an absent id.
    /// - A save failure is propagated; the caller never receives an
    ///   incremented-but-unpersisted record.
    ///
    /// The read-modify-write is not wrapped in a transaction; concurrent
    /// fetches of the same id can lose an increment (last save wins). Hosts
    /// serving concurrent traffic must serialize per-id access themselves.
    pub fn fetch_book(&mut self, id: BookId) -> RepoResult<Book> {
        let mut book = self
            .repo
            .get_book(id)?
            .ok_or(RepoError::NotFound(id))?;
        book.count = book.count.saturating_add(1);
        self.repo.save_book(&book)
    }

    /// Upserts a book record through the repository.
    ///
    /// Returns the record as persisted, including a storage-assigned id for
    /// first-time saves.
    pub fn save_book(&mut self, book: &Book) -> RepoResult<Book> {
        self.repo.save_book(book)
    }
}
