//! Book repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable catalog read/write APIs over the `books` table.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Write paths must call `Book::validate()` before SQL mutations.
//! - Read paths must reject invalid persisted state instead of masking it.
//! - A missing row is an `Ok(None)` result, never a zero-valued record.

use crate::db::DbError;
use crate::model::book::{Book, BookId, BookValidationError};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const BOOK_SELECT_SQL: &str = "SELECT id, name, author, cnt FROM books";

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for catalog persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(BookValidationError),
    Db(DbError),
    NotFound(BookId),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "book not found: {id}"),
            Self::InvalidData(message) => write!(f, "invalid persisted book data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::NotFound(_) => None,
            Self::InvalidData(_) => None,
        }
    }
}

impl From<BookValidationError> for RepoError {
    fn from(value: BookValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Persistence contract consumed by the service layer.
///
/// Implementations may back this with any engine; callers must not assume
/// any ordering from the list operations.
pub trait BookRepository {
    /// Returns every known book.
    fn list_books(&self) -> RepoResult<Vec<Book>>;
    /// Returns books whose author matches exactly. Zero matches is an empty
    /// list, not an error.
    fn list_books_by_author(&self, author: &str) -> RepoResult<Vec<Book>>;
    /// Gets one book by its stable id. Returns `Ok(None)` when absent.
    fn get_book(&self, id: BookId) -> RepoResult<Option<Book>>;
    /// Upserts the given record and returns it as persisted, including the
    /// storage-assigned id for first-time saves.
    fn save_book(&mut self, book: &Book) -> RepoResult<Book>;
}

/// SQLite-backed book repository.
pub struct SqliteBookRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteBookRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl BookRepository for SqliteBookRepository<'_> {
    fn list_books(&self) -> RepoResult<Vec<Book>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{BOOK_SELECT_SQL} ORDER BY id ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut books = Vec::new();

        while let Some(row) = rows.next()? {
            books.push(parse_book_row(row)?);
        }

        Ok(books)
    }

    fn list_books_by_author(&self, author: &str) -> RepoResult<Vec<Book>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{BOOK_SELECT_SQL} WHERE author = ?1 ORDER BY id ASC;"))?;
        let mut rows = stmt.query(params![author])?;
        let mut books = Vec::new();

        while let Some(row) = rows.next()? {
            books.push(parse_book_row(row)?);
        }

        Ok(books)
    }

    fn get_book(&self, id: BookId) -> RepoResult<Option<Book>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{BOOK_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query(params![id])?;

        if let Some(row) = rows.next()? {
            return Ok(Some(parse_book_row(row)?));
        }

        Ok(None)
    }

    fn save_book(&mut self, book: &Book) -> RepoResult<Book> {
        book.validate()?;

        match book.id {
            None => {
                self.conn.execute(
                    "INSERT INTO books (name, author, cnt) VALUES (?1, ?2, ?3);",
                    params![book.name.as_str(), book.author.as_str(), book.count],
                )?;

                let mut saved = book.clone();
                saved.id = Some(self.conn.last_insert_rowid());
                Ok(saved)
            }
            Some(id) => {
                self.conn.execute(
                    "INSERT INTO books (id, name, author, cnt) VALUES (?1, ?2, ?3, ?4)
                     ON CONFLICT (id) DO UPDATE SET
                        name = excluded.name,
                        author = excluded.author,
                        cnt = excluded.cnt;",
                    params![id, book.name.as_str(), book.author.as_str(), book.count],
                )?;

                Ok(book.clone())
            }
        }
    }
}

fn parse_book_row(row: &Row<'_>) -> RepoResult<Book> {
    let raw_count: i64 = row.get("cnt")?;
    let count = u32::try_from(raw_count).map_err(|_| {
        RepoError::InvalidData(format!("invalid usage count `{raw_count}` in books.cnt"))
    })?;

    let book = Book {
        id: Some(row.get("id")?),
        name: row.get("name")?,
        author: row.get("author")?,
        count,
    };
    book.validate()?;
    Ok(book)
}
