use rusqlite::params;
use shelfmark_core::db::open_db_in_memory;
use shelfmark_core::{Book, BookRepository, BookService, RepoError, SqliteBookRepository};

#[test]
fn save_and_get_roundtrip_assigns_id() {
    let conn = open_db_in_memory().unwrap();
    let mut repo = SqliteBookRepository::new(&conn);

    let saved = repo.save_book(&Book::new("example 1", "author 1")).unwrap();
    let id = saved.id.unwrap();
    assert!(id > 0);

    let loaded = repo.get_book(id).unwrap().unwrap();
    assert_eq!(loaded, saved);
    assert_eq!(loaded.name, "example 1");
    assert_eq!(loaded.author, "author 1");
    assert_eq!(loaded.count, 0);
}

#[test]
fn get_book_on_absent_id_returns_none() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteBookRepository::new(&conn);

    assert_eq!(repo.get_book(404).unwrap(), None);
}

#[test]
fn author_query_roundtrip_matches_seeded_row() {
    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO books (id, name, author, cnt) VALUES (?1, ?2, ?3, ?4);",
        params![1, "example 1", "author 1", 1],
    )
    .unwrap();
    let repo = SqliteBookRepository::new(&conn);

    let books = repo.list_books_by_author("author 1").unwrap();
    assert_eq!(books.len(), 1);
    assert_eq!(books[0].id, Some(1));
    assert_eq!(books[0].name, "example 1");
    assert_eq!(books[0].author, "author 1");
    assert_eq!(books[0].count, 1);
}

#[test]
fn author_query_with_no_match_returns_empty_list() {
    let conn = open_db_in_memory().unwrap();
    let mut repo = SqliteBookRepository::new(&conn);
    repo.save_book(&Book::new("example 1", "author 1")).unwrap();

    let books = repo.list_books_by_author("author 9").unwrap();
    assert!(books.is_empty());
}

#[test]
fn list_books_returns_every_record() {
    let conn = open_db_in_memory().unwrap();
    let mut repo = SqliteBookRepository::new(&conn);
    let first = repo.save_book(&Book::new("example 1", "author 1")).unwrap();
    let second = repo.save_book(&Book::new("example 2", "author 2")).unwrap();

    let books = repo.list_books().unwrap();
    assert_eq!(books, vec![first, second]);
}

#[test]
fn save_with_explicit_id_upserts_missing_row() {
    let conn = open_db_in_memory().unwrap();
    let mut repo = SqliteBookRepository::new(&conn);

    let mut book = Book::new("example 1", "author 1");
    book.id = Some(10);
    book.count = 4;
    let saved = repo.save_book(&book).unwrap();
    assert_eq!(saved, book);

    let loaded = repo.get_book(10).unwrap().unwrap();
    assert_eq!(loaded, book);
}

#[test]
fn save_with_existing_id_updates_the_row() {
    let conn = open_db_in_memory().unwrap();
    let mut repo = SqliteBookRepository::new(&conn);

    let mut saved = repo.save_book(&Book::new("example 1", "author 1")).unwrap();
    saved.name = "example 1 (revised)".to_string();
    saved.count = 2;
    repo.save_book(&saved).unwrap();

    let loaded = repo.get_book(saved.id.unwrap()).unwrap().unwrap();
    assert_eq!(loaded.name, "example 1 (revised)");
    assert_eq!(loaded.count, 2);

    let all = repo.list_books().unwrap();
    assert_eq!(all.len(), 1);
}

#[test]
fn assigned_ids_are_monotonic_and_never_reused() {
    let conn = open_db_in_memory().unwrap();
    let mut repo = SqliteBookRepository::new(&conn);

    let first = repo.save_book(&Book::new("example 1", "author 1")).unwrap();
    let second = repo.save_book(&Book::new("example 2", "author 2")).unwrap();
    assert!(second.id.unwrap() > first.id.unwrap());

    conn.execute("DELETE FROM books WHERE id = ?1;", params![second.id])
        .unwrap();
    let third = repo.save_book(&Book::new("example 3", "author 3")).unwrap();
    assert!(third.id.unwrap() > second.id.unwrap());
}

#[test]
fn save_rejects_invalid_book_before_touching_sql() {
    let conn = open_db_in_memory().unwrap();
    let mut repo = SqliteBookRepository::new(&conn);

    let err = repo.save_book(&Book::new("", "author 1")).unwrap_err();
    assert!(matches!(err, RepoError::Validation(_)));
    assert!(repo.list_books().unwrap().is_empty());
}

#[test]
fn out_of_range_persisted_count_is_rejected_not_masked() {
    let conn = open_db_in_memory().unwrap();
    let oversized = i64::from(u32::MAX) + 1;
    conn.execute(
        "INSERT INTO books (id, name, author, cnt) VALUES (1, 'example 1', 'author 1', ?1);",
        params![oversized],
    )
    .unwrap();
    let repo = SqliteBookRepository::new(&conn);

    let err = repo.get_book(1).unwrap_err();
    assert!(matches!(err, RepoError::InvalidData(message) if message.contains("books.cnt")));
}

#[test]
fn fetch_book_through_service_increments_the_stored_counter() {
    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO books (id, name, author, cnt) VALUES (1, 'example 1', 'author 1', 1);",
        [],
    )
    .unwrap();
    let mut service = BookService::new(SqliteBookRepository::new(&conn));

    let fetched = service.fetch_book(1).unwrap();
    assert_eq!(fetched.count, 2);

    let stored: i64 = conn
        .query_row("SELECT cnt FROM books WHERE id = 1;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(stored, 2);
}
