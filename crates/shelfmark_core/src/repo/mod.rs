//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the persistence contract consumed by the service layer.
//! - Isolate SQLite query details from service/business orchestration.
//!
//! # Invariants
//! - Repository writes must enforce `Book::validate()` before persistence.
//! - Repository APIs return semantic errors (`NotFound`) in addition to DB
//!   transport errors.

pub mod book_repo;
pub mod memory_repo;
