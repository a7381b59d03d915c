//! Catalog domain model.
//!
//! # Responsibility
//! - Define the canonical book record used by core business logic.
//! - Keep the equality notion used for deduplication explicit and narrow.
//!
//! # Invariants
//! - Every persisted book is identified by a stable, storage-assigned
//!   `BookId` that is never reused.
//! - The usage counter only grows, and only through the counted-read path.

pub mod book;
