//! # Book Repository
//!
//! Database operations for book records - the record store at the center of
//! Libris.
//!
//! ## Result Convention
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │              One consistent three-way convention                    │
//! │                                                                     │
//! │  insert / update / delete → DbResult<u64>                          │
//! │    Ok(1)   statement applied to a row                              │
//! │    Ok(0)   no row matched the code (NOT an error)                  │
//! │    Err(e)  real failure, with a kind (duplicate, connectivity, …)  │
//! │                                                                     │
//! │  get_by_code → DbResult<Option<Book>>                              │
//! │    Ok(Some) row found and mapped                                   │
//! │    Ok(None) no row under that code (NOT an error)                  │
//! │    Err(e)   real failure                                           │
//! │                                                                     │
//! │  The row count lets a caller distinguish "no matching row" from    │
//! │  "operation applied" without a second existence check, and the     │
//! │  error kind tells a duplicate key from a dropped connection -      │
//! │  a single failure sentinel could not.                              │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each operation is a single autocommit-scoped statement; delete is
//! idempotent in result semantics (second delete of the same code reports
//! `Ok(0)`, never an error).

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use libris_core::Book;

// Fixed statement texts - values pass only as bound parameters.
const INSERT: &str = "INSERT INTO books (code, name, price, quantity, author, edition, isbn) \
     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)";

const SELECT_BY_CODE: &str =
    "SELECT code, name, price, quantity, author, edition, isbn FROM books WHERE code = ?1";

const UPDATE: &str = "UPDATE books SET name = ?2, price = ?3, quantity = ?4, author = ?5, \
     edition = ?6, isbn = ?7 WHERE code = ?1";

const DELETE: &str = "DELETE FROM books WHERE code = ?1";

const LIST: &str =
    "SELECT code, name, price, quantity, author, edition, isbn FROM books ORDER BY name LIMIT ?1";

/// Repository for book record operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = db.books();
///
/// // Insert a record
/// let inserted = repo.insert(&book).await?;
///
/// // Look it up again
/// let found = repo.get_by_code(&book.code).await?;
/// ```
#[derive(Debug, Clone)]
pub struct BookRepository {
    pool: SqlitePool,
}

impl BookRepository {
    /// Creates a new BookRepository.
    pub fn new(pool: SqlitePool) -> Self {
        BookRepository { pool }
    }

    /// Inserts a new book record.
    ///
    /// ## Arguments
    /// * `book` - Fully populated record; `code` must be unused
    ///
    /// ## Returns
    /// * `Ok(1)` - Row inserted
    /// * `Err(DbError::UniqueViolation)` - Code already exists
    pub async fn insert(&self, book: &Book) -> DbResult<u64> {
        debug!(code = %book.code, "Inserting book");

        let result = sqlx::query(INSERT)
            .bind(&book.code)
            .bind(&book.name)
            .bind(book.price)
            .bind(book.quantity)
            .bind(&book.author)
            .bind(&book.edition)
            .bind(&book.isbn)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Gets a book record by its code.
    ///
    /// ## Returns
    /// * `Ok(Some(Book))` - Record found, all seven columns mapped
    /// * `Ok(None)` - No record under that code
    pub async fn get_by_code(&self, code: &str) -> DbResult<Option<Book>> {
        let book = sqlx::query_as::<_, Book>(SELECT_BY_CODE)
            .bind(code)
            .fetch_optional(&self.pool)
            .await?;

        debug!(code = %code, found = book.is_some(), "Book lookup");
        Ok(book)
    }

    /// Updates the six non-key columns of an existing record.
    ///
    /// ## Arguments
    /// * `book` - Record whose `code` identifies the target row
    ///
    /// ## Returns
    /// * `Ok(1)` - Row updated
    /// * `Ok(0)` - No row matched the code
    pub async fn update(&self, book: &Book) -> DbResult<u64> {
        debug!(code = %book.code, "Updating book");

        let result = sqlx::query(UPDATE)
            .bind(&book.code)
            .bind(&book.name)
            .bind(book.price)
            .bind(book.quantity)
            .bind(&book.author)
            .bind(&book.edition)
            .bind(&book.isbn)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Deletes a book record by its code.
    ///
    /// Idempotent in result semantics: deleting an already-deleted code
    /// legitimately reports `Ok(0)`.
    ///
    /// ## Returns
    /// * `Ok(1)` - Row deleted
    /// * `Ok(0)` - No row matched the code
    pub async fn delete(&self, code: &str) -> DbResult<u64> {
        debug!(code = %code, "Deleting book");

        let result = sqlx::query(DELETE)
            .bind(code)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Lists book records ordered by name.
    ///
    /// ## Arguments
    /// * `limit` - Maximum results to return
    pub async fn list(&self, limit: u32) -> DbResult<Vec<Book>> {
        let books = sqlx::query_as::<_, Book>(LIST)
            .bind(limit)
            .fetch_all(&self.pool)
            .await?;

        debug!(count = books.len(), "Listed books");
        Ok(books)
    }

    /// Counts stored book records (for diagnostics and seeding).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM books")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DbError;
    use crate::pool::{Database, DbConfig};

    async fn test_db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    fn sample_book() -> Book {
        Book::new(
            "0000000004",
            "Sample",
            15.99,
            10,
            "A. Writer",
            "First",
            "9780000000001",
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_insert_then_get_round_trips_all_fields() {
        let db = test_db().await;
        let repo = db.books();
        let book = sample_book();

        assert_eq!(repo.insert(&book).await.unwrap(), 1);

        let found = repo.get_by_code("0000000004").await.unwrap().unwrap();
        assert_eq!(found, book);
    }

    #[tokio::test]
    async fn test_get_missing_code_returns_none() {
        let db = test_db().await;
        let repo = db.books();

        let found = repo.get_by_code("no-such-code").await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_insert_duplicate_code_is_unique_violation() {
        let db = test_db().await;
        let repo = db.books();
        let book = sample_book();

        repo.insert(&book).await.unwrap();
        let err = repo.insert(&book).await.unwrap_err();

        assert!(matches!(err, DbError::UniqueViolation { .. }));
    }

    #[tokio::test]
    async fn test_update_existing_row() {
        let db = test_db().await;
        let repo = db.books();
        let mut book = sample_book();

        repo.insert(&book).await.unwrap();

        book.set_price(18.50).unwrap();
        book.name = "Sample (revised)".to_string();
        assert_eq!(repo.update(&book).await.unwrap(), 1);

        let found = repo.get_by_code(&book.code).await.unwrap().unwrap();
        assert_eq!(found.price, 18.50);
        assert_eq!(found.name, "Sample (revised)");
    }

    #[tokio::test]
    async fn test_update_missing_code_returns_zero() {
        let db = test_db().await;
        let repo = db.books();

        let book = sample_book();
        assert_eq!(repo.update(&book).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_delete_is_idempotent_in_result_semantics() {
        let db = test_db().await;
        let repo = db.books();
        let book = sample_book();

        repo.insert(&book).await.unwrap();

        assert_eq!(repo.delete("0000000004").await.unwrap(), 1);
        assert_eq!(repo.delete("0000000004").await.unwrap(), 0);
        assert!(repo.get_by_code("0000000004").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_full_operator_scenario() {
        // insert → select → update → select → delete → delete
        let db = test_db().await;
        let repo = db.books();
        let mut book = sample_book();

        assert_eq!(repo.insert(&book).await.unwrap(), 1);
        assert_eq!(repo.get_by_code("0000000004").await.unwrap().unwrap(), book);

        book.set_price(18.50).unwrap();
        assert_eq!(repo.update(&book).await.unwrap(), 1);
        let found = repo.get_by_code("0000000004").await.unwrap().unwrap();
        assert_eq!(found.price, 18.50);

        assert_eq!(repo.delete("0000000004").await.unwrap(), 1);
        assert_eq!(repo.delete("0000000004").await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_list_orders_by_name() {
        let db = test_db().await;
        let repo = db.books();

        for (code, name) in [("1", "Zulu"), ("2", "Alpha"), ("3", "Mike")] {
            let book = Book::new(code, name, 1.0, 1, "A", "First", "9780000000001").unwrap();
            repo.insert(&book).await.unwrap();
        }

        let books = repo.list(10).await.unwrap();
        let names: Vec<&str> = books.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["Alpha", "Mike", "Zulu"]);

        assert_eq!(repo.list(2).await.unwrap().len(), 2);
        assert_eq!(repo.count().await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_check_constraint_backs_core_invariant() {
        let db = test_db().await;
        let repo = db.books();

        // A hand-built struct literal can bypass Book::new; the schema
        // CHECK is the last line of defense.
        let bad = Book {
            code: "bad".to_string(),
            name: "Bad".to_string(),
            price: -1.0,
            quantity: 1,
            author: "A".to_string(),
            edition: "First".to_string(),
            isbn: "9780000000001".to_string(),
        };

        let err = repo.insert(&bad).await.unwrap_err();
        assert!(matches!(err, DbError::CheckViolation { .. }));
    }
}
