//! # Book Record
//!
//! The single entity Libris manages.
//!
//! ## Type Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                           Book                                      │
//! │                                                                     │
//! │  Key       code      (String)  ← lookup / update / delete key      │
//! │  Product   name      (String)                                      │
//! │            price     (f64)     invariant: >= 0                     │
//! │            quantity  (i64)     invariant: >= 0                     │
//! │  Book      author    (String)                                      │
//! │            edition   (String)                                      │
//! │            isbn      (String)  opaque, gated at the form boundary  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! No polymorphic dispatch over product kinds exists anywhere in the
//! system, so a Product base with a Book specialization would buy nothing;
//! the record stays flat.
//!
//! ## Lifecycle
//! Instances are transient: one is built from form input for an insert or
//! update, one is built from a database row for a successful lookup, and
//! each is discarded when the operation completes. The relational table is
//! the sole source of truth; there is no in-memory registry.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::validation::{validate_price, validate_quantity, ValidationResult};

// =============================================================================
// Book
// =============================================================================

/// A book record as stored in (and read back from) the `books` table.
///
/// ## Checked Mutation
/// `price` and `quantity` carry a non-negative invariant. The checked
/// constructor and the `set_*` methods reject violating values with a
/// [`ValidationError`] and leave the field unchanged, so callers always
/// learn that their input was dropped.
///
/// Fields stay public for row mapping and struct-literal construction in
/// controlled contexts (tests, seed data); the database CHECK constraints
/// back the invariant as the last line of defense.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Book {
    /// Unique product code - the lookup, update, and delete key.
    pub code: String,

    /// Display name / title.
    pub name: String,

    /// Unit price. Invariant: >= 0.
    pub price: f64,

    /// Units in inventory. Invariant: >= 0.
    pub quantity: i64,

    /// Author name.
    pub author: String,

    /// Edition label ("First", "2nd revised", ...).
    pub edition: String,

    /// ISBN, stored as an opaque string (no checksum validation).
    pub isbn: String,
}

impl Book {
    /// Checked constructor.
    ///
    /// ## Returns
    /// * `Ok(Book)` - All invariants hold
    /// * `Err(ValidationError)` - Negative price or quantity
    ///
    /// ## Example
    /// ```rust
    /// use libris_core::Book;
    ///
    /// let book = Book::new("0000000004", "Sample", 15.99, 10, "A. Writer", "First", "9780000000001")
    ///     .unwrap();
    /// assert_eq!(book.price, 15.99);
    ///
    /// assert!(Book::new("X", "Bad", -1.0, 0, "A", "First", "9780000000001").is_err());
    /// ```
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        price: f64,
        quantity: i64,
        author: impl Into<String>,
        edition: impl Into<String>,
        isbn: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        validate_price(price)?;
        validate_quantity(quantity)?;

        Ok(Book {
            code: code.into(),
            name: name.into(),
            price,
            quantity,
            author: author.into(),
            edition: edition.into(),
            isbn: isbn.into(),
        })
    }

    /// Sets the price, enforcing the non-negative invariant.
    ///
    /// On `Err` the previous value is retained and the caller is told;
    /// a rejected assignment is never dropped silently.
    pub fn set_price(&mut self, price: f64) -> ValidationResult<()> {
        validate_price(price)?;
        self.price = price;
        Ok(())
    }

    /// Sets the inventory quantity, enforcing the non-negative invariant.
    ///
    /// On `Err` the previous value is retained.
    pub fn set_quantity(&mut self, quantity: i64) -> ValidationResult<()> {
        validate_quantity(quantity)?;
        self.quantity = quantity;
        Ok(())
    }

    /// Checks whether the record is in stock.
    #[inline]
    pub fn in_stock(&self) -> bool {
        self.quantity > 0
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

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

    #[test]
    fn test_new_rejects_negative_price() {
        let result = Book::new("X", "Bad", -1.0, 5, "A", "First", "9780000000001");
        assert!(result.is_err());
    }

    #[test]
    fn test_new_rejects_negative_quantity() {
        let result = Book::new("X", "Bad", 1.0, -5, "A", "First", "9780000000001");
        assert!(result.is_err());
    }

    #[test]
    fn test_set_price_rejects_negative_and_keeps_old_value() {
        let mut book = sample_book();

        assert!(book.set_price(-3.0).is_err());
        assert_eq!(book.price, 15.99);

        assert!(book.set_price(18.50).is_ok());
        assert_eq!(book.price, 18.50);
    }

    #[test]
    fn test_set_quantity_rejects_negative_and_keeps_old_value() {
        let mut book = sample_book();

        assert!(book.set_quantity(-1).is_err());
        assert_eq!(book.quantity, 10);

        assert!(book.set_quantity(0).is_ok());
        assert_eq!(book.quantity, 0);
    }

    #[test]
    fn test_in_stock() {
        let mut book = sample_book();
        assert!(book.in_stock());

        book.set_quantity(0).unwrap();
        assert!(!book.in_stock());
    }
}
