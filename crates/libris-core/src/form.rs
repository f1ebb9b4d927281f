//! # Form Boundary
//!
//! `BookForm` carries the raw text a front end captured for the seven book
//! fields. It is the hand-off point between "whatever the operator typed"
//! and a validated [`Book`] value.
//!
//! ## Gating Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  BookForm::build()                                                  │
//! │                                                                     │
//! │  code      ── non-empty, <= 50 chars                               │
//! │  name      ── non-empty, <= 200 chars                              │
//! │  price     ── decimal text, "," or "." separator, >= 0             │
//! │  quantity  ── whole-number text, >= 0                              │
//! │  author    ── non-empty                                            │
//! │  edition   ── non-empty                                            │
//! │  isbn      ── >= 10 chars, digits only                             │
//! │                                                                     │
//! │  First failing rule wins; nothing reaches the record store.        │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! These are boundary gating rules, not store-level invariants: the store
//! accepts any well-formed `Book` and leaves uniqueness to the primary key.

use serde::{Deserialize, Serialize};

use crate::book::Book;
use crate::error::ValidationError;
use crate::validation::{
    parse_price, parse_quantity, validate_code, validate_isbn, validate_name, validate_required,
};

// =============================================================================
// Book Form
// =============================================================================

/// Raw form input for one book record.
///
/// Every field is text exactly as captured; no front-end toolkit types leak
/// in here. A GUI fills this from widgets, a CLI from arguments, an HTTP
/// handler from a request body.
///
/// ## Example
/// ```rust
/// use libris_core::BookForm;
///
/// let form = BookForm {
///     code: "0000000004".into(),
///     name: "Sample".into(),
///     price: "15,99".into(), // comma separator accepted
///     quantity: "10".into(),
///     author: "A. Writer".into(),
///     edition: "First".into(),
///     isbn: "9780000000001".into(),
/// };
///
/// let book = form.build().unwrap();
/// assert_eq!(book.price, 15.99);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookForm {
    pub code: String,
    pub name: String,
    pub price: String,
    pub quantity: String,
    pub author: String,
    pub edition: String,
    pub isbn: String,
}

impl BookForm {
    /// Applies the gating rules and produces a validated [`Book`].
    ///
    /// ## Returns
    /// * `Ok(Book)` - All seven fields pass
    /// * `Err(ValidationError)` - First failing field, with context
    pub fn build(&self) -> Result<Book, ValidationError> {
        validate_code(&self.code)?;
        validate_name(&self.name)?;
        let price = parse_price(&self.price)?;
        let quantity = parse_quantity(&self.quantity)?;
        validate_required("author", &self.author)?;
        validate_required("edition", &self.edition)?;
        validate_isbn(&self.isbn)?;

        Book::new(
            self.code.trim(),
            self.name.trim(),
            price,
            quantity,
            self.author.trim(),
            self.edition.trim(),
            self.isbn.trim(),
        )
    }
}

impl From<&Book> for BookForm {
    /// Renders a stored record back into form text (the lookup path: a
    /// successful select repopulates the form fields).
    fn from(book: &Book) -> Self {
        BookForm {
            code: book.code.clone(),
            name: book.name.clone(),
            price: book.price.to_string(),
            quantity: book.quantity.to_string(),
            author: book.author.clone(),
            edition: book.edition.clone(),
            isbn: book.isbn.clone(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> BookForm {
        BookForm {
            code: "0000000004".into(),
            name: "Sample".into(),
            price: "15.99".into(),
            quantity: "10".into(),
            author: "A. Writer".into(),
            edition: "First".into(),
            isbn: "9780000000001".into(),
        }
    }

    #[test]
    fn test_build_valid_form() {
        let book = valid_form().build().unwrap();

        assert_eq!(book.code, "0000000004");
        assert_eq!(book.name, "Sample");
        assert_eq!(book.price, 15.99);
        assert_eq!(book.quantity, 10);
        assert_eq!(book.author, "A. Writer");
        assert_eq!(book.edition, "First");
        assert_eq!(book.isbn, "9780000000001");
    }

    #[test]
    fn test_build_accepts_comma_price() {
        let mut form = valid_form();
        form.price = "10,50".into();

        let book = form.build().unwrap();
        assert_eq!(book.price, 10.50);
    }

    #[test]
    fn test_build_rejects_empty_fields() {
        for field in ["code", "name", "price", "quantity", "author", "edition"] {
            let mut form = valid_form();
            match field {
                "code" => form.code.clear(),
                "name" => form.name.clear(),
                "price" => form.price.clear(),
                "quantity" => form.quantity.clear(),
                "author" => form.author.clear(),
                "edition" => form.edition.clear(),
                _ => unreachable!(),
            }
            assert!(form.build().is_err(), "empty {field} should be rejected");
        }
    }

    #[test]
    fn test_build_rejects_short_isbn() {
        let mut form = valid_form();
        form.isbn = "12345".into();
        assert!(form.build().is_err());
    }

    #[test]
    fn test_build_rejects_non_numeric_price() {
        let mut form = valid_form();
        form.price = "abc".into();
        assert!(form.build().is_err());
    }

    #[test]
    fn test_build_rejects_negative_quantity() {
        let mut form = valid_form();
        form.quantity = "-3".into();
        assert!(form.build().is_err());
    }

    #[test]
    fn test_form_round_trip_from_book() {
        let book = valid_form().build().unwrap();
        let form = BookForm::from(&book);

        assert_eq!(form.price, "15.99");
        assert_eq!(form.quantity, "10");
        assert_eq!(form.build().unwrap(), book);
    }
}
