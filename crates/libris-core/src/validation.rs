//! # Validation Module
//!
//! Input validation utilities for Libris.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                              │
//! │                                                                     │
//! │  Layer 1: Front end (whatever drives the store)                    │
//! │  ├── Basic format checks (empty, length)                           │
//! │  └── Immediate user feedback                                       │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 2: THIS MODULE                                              │
//! │  ├── Field rules (empty, length, ISBN shape)                       │
//! │  └── Text-to-number coercion (price, quantity)                     │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 3: Database (SQLite)                                        │
//! │  ├── NOT NULL constraints                                          │
//! │  ├── PRIMARY KEY on code                                           │
//! │  └── CHECK (price >= 0), CHECK (quantity >= 0)                     │
//! │                                                                     │
//! │  Defense in depth: multiple layers catch different errors          │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use libris_core::validation::{parse_price, validate_isbn};
//!
//! // Both decimal separators are accepted
//! assert_eq!(parse_price("10,50").unwrap(), 10.50);
//! assert_eq!(parse_price("10.50").unwrap(), 10.50);
//!
//! // ISBN gating before anything reaches the store
//! assert!(validate_isbn("9780000000001").is_ok());
//! assert!(validate_isbn("123").is_err());
//! ```

use crate::error::ValidationError;
use crate::{MAX_CODE_LEN, MAX_NAME_LEN, MIN_ISBN_LEN};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product code.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 50 characters
///
/// The code is the lookup, update, and delete key, so an empty value would
/// make every keyed statement a no-op.
///
/// ## Example
/// ```rust
/// use libris_core::validation::validate_code;
///
/// assert!(validate_code("0000000004").is_ok());
/// assert!(validate_code("").is_err());
/// ```
pub fn validate_code(code: &str) -> ValidationResult<()> {
    let code = code.trim();

    if code.is_empty() {
        return Err(ValidationError::Required {
            field: "code".to_string(),
        });
    }

    if code.chars().count() > MAX_CODE_LEN {
        return Err(ValidationError::TooLong {
            field: "code".to_string(),
            max: MAX_CODE_LEN,
        });
    }

    Ok(())
}

/// Validates a book name.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 200 characters
pub fn validate_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates a generic required text field (author, edition).
///
/// ## Rules
/// - Must not be empty after trimming
pub fn validate_required(field: &str, value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    Ok(())
}

/// Validates an ISBN.
///
/// ## Rules
/// - Must not be empty
/// - Must be at least 10 characters (ISBN-10 is the shortest real ISBN)
/// - Must be numeric-looking (digits only)
///
/// No checksum validation is performed; the entity stores the ISBN as an
/// opaque string.
///
/// ## Example
/// ```rust
/// use libris_core::validation::validate_isbn;
///
/// assert!(validate_isbn("9780000000001").is_ok());
/// assert!(validate_isbn("978-000000").is_err()); // non-digit
/// assert!(validate_isbn("12345").is_err());      // too short
/// ```
pub fn validate_isbn(isbn: &str) -> ValidationResult<()> {
    let isbn = isbn.trim();

    if isbn.is_empty() {
        return Err(ValidationError::Required {
            field: "isbn".to_string(),
        });
    }

    if isbn.len() < MIN_ISBN_LEN {
        return Err(ValidationError::TooShort {
            field: "isbn".to_string(),
            min: MIN_ISBN_LEN,
        });
    }

    if !isbn.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::InvalidFormat {
            field: "isbn".to_string(),
            reason: "must contain only digits".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a price value.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Must be a finite number (NaN and infinities are rejected)
/// - Zero is allowed (free items)
///
/// ## Example
/// ```rust
/// use libris_core::validation::validate_price;
///
/// assert!(validate_price(15.99).is_ok());
/// assert!(validate_price(0.0).is_ok());
/// assert!(validate_price(-1.0).is_err());
/// ```
pub fn validate_price(price: f64) -> ValidationResult<()> {
    if !price.is_finite() {
        return Err(ValidationError::InvalidFormat {
            field: "price".to_string(),
            reason: "must be a finite number".to_string(),
        });
    }

    if price < 0.0 {
        return Err(ValidationError::Negative {
            field: "price".to_string(),
        });
    }

    Ok(())
}

/// Validates an inventory quantity.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (out of stock)
pub fn validate_quantity(quantity: i64) -> ValidationResult<()> {
    if quantity < 0 {
        return Err(ValidationError::Negative {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Text-to-Number Coercion
// =============================================================================

/// Parses price text from a form field.
///
/// ## Rules
/// - Accepts both `,` and `.` as the decimal separator
///   ("10,50" and "10.50" both yield 10.50)
/// - Rejects non-numeric text before it can reach the store
/// - Applies [`validate_price`] to the parsed value
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────┐
/// │  Form: price field                                                  │
/// │                                                                     │
/// │  User types: "10,50"                                               │
/// │       │                                                             │
/// │       ▼                                                             │
/// │  parse_price("10,50") ← THIS FUNCTION                              │
/// │       │                                                             │
/// │       ├── "," replaced with "." → "10.50"                          │
/// │       ├── not a number? → Error: "price has invalid format"        │
/// │       ├── negative?     → Error: "price must not be negative"      │
/// │       └── OK → 10.50 flows into the Book record                    │
/// └─────────────────────────────────────────────────────────────────────┘
/// ```
pub fn parse_price(text: &str) -> ValidationResult<f64> {
    let text = text.trim();

    if text.is_empty() {
        return Err(ValidationError::Required {
            field: "price".to_string(),
        });
    }

    // Locale tolerance: a comma decimal separator is common form input
    let normalized = text.replace(',', ".");

    let price: f64 = normalized
        .parse()
        .map_err(|_| ValidationError::InvalidFormat {
            field: "price".to_string(),
            reason: "must be a decimal number (e.g. 10.50)".to_string(),
        })?;

    validate_price(price)?;
    Ok(price)
}

/// Parses quantity text from a form field.
///
/// ## Rules
/// - Must be a whole number
/// - Applies [`validate_quantity`] to the parsed value
pub fn parse_quantity(text: &str) -> ValidationResult<i64> {
    let text = text.trim();

    if text.is_empty() {
        return Err(ValidationError::Required {
            field: "quantity".to_string(),
        });
    }

    let quantity: i64 = text.parse().map_err(|_| ValidationError::InvalidFormat {
        field: "quantity".to_string(),
        reason: "must be a whole number".to_string(),
    })?;

    validate_quantity(quantity)?;
    Ok(quantity)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_code() {
        assert!(validate_code("0000000004").is_ok());
        assert!(validate_code("ABC-123").is_ok());

        assert!(validate_code("").is_err());
        assert!(validate_code("   ").is_err());
        assert!(validate_code(&"A".repeat(100)).is_err());
    }

    #[test]
    fn test_validate_name() {
        assert!(validate_name("The Great Gatsby").is_ok());
        assert!(validate_name("").is_err());
        assert!(validate_name(&"A".repeat(300)).is_err());
    }

    #[test]
    fn test_length_limits_count_characters_not_bytes() {
        // 150 two-byte characters: 300 bytes but well under the 200-char cap
        assert!(validate_name(&"ñ".repeat(150)).is_ok());
        assert!(validate_name(&"ñ".repeat(201)).is_err());

        assert!(validate_code(&"ü".repeat(50)).is_ok());
        assert!(validate_code(&"ü".repeat(51)).is_err());
    }

    #[test]
    fn test_validate_required() {
        assert!(validate_required("author", "F. Scott Fitzgerald").is_ok());
        assert!(validate_required("author", "").is_err());
        assert!(validate_required("edition", "   ").is_err());
    }

    #[test]
    fn test_validate_isbn() {
        assert!(validate_isbn("9780000000001").is_ok());
        assert!(validate_isbn("0743273565").is_ok()); // exactly 10

        assert!(validate_isbn("").is_err());
        assert!(validate_isbn("123456789").is_err()); // 9 chars
        assert!(validate_isbn("978-0743273565").is_err()); // hyphen
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(15.99).is_ok());
        assert!(validate_price(0.0).is_ok());

        assert!(validate_price(-0.01).is_err());
        assert!(validate_price(f64::NAN).is_err());
        assert!(validate_price(f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(0).is_ok());
        assert!(validate_quantity(10).is_ok());
        assert!(validate_quantity(-1).is_err());
    }

    #[test]
    fn test_parse_price_accepts_both_separators() {
        assert_eq!(parse_price("10,50").unwrap(), 10.50);
        assert_eq!(parse_price("10.50").unwrap(), 10.50);
        assert_eq!(parse_price(" 15.99 ").unwrap(), 15.99);
        assert_eq!(parse_price("7").unwrap(), 7.0);
    }

    #[test]
    fn test_parse_price_rejects_bad_input() {
        assert!(parse_price("abc").is_err());
        assert!(parse_price("").is_err());
        assert!(parse_price("-1.50").is_err());
        assert!(parse_price("10,50,00").is_err());
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("10").unwrap(), 10);
        assert_eq!(parse_quantity(" 0 ").unwrap(), 0);

        assert!(parse_quantity("ten").is_err());
        assert!(parse_quantity("3.5").is_err());
        assert!(parse_quantity("-2").is_err());
        assert!(parse_quantity("").is_err());
    }
}
