//! # Error Types
//!
//! Domain-specific error types for libris-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                 │
//! │                                                                     │
//! │  libris-core errors (this file)                                    │
//! │  ├── CoreError        - General domain errors                      │
//! │  └── ValidationError  - Input validation failures                  │
//! │                                                                     │
//! │  libris-db errors (separate crate)                                 │
//! │  └── DbError          - Database operation failures                │
//! │                                                                     │
//! │  Flow: ValidationError → CoreError → front end message             │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field name, bounds)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core domain errors.
///
/// These represent domain rule violations. They should be caught by the
/// front end and translated to user-friendly messages.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No book exists under the given code.
    ///
    /// ## When This Occurs
    /// - Lookup with a code that was never inserted
    /// - Lookup after the record was deleted
    #[error("Book not found: {0}")]
    BookNotFound(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur when user input doesn't meet requirements. Used for early
/// validation at the form boundary, before a `Book` value ever exists.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too short.
    #[error("{field} must be at least {min} characters")]
    TooShort { field: String, min: usize },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    Negative { field: String },

    /// Invalid format (e.g., non-numeric price text).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::BookNotFound("0000000001".to_string());
        assert_eq!(err.to_string(), "Book not found: 0000000001");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "author".to_string(),
        };
        assert_eq!(err.to_string(), "author is required");

        let err = ValidationError::TooShort {
            field: "isbn".to_string(),
            min: 10,
        };
        assert_eq!(err.to_string(), "isbn must be at least 10 characters");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Negative {
            field: "price".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
