//! # libris-core: Pure Domain Logic for Libris
//!
//! Libris is a single-entity inventory record manager: an operator creates,
//! looks up, updates, and deletes book records in a relational store, keyed
//! by a product code. This crate is the I/O-free half of that system.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                        Libris Data Flow                             │
//! │                                                                     │
//! │  Front end (form fields: code, name, price, …)                     │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  ┌───────────────────────────────────────────────────────────────┐ │
//! │  │               ★ libris-core (THIS CRATE) ★                    │ │
//! │  │                                                               │ │
//! │  │   ┌──────────┐   ┌──────────┐   ┌────────────┐               │ │
//! │  │   │   book   │   │   form   │   │ validation │               │ │
//! │  │   │   Book   │   │ BookForm │   │   rules    │               │ │
//! │  │   └──────────┘   └──────────┘   └────────────┘               │ │
//! │  │                                                               │ │
//! │  │   NO I/O • NO DATABASE • NO WIDGETS • PURE FUNCTIONS          │ │
//! │  └───────────────────────────────────────────────────────────────┘ │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  libris-db (BookRepository over SQLite)                            │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`book`] - The `Book` record and its non-negative invariants
//! - [`form`] - `BookForm`: raw text input from any front end
//! - [`validation`] - Field validators and text-to-number parsing
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Checked mutation**: invalid field values are rejected with a typed
//!    error, never silently dropped
//! 2. **No I/O**: database, network, file system access is FORBIDDEN here
//! 3. **Explicit Errors**: all errors are typed, never strings or panics

// =============================================================================
// Module Declarations
// =============================================================================

pub mod book;
pub mod error;
pub mod form;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use libris_core::Book` instead of
// `use libris_core::book::Book`

pub use book::Book;
pub use error::{CoreError, ValidationError};
pub use form::BookForm;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Minimum length of an ISBN accepted at the form boundary
///
/// ## Business Reason
/// ISBN-10 is the shortest real-world ISBN. The entity stores the value as
/// an opaque string; no checksum validation is performed.
pub const MIN_ISBN_LEN: usize = 10;

/// Maximum length of a book name accepted at the form boundary
pub const MAX_NAME_LEN: usize = 200;

/// Maximum length of a product code accepted at the form boundary
pub const MAX_CODE_LEN: usize = 50;
