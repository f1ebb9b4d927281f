//! # libris-db: Database Layer for Libris
//!
//! This crate provides database access for the Libris book inventory
//! manager. It uses SQLite for local storage with sqlx for async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                        Libris Data Flow                             │
//! │                                                                     │
//! │  Front end (form-driven client, CLI, HTTP handler, ...)            │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  ┌───────────────────────────────────────────────────────────────┐ │
//! │  │                   libris-db (THIS CRATE)                      │ │
//! │  │                                                               │ │
//! │  │   ┌──────────────┐   ┌──────────────┐   ┌──────────────┐     │ │
//! │  │   │   Database   │   │  Repository  │   │  Migrations  │     │ │
//! │  │   │  (pool.rs)   │   │  (book.rs)   │   │  (embedded)  │     │ │
//! │  │   │              │   │              │   │              │     │ │
//! │  │   │ SqlitePool   │◄──│ BookRepo     │   │ 001_init.sql │     │ │
//! │  │   └──────────────┘   └──────────────┘   └──────────────┘     │ │
//! │  │                                                               │ │
//! │  └───────────────────────────────────────────────────────────────┘ │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  SQLite database file (location from LIBRIS_DATABASE_PATH)         │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`repository`] - The book record store
//!
//! ## Usage
//!
//! ```rust,ignore
//! use libris_db::{Database, DbConfig};
//!
//! // Create database with config from the environment
//! let db = Database::new(DbConfig::from_env()).await?;
//!
//! // Use the record store
//! let found = db.books().get_by_code("0000000004").await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};

// Repository re-export for convenience
pub use repository::book::BookRepository;
