//! # Repository Module
//!
//! Database repository implementations for Libris.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern Explained                     │
//! │                                                                     │
//! │  The Repository pattern abstracts database access behind a clean   │
//! │  API. The store is an instance holding its own pool handle, not a  │
//! │  set of static methods over hidden shared state.                   │
//! │                                                                     │
//! │  Front end                                                         │
//! │       │                                                             │
//! │       │  db.books().get_by_code("0000000004")                      │
//! │       ▼                                                             │
//! │  BookRepository                                                    │
//! │  ├── insert(&self, book)                                           │
//! │  ├── get_by_code(&self, code)                                      │
//! │  ├── update(&self, book)                                           │
//! │  └── delete(&self, code)                                           │
//! │       │                                                             │
//! │       │  One fixed parameterized statement per verb                │
//! │       ▼                                                             │
//! │  SQLite Database                                                   │
//! │                                                                     │
//! │  Benefits:                                                          │
//! │  • SQL is isolated in one place                                    │
//! │  • Multiple isolated instances in tests                            │
//! │  • Values pass only as bound parameters (no injection)             │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`book::BookRepository`] - Book record CRUD

pub mod book;
