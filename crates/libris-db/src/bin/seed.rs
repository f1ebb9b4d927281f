//! # Seed Data Generator
//!
//! Populates the database with sample book records for development.
//!
//! ## Usage
//! ```bash
//! # Seed the default development database
//! cargo run -p libris-db --bin seed
//!
//! # Specify database path
//! cargo run -p libris-db --bin seed -- --db ./data/libris.db
//! ```
//!
//! Each record gets:
//! - Unique code: zero-padded sequence (`0000000001`, ...)
//! - A real-looking title, author, and edition
//! - Numeric-looking 13-digit ISBN (not a valid checksum)

use std::env;

use libris_core::Book;
use libris_db::{Database, DbConfig};
use tracing_subscriber::EnvFilter;

/// Sample catalog: (name, author, edition, price, quantity)
const CATALOG: &[(&str, &str, &str, f64, i64)] = &[
    ("The Great Gatsby", "F. Scott Fitzgerald", "First", 15.99, 10),
    ("One Hundred Years of Solitude", "Gabriel Garcia Marquez", "Second", 18.50, 7),
    ("Don Quixote", "Miguel de Cervantes", "Annotated", 22.00, 4),
    ("Moby-Dick", "Herman Melville", "First", 12.75, 9),
    ("Pride and Prejudice", "Jane Austen", "Third", 9.99, 15),
    ("Crime and Punishment", "Fyodor Dostoevsky", "Revised", 14.25, 6),
    ("The Odyssey", "Homer", "Translated", 11.40, 12),
    ("Brave New World", "Aldous Huxley", "First", 13.10, 8),
    ("Wuthering Heights", "Emily Bronte", "Second", 10.80, 5),
    ("The Trial", "Franz Kafka", "First", 16.30, 3),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut db_path = String::from("./libris_dev.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Libris Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --db <PATH>    Database file path (default: ./libris_dev.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("Libris Seed Data Generator");
    println!("==========================");
    println!("Database: {}", db_path);
    println!();

    // Connect to database
    let config = DbConfig::new(&db_path);
    let db = Database::new(config).await?;

    println!("Connected to database, migrations applied");

    // Check existing records
    let repo = db.books();
    let existing = repo.count().await?;
    if existing > 0 {
        println!("Database already has {} books", existing);
        println!("Skipping seed to avoid duplicates.");
        println!("Delete the database file to regenerate.");
        return Ok(());
    }

    println!();
    println!("Inserting books...");

    let mut inserted = 0u64;
    for (idx, (name, author, edition, price, quantity)) in CATALOG.iter().enumerate() {
        let book = generate_book(idx, name, author, edition, *price, *quantity)?;

        match repo.insert(&book).await {
            Ok(n) => inserted += n,
            Err(e) => {
                eprintln!("Failed to insert {}: {}", book.code, e);
                continue;
            }
        }
    }

    println!("Inserted {} books", inserted);

    // Verify a round trip through the store
    println!();
    println!("Verifying lookup...");
    let found = repo.get_by_code("0000000001").await?;
    match found {
        Some(book) => println!("  {} by {} ({})", book.name, book.author, book.price),
        None => eprintln!("  Expected seeded record 0000000001 is missing"),
    }

    println!();
    println!("Seed complete!");

    Ok(())
}

/// Builds a single validated book record.
fn generate_book(
    idx: usize,
    name: &str,
    author: &str,
    edition: &str,
    price: f64,
    quantity: i64,
) -> Result<Book, Box<dyn std::error::Error>> {
    let code = format!("{:010}", idx + 1);
    let isbn = format!("978{:010}", idx + 1);

    let book = Book::new(code, name, price, quantity, author, edition, isbn)?;
    Ok(book)
}
