//! Shared helpers for integration tests.
//!
//! Every test gets its own in-memory SQLite database with migrations
//! applied. A single pooled connection keeps the database alive for the
//! lifetime of the test.

#![allow(dead_code)]

use sea_orm::ConnectOptions;

use customer_api::{Customer, Database};

/// Fresh, migrated in-memory database
pub async fn test_database() -> Database {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);

    Database::connect_with(options)
        .await
        .expect("in-memory database should start")
}

/// Unsaved customer with predictable names
pub fn customer(user_name: &str) -> Customer {
    Customer::new(
        user_name,
        format!("{user_name}-first"),
        format!("{user_name}-last"),
        format!("{user_name}@example.com"),
    )
}
