//! Customer API - CRUD service over customer records.
//!
//! Customers are stored in a relational database through SeaORM and
//! reached via a generic repository base plus a unit of work that
//! buffers staged changes until commit.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Customer entity
//! - **services**: Customer use cases (delegate and commit)
//! - **infra**: Persistence context, repositories, unit of work, database
//! - **api**: HTTP handlers, extractors, and routes
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Run migrations
//! cargo run -- migrate up
//!
//! # Insert sample customers into an empty table
//! cargo run -- seed
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::Customer;
pub use errors::{AppError, AppResult};
pub use infra::Database;
