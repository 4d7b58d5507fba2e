//! Infrastructure layer - External systems integration
//!
//! This module handles all external system concerns:
//! - Database connections, migrations and seed data
//! - Persistence context with staged changes
//! - Generic and entity-specific repositories
//! - Unit of Work for transaction management

pub mod context;
pub mod db;
pub mod repositories;
pub mod unit_of_work;

pub use context::{Applied, PersistenceContext, Staged};
pub use db::{Database, Migrator};
pub use repositories::{CustomerRepository, CustomerStore};
pub use unit_of_work::{Persistence, UnitOfWork, UnitOfWorkProvider};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::MockCustomerRepository;
