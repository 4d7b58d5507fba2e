//! Unit of Work pattern implementation.
//!
//! SOLID (SRP): Manages the staged-change lifecycle and repository access.
//!
//! The Unit of Work pattern:
//! - Centralizes access to all repositories sharing one persistence context
//! - Buffers every staged insert/update/delete until `commit`
//! - Applies the whole buffer atomically; a failed commit leaves no trace
//!
//! One unit of work serves one logical request. Providers hand out a
//! fresh instance per call, so staged state never leaks across requests.

use async_trait::async_trait;
use sea_orm::DatabaseConnection;
use std::sync::Arc;

use super::context::PersistenceContext;
use super::db::Database;
use super::repositories::{CustomerRepository, CustomerStore};
use crate::errors::AppResult;

/// Unit of Work trait for dependency injection.
#[async_trait]
pub trait UnitOfWork: Send + Sync {
    /// Get customer repository
    fn customers(&self) -> Arc<dyn CustomerRepository>;

    /// Persist every staged change in one transaction.
    ///
    /// Returns the number of affected records.
    async fn commit(&self) -> AppResult<u64>;

    /// Drop staged changes without persisting them
    fn discard(&self);
}

/// Source of per-request units of work.
pub trait UnitOfWorkProvider: Send + Sync {
    type Work: UnitOfWork;

    /// Start a new unit of work with an empty staged-change buffer
    fn begin(&self) -> Self::Work;
}

/// Concrete implementation of UnitOfWork
pub struct Persistence {
    ctx: PersistenceContext,
    customer_repo: Arc<CustomerStore>,
}

impl Persistence {
    /// Create new UnitOfWork instance
    pub fn new(db: DatabaseConnection) -> Self {
        let ctx = PersistenceContext::new(db);
        let customer_repo = Arc::new(CustomerStore::new(ctx.clone()));
        Self { ctx, customer_repo }
    }

    /// Number of staged changes awaiting commit
    pub fn pending(&self) -> usize {
        self.ctx.pending()
    }
}

#[async_trait]
impl UnitOfWork for Persistence {
    fn customers(&self) -> Arc<dyn CustomerRepository> {
        self.customer_repo.clone()
    }

    async fn commit(&self) -> AppResult<u64> {
        self.ctx.commit().await
    }

    fn discard(&self) {
        self.ctx.discard()
    }
}

impl UnitOfWorkProvider for Database {
    type Work = Persistence;

    fn begin(&self) -> Persistence {
        Persistence::new(self.get_connection())
    }
}
