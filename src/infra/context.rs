//! Persistence context - connection plus staged-change buffer.
//!
//! Repositories never write to the store directly. Every insert, update
//! and delete is staged here as an operation against the commit
//! transaction and only runs when the owning unit of work commits.
//!
//! - Clones share one buffer, so every repository built from a context
//!   stages into the same unit of work.
//! - Reads bypass the buffer and see committed state only.
//! - Dropping a context without committing discards its staged changes.

use futures::future::BoxFuture;
use once_cell::sync::OnceCell;
use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::errors::{AppError, AppResult};

/// A staged change: runs inside the commit transaction.
pub type StagedOperation =
    Box<dyn for<'t> FnOnce(&'t DatabaseTransaction) -> BoxFuture<'t, AppResult<Applied>> + Send>;

/// Callback run once the owning transaction has committed.
pub type AfterCommit = Box<dyn FnOnce() + Send>;

/// Outcome of one staged operation inside the commit transaction.
pub struct Applied {
    rows: u64,
    after_commit: Option<AfterCommit>,
}

impl Applied {
    /// Affected-row count with nothing to publish
    pub fn rows(rows: u64) -> Self {
        Self {
            rows,
            after_commit: None,
        }
    }

    /// Affected-row count plus a callback that only runs if the commit succeeds
    pub fn then(rows: u64, after_commit: impl FnOnce() + Send + 'static) -> Self {
        Self {
            rows,
            after_commit: Some(Box::new(after_commit)),
        }
    }
}

/// Per-request persistence context.
#[derive(Clone)]
pub struct PersistenceContext {
    db: DatabaseConnection,
    staged: Arc<Mutex<Vec<StagedOperation>>>,
}

impl PersistenceContext {
    /// Create a context with an empty staged-change buffer
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            staged: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Connection used for reads
    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Buffer an operation until the next commit.
    pub fn stage<F>(&self, op: F)
    where
        F: for<'t> FnOnce(&'t DatabaseTransaction) -> BoxFuture<'t, AppResult<Applied>>
            + Send
            + 'static,
    {
        self.buffer().push(Box::new(op));
    }

    /// Number of staged, uncommitted operations
    pub fn pending(&self) -> usize {
        self.buffer().len()
    }

    /// Drop every staged operation without touching the store
    pub fn discard(&self) {
        let dropped = std::mem::take(&mut *self.buffer()).len();
        if dropped > 0 {
            tracing::debug!(dropped, "Discarded staged changes");
        }
    }

    /// Apply all staged operations in one transaction.
    ///
    /// Operations run in staging order. The first failure rolls the
    /// transaction back and is returned as-is; on success the summed
    /// affected-row count is returned. After-commit callbacks run only
    /// once the transaction has committed and are dropped otherwise.
    pub async fn commit(&self) -> AppResult<u64> {
        let staged = std::mem::take(&mut *self.buffer());
        if staged.is_empty() {
            return Ok(0);
        }

        let txn = self.db.begin().await.map_err(AppError::from)?;
        let mut affected = 0;
        let mut after_commit = Vec::new();

        for op in staged {
            let outcome = op(&txn).await;
            match outcome {
                Ok(applied) => {
                    affected += applied.rows;
                    after_commit.extend(applied.after_commit);
                }
                Err(e) => {
                    if let Err(rollback_err) = txn.rollback().await {
                        tracing::error!("Transaction rollback failed: {}", rollback_err);
                    }
                    return Err(e);
                }
            }
        }

        txn.commit().await.map_err(AppError::from)?;
        tracing::debug!(affected, "Unit of work committed");

        for publish in after_commit {
            publish();
        }

        Ok(affected)
    }

    fn buffer(&self) -> MutexGuard<'_, Vec<StagedOperation>> {
        // Pushing or draining a Vec cannot leave it half-updated
        self.staged.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Result slot for a staged insert.
///
/// Empty until the owning commit succeeds, then holds the stored record
/// including its store-assigned identity.
#[derive(Debug)]
pub struct Staged<T> {
    slot: Arc<OnceCell<T>>,
}

impl<T> Clone for Staged<T> {
    fn clone(&self) -> Self {
        Self {
            slot: self.slot.clone(),
        }
    }
}

impl<T> Staged<T> {
    /// Slot waiting for a commit
    pub fn pending() -> Self {
        Self {
            slot: Arc::new(OnceCell::new()),
        }
    }

    /// Slot that already holds its value
    pub fn ready(value: T) -> Self {
        Self {
            slot: Arc::new(OnceCell::with_value(value)),
        }
    }

    /// Fill the slot; later calls are ignored
    pub fn resolve(&self, value: T) {
        let _ = self.slot.set(value);
    }

    /// Stored value, if the commit has happened
    pub fn get(&self) -> Option<&T> {
        self.slot.get()
    }

    pub fn is_resolved(&self) -> bool {
        self.slot.get().is_some()
    }
}

impl<T: Clone> Staged<T> {
    /// Take the stored value, cloning only if another handle is still alive
    pub fn into_inner(self) -> Option<T> {
        match Arc::try_unwrap(self.slot) {
            Ok(cell) => cell.into_inner(),
            Err(shared) => shared.get().cloned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn staged_is_empty_until_resolved() {
        let staged: Staged<i32> = Staged::pending();
        assert!(!staged.is_resolved());
        assert!(staged.get().is_none());

        let writer = staged.clone();
        writer.resolve(42);

        assert!(staged.is_resolved());
        assert_eq!(staged.get(), Some(&42));
    }

    #[test]
    fn staged_keeps_first_value() {
        let staged = Staged::pending();
        staged.resolve("first");
        staged.resolve("second");

        assert_eq!(staged.into_inner(), Some("first"));
    }

    #[test]
    fn into_inner_with_live_clone() {
        let staged = Staged::ready(String::from("alice"));
        let other = staged.clone();

        assert_eq!(staged.into_inner().as_deref(), Some("alice"));
        assert_eq!(other.into_inner().as_deref(), Some("alice"));
    }
}
