//! Base repository traits following Interface Segregation Principle (ISP).
//!
//! These traits provide a foundation for all repositories with
//! common CRUD operations that can be composed as needed. They are
//! generic over the SeaORM entity; the key type is the entity's primary
//! key value and every repository shares a [`PersistenceContext`].
//!
//! Reads execute immediately against committed state. Writes are staged
//! on the context and only reach the store when the owning unit of work
//! commits.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, Condition, DbErr, EntityTrait, IntoActiveModel,
    Iterable, PaginatorTrait, PrimaryKeyToColumn, PrimaryKeyTrait, QueryFilter, Select,
};

use crate::errors::{AppError, AppResult};
use crate::infra::context::{Applied, PersistenceContext, Staged};

/// Primary key value type of an entity
pub type KeyOf<E> = <<E as EntityTrait>::PrimaryKey as PrimaryKeyTrait>::ValueType;

/// Access to the shared persistence context
pub trait Repository: Send + Sync {
    fn context(&self) -> &PersistenceContext;
}

/// Read operations (Query) - Single Responsibility
#[async_trait]
pub trait ReadRepository<E>: Repository
where
    E: EntityTrait,
    E::Model: Send + Sync,
{
    /// Lazy query over all rows; each execution re-reads the store.
    ///
    /// Row order is whatever the store returns unless an order is added.
    fn query(&self) -> Select<E> {
        E::find()
    }

    /// Find entity by primary key
    async fn find_by_id(&self, id: KeyOf<E>) -> AppResult<Option<E::Model>>
    where
        KeyOf<E>: Send,
    {
        E::find_by_id(id)
            .one(self.context().connection())
            .await
            .map_err(Into::into)
    }

    /// Find all entities, optionally filtered
    async fn find_all(&self, filter: Option<Condition>) -> AppResult<Vec<E::Model>> {
        let query = match filter {
            Some(condition) => self.query().filter(condition),
            None => self.query(),
        };

        query
            .all(self.context().connection())
            .await
            .map_err(Into::into)
    }

    /// Count all entities
    async fn count(&self) -> AppResult<u64> {
        self.query()
            .count(self.context().connection())
            .await
            .map_err(Into::into)
    }
}

/// Write operations (Command) - Single Responsibility
pub trait WriteRepository<E, A>: Repository
where
    E: EntityTrait,
    E::Model: IntoActiveModel<A> + Send + Sync + 'static,
    A: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send + 'static,
{
    /// Stage an insert.
    ///
    /// The returned slot receives the stored row, including any
    /// store-assigned key, once the commit succeeds. It stays empty if
    /// the commit fails.
    fn add(&self, model: E::Model) -> Staged<E::Model> {
        let staged = Staged::pending();
        let slot = staged.clone();

        self.context().stage(move |txn| {
            Box::pin(async move {
                let inserted = insertable::<E, A>(model).insert(txn).await?;
                // Rolled-back rows must never reach the slot
                Ok::<_, AppError>(Applied::then(1, move || slot.resolve(inserted)))
            })
        });

        staged
    }

    /// Stage a full-record replace keyed by the model's primary key.
    ///
    /// Fails the commit with `NotFound` if no row has that key.
    fn update(&self, model: E::Model) {
        self.context().stage(move |txn| {
            Box::pin(async move {
                replacement::<E, A>(model)
                    .update(txn)
                    .await
                    .map_err(|e| match e {
                        DbErr::RecordNotUpdated | DbErr::RecordNotFound(_) => AppError::NotFound,
                        other => AppError::from(other),
                    })?;
                Ok::<_, AppError>(Applied::rows(1))
            })
        });
    }
}

/// Delete operations - Single Responsibility
pub trait DeleteRepository<E>: Repository
where
    E: EntityTrait,
{
    /// Stage a delete by primary key.
    ///
    /// Fails the commit with `NotFound` if no row has that key.
    fn remove(&self, id: KeyOf<E>)
    where
        KeyOf<E>: Send + 'static,
    {
        self.context().stage(move |txn| {
            Box::pin(async move {
                let result = E::delete_by_id(id).exec(txn).await?;
                if result.rows_affected == 0 {
                    return Err(AppError::NotFound);
                }
                Ok::<_, AppError>(Applied::rows(result.rows_affected))
            })
        });
    }
}

/// Full CRUD repository - Combines all operations
/// Follows Open/Closed Principle: extend by implementing individual traits
pub trait CrudRepository<E, A>:
    ReadRepository<E> + WriteRepository<E, A> + DeleteRepository<E>
where
    E: EntityTrait,
    E::Model: IntoActiveModel<A> + Send + Sync + 'static,
    A: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send + 'static,
{
}

// Auto-implement CrudRepository for types implementing all traits
impl<T, E, A> CrudRepository<E, A> for T
where
    T: ReadRepository<E> + WriteRepository<E, A> + DeleteRepository<E>,
    E: EntityTrait,
    E::Model: IntoActiveModel<A> + Send + Sync + 'static,
    A: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send + 'static,
{
}

/// Active model with every column marked for writing.
fn replacement<E, A>(model: E::Model) -> A
where
    E: EntityTrait,
    E::Model: IntoActiveModel<A>,
    A: ActiveModelTrait<Entity = E>,
{
    let mut active = model.into_active_model();
    for column in E::Column::iter() {
        if let Some(value) = active.get(column).into_value() {
            active.set(column, value);
        }
    }
    active
}

/// Like [`replacement`], but leaves auto-increment keys for the store to assign.
fn insertable<E, A>(model: E::Model) -> A
where
    E: EntityTrait,
    E::Model: IntoActiveModel<A>,
    A: ActiveModelTrait<Entity = E>,
{
    let mut active = replacement::<E, A>(model);
    if <E::PrimaryKey as PrimaryKeyTrait>::auto_increment() {
        for key in E::PrimaryKey::iter() {
            active.not_set(key.into_column());
        }
    }
    active
}
