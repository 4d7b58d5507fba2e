//! Customer repository - generic CRUD plus lookup by user name.

use async_trait::async_trait;
use sea_orm::{ColumnTrait, QueryFilter};

use super::base::{DeleteRepository, ReadRepository, Repository, WriteRepository};
use crate::domain::customer::{self, ActiveModel, Entity as CustomerEntity};
use crate::domain::Customer;
use crate::errors::AppResult;
use crate::infra::context::{PersistenceContext, Staged};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Customer repository trait for dependency injection.
///
/// Reads return committed state. `add`, `update` and `remove` only stage
/// changes; they take effect when the owning unit of work commits.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Find customer by ID
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Customer>>;

    /// List every customer (store-defined order)
    async fn find_all(&self) -> AppResult<Vec<Customer>>;

    /// Find customer by exact user name (store collation decides case rules)
    async fn find_by_user_name(&self, user_name: &str) -> AppResult<Option<Customer>>;

    /// Stage an insert; the slot holds the stored customer after commit
    fn add(&self, customer: Customer) -> Staged<Customer>;

    /// Stage a full replace of the customer with the same ID
    fn update(&self, customer: Customer);

    /// Stage a delete by ID
    fn remove(&self, id: i32);
}

/// Concrete implementation of CustomerRepository
pub struct CustomerStore {
    ctx: PersistenceContext,
}

impl CustomerStore {
    /// Create new repository bound to a persistence context
    pub fn new(ctx: PersistenceContext) -> Self {
        Self { ctx }
    }
}

impl Repository for CustomerStore {
    fn context(&self) -> &PersistenceContext {
        &self.ctx
    }
}

impl ReadRepository<CustomerEntity> for CustomerStore {}
impl WriteRepository<CustomerEntity, ActiveModel> for CustomerStore {}
impl DeleteRepository<CustomerEntity> for CustomerStore {}

#[async_trait]
impl CustomerRepository for CustomerStore {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Customer>> {
        ReadRepository::<CustomerEntity>::find_by_id(self, id).await
    }

    async fn find_all(&self) -> AppResult<Vec<Customer>> {
        ReadRepository::<CustomerEntity>::find_all(self, None).await
    }

    async fn find_by_user_name(&self, user_name: &str) -> AppResult<Option<Customer>> {
        let customer = ReadRepository::<CustomerEntity>::query(self)
            .filter(customer::Column::UserName.eq(user_name))
            .one(self.ctx.connection())
            .await?;

        Ok(customer)
    }

    fn add(&self, customer: Customer) -> Staged<Customer> {
        WriteRepository::<CustomerEntity, ActiveModel>::add(self, customer)
    }

    fn update(&self, customer: Customer) {
        WriteRepository::<CustomerEntity, ActiveModel>::update(self, customer)
    }

    fn remove(&self, id: i32) {
        DeleteRepository::<CustomerEntity>::remove(self, id)
    }
}
