//! Customer service - Handles customer-related use cases.
//!
//! SOLID (SRP): Handles customer use cases only.
//! Each operation delegates to the customer repository and commits
//! through a unit of work opened for that call. No validation or
//! uniqueness rules live here; the store is the only authority.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::Customer;
use crate::errors::{AppError, AppResult};
use crate::infra::{UnitOfWork, UnitOfWorkProvider};

/// Customer service trait for dependency injection.
#[async_trait]
pub trait CustomerService: Send + Sync {
    /// List all customers
    async fn list_customers(&self) -> AppResult<Vec<Customer>>;

    /// Look up a customer by user name; `None` is a normal outcome
    async fn get_by_user_name(&self, user_name: &str) -> AppResult<Option<Customer>>;

    /// Insert a customer and return it with its store-assigned ID
    async fn create_customer(&self, customer: Customer) -> AppResult<Customer>;

    /// Replace the customer with the same ID; `NotFound` if absent
    async fn update_customer(&self, customer: Customer) -> AppResult<u64>;

    /// Delete a customer by ID; `NotFound` if absent
    async fn delete_customer(&self, id: i32) -> AppResult<u64>;
}

/// Concrete implementation of CustomerService using Unit of Work.
pub struct CustomerManager<P: UnitOfWorkProvider> {
    provider: Arc<P>,
}

impl<P: UnitOfWorkProvider> CustomerManager<P> {
    /// Create new customer service instance
    pub fn new(provider: Arc<P>) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl<P: UnitOfWorkProvider> CustomerService for CustomerManager<P> {
    async fn list_customers(&self) -> AppResult<Vec<Customer>> {
        self.provider.begin().customers().find_all().await
    }

    async fn get_by_user_name(&self, user_name: &str) -> AppResult<Option<Customer>> {
        self.provider
            .begin()
            .customers()
            .find_by_user_name(user_name)
            .await
    }

    async fn create_customer(&self, customer: Customer) -> AppResult<Customer> {
        let uow = self.provider.begin();
        let created = uow.customers().add(customer);
        uow.commit().await?;

        let created = created
            .into_inner()
            .ok_or_else(|| AppError::internal("Committed insert returned no customer"))?;
        tracing::info!(id = created.id, user_name = %created.user_name, "Customer created");

        Ok(created)
    }

    async fn update_customer(&self, customer: Customer) -> AppResult<u64> {
        let id = customer.id;
        let uow = self.provider.begin();
        uow.customers().update(customer);
        let affected = uow.commit().await?;

        tracing::info!(id, affected, "Customer updated");
        Ok(affected)
    }

    async fn delete_customer(&self, id: i32) -> AppResult<u64> {
        let uow = self.provider.begin();
        uow.customers().remove(id);
        let affected = uow.commit().await?;

        tracing::info!(id, affected, "Customer deleted");
        Ok(affected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::predicate::eq;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use crate::infra::{CustomerRepository, MockCustomerRepository, Staged};

    type CommitFn = dyn Fn() -> AppResult<u64> + Send + Sync;

    fn create_test_customer(id: i32, user_name: &str) -> Customer {
        Customer {
            id,
            ..Customer::new(user_name, "Test", "Customer", format!("{user_name}@example.com"))
        }
    }

    /// Test unit of work that wraps a MockCustomerRepository
    struct TestUnitOfWork {
        customer_repo: Arc<MockCustomerRepository>,
        commit: Arc<CommitFn>,
        commits: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl UnitOfWork for TestUnitOfWork {
        fn customers(&self) -> Arc<dyn CustomerRepository> {
            self.customer_repo.clone()
        }

        async fn commit(&self) -> AppResult<u64> {
            self.commits.fetch_add(1, Ordering::SeqCst);
            (self.commit)()
        }

        fn discard(&self) {}
    }

    /// Hands out a fresh TestUnitOfWork per call, counting them
    struct TestProvider {
        customer_repo: Arc<MockCustomerRepository>,
        commit: Arc<CommitFn>,
        begun: AtomicUsize,
        commits: Arc<AtomicUsize>,
    }

    impl TestProvider {
        fn new(
            repo: MockCustomerRepository,
            commit: impl Fn() -> AppResult<u64> + Send + Sync + 'static,
        ) -> Self {
            Self {
                customer_repo: Arc::new(repo),
                commit: Arc::new(commit),
                begun: AtomicUsize::new(0),
                commits: Arc::new(AtomicUsize::new(0)),
            }
        }
    }

    impl UnitOfWorkProvider for TestProvider {
        type Work = TestUnitOfWork;

        fn begin(&self) -> TestUnitOfWork {
            self.begun.fetch_add(1, Ordering::SeqCst);
            TestUnitOfWork {
                customer_repo: self.customer_repo.clone(),
                commit: self.commit.clone(),
                commits: self.commits.clone(),
            }
        }
    }

    #[tokio::test]
    async fn test_list_customers_delegates_to_find_all() {
        let mut repo = MockCustomerRepository::new();
        repo.expect_find_all().times(1).returning(|| {
            Ok(vec![
                create_test_customer(1, "alice"),
                create_test_customer(2, "bob"),
            ])
        });

        let provider = Arc::new(TestProvider::new(repo, || Ok(0)));
        let service = CustomerManager::new(provider.clone());
        let customers = service.list_customers().await.unwrap();

        assert_eq!(customers.len(), 2);
        // Reads never commit
        assert_eq!(provider.commits.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_get_by_user_name_found() {
        let mut repo = MockCustomerRepository::new();
        repo.expect_find_by_user_name()
            .with(eq("alice"))
            .returning(|name| Ok(Some(create_test_customer(1, name))));

        let service = CustomerManager::new(Arc::new(TestProvider::new(repo, || Ok(0))));
        let customer = service.get_by_user_name("alice").await.unwrap();

        assert_eq!(customer.map(|c| c.user_name).as_deref(), Some("alice"));
    }

    #[tokio::test]
    async fn test_get_by_user_name_absent_is_not_an_error() {
        let mut repo = MockCustomerRepository::new();
        repo.expect_find_by_user_name().returning(|_| Ok(None));

        let service = CustomerManager::new(Arc::new(TestProvider::new(repo, || Ok(0))));
        let result = service.get_by_user_name("nobody").await;

        assert!(matches!(result, Ok(None)));
    }

    #[tokio::test]
    async fn test_create_customer_returns_committed_record() {
        let mut repo = MockCustomerRepository::new();
        repo.expect_add()
            .times(1)
            .returning(|customer| Staged::ready(Customer { id: 42, ..customer }));

        let provider = Arc::new(TestProvider::new(repo, || Ok(1)));
        let service = CustomerManager::new(provider.clone());
        let created = service
            .create_customer(create_test_customer(0, "carol"))
            .await
            .unwrap();

        assert_eq!(created.id, 42);
        assert_eq!(created.user_name, "carol");
        assert_eq!(provider.commits.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_create_customer_propagates_commit_failure() {
        let mut repo = MockCustomerRepository::new();
        repo.expect_add().returning(|_| Staged::pending());

        let service = CustomerManager::new(Arc::new(TestProvider::new(repo, || {
            Err(AppError::conflict("Record"))
        })));
        let result = service.create_customer(create_test_customer(0, "carol")).await;

        assert!(matches!(result, Err(AppError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_update_customer_returns_affected_count() {
        let mut repo = MockCustomerRepository::new();
        repo.expect_update()
            .withf(|customer| customer.id == 3 && customer.first_name == "Renamed")
            .times(1)
            .return_const(());

        let service = CustomerManager::new(Arc::new(TestProvider::new(repo, || Ok(1))));
        let mut customer = create_test_customer(3, "dave");
        customer.first_name = "Renamed".to_string();

        assert_eq!(service.update_customer(customer).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_update_customer_not_found() {
        let mut repo = MockCustomerRepository::new();
        repo.expect_update().return_const(());

        let service = CustomerManager::new(Arc::new(TestProvider::new(repo, || {
            Err(AppError::NotFound)
        })));
        let result = service.update_customer(create_test_customer(99, "ghost")).await;

        assert!(matches!(result, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn test_delete_customer_not_found() {
        let mut repo = MockCustomerRepository::new();
        repo.expect_remove().with(eq(99)).times(1).return_const(());

        let service = CustomerManager::new(Arc::new(TestProvider::new(repo, || {
            Err(AppError::NotFound)
        })));
        let result = service.delete_customer(99).await;

        assert!(matches!(result, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn test_each_call_opens_its_own_unit_of_work() {
        let mut repo = MockCustomerRepository::new();
        repo.expect_remove().return_const(());
        repo.expect_find_all().returning(|| Ok(vec![]));

        let provider = Arc::new(TestProvider::new(repo, || Ok(1)));
        let service = CustomerManager::new(provider.clone());

        service.delete_customer(1).await.unwrap();
        service.delete_customer(2).await.unwrap();
        service.list_customers().await.unwrap();

        assert_eq!(provider.begun.load(Ordering::SeqCst), 3);
        assert_eq!(provider.commits.load(Ordering::SeqCst), 2);
    }
}
