//! Service Container - Centralized service access.
//!
//! SOLID (SRP): Manages service lifecycle and access.
//! SOLID (DIP): Depends on service traits, not implementations.

use std::sync::Arc;

use super::{CustomerManager, CustomerService};
use crate::infra::Database;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Service container trait for dependency injection.
///
/// Provides centralized access to all application services.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait ServiceContainer: Send + Sync {
    /// Get customer service
    fn customers(&self) -> Arc<dyn CustomerService>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    customer_service: Arc<dyn CustomerService>,
}

impl Services {
    /// Create a new service container with all services initialized
    pub fn new(customer_service: Arc<dyn CustomerService>) -> Self {
        Self { customer_service }
    }

    /// Create service container backed by the given database
    pub fn from_database(database: Arc<Database>) -> Self {
        let customer_service = Arc::new(CustomerManager::new(database));
        Self { customer_service }
    }
}

impl ServiceContainer for Services {
    fn customers(&self) -> Arc<dyn CustomerService> {
        self.customer_service.clone()
    }
}
