//! Application state - Dependency injection container.
//!
//! Provides centralized access to all application services and infrastructure.

use std::sync::Arc;

use crate::config::Config;
use crate::infra::Database;
use crate::services::{CustomerService, ServiceContainer, Services};

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    /// Customer service
    pub customer_service: Arc<dyn CustomerService>,
    /// Database connection (health checks)
    pub database: Arc<Database>,
    /// Configuration the process was started with
    pub config: Arc<Config>,
}

impl AppState {
    /// Create application state from a database and config.
    ///
    /// Services are wired through the ServiceContainer.
    pub fn from_config(database: Arc<Database>, config: Config) -> Self {
        let container = Services::from_database(database.clone());

        Self {
            customer_service: container.customers(),
            database,
            config: Arc::new(config),
        }
    }

    /// Create new application state with a manually injected service.
    pub fn new(
        customer_service: Arc<dyn CustomerService>,
        database: Arc<Database>,
        config: Config,
    ) -> Self {
        Self {
            customer_service,
            database,
            config: Arc::new(config),
        }
    }
}
