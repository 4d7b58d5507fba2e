//! Sample customers for an empty database.

use crate::domain::Customer;
use crate::errors::AppResult;
use crate::infra::{UnitOfWork, UnitOfWorkProvider};

/// Customers inserted when the table is empty
pub fn sample_customers() -> Vec<Customer> {
    vec![
        Customer::new("customer1", "customer1", "customer", "customer1@local.com"),
        Customer::new("customer2", "customer2", "customer", "customer2@local.com"),
    ]
}

/// Insert the sample customers unless any customer exists.
///
/// Runs through a single unit of work, so either all samples land or none.
/// Returns the number of inserted records.
pub async fn seed_customers<P: UnitOfWorkProvider>(provider: &P) -> AppResult<u64> {
    let uow = provider.begin();
    let customers = uow.customers();

    if !customers.find_all().await?.is_empty() {
        tracing::debug!("Customers present, skipping seed");
        return Ok(0);
    }

    for customer in sample_customers() {
        customers.add(customer);
    }

    let inserted = uow.commit().await?;
    tracing::info!(inserted, "Seeded customer data");

    Ok(inserted)
}
