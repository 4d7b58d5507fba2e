//! Application services layer - Use cases.
//!
//! Services orchestrate repository reads and unit-of-work commits to
//! fulfill application use cases. They depend on abstractions (traits)
//! for dependency inversion.
//!
//! Every call opens its own unit of work, so no staged state outlives
//! the request that created it.

pub mod container;
mod customer_service;

// Service Container
pub use container::{ServiceContainer, Services};

// Service traits and implementations
pub use customer_service::{CustomerManager, CustomerService};

#[cfg(any(test, feature = "test-utils"))]
pub use container::MockServiceContainer;
