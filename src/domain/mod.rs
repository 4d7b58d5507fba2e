//! Domain layer - Core business entities
//!
//! The customer record is a plain data carrier: the service layer applies
//! no business rules to it beyond delegating to the repositories.

pub mod customer;

pub use customer::Model as Customer;
