//! Repository interfaces for domain entity persistence.

pub mod customer;

pub use customer::{CustomerQuery, CustomerRepository, InMemoryCustomerRepository};
