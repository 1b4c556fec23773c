//! Customer repository trait defining the interface for customer persistence.
//!
//! The trait is async-first and uses Result types for error handling.
//! Implementations handle the actual database operations while keeping the
//! abstraction boundary between domain and infrastructure layers.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::entities::customer::Customer;
use crate::errors::DomainError;

/// Typed query parameters for customer lookups
///
/// Replaces ad-hoc query objects with an explicit filter: a free-text
/// substring term and a creation-time cutoff. Both are optional and
/// combine with AND; results are always ordered by `created_at`
/// descending (newest first).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerQuery {
    /// Case-insensitive substring matched against name, email, or phone
    /// (logical OR across the three fields); `None` matches everything
    pub matching: Option<String>,

    /// Only customers with `created_at >= cutoff`; `None` matches everything
    pub created_after: Option<DateTime<Utc>>,
}

impl CustomerQuery {
    /// Query matching every customer
    pub fn all() -> Self {
        Self::default()
    }

    /// Query matching customers whose name, email, or phone contains `term`
    pub fn matching(term: impl Into<String>) -> Self {
        Self {
            matching: Some(term.into()),
            created_after: None,
        }
    }

    /// Query matching customers created at or after `cutoff`
    pub fn created_since(cutoff: DateTime<Utc>) -> Self {
        Self {
            matching: None,
            created_after: Some(cutoff),
        }
    }
}

/// Repository trait for Customer entity persistence operations
///
/// The store exclusively owns persistence; services hold no state between
/// requests and depend only on this abstraction.
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Find all customers matching `query`, newest first
    async fn find(&self, query: &CustomerQuery) -> Result<Vec<Customer>, DomainError>;

    /// Find a customer by its unique identifier
    ///
    /// # Returns
    /// * `Ok(Some(Customer))` - Customer found
    /// * `Ok(None)` - No customer with the given id
    /// * `Err(DomainError)` - Database or other error occurred
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Customer>, DomainError>;

    /// Find a customer by exact email
    ///
    /// Emails are unique, so at most one record can match.
    async fn find_by_email(&self, email: &str) -> Result<Option<Customer>, DomainError>;

    /// Persist a new customer
    ///
    /// # Returns
    /// * `Ok(Customer)` - The created customer
    /// * `Err(DomainError)` - Creation failed (e.g. duplicate email)
    async fn insert(&self, customer: Customer) -> Result<Customer, DomainError>;

    /// Overwrite an existing customer
    ///
    /// # Returns
    /// * `Ok(Customer)` - The updated customer
    /// * `Err(DomainError)` - Update failed (e.g. customer not found)
    async fn update(&self, customer: Customer) -> Result<Customer, DomainError>;

    /// Delete a customer
    ///
    /// # Returns
    /// * `Ok(true)` - Customer was deleted
    /// * `Ok(false)` - Customer not found
    /// * `Err(DomainError)` - Deletion failed
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;
}
