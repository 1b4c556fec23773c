//! In-memory implementation of CustomerRepository.
//!
//! Backs service tests and API integration tests; behaves like the MySQL
//! implementation, including the unique-email constraint.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::customer::Customer;
use crate::errors::{DomainError, ValidationError};

use super::r#trait::{CustomerQuery, CustomerRepository};

/// In-memory customer repository
#[derive(Clone)]
pub struct InMemoryCustomerRepository {
    customers: Arc<RwLock<HashMap<Uuid, Customer>>>,
}

impl InMemoryCustomerRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self {
            customers: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Number of stored customers
    pub async fn len(&self) -> usize {
        self.customers.read().await.len()
    }

    /// Whether the repository is empty
    pub async fn is_empty(&self) -> bool {
        self.customers.read().await.is_empty()
    }
}

impl Default for InMemoryCustomerRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CustomerRepository for InMemoryCustomerRepository {
    async fn find(&self, query: &CustomerQuery) -> Result<Vec<Customer>, DomainError> {
        let customers = self.customers.read().await;

        let mut matched: Vec<Customer> = customers
            .values()
            .filter(|c| match &query.matching {
                Some(term) => c.matches(term),
                None => true,
            })
            .filter(|c| match query.created_after {
                Some(cutoff) => c.created_at >= cutoff,
                None => true,
            })
            .cloned()
            .collect();

        matched.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(matched)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Customer>, DomainError> {
        let customers = self.customers.read().await;
        Ok(customers.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Customer>, DomainError> {
        let customers = self.customers.read().await;
        Ok(customers.values().find(|c| c.email == email).cloned())
    }

    async fn insert(&self, customer: Customer) -> Result<Customer, DomainError> {
        let mut customers = self.customers.write().await;

        // Mirror the unique index on email
        if customers.values().any(|c| c.email == customer.email) {
            return Err(DomainError::ValidationErr(ValidationError::DuplicateValue {
                field: "email".to_string(),
            }));
        }

        customers.insert(customer.id, customer.clone());
        Ok(customer)
    }

    async fn update(&self, customer: Customer) -> Result<Customer, DomainError> {
        let mut customers = self.customers.write().await;

        if !customers.contains_key(&customer.id) {
            return Err(DomainError::NotFound {
                resource: "customer".to_string(),
            });
        }

        customers.insert(customer.id, customer.clone());
        Ok(customer)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut customers = self.customers.write().await;
        Ok(customers.remove(&id).is_some())
    }
}
