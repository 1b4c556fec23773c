//! Main customer directory service implementation

use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::customer::{Customer, CustomerDraft};
use crate::errors::{DomainResult, ValidationError};
use crate::repositories::customer::{CustomerQuery, CustomerRepository};

/// Customer directory service
///
/// Thin translation between request-shaped inputs and repository
/// operations. Holds no state between requests; all persistence goes
/// through the repository.
pub struct DirectoryService<R: CustomerRepository> {
    /// Customer repository for database operations
    repository: Arc<R>,
}

impl<R: CustomerRepository> DirectoryService<R> {
    /// Create a new directory service
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Search customers by free text
    ///
    /// An empty query matches all customers. Otherwise a customer matches
    /// when the query is a case-insensitive substring of its name, email,
    /// or phone. Results are newest first.
    pub async fn search(&self, query: &str) -> DomainResult<Vec<Customer>> {
        let query = if query.is_empty() {
            CustomerQuery::all()
        } else {
            CustomerQuery::matching(query)
        };

        self.repository.find(&query).await
    }

    /// Create a new customer
    ///
    /// Rejects the draft when another customer already holds its email.
    pub async fn create(&self, draft: CustomerDraft) -> DomainResult<Customer> {
        if self.repository.find_by_email(&draft.email).await?.is_some() {
            return Err(ValidationError::DuplicateValue {
                field: "email".to_string(),
            }
            .into());
        }

        let created = self.repository.insert(Customer::new(draft)).await?;
        tracing::info!("created customer {}", created.id);
        Ok(created)
    }

    /// Overwrite the five mutable fields of an existing customer
    ///
    /// Returns `None` when the id does not resolve; the store is left
    /// untouched in that case. Moving the email onto a value held by a
    /// different customer is rejected.
    pub async fn update(&self, id: Uuid, draft: CustomerDraft) -> DomainResult<Option<Customer>> {
        let Some(mut customer) = self.repository.find_by_id(id).await? else {
            return Ok(None);
        };

        if draft.email != customer.email {
            if let Some(other) = self.repository.find_by_email(&draft.email).await? {
                if other.id != id {
                    return Err(ValidationError::DuplicateValue {
                        field: "email".to_string(),
                    }
                    .into());
                }
            }
        }

        customer.apply(draft);
        let updated = self.repository.update(customer).await?;
        tracing::info!("updated customer {}", updated.id);
        Ok(Some(updated))
    }

    /// Delete a customer
    ///
    /// Idempotent from the caller's perspective: succeeds whether or not
    /// a record existed.
    pub async fn delete(&self, id: Uuid) -> DomainResult<()> {
        let removed = self.repository.delete(id).await?;
        if removed {
            tracing::info!("deleted customer {}", id);
        } else {
            tracing::debug!("delete for missing customer {}", id);
        }
        Ok(())
    }
}
