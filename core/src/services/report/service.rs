//! Main report service implementation

use chrono::Utc;
use std::sync::Arc;

use crate::domain::value_objects::period::ReportPeriod;
use crate::errors::DomainResult;
use crate::repositories::customer::{CustomerQuery, CustomerRepository};

use super::document;

/// Report generator over the customer directory
pub struct ReportService<R: CustomerRepository> {
    /// Customer repository for database operations
    repository: Arc<R>,
}

impl<R: CustomerRepository> ReportService<R> {
    /// Create a new report service
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Generate a PDF report for the given period
    ///
    /// Selects the customers created at or after the period cutoff,
    /// newest first, and renders them as a single-flow table.
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<u8>)` - The rendered PDF bytes
    /// * `Err(DomainError)` - Fetch or render failed
    pub async fn generate(&self, period: ReportPeriod) -> DomainResult<Vec<u8>> {
        let cutoff = period.cutoff_from(Utc::now());
        let customers = self
            .repository
            .find(&CustomerQuery::created_since(cutoff))
            .await?;

        tracing::info!(
            "rendering {} report: {} customers since {}",
            period,
            customers.len(),
            cutoff
        );

        document::render(period, &customers)
    }
}
