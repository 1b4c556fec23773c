//! Route handlers and shared application state

pub mod auth;
pub mod customers;

use std::sync::Arc;

use crm_core::repositories::CustomerRepository;
use crm_core::services::{AuthService, DirectoryService, ReportService};

/// Application state that holds shared services
///
/// Generic over the repository so integration tests can run against the
/// in-memory implementation.
pub struct AppState<R: CustomerRepository> {
    pub auth_service: Arc<AuthService>,
    pub directory_service: Arc<DirectoryService<R>>,
    pub report_service: Arc<ReportService<R>>,
}
