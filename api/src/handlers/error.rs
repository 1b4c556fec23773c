//! Domain-error-to-HTTP mapping
//!
//! The single place where domain conditions become status codes. Expected
//! conditions map to 4xx with a short message; anything unexpected is
//! logged by the caller and surfaced as a bare 500.

use actix_web::HttpResponse;
use validator::ValidationErrors;

use crm_core::errors::{DomainError, ValidationError};
use crm_shared::types::MessageResponse;

/// Convert a domain error into an HTTP response
pub fn domain_error_response(error: &DomainError) -> HttpResponse {
    match error {
        DomainError::Auth(_) => {
            HttpResponse::Unauthorized().json(MessageResponse::new("Invalid credentials"))
        }
        DomainError::Token(_) => {
            HttpResponse::Unauthorized().json(MessageResponse::new("Invalid token"))
        }
        DomainError::ValidationErr(ValidationError::InvalidPeriod { .. }) => {
            HttpResponse::BadRequest().json(MessageResponse::new("Invalid period"))
        }
        DomainError::ValidationErr(ValidationError::DuplicateValue { field }) => {
            HttpResponse::Conflict().json(MessageResponse::new(format!(
                "A customer with this {} already exists",
                field
            )))
        }
        DomainError::ValidationErr(err) => {
            HttpResponse::BadRequest().json(MessageResponse::new(err.to_string()))
        }
        DomainError::NotFound { resource } => {
            HttpResponse::NotFound().json(MessageResponse::new(format!("{} not found", resource)))
        }
        // No internal detail leaks to the caller
        DomainError::Database { .. } | DomainError::Internal { .. } => {
            HttpResponse::InternalServerError().json(MessageResponse::new("Server error"))
        }
    }
}

/// Convert request body validation failures into a 400 response
///
/// Lists the offending fields in a single short message.
pub fn validation_error_response(errors: &ValidationErrors) -> HttpResponse {
    let mut fields: Vec<&str> = errors.field_errors().keys().copied().collect();
    fields.sort_unstable();

    HttpResponse::BadRequest().json(MessageResponse::new(format!(
        "Missing required fields: {}",
        fields.join(", ")
    )))
}
