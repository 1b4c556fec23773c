use actix_web::{web, HttpResponse};
use uuid::Uuid;

use crate::handlers::error::domain_error_response;
use crate::routes::AppState;

use crm_core::repositories::CustomerRepository;
use crm_shared::types::MessageResponse;

/// Handler for DELETE /api/customers/{id}
///
/// Removes the record if present. Succeeds either way; deleting an absent
/// id is not an error.
pub async fn delete_customer<R>(
    state: web::Data<AppState<R>>,
    path: web::Path<Uuid>,
) -> HttpResponse
where
    R: CustomerRepository + 'static,
{
    match state.directory_service.delete(path.into_inner()).await {
        Ok(()) => HttpResponse::Ok().json(MessageResponse::new("Customer deleted")),
        Err(error) => {
            log::error!("customer deletion failed: {}", error);
            domain_error_response(&error)
        }
    }
}
