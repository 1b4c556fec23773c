use actix_web::{web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use crate::dto::customer::CustomerPayload;
use crate::handlers::error::{domain_error_response, validation_error_response};
use crate::routes::AppState;

use crm_core::repositories::CustomerRepository;
use crm_shared::types::MessageResponse;

/// Handler for PUT /api/customers/{id}
///
/// Overwrites the five mutable fields of an existing customer and returns
/// the post-update record; 404 when the id does not resolve.
pub async fn update_customer<R>(
    state: web::Data<AppState<R>>,
    path: web::Path<Uuid>,
    payload: web::Json<CustomerPayload>,
) -> HttpResponse
where
    R: CustomerRepository + 'static,
{
    let payload = payload.into_inner();
    if let Err(errors) = payload.validate() {
        return validation_error_response(&errors);
    }

    let id = path.into_inner();
    match state.directory_service.update(id, payload.into()).await {
        Ok(Some(customer)) => HttpResponse::Ok().json(customer),
        Ok(None) => HttpResponse::NotFound().json(MessageResponse::new("Customer not found")),
        Err(error) => {
            if error.is_unexpected() {
                log::error!("customer update failed for {}: {}", id, error);
            }
            domain_error_response(&error)
        }
    }
}
