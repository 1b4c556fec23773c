use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::customer::CustomerPayload;
use crate::handlers::error::{domain_error_response, validation_error_response};
use crate::routes::AppState;

use crm_core::repositories::CustomerRepository;

/// Handler for POST /api/customers
///
/// Persists a new customer. The email must not collide with an existing
/// record; a collision yields 409.
pub async fn create_customer<R>(
    state: web::Data<AppState<R>>,
    payload: web::Json<CustomerPayload>,
) -> HttpResponse
where
    R: CustomerRepository + 'static,
{
    let payload = payload.into_inner();
    if let Err(errors) = payload.validate() {
        return validation_error_response(&errors);
    }

    match state.directory_service.create(payload.into()).await {
        Ok(customer) => HttpResponse::Ok().json(customer),
        Err(error) => {
            if error.is_unexpected() {
                log::error!("customer creation failed: {}", error);
            }
            domain_error_response(&error)
        }
    }
}
