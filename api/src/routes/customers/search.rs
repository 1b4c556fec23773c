use actix_web::{web, HttpResponse};

use crate::dto::customer::SearchParams;
use crate::handlers::error::domain_error_response;
use crate::routes::AppState;

use crm_core::repositories::CustomerRepository;

/// Handler for GET /api/customers
///
/// Returns all customers matching the optional `search` query parameter,
/// newest first. A missing or empty parameter matches everything.
pub async fn search_customers<R>(
    state: web::Data<AppState<R>>,
    params: web::Query<SearchParams>,
) -> HttpResponse
where
    R: CustomerRepository + 'static,
{
    match state.directory_service.search(&params.search).await {
        Ok(customers) => HttpResponse::Ok().json(customers),
        Err(error) => {
            log::error!("customer search failed: {}", error);
            domain_error_response(&error)
        }
    }
}
