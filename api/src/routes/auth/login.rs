use actix_web::{web, HttpResponse};

use crate::dto::auth::{LoginRequest, LoginResponse};
use crate::handlers::error::domain_error_response;
use crate::routes::AppState;

use crm_core::repositories::CustomerRepository;

/// Handler for POST /api/auth/login
///
/// Validates the staff credential pair and returns a session token.
///
/// # Request Body
///
/// ```json
/// { "email": "staff@crmdesk.local", "password": "..." }
/// ```
///
/// # Response
///
/// `200 {"token": "..."}` on success, `401 {"message": "..."}` on any
/// credential mismatch.
pub async fn login<R>(
    state: web::Data<AppState<R>>,
    request: web::Json<LoginRequest>,
) -> HttpResponse
where
    R: CustomerRepository + 'static,
{
    match state.auth_service.login(&request.email, &request.password) {
        Ok(token) => HttpResponse::Ok().json(LoginResponse { token }),
        Err(error) => {
            log::warn!("login rejected for {}", request.email);
            domain_error_response(&error)
        }
    }
}
