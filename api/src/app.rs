//! Application factory
//!
//! Wires routing, CORS, JSON body parsing, and the shared service state
//! into an Actix-web application.

use actix_web::{middleware::Logger, web, App, HttpResponse};
use chrono::Utc;

use crate::middleware::cors::create_cors;
use crate::routes::auth::login::login;
use crate::routes::customers::{
    create::create_customer, delete::delete_customer, report::customer_report,
    search::search_customers, update::update_customer,
};
use crate::routes::AppState;

use crm_core::repositories::CustomerRepository;
use crm_shared::types::{HealthResponse, MessageResponse};

/// Create and configure the application with all dependencies
pub fn create_app<R>(
    app_state: web::Data<AppState<R>>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    R: CustomerRepository + 'static,
{
    let cors = create_cors();

    App::new()
        // Add application state
        .app_data(app_state)
        // Add middleware
        .wrap(Logger::default())
        .wrap(cors)
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        // API routes
        .service(
            web::scope("/api")
                .service(web::scope("/auth").route("/login", web::post().to(login::<R>)))
                .service(
                    web::scope("/customers")
                        .route("", web::get().to(search_customers::<R>))
                        .route("", web::post().to(create_customer::<R>))
                        // Registered before the id routes so "report" is
                        // never captured as an id
                        .route("/report/{period}", web::get().to(customer_report::<R>))
                        .route("/{id}", web::put().to(update_customer::<R>))
                        .route("/{id}", web::delete().to(delete_customer::<R>)),
                ),
        )
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        service: "crm-desk-api".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now(),
    })
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(MessageResponse::new("The requested resource was not found"))
}
