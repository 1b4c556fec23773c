use actix_web::{web, HttpServer};
use anyhow::Context;
use dotenvy::dotenv;
use log::info;
use std::sync::Arc;

use crm_api::app::create_app;
use crm_api::routes::AppState;
use crm_core::services::auth::{AuthService, AuthServiceConfig};
use crm_core::services::directory::DirectoryService;
use crm_core::services::report::ReportService;
use crm_core::services::token::{TokenService, TokenServiceConfig};
use crm_infra::database::connection::DatabasePool;
use crm_infra::database::mysql::MySqlCustomerRepository;
use crm_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting CRM Desk API server");

    // Load configuration
    let config = AppConfig::from_env();
    if config.environment.is_production() && config.auth.jwt.is_using_default_secret() {
        log::warn!("JWT_SECRET is unset; falling back to the development default");
    }

    // Initialize database
    let pool = DatabasePool::new(&config.database)
        .await
        .context("failed to create database pool")?;
    pool.run_migrations()
        .await
        .context("failed to run database migrations")?;

    // Wire repositories and services
    let repository = Arc::new(MySqlCustomerRepository::new(pool.get_pool().clone()));
    let token_service = Arc::new(TokenService::new(TokenServiceConfig::from(&config.auth.jwt)));
    let auth_service = Arc::new(AuthService::new(
        token_service,
        AuthServiceConfig::from(&config.auth),
    ));
    let directory_service = Arc::new(DirectoryService::new(repository.clone()));
    let report_service = Arc::new(ReportService::new(repository));

    let state = web::Data::new(AppState {
        auth_service,
        directory_service,
        report_service,
    });

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    HttpServer::new(move || create_app(state.clone()))
        .bind(&bind_address)?
        .run()
        .await?;

    Ok(())
}
