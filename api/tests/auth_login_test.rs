//! Integration tests for the login endpoint

use actix_web::{http::StatusCode, test, web};
use std::sync::Arc;

use crm_api::app::create_app;
use crm_api::routes::AppState;
use crm_core::domain::entities::token::Claims;
use crm_core::repositories::customer::InMemoryCustomerRepository;
use crm_core::services::auth::{AuthService, AuthServiceConfig};
use crm_core::services::directory::DirectoryService;
use crm_core::services::report::ReportService;
use crm_core::services::token::{TokenService, TokenServiceConfig};

const TEST_SECRET: &str = "test-secret";

fn app_state() -> web::Data<AppState<InMemoryCustomerRepository>> {
    let repository = Arc::new(InMemoryCustomerRepository::new());
    let token_service = Arc::new(TokenService::new(TokenServiceConfig {
        jwt_secret: TEST_SECRET.to_string(),
        token_validity_hours: 100,
        issuer: "crm-desk".to_string(),
    }));
    let auth_service = Arc::new(AuthService::new(
        token_service,
        AuthServiceConfig {
            staff_email: "staff@crmdesk.local".to_string(),
            staff_password: "password123".to_string(),
        },
    ));

    web::Data::new(AppState {
        auth_service,
        directory_service: Arc::new(DirectoryService::new(repository.clone())),
        report_service: Arc::new(ReportService::new(repository)),
    })
}

#[actix_web::test]
async fn test_login_with_valid_credentials_returns_decodable_token() {
    let app = test::init_service(create_app(app_state())).await;

    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(serde_json::json!({
            "email": "staff@crmdesk.local",
            "password": "password123"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    let token = body["token"].as_str().expect("token field");

    let mut validation = jsonwebtoken::Validation::default();
    validation.set_issuer(&["crm-desk"]);
    let decoded = jsonwebtoken::decode::<Claims>(
        token,
        &jsonwebtoken::DecodingKey::from_secret(TEST_SECRET.as_bytes()),
        &validation,
    )
    .expect("token decodes with the signing secret");

    assert_eq!(decoded.claims.email(), "staff@crmdesk.local");
    assert_eq!(decoded.claims.exp - decoded.claims.iat, 100 * 3600);
}

#[actix_web::test]
async fn test_login_with_wrong_password_is_rejected() {
    let app = test::init_service(create_app(app_state())).await;

    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(serde_json::json!({
            "email": "staff@crmdesk.local",
            "password": "letmein"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Invalid credentials");
}

#[actix_web::test]
async fn test_login_with_unknown_email_gets_same_rejection() {
    let app = test::init_service(create_app(app_state())).await;

    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(serde_json::json!({
            "email": "intruder@example.com",
            "password": "password123"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    // Unknown user and wrong password are indistinguishable
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Invalid credentials");
}
