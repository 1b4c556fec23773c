//! Integration tests for the customer directory endpoints

use actix_web::{http::StatusCode, test, web};
use std::sync::Arc;

use crm_api::app::create_app;
use crm_api::routes::AppState;
use crm_core::repositories::customer::InMemoryCustomerRepository;
use crm_core::services::auth::{AuthService, AuthServiceConfig};
use crm_core::services::directory::DirectoryService;
use crm_core::services::report::ReportService;
use crm_core::services::token::{TokenService, TokenServiceConfig};

fn app_state() -> web::Data<AppState<InMemoryCustomerRepository>> {
    let repository = Arc::new(InMemoryCustomerRepository::new());
    let token_service = Arc::new(TokenService::new(TokenServiceConfig::default()));
    let auth_service = Arc::new(AuthService::new(token_service, AuthServiceConfig::default()));

    web::Data::new(AppState {
        auth_service,
        directory_service: Arc::new(DirectoryService::new(repository.clone())),
        report_service: Arc::new(ReportService::new(repository)),
    })
}

fn customer_body(name: &str, email: &str, phone: &str) -> serde_json::Value {
    serde_json::json!({
        "name": name,
        "email": email,
        "phone": phone,
        "address": "12 Lake View Road",
        "pincode": "560001"
    })
}

/// Build a create request for the given customer body
fn create_request(body: serde_json::Value) -> actix_web::test::TestRequest {
    test::TestRequest::post()
        .uri("/api/customers")
        .set_json(body)
}

#[actix_web::test]
async fn test_created_customer_is_returned_and_searchable() {
    let app = test::init_service(create_app(app_state())).await;

    let resp = test::call_service(
        &app,
        create_request(customer_body("Asha Rao", "asha@example.com", "9876543210")).to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let created: serde_json::Value = test::read_body_json(resp).await;

    assert_eq!(created["name"], "Asha Rao");
    assert_eq!(created["email"], "asha@example.com");
    assert!(created["id"].is_string());
    assert!(created["createdAt"].is_string());

    let req = test::TestRequest::get().uri("/api/customers").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let listed: Vec<serde_json::Value> = test::read_body_json(resp).await;
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["id"], created["id"]);
}

#[actix_web::test]
async fn test_search_matches_case_insensitive_substring() {
    let app = test::init_service(create_app(app_state())).await;
    test::call_service(
        &app,
        create_request(customer_body("Asha Rao", "asha@example.com", "9876543210")).to_request(),
    )
    .await;
    test::call_service(
        &app,
        create_request(customer_body("Binod Kumar", "binod@mail.net", "5550001111")).to_request(),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/api/customers?search=RAO")
        .to_request();
    let resp = test::call_service(&app, req).await;
    let matched: Vec<serde_json::Value> = test::read_body_json(resp).await;
    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0]["name"], "Asha Rao");

    let req = test::TestRequest::get()
        .uri("/api/customers?search=555000")
        .to_request();
    let resp = test::call_service(&app, req).await;
    let matched: Vec<serde_json::Value> = test::read_body_json(resp).await;
    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0]["name"], "Binod Kumar");

    let req = test::TestRequest::get()
        .uri("/api/customers?search=nobody")
        .to_request();
    let resp = test::call_service(&app, req).await;
    let matched: Vec<serde_json::Value> = test::read_body_json(resp).await;
    assert!(matched.is_empty());
}

#[actix_web::test]
async fn test_duplicate_email_yields_conflict() {
    let app = test::init_service(create_app(app_state())).await;
    test::call_service(
        &app,
        create_request(customer_body("One", "same@example.com", "111")).to_request(),
    )
    .await;

    let resp = test::call_service(
        &app,
        create_request(customer_body("Two", "same@example.com", "222")).to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    // The store keeps exactly one record with that email
    let req = test::TestRequest::get()
        .uri("/api/customers?search=same@example.com")
        .to_request();
    let resp = test::call_service(&app, req).await;
    let matched: Vec<serde_json::Value> = test::read_body_json(resp).await;
    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0]["name"], "One");
}

#[actix_web::test]
async fn test_blank_required_field_yields_bad_request() {
    let app = test::init_service(create_app(app_state())).await;

    let resp = test::call_service(
        &app,
        create_request(serde_json::json!({
            "name": "",
            "email": "a@example.com",
            "phone": "123",
            "pincode": "560001"
        }))
        .to_request(),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Missing required fields: name");
}

#[actix_web::test]
async fn test_update_overwrites_fields_and_keeps_identity() {
    let app = test::init_service(create_app(app_state())).await;
    let resp = test::call_service(
        &app,
        create_request(customer_body("Asha Rao", "asha@example.com", "9876543210")).to_request(),
    )
    .await;
    let created: serde_json::Value = test::read_body_json(resp).await;
    let id = created["id"].as_str().unwrap();

    let req = test::TestRequest::put()
        .uri(&format!("/api/customers/{}", id))
        .set_json(serde_json::json!({
            "name": "Asha R",
            "email": "asha.r@example.com",
            "phone": "9876500000",
            "pincode": "560002"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let updated: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(updated["id"], created["id"]);
    assert_eq!(updated["createdAt"], created["createdAt"]);
    assert_eq!(updated["name"], "Asha R");
    assert_eq!(updated["email"], "asha.r@example.com");
    assert!(updated["address"].is_null());
}

#[actix_web::test]
async fn test_update_missing_customer_yields_not_found() {
    let app = test::init_service(create_app(app_state())).await;

    let req = test::TestRequest::put()
        .uri(&format!("/api/customers/{}", uuid::Uuid::new_v4()))
        .set_json(customer_body("Ghost", "ghost@example.com", "000"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_delete_acknowledges_and_is_idempotent() {
    let app = test::init_service(create_app(app_state())).await;
    let resp = test::call_service(
        &app,
        create_request(customer_body("Asha Rao", "asha@example.com", "9876543210")).to_request(),
    )
    .await;
    let created: serde_json::Value = test::read_body_json(resp).await;
    let id = created["id"].as_str().unwrap().to_string();

    let req = test::TestRequest::delete()
        .uri(&format!("/api/customers/{}", id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Customer deleted");

    // Gone from every subsequent search
    let req = test::TestRequest::get().uri("/api/customers").to_request();
    let resp = test::call_service(&app, req).await;
    let listed: Vec<serde_json::Value> = test::read_body_json(resp).await;
    assert!(listed.is_empty());

    // Deleting again still succeeds
    let req = test::TestRequest::delete()
        .uri(&format!("/api/customers/{}", id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_unknown_route_yields_404_body() {
    let app = test::init_service(create_app(app_state())).await;

    let req = test::TestRequest::get().uri("/api/unknown").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
