//! Tests for staff login

use std::sync::Arc;

use crate::errors::{AuthError, DomainError};
use crate::services::auth::{AuthService, AuthServiceConfig};
use crate::services::token::{TokenService, TokenServiceConfig};

fn service() -> (AuthService, Arc<TokenService>) {
    let token_service = Arc::new(TokenService::new(TokenServiceConfig {
        jwt_secret: "test-secret".to_string(),
        token_validity_hours: 100,
        issuer: "crm-desk".to_string(),
    }));
    let auth = AuthService::new(
        token_service.clone(),
        AuthServiceConfig {
            staff_email: "staff@crmdesk.local".to_string(),
            staff_password: "password123".to_string(),
        },
    );
    (auth, token_service)
}

#[test]
fn test_login_with_configured_pair_issues_decodable_token() {
    let (auth, tokens) = service();

    let token = auth.login("staff@crmdesk.local", "password123").unwrap();
    let claims = tokens.verify(&token).unwrap();

    assert_eq!(claims.email(), "staff@crmdesk.local");
    assert_eq!(claims.exp - claims.iat, 100 * 3600);
}

#[test]
fn test_login_rejects_wrong_password() {
    let (auth, _) = service();

    let result = auth.login("staff@crmdesk.local", "wrong");
    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::InvalidCredentials))
    ));
}

#[test]
fn test_login_rejects_unknown_email() {
    let (auth, _) = service();

    let result = auth.login("intruder@example.com", "password123");
    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::InvalidCredentials))
    ));
}

#[test]
fn test_login_comparison_is_exact() {
    let (auth, _) = service();

    // No trimming, no case folding
    assert!(auth.login("Staff@crmdesk.local", "password123").is_err());
    assert!(auth.login("staff@crmdesk.local", "password123 ").is_err());
}
