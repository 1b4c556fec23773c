//! Tests for token issue and verify

use crate::errors::{DomainError, TokenError};
use crate::services::token::{TokenService, TokenServiceConfig};

fn service() -> TokenService {
    TokenService::new(TokenServiceConfig {
        jwt_secret: "test-secret".to_string(),
        token_validity_hours: 100,
        issuer: "crm-desk".to_string(),
    })
}

#[test]
fn test_issue_and_verify_roundtrip() {
    let service = service();

    let token = service.issue("staff@crmdesk.local").unwrap();
    let claims = service.verify(&token).unwrap();

    assert_eq!(claims.email(), "staff@crmdesk.local");
    assert_eq!(claims.iss, "crm-desk");
    assert_eq!(claims.exp - claims.iat, 100 * 3600);
}

#[test]
fn test_verify_rejects_expired_token() {
    let expired_issuer = TokenService::new(TokenServiceConfig {
        jwt_secret: "test-secret".to_string(),
        token_validity_hours: -1,
        issuer: "crm-desk".to_string(),
    });
    let token = expired_issuer.issue("staff@crmdesk.local").unwrap();

    let result = service().verify(&token);
    assert!(matches!(
        result,
        Err(DomainError::Token(TokenError::TokenExpired))
    ));
}

#[test]
fn test_verify_rejects_wrong_secret() {
    let other = TokenService::new(TokenServiceConfig {
        jwt_secret: "other-secret".to_string(),
        token_validity_hours: 100,
        issuer: "crm-desk".to_string(),
    });
    let token = other.issue("staff@crmdesk.local").unwrap();

    let result = service().verify(&token);
    assert!(matches!(
        result,
        Err(DomainError::Token(TokenError::InvalidTokenFormat))
    ));
}

#[test]
fn test_verify_rejects_garbage() {
    let result = service().verify("not-a-jwt");
    assert!(matches!(
        result,
        Err(DomainError::Token(TokenError::InvalidTokenFormat))
    ));
}

#[test]
fn test_verify_rejects_wrong_issuer() {
    let other = TokenService::new(TokenServiceConfig {
        jwt_secret: "test-secret".to_string(),
        token_validity_hours: 100,
        issuer: "someone-else".to_string(),
    });
    let token = other.issue("staff@crmdesk.local").unwrap();

    assert!(service().verify(&token).is_err());
}
