//! Authentication configuration
//!
//! The backend serves a single staff account. The credential pair and the
//! token signing secret are process-wide configuration, loaded once at
//! startup and passed by reference to the session issuer.

use serde::{Deserialize, Serialize};

/// JWT signing configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// JWT secret key for signing tokens
    pub secret: String,

    /// Token validity window in hours
    pub token_validity_hours: i64,

    /// JWT issuer claim
    pub issuer: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::from("development-secret-please-change-in-production"),
            token_validity_hours: 100,
            issuer: String::from("crm-desk"),
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Set the token validity window in hours
    pub fn with_validity_hours(mut self, hours: i64) -> Self {
        self.token_validity_hours = hours;
        self
    }

    /// Check if using default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == "development-secret-please-change-in-production"
    }
}

/// Complete authentication configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// Email of the single staff account
    pub staff_email: String,

    /// Plaintext password of the single staff account
    pub staff_password: String,

    /// JWT configuration
    pub jwt: JwtConfig,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            staff_email: String::from("staff@crmdesk.local"),
            staff_password: String::from("password123"),
            jwt: JwtConfig::default(),
        }
    }
}

impl AuthConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let staff_email = std::env::var("STAFF_EMAIL")
            .unwrap_or_else(|_| "staff@crmdesk.local".to_string());
        let staff_password = std::env::var("STAFF_PASSWORD")
            .unwrap_or_else(|_| "password123".to_string());
        let secret = std::env::var("JWT_SECRET")
            .unwrap_or_else(|_| "development-secret-please-change-in-production".to_string());
        let token_validity_hours = std::env::var("TOKEN_VALIDITY_HOURS")
            .unwrap_or_else(|_| "100".to_string())
            .parse()
            .unwrap_or(100);

        Self {
            staff_email,
            staff_password,
            jwt: JwtConfig {
                secret,
                token_validity_hours,
                issuer: String::from("crm-desk"),
            },
        }
    }
}
