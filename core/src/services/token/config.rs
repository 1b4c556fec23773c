//! Configuration for the token service

use crm_shared::config::JwtConfig;

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// JWT signing secret
    pub jwt_secret: String,
    /// Token validity window in hours
    pub token_validity_hours: i64,
    /// Issuer claim written into and required from every token
    pub issuer: String,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            jwt_secret: "development-secret-please-change-in-production".to_string(),
            token_validity_hours: 100,
            issuer: "crm-desk".to_string(),
        }
    }
}

impl From<&JwtConfig> for TokenServiceConfig {
    fn from(config: &JwtConfig) -> Self {
        Self {
            jwt_secret: config.secret.clone(),
            token_validity_hours: config.token_validity_hours,
            issuer: config.issuer.clone(),
        }
    }
}
