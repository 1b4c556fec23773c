//! Main authentication service implementation

use std::sync::Arc;

use crate::errors::{AuthError, DomainResult};
use crate::services::token::TokenService;

use super::config::AuthServiceConfig;

/// Session issuer for the single staff account
///
/// Compares submitted credentials against the configured pair and issues a
/// signed session token on success. Stateless; no side effects.
pub struct AuthService {
    /// Token service for JWT issuance
    token_service: Arc<TokenService>,
    /// Service configuration
    config: AuthServiceConfig,
}

impl AuthService {
    /// Create a new authentication service
    ///
    /// # Arguments
    ///
    /// * `token_service` - Service for JWT issuance
    /// * `config` - The staff credential pair
    pub fn new(token_service: Arc<TokenService>, config: AuthServiceConfig) -> Self {
        Self {
            token_service,
            config,
        }
    }

    /// Authenticate a credential pair and issue a session token
    ///
    /// Both fields are compared by exact string equality. A mismatch on
    /// either field yields the same rejection; callers cannot tell an
    /// unknown email from a wrong password.
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - Signed session token encoding the email
    /// * `Err(DomainError)` - Authentication failed
    pub fn login(&self, email: &str, password: &str) -> DomainResult<String> {
        if email != self.config.staff_email || password != self.config.staff_password {
            tracing::warn!("rejected login attempt for {}", email);
            return Err(AuthError::InvalidCredentials.into());
        }

        let token = self.token_service.issue(email)?;
        tracing::info!("issued session token for {}", email);
        Ok(token)
    }
}
