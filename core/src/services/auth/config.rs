//! Configuration for the authentication service

use crm_shared::config::AuthConfig;

/// Configuration for the authentication service
///
/// Holds the single staff credential pair the backend accepts. Loaded from
/// process configuration at startup; never read from the record store.
#[derive(Debug, Clone)]
pub struct AuthServiceConfig {
    /// Email of the staff account
    pub staff_email: String,
    /// Plaintext password of the staff account
    pub staff_password: String,
}

impl Default for AuthServiceConfig {
    fn default() -> Self {
        Self {
            staff_email: "staff@crmdesk.local".to_string(),
            staff_password: "password123".to_string(),
        }
    }
}

impl From<&AuthConfig> for AuthServiceConfig {
    fn from(config: &AuthConfig) -> Self {
        Self {
            staff_email: config.staff_email.clone(),
            staff_password: config.staff_password.clone(),
        }
    }
}
