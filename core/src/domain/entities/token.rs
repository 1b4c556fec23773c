//! Session token claims.
//!
//! Tokens are stateless: nothing is persisted and nothing can be revoked.
//! The validity window is enforced by whoever verifies the token.

use chrono::{DateTime, Duration, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// JWT claims carried by a staff session token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Authenticated staff email
    pub sub: String,

    /// Issued-at time, seconds since the epoch
    pub iat: i64,

    /// Expiry time, seconds since the epoch
    pub exp: i64,

    /// Issuer
    pub iss: String,
}

impl Claims {
    /// Creates claims for a freshly authenticated staff email
    pub fn new(email: impl Into<String>, issuer: impl Into<String>, validity: Duration) -> Self {
        let now = Utc::now();
        Self {
            sub: email.into(),
            iat: now.timestamp(),
            exp: (now + validity).timestamp(),
            iss: issuer.into(),
        }
    }

    /// The authenticated email this token asserts
    pub fn email(&self) -> &str {
        &self.sub
    }

    /// Expiry as a UTC timestamp
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(self.exp, 0).single()
    }

    /// Whether the validity window has passed
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}
