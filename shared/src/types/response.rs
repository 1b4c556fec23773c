//! API response body types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Plain message body used for acknowledgements and error responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Human-readable message
    pub message: String,
}

impl MessageResponse {
    /// Create a new message body
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Health check response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status, "healthy" when responding
    pub status: String,

    /// Service name
    pub service: String,

    /// Crate version
    pub version: String,

    /// Response timestamp
    pub timestamp: DateTime<Utc>,
}
