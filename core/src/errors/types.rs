//! Domain-specific error types for authentication and validation
//!
//! Error messages here are internal; the presentation layer decides what
//! is exposed to callers.

use thiserror::Error;

/// Authentication-related errors
///
/// A single variant by design: the session issuer does not distinguish
/// an unknown email from a wrong password.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,
}

/// Token-related errors
#[derive(Error, Debug)]
pub enum TokenError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Token not yet valid")]
    TokenNotYetValid,

    #[error("Invalid token format")]
    InvalidTokenFormat,

    #[error("Token generation failed")]
    TokenGenerationFailed,
}

/// Validation errors
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Required field: {field}")]
    RequiredField { field: String },

    #[error("Duplicate value: {field}")]
    DuplicateValue { field: String },

    #[error("Invalid period: {value}")]
    InvalidPeriod { value: String },
}
