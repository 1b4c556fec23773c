//! Shared configuration and common types for the CRM Desk server
//!
//! This crate provides functionality used across all server modules:
//! - Configuration types loaded once at startup
//! - Response body types shared between layers

pub mod config;
pub mod types;

// Re-export commonly used items at crate root
pub use config::{AppConfig, AuthConfig, DatabaseConfig, Environment, JwtConfig, ServerConfig};
pub use types::MessageResponse;
