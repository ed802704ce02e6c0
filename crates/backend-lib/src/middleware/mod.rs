// crates/backend-lib/src/middleware/mod.rs

//! Middleware for the password service.

pub mod security;
pub mod validate;

pub use security::{cors_layer, security_headers};
pub use validate::require_valid_request;
