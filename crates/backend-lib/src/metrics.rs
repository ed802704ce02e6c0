// ==============
// crates/backend-lib/src/metrics.rs

//! Central place for metric keys
pub const REQUEST_ACCEPTED: &str = "password.request.accepted";
pub const REQUEST_REJECTED: &str = "password.request.rejected";
pub const PASSWORD_GENERATED: &str = "password.generated";
