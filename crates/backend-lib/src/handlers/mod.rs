//! HTTP handlers.

pub mod password;

pub use password::generate_passwords;
