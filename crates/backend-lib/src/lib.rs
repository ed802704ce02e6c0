// ============================
// backend-lib/src/lib.rs
// ============================
//! Core functionality for the password generation service.

pub mod config;
pub mod error;
pub mod generator;
pub mod handlers;
pub mod logging;
pub mod metrics;
pub mod middleware;
pub mod router;
pub mod validation;

use std::sync::Arc;

use crate::config::Settings;
use crate::generator::{CharacterPools, PasswordGenerator};
use crate::validation::AuthCredential;

/// Application state shared across all handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Settings loaded at startup
    pub settings: Arc<Settings>,
    /// Shared API secret
    pub credential: AuthCredential,
    /// Password generator over the fixed character pools
    pub generator: PasswordGenerator,
}

impl AppState {
    /// Create a new application state
    pub fn new(settings: Settings) -> Self {
        let credential = AuthCredential::new(settings.api_key.clone());
        Self {
            credential,
            generator: PasswordGenerator::new(CharacterPools::STANDARD),
            settings: Arc::new(settings),
        }
    }

    /// State with default settings and the given API key
    pub fn with_key(key: impl Into<String>) -> Self {
        Self::new(Settings {
            api_key: Some(key.into()),
            ..Settings::default()
        })
    }
}
