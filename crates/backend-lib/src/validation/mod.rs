// ============================
// crates/backend-lib/src/validation/mod.rs
// ============================
//! Request validation module.
//!
//! Turns the raw query of a generation request into a [`GenerationRequest`],
//! running the checks in a fixed order: key, size, options. The first failing
//! check decides the error.

use std::fmt;

use passgen_common::{PasswordQuery, SIZE_LIMIT};

use crate::error::AppError;
use crate::generator::PasswordOptions;

/// Shared API secret, loaded once at startup
#[derive(Clone, Default)]
pub struct AuthCredential(Option<String>);

impl AuthCredential {
    pub fn new(secret: Option<String>) -> Self {
        Self(secret.filter(|s| !s.is_empty()))
    }

    /// Whether a secret is configured at all
    pub fn is_configured(&self) -> bool {
        self.0.is_some()
    }

    /// Exact comparison against the request key. An absent or empty key never
    /// matches, and nothing matches when no secret is configured.
    pub fn verify(&self, candidate: Option<&str>) -> bool {
        match (self.0.as_deref(), candidate) {
            (Some(secret), Some(key)) if !key.is_empty() => secret == key,
            _ => false,
        }
    }
}

impl fmt::Debug for AuthCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shown = if self.is_configured() { "<redacted>" } else { "<unset>" };
        f.debug_tuple("AuthCredential").field(&shown).finish()
    }
}

/// Validated input for the generator
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationRequest {
    /// Requested size: finite, at least [`SIZE_LIMIT`] and at most the
    /// configured cap. May be fractional.
    pub max_size: f64,
    /// Character classes the caller asked for; at least one is set
    pub options: PasswordOptions,
}

/// Run every check against a raw query
pub fn validate_request(
    query: &PasswordQuery,
    credential: &AuthCredential,
    max_size_cap: u64,
) -> Result<GenerationRequest, AppError> {
    if !credential.verify(query.key.as_deref()) {
        return Err(AppError::InvalidKey);
    }

    let max_size = parse_max_size(query.max_size.as_deref(), max_size_cap)?;
    let options = parse_options(query)?;

    Ok(GenerationRequest { max_size, options })
}

/// Parse `MaxSize`.
///
/// The value is trimmed and read as a decimal number. Fractional sizes are
/// kept as they are; the generator bounds its draws by the exact value.
pub fn parse_max_size(raw: Option<&str>, cap: u64) -> Result<f64, AppError> {
    let invalid = AppError::InvalidMaxSize { min: SIZE_LIMIT };

    let value = raw
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(|s| s.parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .ok_or_else(|| invalid.clone())?;

    if value < SIZE_LIMIT as f64 {
        return Err(invalid);
    }
    // u64::MAX as f64 rounds up to 2^64, which does not fit
    if value > cap as f64 || value >= u64::MAX as f64 {
        return Err(AppError::MaxSizeTooLarge { max: cap });
    }

    Ok(value)
}

/// Read the three presence flags; at least one must be set
pub fn parse_options(query: &PasswordQuery) -> Result<PasswordOptions, AppError> {
    let options = PasswordOptions {
        numbers: PasswordQuery::flag_set(query.numbers.as_ref()),
        letters: PasswordQuery::flag_set(query.letters.as_ref()),
        symbols: PasswordQuery::flag_set(query.symbols.as_ref()),
    };

    if options.any() {
        Ok(options)
    } else {
        Err(AppError::NoOptions)
    }
}
