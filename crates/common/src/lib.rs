// ================
// common/src/lib.rs
// ================
//! Common types and structures
//! used for communication between password-service clients and the server.
//! This module defines the query parameters, the response payloads and the
//! fixed character pools.

use serde::{Deserialize, Serialize};

/// Smallest accepted `MaxSize`
pub const SIZE_LIMIT: u64 = 4;

/// Letters alphabet drawn from by the generator
pub const LETTERS: &str = "qwertyuioplkjhgfdsazxcvbnm";

/// Symbols alphabet drawn from by the generator
pub const SYMBOLS: &str = "'[]./:;';;';'[]()('')';!@#$%^&*()_+=-~{}||";

/// Raw query parameters of a generation request, exactly as they arrive on
/// the wire. Nothing here is validated.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct PasswordQuery {
    /// Shared API key
    pub key: Option<String>,
    /// Requested size, expected to be numeric
    #[serde(rename = "MaxSize")]
    pub max_size: Option<String>,
    /// Presence flag for digits
    pub numbers: Option<String>,
    /// Presence flag for letters
    pub letters: Option<String>,
    /// Presence flag for symbols
    pub symbols: Option<String>,
}

impl PasswordQuery {
    /// Build a query from decoded `name=value` pairs.
    ///
    /// Names are case-sensitive and unknown parameters are ignored. A repeated
    /// parameter keeps every value, joined with `,`, so a repeated `MaxSize`
    /// no longer parses and a repeated flag stays set. A repeated `key` is
    /// dropped so it can never match.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut query = Self::default();
        let mut key_count = 0usize;
        for (name, value) in pairs {
            let slot = match name.as_ref() {
                "key" => &mut query.key,
                "MaxSize" => &mut query.max_size,
                "numbers" => &mut query.numbers,
                "letters" => &mut query.letters,
                "symbols" => &mut query.symbols,
                _ => continue,
            };
            let value = value.into();
            *slot = Some(match slot.take() {
                Some(prev) => format!("{prev},{value}"),
                None => value,
            });
            if name.as_ref() == "key" {
                key_count += 1;
            }
        }
        if key_count > 1 {
            query.key = None;
        }
        query
    }

    /// A flag counts as set when it carries a non-empty value
    pub fn flag_set(flag: Option<&String>) -> bool {
        flag.is_some_and(|v| !v.is_empty())
    }
}

/// Successful response: four password variants
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PasswordResponse {
    /// Generated with the options the caller asked for
    #[serde(rename = "Password")]
    pub password: String,
    /// Letters forced on, everything else off
    #[serde(rename = "Letter_Only_Password")]
    pub letter_only_password: String,
    /// Numbers forced on, everything else off
    #[serde(rename = "Number_Only_Password")]
    pub number_only_password: String,
    /// Symbols forced on, everything else off
    #[serde(rename = "Symbol_Only_Password")]
    pub symbol_only_password: String,
}

/// Error response body
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ErrorBody {
    pub error: String,
}
