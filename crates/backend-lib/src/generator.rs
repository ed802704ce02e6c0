// ============================
// crates/backend-lib/src/generator.rs
// ============================
//! Password generation.
//!
//! The loop runs while its index is below `max_size` (so `ceil(max_size)`
//! times) and each iteration draws `floor(r * max_size + 1)` for every enabled
//! class, with `r` uniform in `[0, 1)`. Letter and symbol draws are used as an
//! index into their alphabet and dropped when they fall outside it; number
//! draws are appended as decimal text unconditionally. The output length
//! therefore varies, and index 0 of either alphabet is never picked.
use std::fmt::Write as _;

use passgen_common::{PasswordResponse, LETTERS, SYMBOLS};
use rand::Rng;

/// Source of uniform integer draws
pub trait UniformDraw {
    /// `floor(r * bound + 1)` for `r` uniform in `[0, 1)`: uniform over
    /// `1..=bound` for whole bounds. `bound` is positive and finite.
    fn draw(&mut self, bound: f64) -> u64;
}

/// [`UniformDraw`] backed by any `rand` generator
#[derive(Debug, Clone)]
pub struct RngDraw<R>(pub R);

impl<R: Rng> UniformDraw for RngDraw<R> {
    fn draw(&mut self, bound: f64) -> u64 {
        let r: f64 = self.0.random();
        // rounding in `r * bound + 1` may land exactly on `bound + 1`
        (r * bound + 1.0).floor().min(bound.ceil()) as u64
    }
}

/// Draws from the thread-local generator
pub fn thread_draw() -> RngDraw<rand::rngs::ThreadRng> {
    RngDraw(rand::rng())
}

/// Character classes to include
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PasswordOptions {
    pub numbers: bool,
    pub letters: bool,
    pub symbols: bool,
}

impl PasswordOptions {
    pub const LETTERS_ONLY: Self = Self { numbers: false, letters: true, symbols: false };
    pub const NUMBERS_ONLY: Self = Self { numbers: true, letters: false, symbols: false };
    pub const SYMBOLS_ONLY: Self = Self { numbers: false, letters: false, symbols: true };

    /// At least one class is enabled
    pub fn any(&self) -> bool {
        self.numbers || self.letters || self.symbols
    }
}

/// The two alphabets characters are drawn from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharacterPools {
    pub letters: &'static str,
    pub symbols: &'static str,
}

impl CharacterPools {
    pub const STANDARD: Self = Self { letters: LETTERS, symbols: SYMBOLS };
}

impl Default for CharacterPools {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Builds passwords from a pair of character pools
#[derive(Debug, Clone, Copy, Default)]
pub struct PasswordGenerator {
    pools: CharacterPools,
}

impl PasswordGenerator {
    pub fn new(pools: CharacterPools) -> Self {
        Self { pools }
    }

    pub fn pools(&self) -> &CharacterPools {
        &self.pools
    }

    /// Generate one password. `max_size` must be finite; anything at or below
    /// zero yields an empty string.
    pub fn generate<D: UniformDraw + ?Sized>(
        &self,
        draw: &mut D,
        max_size: f64,
        options: PasswordOptions,
    ) -> String {
        let mut password = String::new();
        if max_size.is_nan() || max_size <= 0.0 {
            return password;
        }

        let iterations = max_size.ceil() as u64;
        for _ in 0..iterations {
            if options.letters {
                push_indexed(&mut password, self.pools.letters, draw.draw(max_size));
            }
            if options.symbols {
                push_indexed(&mut password, self.pools.symbols, draw.draw(max_size));
            }
            if options.numbers {
                // writing to a String cannot fail
                let _ = write!(password, "{}", draw.draw(max_size));
            }
        }
        password
    }

    /// Generate the requested password plus the three single-class variants
    pub fn generate_variants<D: UniformDraw + ?Sized>(
        &self,
        draw: &mut D,
        max_size: f64,
        options: PasswordOptions,
    ) -> PasswordResponse {
        PasswordResponse {
            password: self.generate(draw, max_size, options),
            letter_only_password: self.generate(draw, max_size, PasswordOptions::LETTERS_ONLY),
            number_only_password: self.generate(draw, max_size, PasswordOptions::NUMBERS_ONLY),
            symbol_only_password: self.generate(draw, max_size, PasswordOptions::SYMBOLS_ONLY),
        }
    }
}

fn push_indexed(password: &mut String, alphabet: &str, index: u64) {
    let hit = usize::try_from(index)
        .ok()
        .and_then(|i| alphabet.as_bytes().get(i));
    if let Some(&byte) = hit {
        password.push(char::from(byte));
    }
}
