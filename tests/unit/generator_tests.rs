// =========================
// tests/unit/generator_tests.rs
// =========================
//! Property-style tests for the generator with seeded randomness
use backend_lib::generator::{PasswordGenerator, PasswordOptions, RngDraw, UniformDraw};
use passgen_common::{LETTERS, SYMBOLS};
use rand::{rngs::StdRng, SeedableRng};

/// Always returns the top of the range
struct Ceiling;

impl UniformDraw for Ceiling {
    fn draw(&mut self, bound: f64) -> u64 {
        bound.ceil() as u64
    }
}

#[test]
fn test_letter_only_membership_and_length() {
    let generator = PasswordGenerator::default();
    let mut draw = RngDraw(StdRng::seed_from_u64(2024));

    for _ in 0..100 {
        let password = generator.generate(&mut draw, 50.0, PasswordOptions::LETTERS_ONLY);
        assert!(password.len() <= 50);
        assert!(password.chars().all(|c| LETTERS.contains(c)));
    }
}

#[test]
fn test_symbol_only_membership_and_length() {
    let generator = PasswordGenerator::default();
    let mut draw = RngDraw(StdRng::seed_from_u64(99));

    for size in [4.0, 42.0, 43.0, 200.0] {
        let password = generator.generate(&mut draw, size, PasswordOptions::SYMBOLS_ONLY);
        assert!((password.len() as f64) <= size);
        assert!(password.chars().all(|c| SYMBOLS.contains(c)));
    }
}

#[test]
fn test_large_size_skips_letters() {
    // draws of 100 never index into a 26-letter alphabet
    let generator = PasswordGenerator::default();
    let password = generator.generate(&mut Ceiling, 100.0, PasswordOptions::LETTERS_ONLY);
    assert!(password.is_empty());

    // while numbers are still appended every iteration
    let password = generator.generate(&mut Ceiling, 100.0, PasswordOptions::NUMBERS_ONLY);
    assert_eq!(password, "100".repeat(100));
}

#[test]
fn test_number_only_is_one_group_per_iteration() {
    let generator = PasswordGenerator::default();
    let mut draw = RngDraw(StdRng::seed_from_u64(5));

    for _ in 0..100 {
        let password = generator.generate(&mut draw, 5.0, PasswordOptions::NUMBERS_ONLY);
        // every draw is a single digit in 1..=5
        assert_eq!(password.len(), 5);
        assert!(password.chars().all(|c| ('1'..='5').contains(&c)));
    }
}

#[test]
fn test_variants_use_single_classes() {
    let generator = PasswordGenerator::default();
    let mut draw = RngDraw(StdRng::seed_from_u64(11));
    let response = generator.generate_variants(&mut draw, 20.0, PasswordOptions::NUMBERS_ONLY);

    assert!(response.password.chars().all(|c| c.is_ascii_digit()));
    assert!(response.letter_only_password.chars().all(|c| LETTERS.contains(c)));
    assert!(response.number_only_password.chars().all(|c| c.is_ascii_digit()));
    assert!(response.symbol_only_password.chars().all(|c| SYMBOLS.contains(c)));
}

#[test]
fn test_fractional_size_draws_stay_in_range() {
    let generator = PasswordGenerator::default();
    let mut draw = RngDraw(StdRng::seed_from_u64(8));

    for _ in 0..100 {
        let password = generator.generate(&mut draw, 6.5, PasswordOptions::NUMBERS_ONLY);
        // ceil(6.5) iterations, each a single digit in 1..=7
        assert_eq!(password.len(), 7);
        assert!(password.chars().all(|c| ('1'..='7').contains(&c)));
    }

    // the top of a fractional range is its ceiling
    let password = generator.generate(&mut Ceiling, 6.5, PasswordOptions::NUMBERS_ONLY);
    assert_eq!(password, "7".repeat(7));
}
