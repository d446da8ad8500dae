//! Hailstone sequences for odd seeds.

use super::errors::WidgetError;
use super::input::parse_int_prefix;

pub const MAX_SEED: u64 = 1_000_000;

/// Collatz sequence from `seed` down to 1, inclusive of both ends.
///
/// Odd values step to `3n + 1`, even values halve. A seed of 0 or 1
/// yields `[1]`.
pub fn collatz(seed: u64) -> Vec<u64> {
    let mut sequence = Vec::new();
    let mut current = seed;
    while current > 1 {
        sequence.push(current);
        current = if current % 2 == 0 {
            current / 2
        } else {
            3 * current + 1
        };
    }
    sequence.push(1);
    sequence
}

/// Accepts only odd integers in `1..=MAX_SEED`.
pub fn parse_seed(input: &str) -> Result<u64, WidgetError> {
    match parse_int_prefix(input) {
        Some(n) if n >= 1 && n as u64 <= MAX_SEED && n % 2 == 1 => Ok(n as u64),
        _ => Err(WidgetError::InvalidCollatzSeed),
    }
}
