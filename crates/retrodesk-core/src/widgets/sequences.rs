//! Fibonacci and Tribonacci term generation.

use std::fmt::Display;

use super::errors::WidgetError;
use super::input::parse_in_range;

pub const MIN_TERMS: i64 = 1;
pub const MAX_TERMS: i64 = 100;

/// First `n` Fibonacci numbers starting from 0.
pub fn fibonacci(n: usize) -> Vec<u128> {
    let mut terms = Vec::with_capacity(n);
    let (mut a, mut b) = (0u128, 1u128);
    for _ in 0..n {
        terms.push(a);
        (a, b) = (b, a + b);
    }
    terms
}

/// First `n` Tribonacci numbers starting from 0, 1, 1.
pub fn tribonacci(n: usize) -> Vec<u128> {
    let mut terms: Vec<u128> = [0, 1, 1].into_iter().take(n).collect();
    while terms.len() < n {
        let len = terms.len();
        terms.push(terms[len - 1] + terms[len - 2] + terms[len - 3]);
    }
    terms
}

pub fn parse_term_count(input: &str) -> Result<usize, WidgetError> {
    let n = parse_in_range(input, MIN_TERMS, MAX_TERMS)?;
    Ok(n as usize)
}

/// Joins terms the way panels display them.
pub fn join_terms<T: Display>(terms: &[T]) -> String {
    terms
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
