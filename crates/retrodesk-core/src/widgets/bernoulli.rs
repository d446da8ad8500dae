//! Bernoulli numbers via the Akiyama–Tanigawa algorithm.
//!
//! The recurrence runs over exact rationals, so odd-index values above B_1
//! come out as exact zeros. This uses the B_1 = +1/2 convention.

use std::fmt;
use std::ops::{Mul, Sub};

use super::errors::WidgetError;
use super::input::parse_in_range;

pub const MIN_COUNT: i64 = 1;
pub const MAX_COUNT: i64 = 30;

/// Significant digits shown per value.
pub const DISPLAY_PRECISION: i32 = 8;

/// A reduced fraction with a positive denominator.
///
/// `i128` keeps every intermediate of the recurrence exact for counts up to
/// [`MAX_COUNT`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rational {
    numer: i128,
    denom: i128,
}

impl Rational {
    pub const ZERO: Rational = Rational { numer: 0, denom: 1 };

    pub fn new(numer: i128, denom: i128) -> Self {
        debug_assert!(denom != 0, "zero denominator");
        let sign = if denom < 0 { -1 } else { 1 };
        let divisor = gcd(numer.abs(), denom.abs()).max(1);
        Self {
            numer: sign * numer / divisor,
            denom: sign * denom / divisor,
        }
    }

    pub fn integer(value: i128) -> Self {
        Self {
            numer: value,
            denom: 1,
        }
    }

    pub fn numer(&self) -> i128 {
        self.numer
    }

    pub fn denom(&self) -> i128 {
        self.denom
    }

    pub fn is_zero(&self) -> bool {
        self.numer == 0
    }

    pub fn to_f64(&self) -> f64 {
        self.numer as f64 / self.denom as f64
    }
}

impl Sub for Rational {
    type Output = Rational;

    fn sub(self, rhs: Rational) -> Rational {
        Rational::new(
            self.numer * rhs.denom - rhs.numer * self.denom,
            self.denom * rhs.denom,
        )
    }
}

impl Mul for Rational {
    type Output = Rational;

    fn mul(self, rhs: Rational) -> Rational {
        Rational::new(self.numer * rhs.numer, self.denom * rhs.denom)
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.denom == 1 {
            write!(f, "{}", self.numer)
        } else {
            write!(f, "{}/{}", self.numer, self.denom)
        }
    }
}

fn gcd(mut a: i128, mut b: i128) -> i128 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// B_0 through B_{n-1}.
pub fn bernoulli(n: usize) -> Vec<Rational> {
    let mut row = Vec::with_capacity(n);
    let mut numbers = Vec::with_capacity(n);

    for m in 0..n {
        row.push(Rational::new(1, m as i128 + 1));
        for j in (1..=m).rev() {
            row[j - 1] = Rational::integer(j as i128) * (row[j - 1] - row[j]);
        }
        numbers.push(row[0]);
    }

    numbers
}

/// Renders a value with [`DISPLAY_PRECISION`] significant digits, trailing
/// fractional zeros removed. Exact zero is `"0"`.
pub fn format_value(value: Rational) -> String {
    if value.is_zero() {
        return "0".to_string();
    }

    let formatted = to_precision(value.to_f64(), DISPLAY_PRECISION);
    if formatted.contains('.') {
        formatted
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    } else {
        formatted
    }
}

fn to_precision(value: f64, digits: i32) -> String {
    let mut exponent = value.abs().log10().floor() as i32;
    let scaled = (value.abs() * 10f64.powi(digits - 1 - exponent)).round();
    if scaled >= 10f64.powi(digits) {
        exponent += 1;
    }
    let decimals = (digits - 1 - exponent).max(0) as usize;
    format!("{:.*}", decimals, value)
}

/// Panel display text: `B_0 = 1, B_1 = 0.5, ...`.
pub fn display(numbers: &[Rational]) -> String {
    numbers
        .iter()
        .enumerate()
        .map(|(i, value)| format!("B_{} = {}", i, format_value(*value)))
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn parse_count(input: &str) -> Result<usize, WidgetError> {
    let n = parse_in_range(input, MIN_COUNT, MAX_COUNT)?;
    Ok(n as usize)
}
