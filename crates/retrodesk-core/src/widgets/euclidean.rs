//! Greatest common divisor by repeated division.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::errors::WidgetError;
use super::input::parse_int_prefix;

pub const MAX_OPERAND: u64 = 1_000_000_000;

/// One division `dividend = quotient × divisor + remainder`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GcdStep {
    pub dividend: u64,
    pub divisor: u64,
    pub quotient: u64,
    pub remainder: u64,
}

impl fmt::Display for GcdStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} = {} × {} + {}",
            self.dividend, self.quotient, self.divisor, self.remainder
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GcdTrace {
    pub gcd: u64,
    pub steps: Vec<GcdStep>,
}

/// Runs the algorithm, recording every division until the remainder is 0.
///
/// Operands may come in either order; the first step of `gcd(a, b)` with
/// `a < b` just swaps them (`a = 0 × b + a`).
pub fn euclidean(a: u64, b: u64) -> GcdTrace {
    let mut steps = Vec::new();
    let (mut dividend, mut divisor) = (a, b);

    while divisor != 0 {
        let step = GcdStep {
            dividend,
            divisor,
            quotient: dividend / divisor,
            remainder: dividend % divisor,
        };
        steps.push(step);
        (dividend, divisor) = (divisor, step.remainder);
    }

    GcdTrace {
        gcd: dividend,
        steps,
    }
}

pub fn parse_operands(a: &str, b: &str) -> Result<(u64, u64), WidgetError> {
    let parse = |input: &str| match parse_int_prefix(input) {
        Some(n) if n >= 1 && n as u64 <= MAX_OPERAND => Ok(n as u64),
        _ => Err(WidgetError::InvalidGcdOperands),
    };
    Ok((parse(a)?, parse(b)?))
}

/// Panel text: one line per step followed by the result.
pub fn display(a: u64, b: u64, trace: &GcdTrace) -> Vec<String> {
    trace
        .steps
        .iter()
        .map(ToString::to_string)
        .chain(std::iter::once(format!("gcd({}, {}) = {}", a, b, trace.gcd)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_example() {
        let trace = euclidean(1071, 462);
        assert_eq!(trace.gcd, 21);
        let lines: Vec<String> = trace.steps.iter().map(ToString::to_string).collect();
        assert_eq!(
            lines,
            vec![
                "1071 = 2 × 462 + 147",
                "462 = 3 × 147 + 21",
                "147 = 7 × 21 + 0",
            ]
        );
    }

    #[test]
    fn test_smaller_first_operand_swaps() {
        let trace = euclidean(462, 1071);
        assert_eq!(trace.gcd, 21);
        assert_eq!(trace.steps[0].quotient, 0);
        assert_eq!(trace.steps.len(), 4);
    }

    #[test]
    fn test_coprime_and_equal() {
        assert_eq!(euclidean(17, 5).gcd, 1);
        let same = euclidean(9, 9);
        assert_eq!(same.gcd, 9);
        assert_eq!(same.steps.len(), 1);
    }

    #[test]
    fn test_parse_operands() {
        assert_eq!(parse_operands("48", " 18 "), Ok((48, 18)));
        assert_eq!(
            parse_operands("0", "5"),
            Err(WidgetError::InvalidGcdOperands)
        );
        assert!(parse_operands("5", "1000000001").is_err());
        assert!(parse_operands("x", "5").is_err());
    }

    #[test]
    fn test_display_ends_with_result() {
        let lines = display(48, 18, &euclidean(48, 18));
        assert_eq!(lines.last().map(String::as_str), Some("gcd(48, 18) = 6"));
        assert_eq!(lines.len(), 4);
    }
}
