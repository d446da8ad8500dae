//! Integer parsing for widget text fields.

use super::errors::WidgetError;

/// Parses the leading integer of a text field.
///
/// Surrounding whitespace is ignored and an empty field reads as 0. Trailing
/// garbage after the digits is dropped (`"12abc"` is 12). Returns None when
/// no digits lead the input. Values beyond `i64` saturate.
pub fn parse_int_prefix(input: &str) -> Option<i64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Some(0);
    }

    let (negative, digits) = match trimmed.as_bytes()[0] {
        b'-' => (true, &trimmed[1..]),
        b'+' => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let prefix_len = digits.bytes().take_while(u8::is_ascii_digit).count();
    if prefix_len == 0 {
        return None;
    }

    let value = digits[..prefix_len].bytes().fold(0i64, |acc, digit| {
        acc.saturating_mul(10)
            .saturating_add(i64::from(digit - b'0'))
    });

    Some(if negative { -value } else { value })
}

/// Parses a field and checks it against an inclusive range.
pub fn parse_in_range(input: &str, min: i64, max: i64) -> Result<i64, WidgetError> {
    match parse_int_prefix(input) {
        Some(value) if (min..=max).contains(&value) => Ok(value),
        _ => Err(WidgetError::OutOfRange { min, max }),
    }
}
