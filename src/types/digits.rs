//! Digit alphabet and radix formatting helpers
//!
//! Digits are looked up by value in a fixed, process-wide alphabet; parsing
//! goes the other way by position in the same table. Public formatting goes
//! through a `DigitSpace`, so the radix has already been validated.

use crate::types::space::DigitSpace;

/// Canonical digit alphabet, indexed by digit value
pub const DIGIT_ALPHABET: [char; 16] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'a', 'b', 'c', 'd', 'e', 'f',
];

/// Smallest supported radix
pub const MIN_RADIX: u32 = 2;

/// Largest supported radix
pub const MAX_RADIX: u32 = 16;

/// Character for a digit value. Callers guarantee `value < 16`.
fn digit_char(value: u32) -> char {
    DIGIT_ALPHABET[value as usize]
}

/// Value of a digit character in the given radix, case-insensitive.
///
/// Returns `None` when the character is not in the alphabet or names a
/// digit at or above `radix`.
pub fn digit_value(c: char, radix: u32) -> Option<u32> {
    let lower = c.to_ascii_lowercase();
    DIGIT_ALPHABET
        .iter()
        .take(radix as usize)
        .position(|&d| d == lower)
        .map(|p| p as u32)
}

/// Render `value` in the radix of `space`, left-padded with `0` to the
/// space's digit count.
///
/// With `base_prefix`, radix 16/8/2 get `0x`/`0o`/`0b` in front and radix 10
/// gets a trailing `.`; other radices are left bare. Prefixed output is for
/// display only and is never parsed back. Values above the space maximum are
/// rendered with as many digits as they need.
pub fn format_radix(value: u64, space: &DigitSpace, base_prefix: bool) -> String {
    render_radix(value, space.radix(), space.digit_count() as usize, base_prefix)
}

// Raw rendering; `radix` must be within MIN_RADIX..=MAX_RADIX.
fn render_radix(value: u64, radix: u32, min_digits: usize, base_prefix: bool) -> String {
    debug_assert!((MIN_RADIX..=MAX_RADIX).contains(&radix));
    let r = u64::from(radix);
    let mut digits = Vec::new();
    let mut v = value;
    while v > 0 {
        digits.push(digit_char((v % r) as u32));
        v /= r;
    }
    while digits.len() < min_digits {
        digits.push('0');
    }
    let body: String = digits.into_iter().rev().collect();

    if !base_prefix {
        return body;
    }
    match radix {
        16 => format!("0x{}", body),
        8 => format!("0o{}", body),
        2 => format!("0b{}", body),
        10 => format!("{}.", body),
        _ => body,
    }
}

/// Largest value representable with `digits` digits in `radix`
/// (`radix^digits - 1`), or `None` on `u64` overflow.
pub fn max_value_in_radix(radix: u32, digits: u32) -> Option<u64> {
    u64::from(radix).checked_pow(digits).map(|p| p - 1)
}
