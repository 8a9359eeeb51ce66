//! Digit space: a radix and a fixed digit count

use serde::Serialize;
use std::fmt;

use crate::errors::{KNumberError, Result};
use crate::types::digits::{max_value_in_radix, MAX_RADIX, MIN_RADIX};

/// Smallest supported digit count
pub const MIN_DIGIT_COUNT: u32 = 2;

/// Largest supported digit count
pub const MAX_DIGIT_COUNT: u32 = 10;

/// Immutable descriptor of a numeral system.
///
/// Two spaces are equal iff radix and digit count match; the maximum value
/// is derived from them once at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DigitSpace {
    radix: u32,
    digit_count: u32,
    max_value: u64,
}

impl DigitSpace {
    /// Create a digit space, validating radix (2..=16) and digit count (2..=10)
    pub fn new(radix: u32, digit_count: u32) -> Result<Self> {
        if !(MIN_RADIX..=MAX_RADIX).contains(&radix) {
            return Err(KNumberError::InvalidRadix { radix });
        }
        if !(MIN_DIGIT_COUNT..=MAX_DIGIT_COUNT).contains(&digit_count) {
            return Err(KNumberError::InvalidDigitCount { digit_count });
        }

        // 16^10 - 1 is the largest case and fits comfortably in u64
        let max_value = max_value_in_radix(radix, digit_count)
            .ok_or(KNumberError::InvalidDigitCount { digit_count })?;

        Ok(Self {
            radix,
            digit_count,
            max_value,
        })
    }

    pub fn radix(&self) -> u32 {
        self.radix
    }

    pub fn digit_count(&self) -> u32 {
        self.digit_count
    }

    /// `radix^digit_count - 1`
    pub fn max_value(&self) -> u64 {
        self.max_value
    }

    /// Number of representable values, zero included
    pub fn cardinality(&self) -> u64 {
        self.max_value + 1
    }

    /// Check whether an integer fits this space
    pub fn contains(&self, value: u64) -> bool {
        value <= self.max_value
    }

    /// Human-readable label, e.g. `KB10:4`
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for DigitSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "KB{}:{}", self.radix, self.digit_count)
    }
}
