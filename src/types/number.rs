//! Digit numbers: immutable values bound to a digit space
//!
//! Every operation returns a fresh `DigitNumber`; nothing here mutates in
//! place. Arithmetic is checked against the owning space and fails with the
//! operands attached instead of wrapping or saturating.

use serde::Serialize;
use std::fmt;

use crate::errors::{KNumberError, Result};
use crate::types::digits::{digit_value, format_radix};
use crate::types::space::DigitSpace;

/// A non-negative integer of exactly `space.digit_count()` digits in
/// `space.radix()`.
///
/// Invariant: `value <= space.max_value()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DigitNumber {
    value: u64,
    space: DigitSpace,
}

impl DigitNumber {
    /// Create from an integer that must fit the space
    pub fn from_integer(value: u64, space: DigitSpace) -> Result<Self> {
        if !space.contains(value) {
            return Err(KNumberError::InvalidValue {
                value,
                max: space.max_value(),
                space,
            });
        }
        Ok(Self { value, space })
    }

    /// Parse a digit string of exactly `space.digit_count()` characters.
    ///
    /// Letters are accepted in either case; the length is checked before
    /// any digit is looked at.
    pub fn from_digit_string(s: &str, space: DigitSpace) -> Result<Self> {
        let actual = s.chars().count();
        let expected = space.digit_count() as usize;
        if actual != expected {
            return Err(KNumberError::InvalidLength {
                input: s.to_string(),
                actual,
                expected,
                space,
            });
        }

        let radix = space.radix();
        let mut digits = Vec::with_capacity(actual);
        for c in s.chars() {
            let d = digit_value(c, radix).ok_or_else(|| KNumberError::InvalidDigit {
                input: s.to_string(),
                digit: c,
                radix,
            })?;
            digits.push(d);
        }

        Ok(Self::from_digit_values(&digits, space))
    }

    /// Compose a number from digit values, most significant first.
    /// The slice length equals the digit count, so the result always fits.
    fn from_digit_values(digits: &[u32], space: DigitSpace) -> Self {
        let radix = u64::from(space.radix());
        let value = digits
            .iter()
            .fold(0u64, |acc, &d| acc * radix + u64::from(d));
        Self { value, space }
    }

    pub fn value(&self) -> u64 {
        self.value
    }

    pub fn space(&self) -> DigitSpace {
        self.space
    }

    /// Digit values, most significant first, zero-padded to the digit count
    pub fn digits(&self) -> Vec<u32> {
        let radix = u64::from(self.space.radix());
        let count = self.space.digit_count() as usize;
        let mut digits = vec![0u32; count];
        let mut v = self.value;
        for slot in digits.iter_mut().rev() {
            *slot = (v % radix) as u32;
            v /= radix;
        }
        digits
    }

    /// Canonical zero-padded digit string, lowercase alphabet
    pub fn to_digit_string(&self) -> String {
        format_radix(self.value, &self.space, false)
    }

    /// Digit string decorated with the radix marker (`0x`, `0o`, `0b`, or a
    /// trailing `.` for base 10). Display only.
    pub fn to_prefixed_string(&self) -> String {
        format_radix(self.value, &self.space, true)
    }

    /// Digits sorted ascending by value
    pub fn min_permutation(&self) -> DigitNumber {
        let mut digits = self.digits();
        digits.sort();
        Self::from_digit_values(&digits, self.space)
    }

    /// Digits sorted descending by value
    pub fn max_permutation(&self) -> DigitNumber {
        let mut digits = self.digits();
        digits.sort_by(|a, b| b.cmp(a));
        Self::from_digit_values(&digits, self.space)
    }

    pub fn min_digit_string(&self) -> String {
        self.min_permutation().to_digit_string()
    }

    pub fn max_digit_string(&self) -> String {
        self.max_permutation().to_digit_string()
    }

    fn ensure_same_space(&self, other: &DigitNumber) -> Result<()> {
        if self.space != other.space {
            return Err(KNumberError::IncompatibleSpace {
                left: self.space,
                right: other.space,
            });
        }
        Ok(())
    }

    /// Checked addition within the space
    pub fn add(&self, other: &DigitNumber) -> Result<DigitNumber> {
        self.ensure_same_space(other)?;

        // Both operands are below 16^10, so the raw sum cannot overflow u64
        let sum = self.value + other.value;
        if sum > self.space.max_value() {
            return Err(KNumberError::RangeExceeded {
                lhs: self.to_prefixed_string(),
                rhs: other.to_prefixed_string(),
                sum: format_radix(sum, &self.space, true),
                space: self.space,
            });
        }

        Ok(Self {
            value: sum,
            space: self.space,
        })
    }

    /// Checked subtraction within the space
    pub fn subtract(&self, other: &DigitNumber) -> Result<DigitNumber> {
        self.ensure_same_space(other)?;

        let value = self
            .value
            .checked_sub(other.value)
            .ok_or_else(|| KNumberError::NegativeResult {
                lhs: self.to_prefixed_string(),
                rhs: other.to_prefixed_string(),
                space: self.space,
            })?;

        Ok(Self {
            value,
            space: self.space,
        })
    }

    /// One iteration of Kaprekar's routine: descending minus ascending.
    ///
    /// Infallible: both permutations share one digit multiset, so the
    /// descending arrangement is never smaller than the ascending one.
    pub fn kaprekar_step(&self) -> DigitNumber {
        let high = self.max_permutation();
        let low = self.min_permutation();
        debug_assert!(high.value >= low.value);
        Self {
            value: high.value - low.value,
            space: self.space,
        }
    }

    /// Descending plus ascending. Fails with `RangeExceeded` whenever the
    /// sum does not fit, which is common and expected.
    pub fn kaprekar_sum(&self) -> Result<DigitNumber> {
        self.max_permutation().add(&self.min_permutation())
    }

    /// Value comparison that refuses to compare across digit spaces.
    ///
    /// `==` treats numbers from different spaces as unequal; this variant
    /// reports the mismatch instead.
    pub fn checked_eq(&self, other: &DigitNumber) -> Result<bool> {
        self.ensure_same_space(other)?;
        Ok(self.value == other.value)
    }

    /// True when every digit is the same (the routine's degenerate inputs)
    pub fn is_repdigit(&self) -> bool {
        let digits = self.digits();
        digits.windows(2).all(|w| w[0] == w[1])
    }
}

impl fmt::Display for DigitNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "KNumber({} : {})", self.to_digit_string(), self.space)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kb(radix: u32, digits: u32) -> DigitSpace {
        DigitSpace::new(radix, digits).unwrap()
    }

    #[test]
    fn test_from_integer_bounds() {
        let space = kb(10, 4);
        assert!(DigitNumber::from_integer(0, space).is_ok());
        assert!(DigitNumber::from_integer(9999, space).is_ok());
        assert!(matches!(
            DigitNumber::from_integer(10_000, space),
            Err(KNumberError::InvalidValue { value: 10_000, .. })
        ));
    }

    #[test]
    fn test_from_digit_string_length() {
        let space = kb(10, 4);
        let err = DigitNumber::from_digit_string("12", space).unwrap_err();
        assert!(matches!(err, KNumberError::InvalidLength { actual: 2, .. }));

        let err = DigitNumber::from_digit_string("12345", space).unwrap_err();
        assert!(matches!(err, KNumberError::InvalidLength { actual: 5, .. }));
    }

    #[test]
    fn test_from_digit_string_invalid_digit() {
        let err = DigitNumber::from_digit_string("12a4", kb(10, 4)).unwrap_err();
        assert!(matches!(
            err,
            KNumberError::InvalidDigit {
                digit: 'a',
                radix: 10,
                ..
            }
        ));

        let err = DigitNumber::from_digit_string("102", kb(2, 3)).unwrap_err();
        assert!(matches!(err, KNumberError::InvalidDigit { digit: '2', .. }));
    }

    #[test]
    fn test_from_digit_string_hex_case_insensitive() {
        let space = kb(16, 4);
        let upper = DigitNumber::from_digit_string("A234", space).unwrap();
        let lower = DigitNumber::from_digit_string("a234", space).unwrap();
        assert_eq!(upper, lower);
        assert_eq!(upper.value(), 0xa234);
        assert_eq!(upper.to_digit_string(), "a234");
    }

    #[test]
    fn test_to_digit_string_zero_padded() {
        let space = kb(10, 4);
        let k = DigitNumber::from_integer(42, space).unwrap();
        assert_eq!(k.to_digit_string(), "0042");
        assert_eq!(k.to_prefixed_string(), "0042.");

        let k = DigitNumber::from_integer(5, kb(2, 4)).unwrap();
        assert_eq!(k.to_digit_string(), "0101");
        assert_eq!(k.to_prefixed_string(), "0b0101");
    }

    #[test]
    fn test_digits() {
        let k = DigitNumber::from_integer(305, kb(10, 4)).unwrap();
        assert_eq!(k.digits(), vec![0, 3, 0, 5]);
    }

    #[test]
    fn test_permutations_decimal() {
        let k = DigitNumber::from_digit_string("3524", kb(10, 4)).unwrap();
        assert_eq!(k.min_digit_string(), "2345");
        assert_eq!(k.max_digit_string(), "5432");
    }

    #[test]
    fn test_permutations_keep_leading_zeros() {
        let k = DigitNumber::from_digit_string("1000", kb(10, 4)).unwrap();
        assert_eq!(k.min_permutation().value(), 1);
        assert_eq!(k.min_digit_string(), "0001");
        assert_eq!(k.max_permutation().value(), 1000);
    }

    #[test]
    fn test_permutations_hex_sort_by_value() {
        let k = DigitNumber::from_digit_string("a234", kb(16, 4)).unwrap();
        assert_eq!(k.min_digit_string(), "234a");
        assert_eq!(k.max_digit_string(), "a432");
    }

    #[test]
    fn test_add_and_subtract() {
        let space = kb(10, 4);
        let a = DigitNumber::from_integer(1200, space).unwrap();
        let b = DigitNumber::from_integer(34, space).unwrap();
        assert_eq!(a.add(&b).unwrap().value(), 1234);
        assert_eq!(a.subtract(&b).unwrap().value(), 1166);
    }

    #[test]
    fn test_add_range_exceeded() {
        let space = kb(10, 2);
        let a = DigitNumber::from_integer(95, space).unwrap();
        let b = DigitNumber::from_integer(59, space).unwrap();
        let err = a.add(&b).unwrap_err();
        match err {
            KNumberError::RangeExceeded { lhs, rhs, sum, .. } => {
                assert_eq!(lhs, "95.");
                assert_eq!(rhs, "59.");
                assert_eq!(sum, "154.");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_subtract_negative() {
        let space = kb(16, 4);
        let a = DigitNumber::from_integer(1, space).unwrap();
        let b = DigitNumber::from_integer(2, space).unwrap();
        let err = a.subtract(&b).unwrap_err();
        assert!(matches!(err, KNumberError::NegativeResult { .. }));
        assert!(err.to_string().contains("0x0001 - 0x0002"));
    }

    #[test]
    fn test_incompatible_space() {
        let a = DigitNumber::from_integer(12, kb(10, 4)).unwrap();
        let b = DigitNumber::from_integer(12, kb(10, 3)).unwrap();
        assert!(matches!(
            a.add(&b),
            Err(KNumberError::IncompatibleSpace { .. })
        ));
        assert!(matches!(
            a.subtract(&b),
            Err(KNumberError::IncompatibleSpace { .. })
        ));
        assert!(matches!(
            a.checked_eq(&b),
            Err(KNumberError::IncompatibleSpace { .. })
        ));
    }

    #[test]
    fn test_equality() {
        let space = kb(10, 4);
        let a = DigitNumber::from_integer(6174, space).unwrap();
        let b = DigitNumber::from_digit_string("6174", space).unwrap();
        assert_eq!(a, b);
        assert!(a.checked_eq(&b).unwrap());

        // Same raw value, different space: never equal
        let c = DigitNumber::from_integer(6174, kb(10, 5)).unwrap();
        assert_ne!(a, c);
    }

    #[test]
    fn test_kaprekar_step_fixed_point() {
        let k = DigitNumber::from_digit_string("6174", kb(10, 4)).unwrap();
        assert_eq!(k.kaprekar_step().to_digit_string(), "6174");
    }

    #[test]
    fn test_kaprekar_step_repdigit_is_zero() {
        let k = DigitNumber::from_digit_string("1111", kb(10, 4)).unwrap();
        assert!(k.is_repdigit());
        assert_eq!(k.kaprekar_step().value(), 0);
    }

    #[test]
    fn test_hex_sum_and_diff() {
        let k = DigitNumber::from_digit_string("A234", kb(16, 4)).unwrap();
        assert_eq!(k.kaprekar_step().to_digit_string(), "80e8");
        assert_eq!(k.kaprekar_sum().unwrap().to_digit_string(), "c77c");
    }

    #[test]
    fn test_kaprekar_sum_overflow_is_reported() {
        let k = DigitNumber::from_digit_string("95", kb(10, 2)).unwrap();
        assert!(matches!(
            k.kaprekar_sum(),
            Err(KNumberError::RangeExceeded { .. })
        ));
    }

    #[test]
    fn test_display() {
        let k = DigitNumber::from_integer(42, kb(10, 4)).unwrap();
        assert_eq!(k.to_string(), "KNumber(0042 : KB10:4)");
    }
}
