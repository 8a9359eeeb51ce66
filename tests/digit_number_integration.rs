//! Digit number integration tests
//!
//! Exhaustive checks over small spaces: permutation ordering, digit-string
//! round trips and checked arithmetic.

use knumber::{DigitNumber, DigitSpace, KNumberError};

fn spaces() -> Vec<DigitSpace> {
    [(2, 10), (3, 5), (8, 3), (10, 4), (16, 3)]
        .iter()
        .map(|&(r, d)| DigitSpace::new(r, d).unwrap())
        .collect()
}

#[test]
fn test_max_permutation_never_below_min() {
    for space in spaces() {
        for value in 0..=space.max_value() {
            let k = DigitNumber::from_integer(value, space).unwrap();
            assert!(
                k.max_permutation().value() >= k.min_permutation().value(),
                "{}",
                k
            );
        }
    }
}

#[test]
fn test_permutations_preserve_digit_multiset() {
    let space = DigitSpace::new(16, 3).unwrap();
    for value in 0..=space.max_value() {
        let k = DigitNumber::from_integer(value, space).unwrap();
        let mut original = k.digits();
        let mut low = k.min_permutation().digits();
        let mut high = k.max_permutation().digits();
        original.sort();
        low.sort();
        high.sort();
        assert_eq!(original, low);
        assert_eq!(original, high);
    }
}

#[test]
fn test_digit_string_round_trip() {
    for space in spaces() {
        for value in 0..=space.max_value() {
            let k = DigitNumber::from_integer(value, space).unwrap();
            let s = k.to_digit_string();
            assert_eq!(s.len(), space.digit_count() as usize);
            let back = DigitNumber::from_digit_string(&s, space).unwrap();
            assert_eq!(back.value(), k.value());
        }
    }
}

#[test]
fn test_uppercase_round_trip() {
    let space = DigitSpace::new(16, 3).unwrap();
    for value in 0..=space.max_value() {
        let k = DigitNumber::from_integer(value, space).unwrap();
        let upper = k.to_digit_string().to_uppercase();
        assert_eq!(DigitNumber::from_digit_string(&upper, space).unwrap(), k);
    }
}

#[test]
fn test_add_subtract_boundaries() {
    let space = DigitSpace::new(8, 3).unwrap();
    let max = DigitNumber::from_integer(space.max_value(), space).unwrap();
    let one = DigitNumber::from_integer(1, space).unwrap();
    let zero = DigitNumber::from_integer(0, space).unwrap();

    assert_eq!(max.add(&zero).unwrap(), max);
    assert!(matches!(
        max.add(&one),
        Err(KNumberError::RangeExceeded { .. })
    ));
    assert_eq!(one.subtract(&one).unwrap(), zero);
    assert!(matches!(
        zero.subtract(&one),
        Err(KNumberError::NegativeResult { .. })
    ));
}

#[test]
fn test_range_exceeded_message() {
    let space = DigitSpace::new(16, 2).unwrap();
    let a = DigitNumber::from_digit_string("f0", space).unwrap();
    let b = DigitNumber::from_digit_string("20", space).unwrap();
    let err = a.add(&b).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Adding 0xf0 + 0x20 is 0x110; exceeded range for KB16:2"
    );
}

#[test]
fn test_error_conditions() {
    let space = DigitSpace::new(10, 4).unwrap();
    assert!(matches!(
        DigitNumber::from_digit_string("12", space),
        Err(KNumberError::InvalidLength { .. })
    ));
    assert!(matches!(
        DigitSpace::new(1, 4),
        Err(KNumberError::InvalidRadix { .. })
    ));

    let other = DigitSpace::new(16, 4).unwrap();
    let a = DigitNumber::from_integer(10, space).unwrap();
    let b = DigitNumber::from_integer(10, other).unwrap();
    assert!(matches!(
        a.add(&b),
        Err(KNumberError::IncompatibleSpace { .. })
    ));
}

#[test]
fn test_kaprekar_sum_overflow_is_expected() {
    let space = DigitSpace::new(10, 4).unwrap();
    let mut overflowed = 0;
    for value in 0..=space.max_value() {
        let k = DigitNumber::from_integer(value, space).unwrap();
        match k.kaprekar_sum() {
            Ok(sum) => assert_eq!(
                sum.value(),
                k.max_permutation().value() + k.min_permutation().value()
            ),
            Err(KNumberError::RangeExceeded { .. }) => overflowed += 1,
            Err(other) => panic!("unexpected error: {}", other),
        }
    }
    assert!(overflowed > 0);
}
