//! Core numeric types: digit spaces and the numbers that live in them

pub mod digits;
pub mod number;
pub mod space;

pub use digits::{format_radix, DIGIT_ALPHABET};
pub use number::DigitNumber;
pub use space::DigitSpace;
