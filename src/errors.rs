//! Error types for knumber
//!
//! Every failure is local and synchronous: the operation that detects a
//! violation returns the specific kind with its operands attached so the
//! caller can build a diagnostic message.

use thiserror::Error;

use crate::types::DigitSpace;

/// Main error type for digit-space construction, digit-number arithmetic
/// and the surrounding harness
#[derive(Error, Debug)]
pub enum KNumberError {
    /// Radix outside the supported 2..=16 range
    #[error("Invalid radix {radix}: only bases from 2 to 16 are supported")]
    InvalidRadix { radix: u32 },

    /// Digit count outside the supported 2..=10 range
    #[error("Invalid digit count {digit_count}: only lengths from 2 to 10 are supported")]
    InvalidDigitCount { digit_count: u32 },

    /// Integer does not fit the digit space
    #[error("Value {value} is out of range for {space} (maximum {max})")]
    InvalidValue {
        value: u64,
        max: u64,
        space: DigitSpace,
    },

    /// Digit string length differs from the space's digit count
    #[error("Digit string {input:?} has {actual} characters; {space} requires exactly {expected}")]
    InvalidLength {
        input: String,
        actual: usize,
        expected: usize,
        space: DigitSpace,
    },

    /// Character is not a digit of the space's radix
    #[error("Invalid digit {digit:?} in {input:?} for radix {radix}")]
    InvalidDigit {
        input: String,
        digit: char,
        radix: u32,
    },

    /// Operands belong to different digit spaces
    #[error("Incompatible digit spaces: {left} and {right}")]
    IncompatibleSpace { left: DigitSpace, right: DigitSpace },

    /// Addition overflowed the digit space
    #[error("Adding {lhs} + {rhs} is {sum}; exceeded range for {space}")]
    RangeExceeded {
        lhs: String,
        rhs: String,
        sum: String,
        space: DigitSpace,
    },

    /// Subtraction went below zero
    #[error("Subtracting {lhs} - {rhs} is negative; not supported for {space}")]
    NegativeResult {
        lhs: String,
        rhs: String,
        space: DigitSpace,
    },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Result type alias for knumber operations
pub type Result<T> = std::result::Result<T, KNumberError>;
