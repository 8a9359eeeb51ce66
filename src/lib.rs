//! knumber - Kaprekar's routine over fixed-length, fixed-radix numbers
//!
//! The number 6174 is Kaprekar's constant: arrange the digits of any
//! four-digit decimal number (not all identical) in descending and ascending
//! order, subtract, and repeat; the routine lands on 6174 within seven
//! steps. This crate generalizes the routine to radices 2 through 16 and
//! digit counts 2 through 10 to look for similar constants.
//!
//! # Architecture
//!
//! - **types**: `DigitSpace` (radix + digit count) and `DigitNumber`
//!   (checked arithmetic, digit-sorted permutations, Kaprekar step)
//! - **analysis**: routine state machine and whole-space convergence sweeps
//! - **report** / **telemetry** / **cli**: the reporting harness

pub mod analysis;
pub mod errors;
pub mod types;

// Re-export commonly used types
pub use analysis::{ConvergenceAnalyzer, ConvergenceRecord, RoutineState};
pub use errors::{KNumberError, Result};
pub use types::{DigitNumber, DigitSpace};

// Reporting harness
pub mod cli;
pub mod report;
pub mod telemetry;
