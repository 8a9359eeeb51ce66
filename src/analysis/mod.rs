//! Kaprekar routine analysis
//! Per-start state machine plus whole-space convergence sweeps

pub mod convergence;
pub mod types;

pub use convergence::{ConvergenceAnalyzer, ConvergenceConfig, DEFAULT_MAX_ITERATIONS};
pub use types::{ConvergenceRecord, FixedPointStats, RoutineState, Trace};
