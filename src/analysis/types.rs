//! Analysis system type definitions

use serde::Serialize;
use std::collections::BTreeMap;

use crate::types::{DigitNumber, DigitSpace};

/// State of Kaprekar's routine for one starting number
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoutineState {
    /// Still iterating
    Running {
        current: DigitNumber,
        iteration: usize,
    },

    /// A step reproduced its input
    Converged {
        fixed_point: DigitNumber,
        iterations: usize,
    },

    /// A step produced zero (all digits identical)
    Degenerate { iterations: usize },

    /// Iteration cap reached without a repeat
    Diverged { iterations: usize },
}

impl RoutineState {
    /// Initial state for a starting number
    pub fn start(number: DigitNumber) -> Self {
        RoutineState::Running {
            current: number,
            iteration: 1,
        }
    }

    /// Apply one transition. Terminal states are returned unchanged.
    pub fn advance(self, max_iterations: usize) -> Self {
        match self {
            RoutineState::Running { current, iteration } => {
                let next = current.kaprekar_step();
                if next.value() == 0 {
                    RoutineState::Degenerate {
                        iterations: iteration,
                    }
                } else if next == current {
                    RoutineState::Converged {
                        fixed_point: next,
                        iterations: iteration,
                    }
                } else if iteration >= max_iterations {
                    RoutineState::Diverged {
                        iterations: iteration,
                    }
                } else {
                    RoutineState::Running {
                        current: next,
                        iteration: iteration + 1,
                    }
                }
            }
            terminal => terminal,
        }
    }

    /// Check if the routine has finished
    pub fn is_terminal(&self) -> bool {
        !matches!(self, RoutineState::Running { .. })
    }

    pub fn is_converged(&self) -> bool {
        matches!(self, RoutineState::Converged { .. })
    }

    pub fn is_degenerate(&self) -> bool {
        matches!(self, RoutineState::Degenerate { .. })
    }

    pub fn is_diverged(&self) -> bool {
        matches!(self, RoutineState::Diverged { .. })
    }

    /// Fixed point, when converged
    pub fn fixed_point(&self) -> Option<&DigitNumber> {
        match self {
            RoutineState::Converged { fixed_point, .. } => Some(fixed_point),
            _ => None,
        }
    }

    /// Iteration index at which the state was reached
    pub fn iterations(&self) -> usize {
        match self {
            RoutineState::Running { iteration, .. } => *iteration,
            RoutineState::Converged { iterations, .. }
            | RoutineState::Degenerate { iterations }
            | RoutineState::Diverged { iterations } => *iterations,
        }
    }
}

/// Every value visited from one starting number
#[derive(Debug, Clone)]
pub struct Trace {
    /// Starting number
    pub start: DigitNumber,

    /// Results of each step, in order
    pub steps: Vec<DigitNumber>,

    /// Terminal state
    pub outcome: RoutineState,
}

/// Hits for a single fixed point
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FixedPointStats {
    /// Prefixed display form, e.g. `6174.` or `0x0000`
    pub display: String,

    /// Number of starting values that converged here
    pub hits: u64,

    /// Iteration count -> number of starting values
    pub by_iteration: BTreeMap<usize, u64>,
}

/// Sweep result for one digit space
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConvergenceRecord {
    pub space: DigitSpace,

    /// Keyed by canonical digit string; zero-padded keys of one space sort
    /// in numeric order
    pub fixed_points: BTreeMap<String, FixedPointStats>,

    /// Starting values that hit zero
    pub degenerate: u64,

    /// Starting values that hit the iteration cap
    pub diverged: u64,
}

impl ConvergenceRecord {
    /// Create an empty record
    pub fn new(space: DigitSpace) -> Self {
        Self {
            space,
            fixed_points: BTreeMap::new(),
            degenerate: 0,
            diverged: 0,
        }
    }

    /// Fold one terminal outcome into the record. Running states are ignored.
    pub fn record(&mut self, outcome: &RoutineState) {
        match outcome {
            RoutineState::Converged {
                fixed_point,
                iterations,
            } => {
                let stats = self
                    .fixed_points
                    .entry(fixed_point.to_digit_string())
                    .or_insert_with(|| FixedPointStats {
                        display: fixed_point.to_prefixed_string(),
                        ..Default::default()
                    });
                stats.hits += 1;
                *stats.by_iteration.entry(*iterations).or_insert(0) += 1;
            }
            RoutineState::Degenerate { .. } => self.degenerate += 1,
            RoutineState::Diverged { .. } => self.diverged += 1,
            RoutineState::Running { .. } => {}
        }
    }

    /// Total starting values that converged
    pub fn converged(&self) -> u64 {
        self.fixed_points.values().map(|s| s.hits).sum()
    }

    /// Converged + degenerate + diverged
    pub fn total(&self) -> u64 {
        self.converged() + self.degenerate + self.diverged
    }

    /// Stats for a fixed point by digit string
    pub fn get(&self, digit_string: &str) -> Option<&FixedPointStats> {
        self.fixed_points.get(digit_string)
    }

    /// Distinct fixed points, in order
    pub fn fixed_point_keys(&self) -> impl Iterator<Item = &str> {
        self.fixed_points.keys().map(String::as_str)
    }

    /// The single fixed point every non-degenerate start reaches, if one
    /// exists (6174 for base 10, four digits)
    pub fn universal_constant(&self) -> Option<&str> {
        if self.diverged > 0 || self.fixed_points.len() != 1 {
            return None;
        }
        self.fixed_point_keys().next()
    }
}
