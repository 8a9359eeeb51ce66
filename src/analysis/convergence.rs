//! Convergence analysis for Kaprekar's routine
//! Sweeps every value of a digit space and tabulates where each one ends up

use crate::analysis::types::{ConvergenceRecord, RoutineState, Trace};
use crate::errors::Result;
use crate::types::{DigitNumber, DigitSpace};

/// Default iteration cap per starting value
pub const DEFAULT_MAX_ITERATIONS: usize = 21;

/// Convergence analyzer configuration
#[derive(Debug, Clone)]
pub struct ConvergenceConfig {
    /// Steps allowed before a start is declared diverged
    pub max_iterations: usize,

    /// Sweep from 0 instead of 1. Zero is degenerate either way; this only
    /// changes whether it is counted.
    pub include_zero: bool,

    /// Emit `[SWEEP]` diagnostics on stderr
    pub verbose: bool,
}

impl Default for ConvergenceConfig {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            include_zero: false,
            verbose: false,
        }
    }
}

/// Drives Kaprekar's routine over whole digit spaces
#[derive(Debug, Clone)]
pub struct ConvergenceAnalyzer {
    config: ConvergenceConfig,
}

impl ConvergenceAnalyzer {
    /// Create new analyzer with default configuration
    pub fn new() -> Self {
        Self::with_config(ConvergenceConfig::default())
    }

    /// Create analyzer with custom configuration
    pub fn with_config(config: ConvergenceConfig) -> Self {
        Self { config }
    }

    /// Run one starting number until it reaches a terminal state
    pub fn classify(&self, start: DigitNumber) -> RoutineState {
        let mut state = RoutineState::start(start);
        while !state.is_terminal() {
            state = state.advance(self.config.max_iterations);
        }
        state
    }

    /// Like `classify`, but keep every intermediate value
    pub fn trace(&self, start: DigitNumber) -> Trace {
        let mut steps = Vec::new();
        let mut state = RoutineState::start(start);
        loop {
            let current = match &state {
                RoutineState::Running { current, .. } => *current,
                _ => break,
            };
            steps.push(current.kaprekar_step());
            state = state.advance(self.config.max_iterations);
        }

        Trace {
            start,
            steps,
            outcome: state,
        }
    }

    /// Number of starting values a sweep of `space` classifies
    pub fn start_count(&self, space: &DigitSpace) -> u64 {
        if self.config.include_zero {
            space.cardinality()
        } else {
            space.max_value()
        }
    }

    /// Sweep every starting value of `space`
    pub fn run(&self, space: &DigitSpace) -> Result<ConvergenceRecord> {
        self.run_with(space, |_, _| {})
    }

    /// Sweep every starting value of `space`, calling `observer` after each
    /// start is classified
    pub fn run_with<F>(&self, space: &DigitSpace, mut observer: F) -> Result<ConvergenceRecord>
    where
        F: FnMut(&DigitNumber, &RoutineState),
    {
        let first = if self.config.include_zero { 0 } else { 1 };
        let last = space.max_value();

        if self.config.verbose {
            eprintln!("[SWEEP] {} starting: values {}..={}", space, first, last);
        }

        let mut record = ConvergenceRecord::new(*space);
        for value in first..=last {
            let start = DigitNumber::from_integer(value, *space)?;
            let outcome = self.classify(start);
            record.record(&outcome);
            observer(&start, &outcome);
        }

        if self.config.verbose {
            eprintln!(
                "[SWEEP] {} done: {} converged to {} fixed point(s), {} degenerate, {} diverged",
                space,
                record.converged(),
                record.fixed_points.len(),
                record.degenerate,
                record.diverged
            );
        }

        Ok(record)
    }

    /// Get configuration
    pub fn config(&self) -> &ConvergenceConfig {
        &self.config
    }
}

impl Default for ConvergenceAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyzer_creation() {
        let analyzer = ConvergenceAnalyzer::new();
        assert_eq!(analyzer.config().max_iterations, 21);
        assert!(!analyzer.config().include_zero);
    }

    #[test]
    fn test_classify_reaches_6174() {
        let space = DigitSpace::new(10, 4).unwrap();
        let analyzer = ConvergenceAnalyzer::new();
        let start = DigitNumber::from_integer(3524, space).unwrap();

        let outcome = analyzer.classify(start);
        assert_eq!(outcome.fixed_point().unwrap().to_digit_string(), "6174");
        // 3524 -> 3087 -> 8352 -> 6174, repeat seen on the fourth step
        assert_eq!(outcome.iterations(), 4);
    }

    #[test]
    fn test_classify_repdigit() {
        let space = DigitSpace::new(10, 4).unwrap();
        let analyzer = ConvergenceAnalyzer::new();
        let start = DigitNumber::from_integer(1111, space).unwrap();
        assert_eq!(
            analyzer.classify(start),
            RoutineState::Degenerate { iterations: 1 }
        );
    }

    #[test]
    fn test_trace_steps() {
        let space = DigitSpace::new(10, 4).unwrap();
        let analyzer = ConvergenceAnalyzer::new();
        let start = DigitNumber::from_integer(3524, space).unwrap();

        let trace = analyzer.trace(start);
        let steps: Vec<String> = trace.steps.iter().map(|s| s.to_digit_string()).collect();
        assert_eq!(steps, vec!["3087", "8352", "6174", "6174"]);
        assert!(trace.outcome.is_converged());
    }

    #[test]
    fn test_classify_cycle_diverges() {
        // Five decimal digits have no fixed point reachable from 10000;
        // it falls into a cycle instead
        let space = DigitSpace::new(10, 5).unwrap();
        let analyzer = ConvergenceAnalyzer::new();
        let start = DigitNumber::from_integer(10_000, space).unwrap();
        assert_eq!(
            analyzer.classify(start),
            RoutineState::Diverged { iterations: 21 }
        );
    }

    #[test]
    fn test_run_two_digit_decimal() {
        let space = DigitSpace::new(10, 2).unwrap();
        let record = ConvergenceAnalyzer::new().run(&space).unwrap();

        // Two-digit decimal has no fixed point: every non-repdigit cycles
        // 09 -> 81 -> 63 -> 27 -> 45 -> 09
        assert!(record.fixed_points.is_empty());
        assert_eq!(record.degenerate, 9);
        assert_eq!(record.diverged, 90);
        assert_eq!(record.total(), 99);
    }

    #[test]
    fn test_run_include_zero() {
        let space = DigitSpace::new(10, 2).unwrap();
        let config = ConvergenceConfig {
            include_zero: true,
            ..Default::default()
        };
        let record = ConvergenceAnalyzer::with_config(config).run(&space).unwrap();
        assert_eq!(record.degenerate, 10);
        assert_eq!(record.total(), 100);
    }

    #[test]
    fn test_run_with_observer() {
        let space = DigitSpace::new(2, 3).unwrap();
        let mut seen = 0u64;
        let record = ConvergenceAnalyzer::new()
            .run_with(&space, |_, _| seen += 1)
            .unwrap();
        assert_eq!(seen, 7);
        assert_eq!(record.total(), 7);
    }

    #[test]
    fn test_start_count_matches_sweep() {
        let space = DigitSpace::new(10, 2).unwrap();
        let without_zero = ConvergenceAnalyzer::new();
        let with_zero = ConvergenceAnalyzer::with_config(ConvergenceConfig {
            include_zero: true,
            ..Default::default()
        });

        assert_eq!(without_zero.start_count(&space), 99);
        assert_eq!(with_zero.start_count(&space), 100);
        for analyzer in [without_zero, with_zero] {
            let mut seen = 0u64;
            analyzer.run_with(&space, |_, _| seen += 1).unwrap();
            assert_eq!(seen, analyzer.start_count(&space));
        }
    }
}
