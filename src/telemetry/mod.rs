//! Telemetry for convergence sweeps
//!
//! Records sweep timing and outcome counts and prints the session summary.

use std::time::{Duration, Instant};

use crate::analysis::ConvergenceRecord;
use crate::types::DigitSpace;

/// Telemetry event types
#[derive(Debug, Clone)]
pub enum TelemetryEvent {
    SweepStarted {
        space: DigitSpace,
        timestamp: Instant,
    },
    SweepCompleted {
        space: DigitSpace,
        duration: Duration,
        converged: u64,
        degenerate: u64,
        diverged: u64,
        timestamp: Instant,
    },
    RadixCompleted {
        radix: u32,
        duration: Duration,
        timestamp: Instant,
    },
}

/// Telemetry statistics
#[derive(Debug, Clone, Default)]
pub struct TelemetryStats {
    pub sweeps_completed: usize,
    pub values_classified: u64,
    pub converged: u64,
    pub degenerate: u64,
    pub diverged: u64,
    pub sweep_time: Duration,
}

/// Sweep telemetry collector
#[derive(Debug, Clone)]
pub struct SweepTelemetry {
    events: Vec<TelemetryEvent>,
    stats: TelemetryStats,
    start_time: Instant,
}

impl SweepTelemetry {
    /// Create a new telemetry collector
    pub fn new() -> Self {
        Self {
            events: Vec::new(),
            stats: TelemetryStats::default(),
            start_time: Instant::now(),
        }
    }

    /// Record that a sweep is about to start and return its start instant
    pub fn sweep_started(&mut self, space: DigitSpace) -> Instant {
        let timestamp = Instant::now();
        self.record(TelemetryEvent::SweepStarted { space, timestamp });
        timestamp
    }

    /// Record a finished sweep; returns its duration
    pub fn sweep_completed(&mut self, record: &ConvergenceRecord, started: Instant) -> Duration {
        let duration = started.elapsed();
        self.record(TelemetryEvent::SweepCompleted {
            space: record.space,
            duration,
            converged: record.converged(),
            degenerate: record.degenerate,
            diverged: record.diverged,
            timestamp: Instant::now(),
        });
        duration
    }

    /// Record that every digit count of a radix has been swept
    pub fn radix_completed(&mut self, radix: u32, started: Instant) -> Duration {
        let duration = started.elapsed();
        self.record(TelemetryEvent::RadixCompleted {
            radix,
            duration,
            timestamp: Instant::now(),
        });
        duration
    }

    /// Record an event
    pub fn record(&mut self, event: TelemetryEvent) {
        if let TelemetryEvent::SweepCompleted {
            duration,
            converged,
            degenerate,
            diverged,
            ..
        } = &event
        {
            self.stats.sweeps_completed += 1;
            self.stats.converged += converged;
            self.stats.degenerate += degenerate;
            self.stats.diverged += diverged;
            self.stats.values_classified += converged + degenerate + diverged;
            self.stats.sweep_time += *duration;
        }

        self.events.push(event);
    }

    /// Get current statistics
    pub fn get_stats(&self) -> TelemetryStats {
        self.stats.clone()
    }

    /// Get elapsed time since start
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Get event count
    pub fn event_count(&self) -> usize {
        self.events.len()
    }

    /// Share of classified values that diverged
    pub fn divergence_rate(&self) -> f64 {
        if self.stats.values_classified == 0 {
            0.0
        } else {
            self.stats.diverged as f64 / self.stats.values_classified as f64
        }
    }
}

impl Default for SweepTelemetry {
    fn default() -> Self {
        Self::new()
    }
}

/// Simple telemetry display
pub struct TelemetryDisplay<'a> {
    collector: &'a SweepTelemetry,
    verbosity: crate::cli::Verbosity,
}

impl<'a> TelemetryDisplay<'a> {
    /// Create a new display
    pub fn new(collector: &'a SweepTelemetry, verbosity: crate::cli::Verbosity) -> Self {
        Self {
            collector,
            verbosity,
        }
    }

    /// Render summary statistics
    pub fn summary(&self) -> String {
        let stats = self.collector.get_stats();
        let mut out = String::new();
        out.push_str("Session Summary\n");
        out.push_str("─────────────────────────────────────\n");
        out.push_str(&format!("Duration:          {:?}\n", self.collector.elapsed()));
        out.push_str(&format!("Sweeps:            {}\n", stats.sweeps_completed));
        out.push_str(&format!("Events recorded:   {}\n", self.collector.event_count()));
        out.push_str(&format!("Values classified: {}\n", stats.values_classified));
        out.push_str(&format!("Converged:         {}\n", stats.converged));
        out.push_str(&format!("Degenerate:        {}\n", stats.degenerate));
        out.push_str(&format!(
            "Diverged:          {} ({:.1}%)\n",
            stats.diverged,
            self.collector.divergence_rate() * 100.0
        ));
        out
    }

    /// Print the summary when the verbosity asks for it
    pub fn display_summary(&self) {
        if self.should_show_details() {
            println!();
            print!("{}", self.summary());
        }
    }

    /// Check if should show detailed output
    pub fn should_show_details(&self) -> bool {
        self.verbosity.show_events()
    }
}
