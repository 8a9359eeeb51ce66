//! Text and JSON rendering of convergence records
//!
//! Pure formatting: nothing here computes, it only lays out what the
//! analyzer produced.

use colored::Colorize;
use std::time::Duration;

use crate::analysis::ConvergenceRecord;
use crate::errors::Result;

const RULE_WIDTH: usize = 80;

/// Rendering switches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportOptions {
    /// Append the elapsed-time line when a duration is supplied
    pub show_timing: bool,

    /// Colorize headers
    pub color: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            show_timing: true,
            color: true,
        }
    }
}

fn paint_header(text: String, options: &ReportOptions) -> String {
    if options.color {
        text.bold().cyan().to_string()
    } else {
        text
    }
}

/// Banner printed before the first digit count of a radix
pub fn render_radix_header(radix: u32, options: &ReportOptions) -> String {
    format!(
        "{}\n{}",
        "=".repeat(RULE_WIDTH),
        paint_header(format!("+++++ BASE {} +++++", radix), options)
    )
}

/// Line printed after the last digit count of a radix
pub fn render_radix_footer(radix: u32, elapsed: Duration, options: &ReportOptions) -> String {
    if options.show_timing {
        format!(
            "+++++ BASE {} ended after {:.2} seconds.",
            radix,
            elapsed.as_secs_f64()
        )
    } else {
        format!("+++++ BASE {} ended.", radix)
    }
}

/// Render one sweep as text.
///
/// Fixed points and iteration buckets come out in key order, so the output
/// is reproducible for a given record.
pub fn render_record(
    record: &ConvergenceRecord,
    elapsed: Option<Duration>,
    options: &ReportOptions,
) -> String {
    let mut lines = Vec::new();
    lines.push("-".repeat(RULE_WIDTH));
    lines.push(paint_header(
        format!(
            "- Base: {}; {} digits",
            record.space.radix(),
            record.space.digit_count()
        ),
        options,
    ));

    for stats in record.fixed_points.values() {
        lines.push(format!(
            "  - {} was converged to {} times.",
            stats.display, stats.hits
        ));
        for (iterations, count) in &stats.by_iteration {
            lines.push(format!("    - {} : {}", iterations, count));
        }
    }

    if record.diverged > 0 {
        let line = format!("  - {} failures to converge!", record.diverged);
        lines.push(if options.color {
            line.yellow().to_string()
        } else {
            line
        });
    }

    if let (true, Some(elapsed)) = (options.show_timing, elapsed) {
        lines.push(format!(
            "  - elapsed time: {:.4} seconds.",
            elapsed.as_secs_f64()
        ));
    }

    lines.join("\n")
}

/// Render a batch of sweeps as pretty JSON
pub fn render_json(records: &[ConvergenceRecord]) -> Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}
