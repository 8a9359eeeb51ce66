//! Command-line argument parsing for knumber
//!
//! Provides clap-based CLI with subcommands and verbosity control.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::cli::config::Config;

/// knumber - Explore Kaprekar's routine across radices and digit lengths
#[derive(Parser, Debug)]
#[command(name = "knumber")]
#[command(author = "John Fogarty")]
#[command(version)]
#[command(about = "Sweep digit spaces with Kaprekar's routine and tabulate fixed points", long_about = None)]
pub struct Args {
    /// Radices to sweep, comma separated (overrides config)
    #[arg(short, long, value_delimiter = ',')]
    pub radix: Vec<u32>,

    /// Digit counts to sweep, comma separated (overrides config)
    #[arg(short, long, value_delimiter = ',')]
    pub digits: Vec<u32>,

    /// Steps allowed per starting value before it counts as a failure
    #[arg(long)]
    pub max_iterations: Option<usize>,

    /// Also classify the all-zero starting value
    #[arg(long)]
    pub include_zero: bool,

    /// Print sweep results as JSON
    #[arg(long)]
    pub json: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Verbosity level: -q (quiet), default (normal), -v (verbose), -vv (very verbose)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (suppress everything but the results)
    #[arg(short, long)]
    pub quiet: bool,

    /// Subcommand
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Sweep every configured digit space (the default)
    Sweep,

    /// Show permutations, sum and difference of one number
    Inspect {
        /// Digit string; its length sets the digit count
        number: String,

        /// Radix of the digit string
        #[arg(short, long, default_value_t = 10)]
        radix: u32,
    },

    /// Print every Kaprekar step from one starting number
    Trace {
        /// Digit string; its length sets the digit count
        number: String,

        /// Radix of the digit string
        #[arg(short, long, default_value_t = 10)]
        radix: u32,
    },

    /// Display current configuration
    Config,
}

/// Verbosity level enum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
    VeryVerbose,
}

impl Args {
    /// Get verbosity level based on flags
    pub fn verbosity(&self) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else {
            match self.verbose {
                0 => Verbosity::Normal,
                1 => Verbosity::Verbose,
                _ => Verbosity::VeryVerbose,
            }
        }
    }

    /// Flags win; without any, fall back to the configured level
    pub fn resolve_verbosity(&self, default: Verbosity) -> Verbosity {
        if self.quiet || self.verbose > 0 {
            self.verbosity()
        } else {
            default
        }
    }

    /// Check flag combinations
    pub fn validate(&self) -> Result<(), String> {
        if self.quiet && self.verbose > 0 {
            return Err("Cannot combine --quiet with --verbose.".to_string());
        }

        let sweeping = matches!(self.command, None | Some(Commands::Sweep));
        if self.json && !sweeping {
            return Err("--json only applies to sweeps.".to_string());
        }

        Ok(())
    }

    /// Fold command-line overrides into a loaded configuration
    pub fn apply_overrides(&self, config: &mut Config) {
        if !self.radix.is_empty() {
            config.analysis.radices = self.radix.clone();
        }
        if !self.digits.is_empty() {
            config.analysis.digit_counts = self.digits.clone();
        }
        if let Some(max_iterations) = self.max_iterations {
            config.analysis.max_iterations = max_iterations;
        }
        if self.include_zero {
            config.analysis.include_zero = true;
        }
        if self.no_color {
            config.display.color_output = false;
        }
    }
}

impl Verbosity {
    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Verbosity::Quiet => "quiet",
            Verbosity::Normal => "normal",
            Verbosity::Verbose => "verbose",
            Verbosity::VeryVerbose => "very_verbose",
        }
    }

    /// Parse the names used in the configuration file
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "quiet" => Some(Verbosity::Quiet),
            "normal" => Some(Verbosity::Normal),
            "verbose" => Some(Verbosity::Verbose),
            "very_verbose" => Some(Verbosity::VeryVerbose),
            _ => None,
        }
    }

    /// Check if should show progress bars
    pub fn show_progress(&self) -> bool {
        !matches!(self, Verbosity::Quiet)
    }

    /// Check if should show session summary and sweep diagnostics
    pub fn show_events(&self) -> bool {
        matches!(self, Verbosity::Verbose | Verbosity::VeryVerbose)
    }

    /// Check if should show per-value tracing
    pub fn show_steps(&self) -> bool {
        matches!(self, Verbosity::VeryVerbose)
    }
}
