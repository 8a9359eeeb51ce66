//! Configuration management for knumber
//!
//! Provides TOML-based configuration with defaults and validation.
//! Location: ~/.knumber/config.toml

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::analysis::{ConvergenceConfig, DEFAULT_MAX_ITERATIONS};
use crate::cli::args::Verbosity;
use crate::errors::{KNumberError, Result};
use crate::types::digits::{MAX_RADIX, MIN_RADIX};
use crate::types::space::{MAX_DIGIT_COUNT, MIN_DIGIT_COUNT};

/// Complete configuration for knumber
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub analysis: AnalysisConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Which spaces to sweep and how
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub radices: Vec<u32>,
    pub digit_counts: Vec<u32>,
    pub max_iterations: usize,
    /// Count the all-zero start as a degenerate outcome
    pub include_zero: bool,
}

/// Terminal output configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub default_verbosity: String,
    pub show_progress_bars: bool,
    pub color_output: bool,
    pub show_timing: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            radices: vec![2, 8, 10, 16],
            digit_counts: vec![3, 4, 5, 6, 7],
            max_iterations: DEFAULT_MAX_ITERATIONS,
            include_zero: false,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            default_verbosity: "normal".to_string(),
            show_progress_bars: true,
            color_output: true,
            show_timing: true,
        }
    }
}

impl Config {
    /// Load configuration from file or use defaults
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        if let Some(config_path) = path {
            Self::load_from_file(&config_path)
        } else {
            Self::load_default()
        }
    }

    /// Load configuration from specific file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| KNumberError::ConfigError(format!("Failed to read config: {}", e)))?;

        let config: Config = toml::from_str(&contents)
            .map_err(|e| KNumberError::ConfigError(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Load default configuration from standard location or use built-in defaults
    pub fn load_default() -> Result<Self> {
        if let Some(config_path) = Self::default_path() {
            if config_path.exists() {
                return Self::load_from_file(&config_path);
            }
        }

        Ok(Config::default())
    }

    /// Standard configuration location, if a home directory is known
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".knumber").join("config.toml"))
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.analysis.radices.is_empty() {
            return Err(KNumberError::ConfigError(
                "radices must list at least one radix".to_string(),
            ));
        }

        if self.analysis.digit_counts.is_empty() {
            return Err(KNumberError::ConfigError(
                "digit_counts must list at least one digit count".to_string(),
            ));
        }

        if let Some(radix) = self
            .analysis
            .radices
            .iter()
            .find(|r| !(MIN_RADIX..=MAX_RADIX).contains(*r))
        {
            return Err(KNumberError::ConfigError(format!(
                "radix {} is outside {}..={}",
                radix, MIN_RADIX, MAX_RADIX
            )));
        }

        if let Some(digits) = self
            .analysis
            .digit_counts
            .iter()
            .find(|d| !(MIN_DIGIT_COUNT..=MAX_DIGIT_COUNT).contains(*d))
        {
            return Err(KNumberError::ConfigError(format!(
                "digit count {} is outside {}..={}",
                digits, MIN_DIGIT_COUNT, MAX_DIGIT_COUNT
            )));
        }

        if self.analysis.max_iterations == 0 {
            return Err(KNumberError::ConfigError(
                "max_iterations must be greater than 0".to_string(),
            ));
        }

        if Verbosity::from_name(&self.display.default_verbosity).is_none() {
            return Err(KNumberError::ConfigError(format!(
                "Invalid verbosity level: {}",
                self.display.default_verbosity
            )));
        }

        Ok(())
    }

    /// Save configuration to file
    pub fn save(&self, path: &Path) -> Result<()> {
        let contents = toml::to_string_pretty(self)
            .map_err(|e| KNumberError::ConfigError(format!("Failed to serialize config: {}", e)))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                KNumberError::ConfigError(format!("Failed to create config dir: {}", e))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| KNumberError::ConfigError(format!("Failed to write config: {}", e)))?;

        Ok(())
    }

    /// Render as TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| KNumberError::ConfigError(format!("Failed to serialize config: {}", e)))
    }

    /// Configured default verbosity; validated names only
    pub fn default_verbosity(&self) -> Verbosity {
        Verbosity::from_name(&self.display.default_verbosity).unwrap_or(Verbosity::Normal)
    }

    /// Analyzer settings derived from the analysis section
    pub fn convergence_config(&self, verbose: bool) -> ConvergenceConfig {
        ConvergenceConfig {
            max_iterations: self.analysis.max_iterations,
            include_zero: self.analysis.include_zero,
            verbose,
        }
    }
}
