//! YAML configuration for phrase alignment runs.
//!
//! Every field has a default, so an empty document (or no file at all)
//! reproduces the classic one-shot behaviour: read `input.txt`, write
//! `output.txt` in the line format.
//!
//! ## Example YAML Configuration
//!
//! ```yaml
//! version: "1.0"
//!
//! input: "input.txt"
//! output: "output.txt"
//! format: "text"          # or "json"
//!
//! matrix:
//!   use_parallel: true
//!
//! assignment:
//!   order: "cheapest_first" # or "costliest_first"
//!
//! log_level: "info"
//! log_json: false
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use assign::CandidateOrder;
use distance::MatrixConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when loading YAML configuration files
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("unsupported config version: {0}")]
    UnsupportedVersion(String),
}

/// How the alignment is written to the output sink.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One `first:second` line per pair, then `phrase:?` per unmatched phrase.
    #[default]
    Text,
    /// Pretty-printed JSON document with costs.
    Json,
}

/// Assignment stage settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct AssignmentConfig {
    #[serde(default)]
    pub order: CandidateOrder,
}

/// Top-level configuration for an alignment run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AlignConfig {
    /// Configuration format version
    #[serde(default = "default_version")]
    pub version: String,

    /// File holding the two phrase blocks.
    #[serde(default = "default_input")]
    pub input: PathBuf,

    /// File the alignment is written to.
    #[serde(default = "default_output")]
    pub output: PathBuf,

    #[serde(default)]
    pub format: OutputFormat,

    #[serde(default)]
    pub matrix: MatrixConfig,

    #[serde(default)]
    pub assignment: AssignmentConfig,

    /// `tracing` filter directive used by the binary.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Emit logs as JSON lines instead of human-readable text.
    #[serde(default)]
    pub log_json: bool,
}

impl AlignConfig {
    /// Load a YAML configuration file from the given path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse YAML configuration from a string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        // An empty document deserializes as unit, not as a map.
        let config: AlignConfig = if yaml.trim().is_empty() {
            AlignConfig::default()
        } else {
            serde_yaml::from_str(yaml)?
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        match self.version.as_str() {
            "1.0" | "1" => {}
            v => return Err(ConfigLoadError::UnsupportedVersion(v.to_string())),
        }

        if self.input.as_os_str().is_empty() {
            return Err(ConfigLoadError::Validation(
                "input path must not be empty".to_string(),
            ));
        }
        if self.output.as_os_str().is_empty() {
            return Err(ConfigLoadError::Validation(
                "output path must not be empty".to_string(),
            ));
        }
        if self.log_level.trim().is_empty() {
            return Err(ConfigLoadError::Validation(
                "log_level must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    pub fn with_input(mut self, input: impl Into<PathBuf>) -> Self {
        self.input = input.into();
        self
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_order(mut self, order: CandidateOrder) -> Self {
        self.assignment.order = order;
        self
    }

    pub fn with_parallel(mut self, use_parallel: bool) -> Self {
        self.matrix.use_parallel = use_parallel;
        self
    }
}

impl Default for AlignConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            input: default_input(),
            output: default_output(),
            format: OutputFormat::default(),
            matrix: MatrixConfig::default(),
            assignment: AssignmentConfig::default(),
            log_level: default_log_level(),
            log_json: false,
        }
    }
}

fn default_version() -> String {
    "1.0".to_string()
}

fn default_input() -> PathBuf {
    PathBuf::from("input.txt")
}

fn default_output() -> PathBuf {
    PathBuf::from("output.txt")
}

fn default_log_level() -> String {
    "info".to_string()
}
