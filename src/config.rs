//! Engine configuration
//!
//! Loaded from a JSON file. Every field has a default, so an empty object
//! is a valid configuration and a missing file falls back to the defaults.
//! The geometry fields are fixed at store construction; `trim` restores
//! them.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config {path}: {source}")]
    Unreadable {
        path: String,
        source: std::io::Error,
    },

    /// The file is not valid JSON for this structure.
    #[error("invalid config JSON in {path}: {source}")]
    Invalid {
        path: String,
        source: serde_json::Error,
    },

    /// A field value is out of range.
    #[error("invalid config value: {0}")]
    OutOfRange(String),
}

/// Engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Bytes per chunk (quantum)
    #[serde(default = "default_quantum_size")]
    pub quantum_size: usize,

    /// Chunk slots per group (quantum set)
    #[serde(default = "default_qset_size")]
    pub qset_size: usize,

    /// Upper bound on an emitted word, separator included
    #[serde(default = "default_max_word_len")]
    pub max_word_len: usize,

    /// Delay between tokenizer ticks, in milliseconds
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,
}

fn default_quantum_size() -> usize {
    4000
}
fn default_qset_size() -> usize {
    1000
}
fn default_max_word_len() -> usize {
    20
}
fn default_tick_interval_ms() -> u64 {
    1000
}

impl Default for Config {
    fn default() -> Self {
        Self {
            quantum_size: default_quantum_size(),
            qset_size: default_qset_size(),
            max_word_len: default_max_word_len(),
            tick_interval_ms: default_tick_interval_ms(),
        }
    }
}

impl Config {
    /// Load configuration from a JSON file
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Unreadable {
            path: path.display().to_string(),
            source: e,
        })?;

        let config: Config = serde_json::from_str(&content).map_err(|e| ConfigError::Invalid {
            path: path.display().to_string(),
            source: e,
        })?;

        config.validate()?;

        Ok(config)
    }

    /// Load configuration from a JSON file, falling back to the defaults
    /// when the file does not exist
    pub fn load_or_default(path: &Path) -> ConfigResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Validate field ranges
    pub fn validate(&self) -> ConfigResult<()> {
        if self.quantum_size == 0 {
            return Err(ConfigError::OutOfRange("quantum_size must be > 0".into()));
        }

        if self.qset_size == 0 {
            return Err(ConfigError::OutOfRange("qset_size must be > 0".into()));
        }

        // One byte of every word budget is reserved for the separator, so
        // anything below 2 can never emit content.
        if self.max_word_len < 2 {
            return Err(ConfigError::OutOfRange("max_word_len must be >= 2".into()));
        }

        if self.tick_interval_ms == 0 {
            return Err(ConfigError::OutOfRange(
                "tick_interval_ms must be > 0".into(),
            ));
        }

        Ok(())
    }
}
