//! Configuration system for the MHF virtual machine.
//!
//! This module defines the configuration structures used to parameterize a machine. It provides:
//! 1. **Defaults:** Baseline machine constants (memory size, output port).
//! 2. **Structures:** Memory layout and execution policy (step budget, register
//!    strictness, tracing).
//! 3. **Loading:** JSON deserialization and validation.
//!
//! Every field is optional in JSON; missing fields take their defaults, so `{}` is a valid config.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::constants;
use crate::common::error::ConfigError;

/// Default configuration constants.
mod defaults {
    use crate::common::constants;

    /// Size of the flat address space (64 KiB).
    pub const MEMORY_SIZE: usize = constants::MEMORY_SIZE;

    /// Memory-mapped output port address.
    pub const OUTPUT_PORT: u32 = constants::OUTPUT_PORT;
}

/// Root configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Memory layout configuration
    #[serde(default)]
    pub memory: MemoryConfig,
    /// Execution policy configuration
    #[serde(default)]
    pub execution: ExecutionConfig,
}

impl Config {
    /// Parses and validates a configuration from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and the validation errors
    /// of [`Config::validate`].
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, otherwise the errors
    /// of [`Config::from_json`].
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    /// Checks that the memory layout is usable.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidMemorySize`] when the memory size is zero or above
    /// 16 MiB, and [`ConfigError::OutputPortOutOfRange`] when the output port does not
    /// fit in memory.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let size = self.memory.size;
        if size == 0 || size > constants::MAX_MEMORY_SIZE {
            return Err(ConfigError::InvalidMemorySize {
                size,
                max: constants::MAX_MEMORY_SIZE,
            });
        }
        if self.memory.output_port as usize >= size {
            return Err(ConfigError::OutputPortOutOfRange {
                port: self.memory.output_port,
                size,
            });
        }
        Ok(())
    }
}

/// Memory layout configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct MemoryConfig {
    /// Memory size in bytes
    #[serde(default = "MemoryConfig::default_size")]
    pub size: usize,

    /// Address of the memory-mapped character output port
    #[serde(default = "MemoryConfig::default_output_port")]
    pub output_port: u32,
}

impl MemoryConfig {
    /// Returns the default memory size in bytes.
    const fn default_size() -> usize {
        defaults::MEMORY_SIZE
    }

    /// Returns the default output port address.
    const fn default_output_port() -> u32 {
        defaults::OUTPUT_PORT
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            size: defaults::MEMORY_SIZE,
            output_port: defaults::OUTPUT_PORT,
        }
    }
}

/// Execution policy configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExecutionConfig {
    /// Maximum number of instructions per run; `None` runs until halt or fault
    #[serde(default)]
    pub max_steps: Option<u64>,

    /// Fault on out-of-range register indices instead of skipping the instruction's effect
    #[serde(default)]
    pub strict_registers: bool,

    /// Log every executed instruction at trace level
    #[serde(default)]
    pub trace_instructions: bool,
}
