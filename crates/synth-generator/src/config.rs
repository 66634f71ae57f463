//! Generation options loaded from YAML.
//!
//! ```yaml
//! seed: 7
//! sequence_widths:
//!   id: 10
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Error type for loading generation options.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Error reading config file
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),
}

fn default_seed() -> u64 {
    42
}

/// Options for one generation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Random seed (same seed = same data)
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// Padding width per `SEQUENCE` column, overriding its observed max length
    #[serde(default)]
    pub sequence_widths: HashMap<String, usize>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            sequence_widths: HashMap::new(),
        }
    }
}

impl GenerationConfig {
    /// Load options from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse options from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Set the seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
