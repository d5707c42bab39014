//! Configuration structures for the extraction pipeline.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration for cachet.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CachetConfig {
    /// Input configuration.
    pub input: InputConfig,

    /// Report configuration.
    pub report: ReportConfig,
}

impl Default for CachetConfig {
    fn default() -> Self {
        Self {
            input: InputConfig::default(),
            report: ReportConfig::default(),
        }
    }
}

/// Input file configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Path of the results file to scan when none is given on the command line.
    pub path: PathBuf,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("cachetest_results.txt"),
        }
    }
}

/// Report output configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Default output format ("json", "csv" or "table").
    pub format: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            format: "table".to_string(),
        }
    }
}

impl CachetConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;
        std::fs::write(path, content)
    }
}
