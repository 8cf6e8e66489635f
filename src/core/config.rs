//! Configuration management for the decomposer.
//!
//! Handles loading configuration from TOML files.

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

/// Environment variable pointing at an explicit config file.
pub const CONFIG_ENV_VAR: &str = "DECOMPOSER_CONFIG";

/// Name of the per-project config file.
pub const LOCAL_CONFIG_FILE: &str = ".decomposer.toml";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Heuristic thresholds
    pub analysis: AnalysisSettings,

    /// Report rendering
    pub output: OutputConfig,
}

/// Thresholds used by scoring and noise detection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisSettings {
    /// Coupling score above which a component is reported as highly coupled
    pub coupling_warning_threshold: f64,

    /// Inputs shorter than this many characters are classified as epistemic noise
    pub min_detail_length: usize,

    /// Component confidence below which extraction is considered unreliable
    pub low_confidence_threshold: f64,

    /// Fraction of unreliable components above which the input is human noise
    pub low_confidence_ratio: f64,
}

/// Output format for rendered results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable report
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => anyhow::bail!("Unknown output format: {other} (expected text or json)"),
        }
    }
}

/// Report rendering settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub format: OutputFormat,

    /// Whether to include the reasoning trace in text reports
    pub show_reasoning: bool,

    /// Whether to include warnings in text reports
    pub show_warnings: bool,
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Looks for config in:
    /// 1. The file named by `$DECOMPOSER_CONFIG`
    /// 2. `.decomposer.toml` in current directory
    /// 3. `~/.config/decomposer/config.toml`
    /// 4. Falls back to defaults
    pub fn load() -> anyhow::Result<Self> {
        if let Some(path) = std::env::var_os(CONFIG_ENV_VAR) {
            return Self::load_from_file(Path::new(&path));
        }

        let local_config = PathBuf::from(LOCAL_CONFIG_FILE);
        if local_config.exists() {
            return Self::load_from_file(&local_config);
        }

        if let Some(global_config) = Self::global_config_path() {
            if global_config.exists() {
                return Self::load_from_file(&global_config);
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific file.
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        tracing::debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Serialize to TOML.
    pub fn to_toml(&self) -> anyhow::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Get the config directory path.
    pub fn config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("decomposer"))
    }

    /// Get the global config file path.
    pub fn global_config_path() -> Option<PathBuf> {
        Self::config_dir().map(|d| d.join("config.toml"))
    }
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            coupling_warning_threshold: 0.7,
            min_detail_length: 50,
            low_confidence_threshold: 0.5,
            low_confidence_ratio: 0.3,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { format: OutputFormat::Text, show_reasoning: true, show_warnings: true }
    }
}
