//! Core types shared across the crate.
//!
//! Currently this is the configuration layer: analysis thresholds and output settings.

mod config;

pub use config::{
    AnalysisSettings, Config, OutputConfig, OutputFormat, CONFIG_ENV_VAR, LOCAL_CONFIG_FILE,
};
