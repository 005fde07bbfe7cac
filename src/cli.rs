//! Helmgen CLI
//!
//! Argument parsing and output shaping for the `helmgen` binary.

use crate::config::{ConfigLoader, HelmgenConfig};
use crate::error::ConfigError;
use crate::logging::LoggingConfig;
use clap::Parser;
use std::path::PathBuf;

/// Helmgen - run code generators referenced by comment directives
#[derive(Parser)]
#[command(name = "helmgen")]
#[command(about = "Runs code generators referenced by helm:generate comment directives")]
pub struct Cli {
    /// Directory to scan for directives
    #[arg(default_value = ".")]
    pub dir: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (default: off)
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Output format for the run summary (text or json)
    #[arg(long, default_value = "text")]
    pub format: String,
}

/// Load the effective configuration for this invocation.
pub fn load_config(cli: &Cli) -> Result<HelmgenConfig, ConfigError> {
    match cli.config {
        Some(ref path) => ConfigLoader::load_from_file(path),
        None => ConfigLoader::load(&cli.dir),
    }
}

/// Build logging configuration from CLI arguments over the loaded config.
///
/// Logging is off unless `--verbose` or `--log-level` asks for it.
pub fn build_logging_config(cli: &Cli, base: LoggingConfig) -> LoggingConfig {
    let mut config = base;

    if !cli.verbose && cli.log_level.is_none() {
        config.level = "off".to_string();
        return config;
    }

    if let Some(ref level) = cli.log_level {
        config.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        config.format = format.clone();
    }

    config
}

/// Format the run summary for a completed walk.
pub fn format_summary(executed: usize, format: &str) -> String {
    if format == "json" {
        serde_json::json!({ "executed": executed }).to_string()
    } else if executed == 1 {
        "Executed 1 generator".to_string()
    } else {
        format!("Executed {} generators", executed)
    }
}
