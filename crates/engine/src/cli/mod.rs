pub mod config;
pub mod edit;
pub mod inspect;

use std::path::Path;

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;

use cadence_domain::config::{Config, OutputConfig, OutputFormat};

/// cadence — translate between cron expressions and schedule descriptors.
#[derive(Debug, Parser)]
#[command(name = "cadence", version, about)]
pub struct Cli {
    /// Print JSON regardless of `output.format` in the config file.
    #[arg(long, global = true)]
    pub json: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Classify a cron expression and print its descriptor.
    Parse {
        /// 5-field cron expression (quote it).
        cron: String,
    },
    /// Read a descriptor as JSON and print the cron expression it builds.
    Build {
        /// Read the descriptor from this file instead of stdin.
        #[arg(long)]
        file: Option<String>,
    },
    /// Print a human-readable description of a cron expression.
    Describe {
        /// 5-field cron expression (quote it).
        cron: String,
    },
    /// Apply field edits to a cron expression, printing each intermediate
    /// expression.
    Edit {
        /// Starting cron expression (quote it).
        cron: String,
        /// Edits as `field=value`, applied in order (e.g. `hour=14`,
        /// `frequency=weekly`, `toggle=Fri`, `days=Mon,Wed`).
        #[arg(required = true)]
        edits: Vec<String>,
    },
    /// Configuration utilities.
    #[command(subcommand)]
    Config(ConfigCommand),
    /// Print version information.
    Version,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Parse the config file and report any errors.
    Validate,
    /// Dump the resolved configuration (with defaults) as TOML.
    Show,
}

// ── Config loading helper ─────────────────────────────────────────────

/// Load the configuration from the path specified by `CADENCE_CONFIG` (or
/// `cadence.toml` by default). Returns the parsed [`Config`] and the path
/// that was used.
pub fn load_config() -> anyhow::Result<(Config, String)> {
    let config_path =
        std::env::var("CADENCE_CONFIG").unwrap_or_else(|_| "cadence.toml".into());
    let config = load_config_from(&config_path)?;
    Ok((config, config_path))
}

/// Load `path`, falling back to defaults when the file does not exist.
pub fn load_config_from(path: &str) -> anyhow::Result<Config> {
    let config = if Path::new(path).exists() {
        let raw = std::fs::read_to_string(path)
            .map_err(cadence_domain::Error::from)
            .with_context(|| format!("reading {path}"))?;
        Config::from_toml(&raw).with_context(|| format!("parsing {path}"))?
    } else {
        Config::default()
    };
    Ok(config)
}

// ── Output helpers ────────────────────────────────────────────────────

/// Resolved output settings for one invocation.
#[derive(Debug, Clone, Copy)]
pub struct Output {
    pub json: bool,
    pub pretty: bool,
}

impl Output {
    pub fn new(config: &OutputConfig, force_json: bool) -> Self {
        Self {
            json: force_json || config.format == OutputFormat::Json,
            pretty: config.pretty,
        }
    }

    pub fn to_json<T: Serialize>(&self, value: &T) -> anyhow::Result<String> {
        let out = if self.pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        };
        out.map_err(cadence_domain::Error::from)
            .context("serializing output")
    }
}

impl Default for Output {
    fn default() -> Self {
        Self::new(&OutputConfig::default(), false)
    }
}
