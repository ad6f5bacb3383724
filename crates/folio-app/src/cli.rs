//! CLI argument definitions for the Folio application.
//!
//! Uses `clap` with derive macros for ergonomic argument parsing.
//! Priority resolution: CLI args > env vars > config file > defaults.

use clap::Parser;
use std::path::PathBuf;

use folio_core::config::FolioConfig;

/// Folio — a portfolio concierge: chat about experience, education,
/// availability, services, and how to get in touch.
#[derive(Parser, Debug)]
#[command(name = "folio", version, about)]
pub struct CliArgs {
    /// Path to the configuration file.
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// Path to the profile document.
    #[arg(short = 'p', long = "profile")]
    pub profile: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short = 'l', long = "log-level")]
    pub log_level: Option<String>,

    /// Simulated reply latency in milliseconds.
    #[arg(long = "delay-ms")]
    pub delay_ms: Option<u64>,
}

impl CliArgs {
    /// Resolve the configuration file path.
    ///
    /// Priority: --config flag > FOLIO_CONFIG env var > ./folio.toml.
    pub fn resolve_config_path(&self) -> PathBuf {
        if let Some(ref p) = self.config {
            return p.clone();
        }
        if let Ok(p) = std::env::var("FOLIO_CONFIG") {
            return PathBuf::from(p);
        }
        PathBuf::from("folio.toml")
    }

    /// Resolve the profile document path.
    ///
    /// Priority: --profile flag > FOLIO_PROFILE env var > config file value.
    pub fn resolve_profile_path(&self, config: &FolioConfig) -> PathBuf {
        if let Some(ref p) = self.profile {
            return p.clone();
        }
        if let Ok(p) = std::env::var("FOLIO_PROFILE") {
            return PathBuf::from(p);
        }
        PathBuf::from(&config.general.profile_path)
    }

    /// Resolve the effective log level.
    pub fn resolve_log_level(&self, config: &FolioConfig) -> String {
        self.log_level
            .clone()
            .unwrap_or_else(|| config.general.log_level.clone())
    }

    /// Resolve the simulated reply latency in milliseconds.
    pub fn resolve_reply_delay_ms(&self, config: &FolioConfig) -> u64 {
        self.delay_ms.unwrap_or(config.chat.reply_delay_ms)
    }
}
