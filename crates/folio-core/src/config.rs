use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{FolioError, Result};

/// Top-level configuration for the Folio application.
///
/// Loaded from `folio.toml` by default. Each section corresponds to one
/// concern of the hosting surface.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FolioConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub chat: ChatConfig,
}

impl FolioConfig {
    /// Load configuration from a TOML file.
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: FolioConfig = toml::from_str(&content)?;
        info!("Configuration loaded from {}", path.display());
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist or cannot be parsed.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(
                    "Failed to load config from {}: {}. Using defaults.",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Save the current configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| FolioError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        info!("Configuration saved to {}", path.display());
        Ok(())
    }
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Path to the profile document.
    pub profile_path: String,
    /// Log level: trace, debug, info, warn, error.
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            profile_path: "profile.toml".to_string(),
            log_level: "info".to_string(),
        }
    }
}

/// Chat widget configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// Whether the chat surface is enabled at all.
    pub enabled: bool,
    /// Simulated reply latency in milliseconds.
    pub reply_delay_ms: u64,
    /// Maximum user message length in characters.
    pub max_message_length: usize,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            reply_delay_ms: 1000,
            max_message_length: 2000,
        }
    }
}
