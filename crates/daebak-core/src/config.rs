use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{DaebakError, Result};

/// Top-level configuration for the Daebak order assistant.
///
/// Loaded from `~/.daebak/config.toml` by default. Each section corresponds
/// to one collaborator of the assembly pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DaebakConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub service: ServiceConfig,
    #[serde(default)]
    pub voice: VoiceConfig,
}

impl Default for DaebakConfig {
    fn default() -> Self {
        Self {
            general: GeneralConfig::default(),
            service: ServiceConfig::default(),
            voice: VoiceConfig::default(),
        }
    }
}

impl DaebakConfig {
    /// Load configuration from a TOML file.
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: DaebakConfig = toml::from_str(&content)?;
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
            toml::to_string_pretty(self).map_err(|e| DaebakError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        info!("Configuration saved to {}", path.display());
        Ok(())
    }
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log level: trace, debug, info, warn, error.
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Interpretation service settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Endpoint of the order-interpretation service.
    pub endpoint: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:8080/customer/ai-chat-order".to_string(),
        }
    }
}

/// Speech capture settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VoiceConfig {
    /// Spoken-language locale passed to the recognizer.
    pub locale: String,
    /// Whether the recognizer should deliver interim transcripts.
    pub interim_results: bool,
}

impl Default for VoiceConfig {
    fn default() -> Self {
        Self {
            locale: "ko-KR".to_string(),
            interim_results: true,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
