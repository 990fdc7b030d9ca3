//! Application configuration
//!
//! Configuration loaded from `.tb-dashboard.toml`.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Deployment environment, selects which meta-reducers wrap the root reducer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Prod,
    Dev,
}

impl Environment {
    pub fn is_dev(self) -> bool {
        matches!(self, Environment::Dev)
    }
}

/// Telemetry settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetryConfig {
    /// When false, events go to a no-op sink
    #[serde(default = "default_telemetry_enabled")]
    pub enabled: bool,

    /// Base path prepended to page-view payloads
    #[serde(default = "default_page_path")]
    pub page_path: String,
}

/// URL fragment settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeepLinkConfig {
    /// Fragment key holding the active plugin id
    #[serde(default = "default_plugin_key")]
    pub plugin_key: String,

    /// Value treated as "absent"; writing it removes the key from the fragment
    #[serde(default)]
    pub default_value: String,
}

/// Application configuration loaded from `.tb-dashboard.toml`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub environment: Environment,

    #[serde(default)]
    pub telemetry: TelemetryConfig,

    #[serde(default)]
    pub deep_link: DeepLinkConfig,

    /// Initial auto-reload period in milliseconds
    #[serde(default = "default_reload_period_ms")]
    pub reload_period_ms: u64,
}

fn default_telemetry_enabled() -> bool {
    true
}

fn default_page_path() -> String {
    "/".to_string()
}

fn default_plugin_key() -> String {
    "plugin".to_string()
}

fn default_reload_period_ms() -> u64 {
    30_000
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            enabled: default_telemetry_enabled(),
            page_path: default_page_path(),
        }
    }
}

impl Default for DeepLinkConfig {
    fn default() -> Self {
        Self {
            plugin_key: default_plugin_key(),
            default_value: String::new(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            telemetry: TelemetryConfig::default(),
            deep_link: DeepLinkConfig::default(),
            reload_period_ms: default_reload_period_ms(),
        }
    }
}

impl AppConfig {
    /// Load config from the first config file found, or use defaults
    pub fn load() -> Self {
        if let Some(content) = crate::load_config_file() {
            match Self::from_toml_str(&content) {
                Ok(config) => {
                    log::info!("Loaded app config from file");
                    return config;
                }
                Err(e) => {
                    log::warn!("Failed to parse config file: {:#}", e);
                }
            }
        }

        log::debug!("Using default app config");
        Self::default()
    }

    /// Parse a config from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse app config")
    }
}
