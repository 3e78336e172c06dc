//! UI configuration.
//!
//! Read from `config.toml` in the platform config directory. Every field has a
//! default, so a missing or partial file is fine.

use crate::platform::paths;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable overriding [`HostConfig::address`].
pub const HOST_ENV: &str = "AUDIO_SWITCH_HOST";

/// Host service connection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostConfig {
    /// `host:port` of the host service
    #[serde(default = "default_address")]
    pub address: String,
    /// TCP connect timeout in milliseconds
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_ms: u64,
}

fn default_address() -> String {
    "127.0.0.1:47600".to_string()
}
fn default_connect_timeout() -> u64 {
    2000
}

impl HostConfig {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            address: default_address(),
            connect_timeout_ms: default_connect_timeout(),
        }
    }
}

/// Overlay window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverlayConfig {
    /// Show the always-on-top overlay
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// How long the background stays opaque after a mute change
    #[serde(default = "default_dim_settle")]
    pub dim_settle_ms: u64,
}

fn default_true() -> bool {
    true
}
fn default_dim_settle() -> u64 {
    1200
}

impl OverlayConfig {
    pub fn dim_settle(&self) -> Duration {
        Duration::from_millis(self.dim_settle_ms)
    }
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            dim_settle_ms: default_dim_settle(),
        }
    }
}

/// Dashboard window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Initial width in points
    #[serde(default = "default_width")]
    pub width: f32,
    /// Initial height in points
    #[serde(default = "default_height")]
    pub height: f32,
}

fn default_width() -> f32 {
    420.0
}
fn default_height() -> f32 {
    520.0
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
        }
    }
}

/// Logging.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is not set
    #[serde(default = "default_filter")]
    pub filter: String,
    /// Also append to `app.log` in the data directory
    #[serde(default)]
    pub log_to_file: bool,
}

fn default_filter() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
            log_to_file: !cfg!(debug_assertions),
        }
    }
}

/// Main UI configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default)]
    pub host: HostConfig,
    #[serde(default)]
    pub overlay: OverlayConfig,
    #[serde(default)]
    pub dashboard: DashboardConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl UiConfig {
    /// Load from the default location and apply environment overrides.
    pub fn load() -> Result<Self> {
        let mut config = Self::load_from(&Self::config_path()?)?;
        if let Ok(address) = std::env::var(HOST_ENV) {
            config.apply_host_override(&address);
        }
        Ok(config)
    }

    /// Load from `path`, falling back to defaults when it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))
    }

    /// Replace the host address unless `address` is blank.
    pub fn apply_host_override(&mut self, address: &str) {
        let address = address.trim();
        if !address.is_empty() {
            self.host.address = address.to_string();
        }
    }

    /// Default configuration file path.
    pub fn config_path() -> Result<PathBuf> {
        Ok(paths::config_dir()?.join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = UiConfig::default();
        assert_eq!(config.host.address, "127.0.0.1:47600");
        assert_eq!(config.host.connect_timeout(), Duration::from_secs(2));
        assert_eq!(config.overlay.dim_settle(), Duration::from_millis(1200));
        assert!(config.overlay.enabled);
        assert_eq!(config.logging.filter, "info");
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = UiConfig::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, UiConfig::default());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[host]\naddress = \"10.0.0.5:9000\"\n\n[overlay]\ndim_settle_ms = 500\n",
        )
        .unwrap();

        let config = UiConfig::load_from(&path).unwrap();
        assert_eq!(config.host.address, "10.0.0.5:9000");
        assert_eq!(config.host.connect_timeout_ms, 2000);
        assert_eq!(config.overlay.dim_settle_ms, 500);
        assert!(config.overlay.enabled);
        assert_eq!(config.dashboard, DashboardConfig::default());
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[host\naddress = 1").unwrap();
        assert!(UiConfig::load_from(&path).is_err());
    }

    #[test]
    fn test_host_override_ignores_blank() {
        let mut config = UiConfig::default();
        config.apply_host_override("   ");
        assert_eq!(config.host.address, "127.0.0.1:47600");

        config.apply_host_override(" localhost:5000 ");
        assert_eq!(config.host.address, "localhost:5000");
    }
}
