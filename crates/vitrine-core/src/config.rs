//! Configuration management for Vitrine.
//!
//! Loads configuration from ${VITRINE_HOME}/config.toml with sensible
//! defaults. The flow has no real I/O, so configuration is limited to the
//! simulated timings and the log filter.

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Returns the default config template with comments.
///
/// This is embedded from default_config.toml at compile time.
/// To update, edit default_config.toml directly.
pub fn default_config_template() -> &'static str {
    include_str!("../default_config.toml")
}

pub mod paths {
    //! Path resolution for Vitrine configuration and data directories.
    //!
    //! VITRINE_HOME resolution order:
    //! 1. VITRINE_HOME environment variable (if set)
    //! 2. ~/.config/vitrine (default)

    use std::path::PathBuf;

    /// Returns the Vitrine home directory.
    ///
    /// Checks VITRINE_HOME env var first, falls back to ~/.config/vitrine
    pub fn vitrine_home() -> PathBuf {
        if let Ok(home) = std::env::var("VITRINE_HOME") {
            return PathBuf::from(home);
        }

        dirs::home_dir()
            .map(|h| h.join(".config").join("vitrine"))
            .expect("Could not determine home directory")
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        vitrine_home().join("config.toml")
    }

    /// Returns the path to the log file.
    pub fn log_path() -> PathBuf {
        vitrine_home().join("vitrine.log")
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Simulated network latency for sign-in and save actions, in ms.
    pub latency_ms: u64,

    /// How long the save-success notice stays up before the flow moves on,
    /// in ms.
    pub notice_ms: u64,

    /// Tracing filter for the log file (overridden by VITRINE_LOG).
    pub log_filter: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            latency_ms: Self::DEFAULT_LATENCY_MS,
            notice_ms: Self::DEFAULT_NOTICE_MS,
            log_filter: None,
        }
    }
}

impl Config {
    const DEFAULT_LATENCY_MS: u64 = 800;
    const DEFAULT_NOTICE_MS: u64 = 1500;

    /// Loads configuration from the default config path.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            Ok(Config::default())
        }
    }

    /// Simulated latency before a sign-in or save "completes".
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }

    /// Dwell time of the save-success notice before navigating on.
    pub fn notice_delay(&self) -> Duration {
        Duration::from_millis(self.notice_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config.latency_ms, 800);
        assert_eq!(config.notice_ms, 1500);
        assert!(config.log_filter.is_none());
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "latency_ms = 5\n").unwrap();
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.latency_ms, 5);
        assert_eq!(config.notice_ms, 1500);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "latency_ms = \"fast\"\n").unwrap();
        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn template_parses_to_defaults() {
        let config: Config = toml::from_str(default_config_template()).unwrap();
        assert_eq!(config.latency_ms, Config::default().latency_ms);
        assert_eq!(config.notice_ms, Config::default().notice_ms);
    }

    #[test]
    fn durations_derive_from_millis() {
        let config = Config {
            latency_ms: 50,
            notice_ms: 75,
            log_filter: None,
        };
        assert_eq!(config.latency(), Duration::from_millis(50));
        assert_eq!(config.notice_delay(), Duration::from_millis(75));
    }
}
