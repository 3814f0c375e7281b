//! Configuration for mindful-chat
//!
//! Values resolve as: CLI flags > environment (both handled by clap in
//! `main.rs`) > config file (~/.mindful/config.toml) > defaults.

use anyhow::{Result, bail};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::chat::TipCatalog;
use crate::history::DEFAULT_HISTORY_CAPACITY;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_STATIC_DIR: &str = "public";

/// Contents of the optional TOML config file
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub static_dir: Option<PathBuf>,
    pub history_capacity: Option<usize>,

    /// Restrict CORS to a single origin (any origin when unset)
    pub cors_origin: Option<String>,

    /// Tip list overrides keyed by mood name, e.g. `neutral = ["..."]`
    #[serde(default)]
    pub tips: BTreeMap<String, Vec<String>>,
}

impl FileConfig {
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load a config file. A missing file yields defaults; an unreadable or
    /// malformed one is reported and also yields defaults.
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            debug!("No config file at {}", path.display());
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match Self::parse(&content) {
                Ok(config) => config,
                Err(e) => {
                    warn!("Failed to parse {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                warn!("Failed to read {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}

/// Default config file path
pub fn config_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_default()
        .join(".mindful")
        .join("config.toml")
}

/// Values given on the command line or through the environment
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub static_dir: Option<PathBuf>,
    pub history_capacity: Option<usize>,
    pub cors_origin: Option<String>,
}

/// Fully resolved server configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub static_dir: PathBuf,
    pub history_capacity: usize,
    pub cors_origin: Option<String>,
    pub tips: TipCatalog,
}

impl Config {
    pub fn resolve(overrides: Overrides, file: FileConfig) -> Result<Self> {
        let history_capacity = overrides
            .history_capacity
            .or(file.history_capacity)
            .unwrap_or(DEFAULT_HISTORY_CAPACITY);
        if history_capacity == 0 {
            bail!("history capacity must be at least 1");
        }

        Ok(Self {
            host: overrides
                .host
                .or(file.host)
                .unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: overrides.port.or(file.port).unwrap_or(DEFAULT_PORT),
            static_dir: overrides
                .static_dir
                .or(file.static_dir)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR)),
            history_capacity,
            cors_origin: overrides.cors_origin.or(file.cors_origin),
            tips: TipCatalog::with_overrides(&file.tips),
        })
    }

    /// Server bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            cors_origin: None,
            tips: TipCatalog::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::MoodCategory;
    use std::io::Write;

    #[test]
    fn test_config_defaults() {
        let config = Config::resolve(Overrides::default(), FileConfig::default()).unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.static_dir, PathBuf::from("public"));
        assert_eq!(config.history_capacity, 50);
        assert!(config.cors_origin.is_none());
        assert_eq!(config.bind_address(), "0.0.0.0:3000");
    }

    #[test]
    fn test_overrides_beat_file() {
        let file = FileConfig::parse(
            r#"
            host = "127.0.0.1"
            port = 8080
            history_capacity = 20
            "#,
        )
        .unwrap();
        let overrides = Overrides {
            port: Some(9000),
            ..Default::default()
        };

        let config = Config::resolve(overrides, file).unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 9000);
        assert_eq!(config.history_capacity, 20);
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let overrides = Overrides {
            history_capacity: Some(0),
            ..Default::default()
        };
        assert!(Config::resolve(overrides, FileConfig::default()).is_err());
    }

    #[test]
    fn test_tip_overrides_from_file() {
        let file = FileConfig::parse(
            r#"
            [tips]
            positive = ["Go for a walk in the sun."]
            "#,
        )
        .unwrap();
        let config = Config::resolve(Overrides::default(), file).unwrap();
        assert_eq!(
            config.tips.tips_for(MoodCategory::Positive),
            ["Go for a walk in the sun.".to_string()]
        );
        assert_eq!(config.tips.tips_for(MoodCategory::Neutral).len(), 6);
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = FileConfig::load(&dir.path().join("nope.toml"));
        assert!(config.port.is_none());
        assert!(config.tips.is_empty());
    }

    #[test]
    fn test_load_malformed_file_uses_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "port = \"not a number\"").unwrap();
        let config = FileConfig::load(file.path());
        assert!(config.port.is_none());
    }

    #[test]
    fn test_load_valid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "port = 4100\ncors_origin = \"http://localhost:5173\"").unwrap();
        let config = FileConfig::load(file.path());
        assert_eq!(config.port, Some(4100));
        assert_eq!(config.cors_origin.as_deref(), Some("http://localhost:5173"));
    }

    #[test]
    fn test_config_path() {
        let path = config_path();
        assert!(path.to_string_lossy().contains(".mindful"));
        assert!(path.to_string_lossy().ends_with("config.toml"));
    }
}
