//! # Configuration
//!
//! [`Config`] is what the commands run with. It is assembled from CLI flags on top of
//! an optional TOML [`FileConfig`] stored in the per-user config directory.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use app_dirs2::{AppDataType, AppInfo, get_app_root};
use serde::Deserialize;

pub const APP_INFO: AppInfo = AppInfo {
    name: "leash",
    author: "leash",
};

pub const CONFIG_FILE: &str = "config.toml";
pub const TRUST_FILE: &str = "trusted.toml";

pub struct Config {
    /// 0 prints everything, 1 trims decoration, 2 prints results only.
    pub quiet: u8,
    /// Report what would happen instead of locking.
    pub dry_run: bool,
    pub scan: ScanSettings,
    pub lock: LockSettings,
}

impl Config {
    pub fn from_file(file: FileConfig, quiet: u8, dry_run: bool) -> Self {
        Self {
            quiet,
            dry_run,
            scan: file.scan,
            lock: file.lock,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub scan: ScanSettings,
    #[serde(default)]
    pub lock: LockSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScanSettings {
    /// Upper bound of one discovery sweep.
    #[serde(default = "default_sweep_secs")]
    pub sweep_secs: u64,
    /// Upper bound of one connection probe.
    #[serde(default = "default_probe_timeout_secs")]
    pub probe_timeout_secs: u64,
    /// Discovery breadth. Unbounded when unset.
    #[serde(default)]
    pub max_devices: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LockSettings {
    /// Program and arguments replacing the platform lock command.
    #[serde(default)]
    pub command: Option<Vec<String>>,
}

fn default_sweep_secs() -> u64 {
    10
}

fn default_probe_timeout_secs() -> u64 {
    8
}

impl Default for ScanSettings {
    fn default() -> Self {
        Self {
            sweep_secs: default_sweep_secs(),
            probe_timeout_secs: default_probe_timeout_secs(),
            max_devices: None,
        }
    }
}

impl ScanSettings {
    pub fn sweep(&self) -> Duration {
        Duration::from_secs(self.sweep_secs)
    }

    pub fn probe_timeout(&self) -> Duration {
        Duration::from_secs(self.probe_timeout_secs)
    }
}

impl FileConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::parse(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn parse(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Loads `path` if given, otherwise the default file if it exists.
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }

        let default_path = config_dir()?.join(CONFIG_FILE);
        if default_path.exists() {
            tracing::debug!("Loading config from {}", default_path.display());
            Self::load(default_path)
        } else {
            Ok(Self::default())
        }
    }
}

/// Per-user configuration directory, created on first use.
pub fn config_dir() -> Result<PathBuf> {
    get_app_root(AppDataType::UserConfig, &APP_INFO)
        .context("Failed to resolve the user configuration directory")
}

pub fn default_trust_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(TRUST_FILE))
}
