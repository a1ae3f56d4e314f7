use std::path::{Path, PathBuf};

use anyhow::Context;
use leash_common::config;
use leash_common::trust::{TrustedDeviceStore, TrustedDevices};
use tracing::debug;

/// Trusted devices persisted as a TOML file.
pub struct TomlTrustStore {
    path: PathBuf,
}

impl TomlTrustStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The store in the per-user configuration directory.
    pub fn default_location() -> anyhow::Result<Self> {
        Ok(Self::new(config::default_trust_path()?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TrustedDeviceStore for TomlTrustStore {
    fn load(&self) -> anyhow::Result<TrustedDevices> {
        if !self.path.exists() {
            debug!("{} does not exist yet", self.path.display());
            return Ok(TrustedDevices::new());
        }

        let contents = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse {}", self.path.display()))
    }

    fn save(&self, devices: &TrustedDevices) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let contents =
            toml::to_string_pretty(devices).context("Failed to encode trusted devices")?;
        std::fs::write(&self.path, contents)
            .with_context(|| format!("Failed to write {}", self.path.display()))
    }
}
