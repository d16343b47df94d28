//! Parser for plugin `.info.toml` manifest files.
//!
//! Each plugin ships a `{name}.info.toml` next to its WASM module declaring
//! its name, version, the taps it exports and the console API group its
//! backend serves.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Plugin metadata parsed from `.info.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct PluginInfo {
    /// Machine name (must match directory and file names).
    pub name: String,

    pub description: String,

    /// Semantic version (e.g., "1.0.0").
    pub version: String,

    /// Plugins that must load first.
    #[serde(default)]
    pub dependencies: Vec<String>,

    /// Console API group and version, e.g. `console.api.example.com/v1alpha1`.
    #[serde(default)]
    pub api_group: Option<String>,

    #[serde(default)]
    pub taps: TapConfig,
}

/// Which taps a plugin exports.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TapConfig {
    #[serde(default)]
    pub implements: Vec<String>,

    /// Lower runs first.
    #[serde(default)]
    pub weight: i32,
}

/// Tap names a console plugin may export.
pub const KNOWN_TAPS: &[&str] = &[
    "tap_install",
    "tap_enable",
    "tap_disable",
    "tap_uninstall",
    "tap_plugin",
    "tap_menu",
    "tap_perm",
    "tap_view",
];

impl PluginInfo {
    /// Parse a plugin info file from the given path.
    pub fn parse(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read plugin info file: {}", path.display()))?;

        Self::parse_str(&content, path)
    }

    /// Parse plugin info from a TOML string.
    pub fn parse_str(content: &str, path: &Path) -> Result<Self> {
        let info: PluginInfo = toml::from_str(content)
            .with_context(|| format!("failed to parse plugin info TOML at {}", path.display()))?;

        info.validate(path)?;
        Ok(info)
    }

    /// Path prefix under which the host proxies this plugin's console API.
    pub fn api_prefix(&self) -> Option<String> {
        self.api_group.as_deref().map(|group| format!("/apis/{group}"))
    }

    pub fn implements(&self, tap: &str) -> bool {
        self.taps.implements.iter().any(|t| t == tap)
    }

    fn validate(&self, path: &Path) -> Result<()> {
        if self.name.is_empty() {
            anyhow::bail!("plugin info at {} has empty 'name' field", path.display());
        }

        if self.version.is_empty() {
            anyhow::bail!(
                "plugin '{}' at {} has empty 'version' field",
                self.name,
                path.display()
            );
        }

        if let Some(group) = &self.api_group {
            let valid = group
                .split_once('/')
                .is_some_and(|(g, v)| !g.is_empty() && !v.is_empty() && !v.contains('/'));
            if !valid {
                anyhow::bail!(
                    "plugin '{}' has malformed 'api_group' '{}', expected '<group>/<version>'",
                    self.name,
                    group
                );
            }
        }

        for tap in &self.taps.implements {
            if !KNOWN_TAPS.contains(&tap.as_str()) {
                anyhow::bail!(
                    "plugin '{}' declares unknown tap '{}'. Known taps: {}",
                    self.name,
                    tap,
                    KNOWN_TAPS.join(", ")
                );
            }
        }

        Ok(())
    }
}
