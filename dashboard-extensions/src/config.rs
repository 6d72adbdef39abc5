//! Dashboard configuration: reads `dashboard.toml` and turns the plugin
//! manifests it lists into the ordered plugin list the dashboard composes.
//!
//! Every failure here is a startup failure: a dashboard silently missing a
//! plugin is harder to diagnose than one that refuses to boot.

use crate::app::DashboardApp;
use crate::error::ExtensionError;
use crate::manifest::PluginManifest;
use crate::plugin::Plugin;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::info;

/// Parsed `[dashboard]` section with plugin paths resolved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Manifest paths in composition order.
    #[serde(default)]
    pub plugins: Vec<PathBuf>,
    /// Plugin names to leave out of the composition.
    #[serde(default)]
    pub disabled: HashSet<String>,
}

/// Raw TOML structure matching the dashboard.toml format.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    dashboard: DashboardConfig,
}

impl DashboardConfig {
    /// Parses config text. Relative plugin paths are resolved against
    /// `base_dir`.
    pub fn from_toml_str(contents: &str, base_dir: &Path) -> Result<Self, ExtensionError> {
        Self::parse(contents, base_dir).map_err(ExtensionError::Config)
    }

    fn parse(contents: &str, base_dir: &Path) -> Result<Self, String> {
        let file: ConfigFile = toml::from_str(contents).map_err(|e| e.to_string())?;
        let mut config = file.dashboard;
        for path in &mut config.plugins {
            if path.is_relative() {
                *path = base_dir.join(&*path);
            }
        }
        Ok(config)
    }

    /// Loads the config file at `path`.
    pub fn load_from(path: &Path) -> Result<Self, ExtensionError> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            ExtensionError::Config(format!("failed to read {:?}: {}", path, e))
        })?;
        let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
        let config = Self::parse(&contents, base_dir)
            .map_err(|e| ExtensionError::Config(format!("{:?}: {}", path, e)))?;
        info!(
            "Loaded dashboard config from {:?} ({} plugin manifests)",
            path,
            config.plugins.len()
        );
        Ok(config)
    }

    /// Loads and validates every listed manifest, in order, dropping
    /// disabled plugins. A disabled name that matches no listed manifest is
    /// an error.
    pub fn load_plugins(&self) -> Result<Vec<Plugin>, ExtensionError> {
        let mut plugins = Vec::with_capacity(self.plugins.len());
        let mut skipped = HashSet::new();
        for path in &self.plugins {
            let manifest = PluginManifest::load_from(path)?;
            if self.disabled.contains(&manifest.name) {
                info!("Plugin '{}' is disabled, skipping {:?}", manifest.name, path);
                skipped.insert(manifest.name);
                continue;
            }
            plugins.push(manifest.into_plugin()?);
        }

        let mut unmatched: Vec<&str> = self
            .disabled
            .iter()
            .filter(|name| !skipped.contains(*name))
            .map(String::as_str)
            .collect();
        if !unmatched.is_empty() {
            unmatched.sort_unstable();
            return Err(ExtensionError::Config(format!(
                "disabled plugins not found in any listed manifest: {}",
                unmatched.join(", ")
            )));
        }
        Ok(plugins)
    }

    /// Loads the configured plugins and composes the dashboard.
    pub fn bootstrap(&self) -> Result<DashboardApp, ExtensionError> {
        DashboardApp::new(self.load_plugins()?)
    }
}
