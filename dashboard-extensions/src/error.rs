//! Error types for plugin registration and composition.

use crate::module::ExtensionCategory;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtensionError {
    #[error("plugin name must not be empty")]
    EmptyPluginName,

    #[error("plugin already registered: {0}")]
    DuplicatePlugin(String),

    #[error("plugin '{0}' must be composed first")]
    BuiltinNotFirst(String),

    #[error("plugin '{plugin}' {category} module: unknown custom field model '{key}'")]
    UnknownModel {
        plugin: String,
        category: ExtensionCategory,
        key: String,
    },

    #[error("plugin '{plugin}' {category} module: invalid zone '{key}'")]
    InvalidZone {
        plugin: String,
        category: ExtensionCategory,
        key: String,
    },

    #[error("plugin '{plugin}' {category} module: invalid locale '{key}'")]
    InvalidLocale {
        plugin: String,
        category: ExtensionCategory,
        key: String,
    },

    #[error("plugin '{plugin}' {category} module: {detail}")]
    InvalidContribution {
        plugin: String,
        category: ExtensionCategory,
        detail: String,
    },

    #[error("failed to read {path:?}: {source}")]
    ManifestRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {origin}: {detail}")]
    ManifestParse { origin: String, detail: String },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("invalid identifier: {0}")]
    Identifier(#[from] dashboard_types::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
