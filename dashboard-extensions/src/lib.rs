//! Plugin composition for the commerce admin dashboard.
//!
//! Plugins contribute to seven extension categories: display renderers,
//! form fields, entity links, menu items, routes, widgets and translations.
//! [`DashboardApp`] merges the built-in plugin and every supplied plugin
//! once at startup into read-only tables the rendering layer queries by
//! (category, key):
//!
//! - six categories merge by appending contributions in plugin order
//! - translations merge key-value, later plugins overriding earlier ones
//!
//! The merged link table also drives [`resolve_link_fields`], which expands
//! a backend field selection with the entities plugins link to a model.

mod app;
mod config;
mod error;
mod handle;
mod link_fields;
mod manifest;
pub mod module;
mod plugin;

pub use app::{ComposedExtensions, DashboardApp};
pub use config::DashboardConfig;
pub use error::ExtensionError;
pub use handle::ExtensionHandle;
pub use link_fields::resolve_link_fields;
pub use manifest::PluginManifest;
pub use module::ExtensionCategory;
pub use plugin::{BUILTIN_PLUGIN, Plugin, PluginBuilder};

pub use dashboard_types::{CustomFieldModel, Locale, Zone};
