//! Plugin manifests: the file form of a [`Plugin`].
//!
//! Keys arrive as strings and are validated against the model registry,
//! zone and locale rules when the manifest is converted, so an authoring
//! mistake fails at startup naming the plugin and category at fault.
//!
//! ```toml
//! name = "loyalty"
//!
//! [link]
//! order = ["customer", ["promotion", "campaign"]]
//!
//! [[routes.core]]
//! path = "/loyalty"
//! component = "LoyaltyPage"
//!
//! [i18n.en]
//! "loyalty.title" = "Loyalty"
//! ```

use crate::error::ExtensionError;
use crate::module::{
    ContributionMap, Contributions, DisplayDescriptor, ExtensionCategory, FormExtension,
    I18nModule, Linkable, MenuItemDescriptor, RouteDescriptor, TranslationBundle,
    WidgetDescriptor,
};
use crate::plugin::Plugin;
use dashboard_types::{CustomFieldModel, Locale, Zone};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::debug;

/// Raw, unvalidated plugin description as written in a manifest file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PluginManifest {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<BTreeMap<String, Vec<DisplayDescriptor>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub form: Option<BTreeMap<String, FormExtension>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<BTreeMap<String, Vec<Linkable>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub menu_items: Option<BTreeMap<String, Vec<MenuItemDescriptor>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub routes: Option<BTreeMap<String, Vec<RouteDescriptor>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub widgets: Option<BTreeMap<String, Vec<WidgetDescriptor>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub i18n: Option<BTreeMap<String, TranslationBundle>>,
}

impl PluginManifest {
    pub fn from_toml_str(contents: &str) -> Result<Self, ExtensionError> {
        toml::from_str(contents).map_err(|e| ExtensionError::ManifestParse {
            origin: "inline TOML manifest".to_string(),
            detail: e.to_string(),
        })
    }

    pub fn from_json_str(contents: &str) -> Result<Self, ExtensionError> {
        serde_json::from_str(contents).map_err(|e| ExtensionError::ManifestParse {
            origin: "inline JSON manifest".to_string(),
            detail: e.to_string(),
        })
    }

    /// Reads a manifest file. `.json` files are parsed as JSON, anything
    /// else as TOML.
    pub fn load_from(path: &Path) -> Result<Self, ExtensionError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ExtensionError::ManifestRead {
            path: path.to_path_buf(),
            source,
        })?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let parsed = if is_json {
            serde_json::from_str(&contents).map_err(|e| e.to_string())
        } else {
            toml::from_str(&contents).map_err(|e| e.to_string())
        };
        let manifest: Self = parsed.map_err(|detail| ExtensionError::ManifestParse {
            origin: path.display().to_string(),
            detail,
        })?;
        debug!(plugin = %manifest.name, path = %path.display(), "loaded plugin manifest");
        Ok(manifest)
    }

    /// Validates every key and contribution and builds the [`Plugin`].
    pub fn into_plugin(self) -> Result<Plugin, ExtensionError> {
        let name = self.name;
        let mut builder = Plugin::builder(name.clone());

        if let Some(raw) = self.display {
            builder = builder.display(model_keyed(&name, ExtensionCategory::Display, raw)?);
        }
        if let Some(raw) = self.form {
            builder = builder.form(model_keyed(&name, ExtensionCategory::Form, raw)?);
        }
        if let Some(raw) = self.link {
            builder = builder.link(model_keyed(&name, ExtensionCategory::Link, raw)?);
        }
        if let Some(raw) = self.menu_items {
            builder = builder.menu_items(zone_keyed(&name, ExtensionCategory::MenuItem, raw)?);
        }
        if let Some(raw) = self.routes {
            builder = builder.routes(zone_keyed(&name, ExtensionCategory::Route, raw)?);
        }
        if let Some(raw) = self.widgets {
            builder = builder.widgets(zone_keyed(&name, ExtensionCategory::Widget, raw)?);
        }
        if let Some(raw) = self.i18n {
            builder = builder.i18n(locale_keyed(&name, raw)?);
        }

        builder.build()
    }
}

impl TryFrom<PluginManifest> for Plugin {
    type Error = ExtensionError;

    fn try_from(manifest: PluginManifest) -> Result<Self, Self::Error> {
        manifest.into_plugin()
    }
}

fn model_keyed<C: Contributions>(
    plugin: &str,
    category: ExtensionCategory,
    raw: BTreeMap<String, C>,
) -> Result<ContributionMap<CustomFieldModel, C>, ExtensionError> {
    raw.into_iter()
        .map(|(key, contributions)| match CustomFieldModel::parse(&key) {
            Ok(model) => Ok((model, contributions)),
            Err(_) => Err(ExtensionError::UnknownModel {
                plugin: plugin.to_string(),
                category,
                key,
            }),
        })
        .collect()
}

fn zone_keyed<C: Contributions>(
    plugin: &str,
    category: ExtensionCategory,
    raw: BTreeMap<String, C>,
) -> Result<ContributionMap<Zone, C>, ExtensionError> {
    raw.into_iter()
        .map(|(key, contributions)| match Zone::parse(&key) {
            Ok(zone) => Ok((zone, contributions)),
            Err(_) => Err(ExtensionError::InvalidZone {
                plugin: plugin.to_string(),
                category,
                key,
            }),
        })
        .collect()
}

fn locale_keyed(
    plugin: &str,
    raw: BTreeMap<String, TranslationBundle>,
) -> Result<I18nModule, ExtensionError> {
    let mut module = I18nModule::new();
    for (key, bundle) in raw {
        let locale = Locale::parse(&key).map_err(|_| ExtensionError::InvalidLocale {
            plugin: plugin.to_string(),
            category: ExtensionCategory::I18n,
            key: key.clone(),
        })?;
        module = module.with_bundle(locale, bundle);
    }
    Ok(module)
}
