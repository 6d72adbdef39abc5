//! The composition root: merges every plugin's modules once at startup and
//! serves the merged tables read-only afterwards.

use crate::error::ExtensionError;
use crate::link_fields::resolve_link_fields;
use crate::module::{
    DisplayDescriptor, DisplayModule, ExtensionCategory, FormConfigDescriptor,
    FormFieldDescriptor, FormModule, I18nModule, LinkModule, Linkable, MenuItemDescriptor,
    MenuItemModule, RouteDescriptor, RouteModule, TranslationBundle, WidgetDescriptor,
    WidgetModule, merge_all,
};
use crate::plugin::{BUILTIN_PLUGIN, Plugin};
use dashboard_types::{CustomFieldModel, Locale, Zone};
use serde::Serialize;
use std::collections::HashSet;
use tracing::{debug, info, warn};

static EMPTY_BUNDLE: TranslationBundle = TranslationBundle::new();

/// The merged contribution tables, one per category.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ComposedExtensions {
    display: DisplayModule,
    form: FormModule,
    link: LinkModule,
    menu_items: MenuItemModule,
    routes: RouteModule,
    widgets: WidgetModule,
    i18n: I18nModule,
}

impl ComposedExtensions {
    /// Merges every category across `plugins`, in order. Plugins that don't
    /// define a category are skipped for it.
    pub fn compose(plugins: &[Plugin]) -> Self {
        for plugin in plugins {
            debug!(plugin = plugin.name(), categories = ?plugin.categories(), "merging plugin");
        }
        let composed = Self {
            display: merge_all(plugins.iter().filter_map(Plugin::display)),
            form: merge_all(plugins.iter().filter_map(Plugin::form)),
            link: merge_all(plugins.iter().filter_map(Plugin::link)),
            menu_items: merge_all(plugins.iter().filter_map(Plugin::menu_items)),
            routes: merge_all(plugins.iter().filter_map(Plugin::routes)),
            widgets: merge_all(plugins.iter().filter_map(Plugin::widgets)),
            i18n: merge_all(plugins.iter().filter_map(Plugin::i18n)),
        };
        composed.report_duplicate_routes();
        composed
    }

    fn report_duplicate_routes(&self) {
        for (zone, routes) in self.routes.iter() {
            let mut seen = HashSet::new();
            for route in routes {
                if !seen.insert(route.path.as_str()) {
                    warn!(zone = %zone, path = %route.path, "route path registered more than once");
                }
            }
        }
    }

    pub fn display(&self, model: CustomFieldModel) -> &[DisplayDescriptor] {
        self.display.contributions(&model)
    }

    pub fn forms(&self, model: CustomFieldModel) -> &[FormFieldDescriptor] {
        self.form.get(&model).map(|ext| ext.forms.as_slice()).unwrap_or(&[])
    }

    pub fn form_configs(&self, model: CustomFieldModel) -> &[FormConfigDescriptor] {
        self.form.get(&model).map(|ext| ext.configs.as_slice()).unwrap_or(&[])
    }

    pub fn links(&self, model: CustomFieldModel) -> &[Linkable] {
        self.link.contributions(&model)
    }

    pub fn menu_items(&self, zone: &Zone) -> &[MenuItemDescriptor] {
        self.menu_items.contributions(zone)
    }

    pub fn routes(&self, zone: &Zone) -> &[RouteDescriptor] {
        self.routes.contributions(zone)
    }

    pub fn widgets(&self, zone: &Zone) -> &[WidgetDescriptor] {
        self.widgets.contributions(zone)
    }

    /// The merged bundle for `locale`; empty when no plugin translated it.
    pub fn translations(&self, locale: &Locale) -> &TranslationBundle {
        self.i18n.bundle(locale).unwrap_or(&EMPTY_BUNDLE)
    }

    pub fn translate(&self, locale: &Locale, key: &str) -> Option<&str> {
        self.i18n.translate(locale, key)
    }

    /// Locales with at least one merged bundle, sorted.
    pub fn locales(&self) -> Vec<&Locale> {
        let mut locales: Vec<_> = self.i18n.locales().collect();
        locales.sort();
        locales
    }

    /// Zones with contributions for a zone-keyed category, sorted. Model- and
    /// locale-keyed categories have no zones.
    pub fn zones(&self, category: ExtensionCategory) -> Vec<&Zone> {
        let mut zones: Vec<_> = match category {
            ExtensionCategory::MenuItem => self.menu_items.keys().collect(),
            ExtensionCategory::Route => self.routes.keys().collect(),
            ExtensionCategory::Widget => self.widgets.keys().collect(),
            _ => Vec::new(),
        };
        zones.sort();
        zones
    }

    /// Models with contributions for a model-keyed category, sorted.
    pub fn models(&self, category: ExtensionCategory) -> Vec<CustomFieldModel> {
        let mut models: Vec<_> = match category {
            ExtensionCategory::Display => self.display.keys().copied().collect(),
            ExtensionCategory::Form => self.form.keys().copied().collect(),
            ExtensionCategory::Link => self.link.keys().copied().collect(),
            _ => Vec::new(),
        };
        models.sort();
        models
    }

    /// Expands `base` with a wildcard for every entity linked to `model`.
    pub fn link_fields(&self, model: CustomFieldModel, base: &str) -> String {
        resolve_link_fields(&self.link, model, base)
    }
}

/// A running dashboard's plugin list and its merged extension tables.
///
/// Built once; never mutated. Share it behind an `Arc` and publish a new
/// one through [`ExtensionHandle`](crate::ExtensionHandle) to reload.
#[derive(Debug, Clone)]
pub struct DashboardApp {
    plugins: Vec<String>,
    extensions: ComposedExtensions,
}

impl DashboardApp {
    /// Composes the built-in plugin followed by `external`, in order.
    pub fn new(external: Vec<Plugin>) -> Result<Self, ExtensionError> {
        let mut plugins = Vec::with_capacity(external.len() + 1);
        plugins.push(Plugin::builtin());
        plugins.extend(external);
        Self::from_plugins(plugins)
    }

    /// Composes a full plugin list whose first entry is the built-in plugin.
    pub fn from_plugins(plugins: Vec<Plugin>) -> Result<Self, ExtensionError> {
        match plugins.first() {
            Some(first) if first.is_builtin() => {}
            _ => return Err(ExtensionError::BuiltinNotFirst(BUILTIN_PLUGIN.to_string())),
        }

        let mut seen = HashSet::new();
        for plugin in &plugins {
            if !seen.insert(plugin.name()) {
                return Err(ExtensionError::DuplicatePlugin(plugin.name().to_string()));
            }
        }

        let extensions = ComposedExtensions::compose(&plugins);
        let names: Vec<String> = plugins.iter().map(|p| p.name().to_string()).collect();
        info!(
            plugins = names.len(),
            order = ?names,
            "composed dashboard extensions"
        );

        Ok(Self {
            plugins: names,
            extensions,
        })
    }

    /// Plugin names in composition order, built-in first.
    pub fn plugins(&self) -> &[String] {
        &self.plugins
    }

    pub fn extensions(&self) -> &ComposedExtensions {
        &self.extensions
    }

    pub fn link_fields(&self, model: CustomFieldModel, base: &str) -> String {
        self.extensions.link_fields(model, base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zone(raw: &str) -> Zone {
        Zone::parse(raw).unwrap()
    }

    #[test]
    fn builtin_only_is_empty() {
        let app = DashboardApp::new(Vec::new()).unwrap();
        assert_eq!(app.plugins(), ["dashboard".to_string()]);
        assert_eq!(app.extensions(), &ComposedExtensions::default());
    }

    #[test]
    fn from_plugins_requires_builtin_first() {
        let other = Plugin::builder("reviews").build().unwrap();
        let err = DashboardApp::from_plugins(vec![other, Plugin::builtin()]).unwrap_err();
        assert!(matches!(err, ExtensionError::BuiltinNotFirst(_)));
        assert!(DashboardApp::from_plugins(Vec::new()).is_err());
    }

    #[test]
    fn from_plugins_rejects_builtin_name_with_contributions() {
        let impostor = Plugin::builder(BUILTIN_PLUGIN)
            .routes(RouteModule::new().with(zone("core"), vec![RouteDescriptor::new("/x", "X")]))
            .build()
            .unwrap();
        let err = DashboardApp::from_plugins(vec![impostor]).unwrap_err();
        assert!(matches!(err, ExtensionError::BuiltinNotFirst(_)));
        assert!(DashboardApp::from_plugins(vec![Plugin::builtin()]).is_ok());
    }

    #[test]
    fn duplicate_plugin_names_are_rejected() {
        let a = Plugin::builder("reviews").build().unwrap();
        let b = Plugin::builder("reviews").build().unwrap();
        let err = DashboardApp::new(vec![a, b]).unwrap_err();
        assert!(matches!(err, ExtensionError::DuplicatePlugin(name) if name == "reviews"));
    }

    #[test]
    fn external_plugin_cannot_reuse_builtin_name() {
        let impostor = Plugin::builder("dashboard").build().unwrap();
        assert!(matches!(
            DashboardApp::new(vec![impostor]),
            Err(ExtensionError::DuplicatePlugin(_))
        ));
    }

    #[test]
    fn duplicate_routes_are_kept() {
        let routes = RouteModule::new().with(zone("core"), vec![RouteDescriptor::new("/loyalty", "A")]);
        let a = Plugin::builder("a").routes(routes.clone()).build().unwrap();
        let b = Plugin::builder("b").routes(routes).build().unwrap();
        let app = DashboardApp::new(vec![a, b]).unwrap();
        assert_eq!(app.extensions().routes(&zone("core")).len(), 2);
    }

    #[test]
    fn zones_and_models_are_sorted() {
        let widgets = WidgetModule::new()
            .with(zone("product.details.after"), vec![WidgetDescriptor::new("B")])
            .with(zone("order.details.before"), vec![WidgetDescriptor::new("A")]);
        let plugin = Plugin::builder("w").widgets(widgets).build().unwrap();
        let app = DashboardApp::new(vec![plugin]).unwrap();
        let zones: Vec<_> = app
            .extensions()
            .zones(ExtensionCategory::Widget)
            .into_iter()
            .map(Zone::as_str)
            .collect();
        assert_eq!(zones, vec!["order.details.before", "product.details.after"]);
        assert!(app.extensions().zones(ExtensionCategory::Link).is_empty());
        assert!(app.extensions().models(ExtensionCategory::Route).is_empty());
    }
}
