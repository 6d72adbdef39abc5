//! The unit external parties supply: a named bundle of extension modules.

use crate::error::ExtensionError;
use crate::module::{
    DisplayModule, ExtensionCategory, FormModule, I18nModule, LinkModule, MenuItemModule,
    RouteModule, WidgetModule,
};

/// Name of the platform's own plugin, always composed first.
pub const BUILTIN_PLUGIN: &str = "dashboard";

/// A named, immutable bundle holding at most one module per category.
#[derive(Debug, Clone, PartialEq)]
pub struct Plugin {
    name: String,
    display: Option<DisplayModule>,
    form: Option<FormModule>,
    link: Option<LinkModule>,
    menu_items: Option<MenuItemModule>,
    routes: Option<RouteModule>,
    widgets: Option<WidgetModule>,
    i18n: Option<I18nModule>,
}

impl Plugin {
    pub fn builder(name: impl Into<String>) -> PluginBuilder {
        PluginBuilder {
            plugin: Plugin {
                name: name.into(),
                display: None,
                form: None,
                link: None,
                menu_items: None,
                routes: None,
                widgets: None,
                i18n: None,
            },
        }
    }

    /// The platform plugin: present in every composition, contributing
    /// empty modules for all seven categories.
    pub fn builtin() -> Self {
        Plugin {
            name: BUILTIN_PLUGIN.to_string(),
            display: Some(DisplayModule::new()),
            form: Some(FormModule::new()),
            link: Some(LinkModule::new()),
            menu_items: Some(MenuItemModule::new()),
            routes: Some(RouteModule::new()),
            widgets: Some(WidgetModule::new()),
            i18n: Some(I18nModule::new()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// True only for the platform plugin itself: a caller-built plugin that
    /// borrows the name but carries contributions is not built-in.
    pub fn is_builtin(&self) -> bool {
        *self == Self::builtin()
    }

    pub fn display(&self) -> Option<&DisplayModule> {
        self.display.as_ref()
    }

    pub fn form(&self) -> Option<&FormModule> {
        self.form.as_ref()
    }

    pub fn link(&self) -> Option<&LinkModule> {
        self.link.as_ref()
    }

    pub fn menu_items(&self) -> Option<&MenuItemModule> {
        self.menu_items.as_ref()
    }

    pub fn routes(&self) -> Option<&RouteModule> {
        self.routes.as_ref()
    }

    pub fn widgets(&self) -> Option<&WidgetModule> {
        self.widgets.as_ref()
    }

    pub fn i18n(&self) -> Option<&I18nModule> {
        self.i18n.as_ref()
    }

    /// Categories this plugin defines a module for.
    pub fn categories(&self) -> Vec<ExtensionCategory> {
        ExtensionCategory::ALL
            .into_iter()
            .filter(|category| self.defines(*category))
            .collect()
    }

    pub fn defines(&self, category: ExtensionCategory) -> bool {
        match category {
            ExtensionCategory::Display => self.display.is_some(),
            ExtensionCategory::Form => self.form.is_some(),
            ExtensionCategory::Link => self.link.is_some(),
            ExtensionCategory::MenuItem => self.menu_items.is_some(),
            ExtensionCategory::Route => self.routes.is_some(),
            ExtensionCategory::Widget => self.widgets.is_some(),
            ExtensionCategory::I18n => self.i18n.is_some(),
        }
    }

    fn validate(&self) -> Result<(), ExtensionError> {
        if self.name.trim().is_empty() {
            return Err(ExtensionError::EmptyPluginName);
        }
        let checks = [
            (ExtensionCategory::Display, self.display.as_ref().map(DisplayModule::check)),
            (ExtensionCategory::Form, self.form.as_ref().map(FormModule::check)),
            (ExtensionCategory::Link, self.link.as_ref().map(LinkModule::check)),
            (ExtensionCategory::MenuItem, self.menu_items.as_ref().map(MenuItemModule::check)),
            (ExtensionCategory::Route, self.routes.as_ref().map(RouteModule::check)),
            (ExtensionCategory::Widget, self.widgets.as_ref().map(WidgetModule::check)),
        ];
        for (category, outcome) in checks {
            if let Some(Err(detail)) = outcome {
                return Err(ExtensionError::InvalidContribution {
                    plugin: self.name.clone(),
                    category,
                    detail,
                });
            }
        }
        Ok(())
    }
}

/// Assembles a [`Plugin`]; [`build`](PluginBuilder::build) validates it.
#[derive(Debug)]
pub struct PluginBuilder {
    plugin: Plugin,
}

impl PluginBuilder {
    #[must_use]
    pub fn display(mut self, module: DisplayModule) -> Self {
        self.plugin.display = Some(module);
        self
    }

    #[must_use]
    pub fn form(mut self, module: FormModule) -> Self {
        self.plugin.form = Some(module);
        self
    }

    #[must_use]
    pub fn link(mut self, module: LinkModule) -> Self {
        self.plugin.link = Some(module);
        self
    }

    #[must_use]
    pub fn menu_items(mut self, module: MenuItemModule) -> Self {
        self.plugin.menu_items = Some(module);
        self
    }

    #[must_use]
    pub fn routes(mut self, module: RouteModule) -> Self {
        self.plugin.routes = Some(module);
        self
    }

    #[must_use]
    pub fn widgets(mut self, module: WidgetModule) -> Self {
        self.plugin.widgets = Some(module);
        self
    }

    #[must_use]
    pub fn i18n(mut self, module: I18nModule) -> Self {
        self.plugin.i18n = Some(module);
        self
    }

    pub fn build(self) -> Result<Plugin, ExtensionError> {
        self.plugin.validate()?;
        Ok(self.plugin)
    }
}
