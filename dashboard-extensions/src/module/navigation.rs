use super::{ComponentRef, Contribution};
use serde::{Deserialize, Serialize};

fn check_path(kind: &str, path: &str) -> Result<(), String> {
    if path.starts_with('/') && !path.contains(char::is_whitespace) {
        Ok(())
    } else {
        Err(format!("{kind} path '{path}' must be absolute and contain no whitespace"))
    }
}

/// An entry in one of the dashboard's navigation menus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItemDescriptor {
    pub label: String,
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Path of the built-in section this entry nests under, e.g. `/orders`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nested: Option<String>,
}

impl MenuItemDescriptor {
    pub fn new(label: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            path: path.into(),
            icon: None,
            nested: None,
        }
    }

    #[must_use]
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    #[must_use]
    pub fn nested_under(mut self, parent: impl Into<String>) -> Self {
        self.nested = Some(parent.into());
        self
    }
}

impl Contribution for MenuItemDescriptor {
    fn check(&self) -> Result<(), String> {
        if self.label.trim().is_empty() {
            return Err(format!("menu item '{}' has an empty label", self.path));
        }
        check_path("menu item", &self.path)?;
        match &self.nested {
            Some(parent) => check_path("menu parent", parent),
            None => Ok(()),
        }
    }
}

/// A page registered with the dashboard router.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteDescriptor {
    pub path: String,
    pub component: ComponentRef,
}

impl RouteDescriptor {
    pub fn new(path: impl Into<String>, component: impl Into<ComponentRef>) -> Self {
        Self {
            path: path.into(),
            component: component.into(),
        }
    }
}

impl Contribution for RouteDescriptor {
    fn check(&self) -> Result<(), String> {
        check_path("route", &self.path)?;
        self.component.check()
    }
}

/// A component injected at a widget zone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetDescriptor {
    pub component: ComponentRef,
}

impl WidgetDescriptor {
    pub fn new(component: impl Into<ComponentRef>) -> Self {
        Self {
            component: component.into(),
        }
    }
}

impl Contribution for WidgetDescriptor {
    fn check(&self) -> Result<(), String> {
        self.component.check()
    }
}
