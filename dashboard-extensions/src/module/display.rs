use super::Contribution;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies a component the rendering layer knows how to mount.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComponentRef(String);

impl ComponentRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub(crate) fn check(&self) -> Result<(), String> {
        if self.0.trim().is_empty() {
            Err("component reference must not be empty".to_string())
        } else {
            Ok(())
        }
    }
}

impl fmt::Display for ComponentRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ComponentRef {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// Renders custom data for a model inside one of its detail sections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayDescriptor {
    /// Section of the model's detail page, e.g. `general`.
    pub zone: String,
    pub component: ComponentRef,
}

impl DisplayDescriptor {
    pub fn new(zone: impl Into<String>, component: impl Into<ComponentRef>) -> Self {
        Self {
            zone: zone.into(),
            component: component.into(),
        }
    }
}

impl Contribution for DisplayDescriptor {
    fn check(&self) -> Result<(), String> {
        if self.zone.trim().is_empty() {
            return Err(format!("display '{}' has an empty zone", self.component));
        }
        self.component.check()
    }
}
