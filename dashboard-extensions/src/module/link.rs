use super::Contribution;
use serde::{Deserialize, Serialize};

/// A related entity (or group of entities) whose fields should be fetched
/// alongside a model.
///
/// Manifests write either a bare name or a list of names:
/// `order = ["customer", ["promotion", "campaign"]]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Linkable {
    One(String),
    Many(Vec<String>),
}

impl Linkable {
    pub fn one(name: impl Into<String>) -> Self {
        Self::One(name.into())
    }

    pub fn many<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Many(names.into_iter().map(Into::into).collect())
    }

    /// The related entity names, in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        let names = match self {
            Self::One(name) => std::slice::from_ref(name),
            Self::Many(names) => names.as_slice(),
        };
        names.iter().map(String::as_str)
    }

    /// One `+<name>.*` field-selection token per related entity.
    pub fn wildcards(&self) -> impl Iterator<Item = String> + '_ {
        self.names().map(|name| format!("+{name}.*"))
    }
}

impl Contribution for Linkable {
    fn check(&self) -> Result<(), String> {
        if let Self::Many(names) = self
            && names.is_empty()
        {
            return Err("linkable list must not be empty".to_string());
        }
        match self.names().find(|name| !is_field_path(name)) {
            Some(bad) => Err(format!("invalid linkable name '{bad}'")),
            None => Ok(()),
        }
    }
}

/// Field paths are dot-separated identifiers (`customer`, `variants.options`).
fn is_field_path(name: &str) -> bool {
    !name.is_empty()
        && name.split('.').all(|segment| {
            !segment.is_empty() && segment.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
        })
}
