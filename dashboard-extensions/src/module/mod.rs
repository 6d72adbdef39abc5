//! Extension modules: one contribution table per category, and the merge
//! algebra that folds many of them into one.
//!
//! Six categories are multi-maps ([`ContributionMap`]): merging appends the
//! later module's contributions after the earlier ones, key by key. The
//! seventh, [`I18nModule`], merges key-value with the later module winning
//! on collision.

mod display;
mod form;
mod i18n;
mod link;
mod navigation;

pub use display::{ComponentRef, DisplayDescriptor};
pub use form::{FieldValidation, FormConfigDescriptor, FormExtension, FormFieldDescriptor, FormFieldType};
pub use i18n::{I18nModule, TranslationBundle};
pub use link::Linkable;
pub use navigation::{MenuItemDescriptor, RouteDescriptor, WidgetDescriptor};

use dashboard_types::{CustomFieldModel, Zone};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::collections::hash_map;
use std::fmt;
use std::hash::Hash;

pub type DisplayModule = ContributionMap<CustomFieldModel, Vec<DisplayDescriptor>>;
pub type FormModule = ContributionMap<CustomFieldModel, FormExtension>;
pub type LinkModule = ContributionMap<CustomFieldModel, Vec<Linkable>>;
pub type MenuItemModule = ContributionMap<Zone, Vec<MenuItemDescriptor>>;
pub type RouteModule = ContributionMap<Zone, Vec<RouteDescriptor>>;
pub type WidgetModule = ContributionMap<Zone, Vec<WidgetDescriptor>>;

/// The seven kinds of contribution a plugin can make.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExtensionCategory {
    Display,
    Form,
    Link,
    MenuItem,
    Route,
    Widget,
    I18n,
}

impl ExtensionCategory {
    pub const ALL: [ExtensionCategory; 7] = [
        Self::Display,
        Self::Form,
        Self::Link,
        Self::MenuItem,
        Self::Route,
        Self::Widget,
        Self::I18n,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Display => "display",
            Self::Form => "form",
            Self::Link => "link",
            Self::MenuItem => "menu-item",
            Self::Route => "route",
            Self::Widget => "widget",
            Self::I18n => "i18n",
        }
    }
}

impl fmt::Display for ExtensionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single contribution record that can be checked for authoring mistakes.
pub trait Contribution {
    /// Returns a description of the problem when the record is malformed.
    fn check(&self) -> Result<(), String>;
}

/// The per-key container of a [`ContributionMap`].
pub trait Contributions: Default {
    /// Appends `later` after the existing contributions, preserving order.
    fn extend_from(&mut self, later: &Self);

    fn is_empty(&self) -> bool;

    fn check(&self) -> Result<(), String>;
}

impl<T: Contribution + Clone> Contributions for Vec<T> {
    fn extend_from(&mut self, later: &Self) {
        self.extend(later.iter().cloned());
    }

    fn is_empty(&self) -> bool {
        <[T]>::is_empty(self)
    }

    fn check(&self) -> Result<(), String> {
        self.iter().try_for_each(Contribution::check)
    }
}

/// Folds a later module into an earlier one.
pub trait Merge {
    fn merge_from(&mut self, later: &Self);
}

/// Merges modules in the order given. Earlier modules' contributions come
/// first; for i18n, later modules win.
pub fn merge_all<'a, M>(modules: impl IntoIterator<Item = &'a M>) -> M
where
    M: Merge + Default + 'a,
{
    let mut merged = M::default();
    for module in modules {
        merged.merge_from(module);
    }
    merged
}

/// Multi-map from a key to the ordered contributions filed under it.
///
/// Empty contribution lists are never stored, so two maps holding the same
/// contributions compare equal regardless of how they were built.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ContributionMap<K: Eq + Hash, C> {
    entries: HashMap<K, C>,
}

impl<K: Eq + Hash, C> Default for ContributionMap<K, C> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash, C: Contributions> ContributionMap<K, C> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `contributions` to whatever is already filed under `key`.
    pub fn insert(&mut self, key: K, contributions: C) {
        if contributions.is_empty() {
            return;
        }
        match self.entries.entry(key) {
            hash_map::Entry::Occupied(mut slot) => slot.get_mut().extend_from(&contributions),
            hash_map::Entry::Vacant(slot) => {
                slot.insert(contributions);
            }
        }
    }

    /// Builder form of [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, key: K, contributions: C) -> Self {
        self.insert(key, contributions);
        self
    }

    pub fn get(&self, key: &K) -> Option<&C> {
        self.entries.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &C)> {
        self.entries.iter()
    }

    /// Number of keys with at least one contribution.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Checks every contribution, returning the first problem found.
    pub fn check(&self) -> Result<(), String> {
        self.entries.values().try_for_each(Contributions::check)
    }

    /// Returns `self` with `later` merged after it.
    #[must_use]
    pub fn merged(mut self, later: &Self) -> Self
    where
        K: Clone,
    {
        self.merge_from(later);
        self
    }
}

impl<K: Eq + Hash, T> ContributionMap<K, Vec<T>> {
    /// The contributions filed under `key`; empty when none were made.
    pub fn contributions(&self, key: &K) -> &[T] {
        self.entries.get(key).map(Vec::as_slice).unwrap_or(&[])
    }
}

impl<K: Eq + Hash + Clone, C: Contributions> Merge for ContributionMap<K, C> {
    fn merge_from(&mut self, later: &Self) {
        for (key, contributions) in &later.entries {
            if contributions.is_empty() {
                continue;
            }
            self.entries
                .entry(key.clone())
                .or_default()
                .extend_from(contributions);
        }
    }
}

impl<K: Eq + Hash, C: Contributions> FromIterator<(K, C)> for ContributionMap<K, C> {
    fn from_iter<I: IntoIterator<Item = (K, C)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, contributions) in iter {
            map.insert(key, contributions);
        }
        map
    }
}
