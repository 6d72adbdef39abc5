use super::Merge;
use dashboard_types::Locale;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use tracing::debug;

/// Translation key → string for one locale.
pub type TranslationBundle = BTreeMap<String, String>;

/// Locale → translation bundle. Unlike the other modules, merging is
/// key-value: a later module's string replaces an earlier one with the same
/// locale and key. Locales without translations are never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct I18nModule {
    bundles: HashMap<Locale, TranslationBundle>,
}

impl I18nModule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets one translation, returning the string it replaced.
    pub fn insert(
        &mut self,
        locale: Locale,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Option<String> {
        self.bundles
            .entry(locale)
            .or_default()
            .insert(key.into(), value.into())
    }

    /// Builder form adding a whole bundle for `locale`. An empty bundle
    /// leaves the module unchanged.
    #[must_use]
    pub fn with_bundle<I, K, V>(mut self, locale: Locale, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let entries: TranslationBundle = entries
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();
        if !entries.is_empty() {
            self.bundles.entry(locale).or_default().extend(entries);
        }
        self
    }

    pub fn bundle(&self, locale: &Locale) -> Option<&TranslationBundle> {
        self.bundles.get(locale)
    }

    pub fn translate(&self, locale: &Locale, key: &str) -> Option<&str> {
        self.bundles.get(locale)?.get(key).map(String::as_str)
    }

    pub fn locales(&self) -> impl Iterator<Item = &Locale> {
        self.bundles.keys()
    }
}

impl Merge for I18nModule {
    fn merge_from(&mut self, later: &Self) {
        for (locale, bundle) in &later.bundles {
            if bundle.is_empty() {
                continue;
            }
            let target = self.bundles.entry(locale.clone()).or_default();
            for (key, value) in bundle {
                if let Some(previous) = target.insert(key.clone(), value.clone())
                    && previous != *value
                {
                    debug!(locale = %locale, key = %key, "translation overridden by later plugin");
                }
            }
        }
    }
}
