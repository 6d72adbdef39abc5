//! Zone and locale identifiers.

use crate::Error;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// A named injection point in the dashboard, e.g. `core`, `settings` or
/// `order.details.before`.
///
/// Zones are ASCII lowercase alphanumerics plus `.`, `_` and `-`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Zone(String);

impl Zone {
    /// Validates and wraps a zone identifier.
    pub fn parse(s: &str) -> Result<Self, Error> {
        let valid = !s.is_empty()
            && !s.starts_with('.')
            && !s.ends_with('.')
            && !s.contains("..")
            && s.chars().all(|c| {
                c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '.' | '_' | '-')
            });
        if valid {
            Ok(Self(s.to_string()))
        } else {
            Err(Error::InvalidZone(s.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Zone {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl<'de> Deserialize<'de> for Zone {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

/// A language tag translation bundles are keyed by (`en`, `en-US`, `pt-BR`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Locale(String);

impl Locale {
    /// Validates a BCP 47-style tag: hyphen-separated alphanumeric segments
    /// of 1-8 characters, the first purely alphabetic.
    ///
    /// Tags compare case-insensitively, so the stored form is canonical:
    /// lowercase language, title-case 4-letter script, uppercase 2-letter
    /// region (`PT-br` becomes `pt-BR`, `zh-hant-tw` becomes `zh-Hant-TW`).
    pub fn parse(s: &str) -> Result<Self, Error> {
        let mut segments = s.split('-');
        let primary_ok = segments
            .next()
            .is_some_and(|p| (1..=8).contains(&p.len()) && p.chars().all(|c| c.is_ascii_alphabetic()));
        let rest_ok = segments.all(|seg| {
            (1..=8).contains(&seg.len()) && seg.chars().all(|c| c.is_ascii_alphanumeric())
        });
        if !(primary_ok && rest_ok) {
            return Err(Error::InvalidLocale(s.to_string()));
        }

        let canonical: Vec<String> = s
            .split('-')
            .enumerate()
            .map(|(index, seg)| canonical_subtag(index, seg))
            .collect();
        Ok(Self(canonical.join("-")))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Locale {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl<'de> Deserialize<'de> for Locale {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

fn canonical_subtag(index: usize, seg: &str) -> String {
    let alphabetic = seg.chars().all(|c| c.is_ascii_alphabetic());
    match (index, seg.len()) {
        (0, _) => seg.to_ascii_lowercase(),
        (_, 2) if alphabetic => seg.to_ascii_uppercase(),
        (_, 4) if alphabetic => {
            let lower = seg.to_ascii_lowercase();
            let mut chars = lower.chars();
            chars
                .next()
                .map(|first| first.to_ascii_uppercase().to_string() + chars.as_str())
                .unwrap_or_default()
        }
        _ => seg.to_ascii_lowercase(),
    }
}
