//! Identifier types for the dashboard extension system.
//!
//! Every extension contribution is keyed by one of these identifiers:
//! - [`CustomFieldModel`] — the closed registry of commerce entity kinds
//! - [`Zone`] — a named injection point (routes, widgets, menu items)
//! - [`Locale`] — the language tag translation bundles are filed under
//!
//! The registry is closed: adding an entity kind is a change to this crate,
//! never to plugin data.

mod model;
mod zone;

pub use model::CustomFieldModel;
pub use zone::{Locale, Zone};

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while parsing identifiers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("unknown custom field model: '{0}'")]
    UnknownModel(String),

    #[error("invalid zone identifier: '{0}'")]
    InvalidZone(String),

    #[error("invalid locale: '{0}'")]
    InvalidLocale(String),
}
