//! Expands a backend field selection with the entities plugins link to a
//! model, so one request fetches the linked data the plugins render.

use crate::module::LinkModule;
use dashboard_types::CustomFieldModel;

/// Appends a `+<entity>.*` wildcard for every entity linked to `model`.
///
/// The base selection comes first, verbatim, followed by the wildcards in
/// contribution order. A blank base contributes no token, so the result
/// never starts with a comma; with no linked entities the base is returned
/// unchanged.
pub fn resolve_link_fields(links: &LinkModule, model: CustomFieldModel, base: &str) -> String {
    let base = base.trim();
    let base_token = (!base.is_empty()).then(|| base.to_string());
    base_token
        .into_iter()
        .chain(links.contributions(&model).iter().flat_map(|linkable| linkable.wildcards()))
        .collect::<Vec<_>>()
        .join(",")
}
