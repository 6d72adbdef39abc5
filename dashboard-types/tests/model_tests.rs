use dashboard_types::{CustomFieldModel, Error};
use std::collections::HashSet;
use std::str::FromStr;

// ── Parsing ───────────────────────────────────────────────────────

#[test]
fn parse_kebab_names() {
    assert_eq!(CustomFieldModel::parse("order").unwrap(), CustomFieldModel::Order);
    assert_eq!(CustomFieldModel::parse("product-tag").unwrap(), CustomFieldModel::ProductTag);
    assert_eq!(CustomFieldModel::parse("price-list").unwrap(), CustomFieldModel::PriceList);
}

#[test]
fn parse_snake_names() {
    assert_eq!(CustomFieldModel::parse("product_tag").unwrap(), CustomFieldModel::ProductTag);
    assert_eq!(
        CustomFieldModel::parse("inventory_item").unwrap(),
        CustomFieldModel::InventoryItem
    );
}

#[test]
fn parse_unknown_is_error() {
    assert_eq!(
        CustomFieldModel::parse("invoice"),
        Err(Error::UnknownModel("invoice".to_string()))
    );
    assert!(CustomFieldModel::parse("").is_err());
    assert!(CustomFieldModel::parse("Order").is_err());
}

#[test]
fn from_str_matches_parse() {
    let model: CustomFieldModel = CustomFieldModel::from_str("sales-channel").unwrap();
    assert_eq!(model, CustomFieldModel::SalesChannel);
}

// ── Display / serde ───────────────────────────────────────────────

#[test]
fn display_round_trips_every_model() {
    for model in CustomFieldModel::ALL {
        assert_eq!(CustomFieldModel::parse(&model.to_string()).unwrap(), model);
    }
}

#[test]
fn deserialize_rejects_unknown_model() {
    let result: Result<CustomFieldModel, _> = serde_json::from_str("\"invoice\"");
    assert!(result.is_err());
}

#[test]
fn usable_as_hash_key() {
    let set: HashSet<CustomFieldModel> = CustomFieldModel::ALL.into_iter().collect();
    assert_eq!(set.len(), CustomFieldModel::ALL.len());
    assert!(set.contains(&CustomFieldModel::Order));
}
