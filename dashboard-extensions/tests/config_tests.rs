use dashboard_extensions::{
    CustomFieldModel, DashboardConfig, ExtensionCategory, ExtensionError, Locale, PluginManifest,
    Zone,
};
use std::path::Path;

const LOYALTY_TOML: &str = r#"
name = "loyalty"

[link]
order = ["customer", ["promotion", "campaign"]]

[[display.customer]]
zone = "general"
component = "LoyaltyTier"

[[form.customer.forms]]
zone = "general"
name = "tier"
label = "Tier"
field_type = "select"
required = true

[[form.customer.configs]]
zone = "general"
field = "tier"
default_value = "bronze"

[[menu_items.core]]
label = "Loyalty"
path = "/loyalty"
icon = "star"

[[routes.core]]
path = "/loyalty"
component = "LoyaltyPage"

[[widgets."order.details.after"]]
component = "LoyaltyPoints"

[i18n.en]
"loyalty.title" = "Loyalty"
"#;

const REVIEWS_JSON: &str = r#"{
  "name": "reviews",
  "link": { "order": ["reviews"] },
  "i18n": { "en": { "loyalty.title": "Rewards" } }
}"#;

/// Helper: write a file under `dir` and return its path.
fn write(dir: &Path, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(&path, contents).unwrap();
    path
}

// ── Manifests ─────────────────────────────────────────────────────

#[test]
fn toml_manifest_covers_every_category() {
    let plugin = PluginManifest::from_toml_str(LOYALTY_TOML)
        .unwrap()
        .into_plugin()
        .unwrap();
    assert_eq!(plugin.name(), "loyalty");
    assert_eq!(plugin.categories(), ExtensionCategory::ALL.to_vec());

    let form = plugin.form().unwrap().get(&CustomFieldModel::Customer).unwrap();
    assert!(form.forms[0].required);
    assert_eq!(form.configs[0].default_value, Some(serde_json::json!("bronze")));
}

#[test]
fn load_from_picks_format_by_extension() {
    let dir = tempfile::tempdir().unwrap();
    let json = write(dir.path(), "reviews.json", REVIEWS_JSON);
    let toml = write(dir.path(), "loyalty.toml", LOYALTY_TOML);

    assert_eq!(PluginManifest::load_from(&json).unwrap().name, "reviews");
    assert_eq!(PluginManifest::load_from(&toml).unwrap().name, "loyalty");
}

#[test]
fn load_from_missing_file_is_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = PluginManifest::load_from(&dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ExtensionError::ManifestRead { .. }));
}

#[test]
fn load_from_malformed_file_names_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(dir.path(), "broken.json", "{ not json");
    match PluginManifest::load_from(&path).unwrap_err() {
        ExtensionError::ManifestParse { origin, .. } => assert!(origin.ends_with("broken.json")),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn invalid_zone_is_rejected() {
    let manifest = PluginManifest::from_toml_str(
        r#"
name = "w"

[[widgets."Order Details"]]
component = "X"
"#,
    )
    .unwrap();
    match manifest.into_plugin().unwrap_err() {
        ExtensionError::InvalidZone { plugin, category, key } => {
            assert_eq!(plugin, "w");
            assert_eq!(category, ExtensionCategory::Widget);
            assert_eq!(key, "Order Details");
        }
        other => panic!("unexpected error: {other}"),
    }
}

// ── Config bootstrap ──────────────────────────────────────────────

#[test]
fn bootstrap_composes_listed_plugins_in_order() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "plugins/loyalty.toml", LOYALTY_TOML);
    write(dir.path(), "plugins/reviews.json", REVIEWS_JSON);
    let config_path = write(
        dir.path(),
        "dashboard.toml",
        r#"
[dashboard]
plugins = ["plugins/loyalty.toml", "plugins/reviews.json"]
"#,
    );

    let app = DashboardConfig::load_from(&config_path).unwrap().bootstrap().unwrap();
    assert_eq!(app.plugins(), ["dashboard", "loyalty", "reviews"].map(String::from));
    assert_eq!(
        app.link_fields(CustomFieldModel::Order, "id"),
        "id,+customer.*,+promotion.*,+campaign.*,+reviews.*"
    );

    let en = Locale::parse("en").unwrap();
    assert_eq!(app.extensions().translate(&en, "loyalty.title"), Some("Rewards"));
    let core = Zone::parse("core").unwrap();
    assert_eq!(app.extensions().routes(&core)[0].component.as_str(), "LoyaltyPage");
}

#[test]
fn disabled_plugins_are_skipped() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "loyalty.toml", LOYALTY_TOML);
    write(dir.path(), "reviews.json", REVIEWS_JSON);
    let config_path = write(
        dir.path(),
        "dashboard.toml",
        r#"
[dashboard]
plugins = ["loyalty.toml", "reviews.json"]
disabled = ["reviews"]
"#,
    );

    let plugins = DashboardConfig::load_from(&config_path).unwrap().load_plugins().unwrap();
    let names: Vec<_> = plugins.iter().map(|p| p.name()).collect();
    assert_eq!(names, vec!["loyalty"]);
}

#[test]
fn disabled_name_without_manifest_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "loyalty.toml", LOYALTY_TOML);
    let config_path = write(
        dir.path(),
        "dashboard.toml",
        r#"
[dashboard]
plugins = ["loyalty.toml"]
disabled = ["reveiws"]
"#,
    );

    let err = DashboardConfig::load_from(&config_path).unwrap().load_plugins().unwrap_err();
    match err {
        ExtensionError::Config(detail) => assert!(detail.contains("reveiws"), "{detail}"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn bad_manifest_fails_bootstrap() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "bad.toml", "name = \"bad\"\n[link]\ninvoice = [\"customer\"]\n");
    let config_path = write(dir.path(), "dashboard.toml", "[dashboard]\nplugins = [\"bad.toml\"]\n");

    let err = DashboardConfig::load_from(&config_path).unwrap().bootstrap().unwrap_err();
    assert!(matches!(
        err,
        ExtensionError::UnknownModel { category: ExtensionCategory::Link, .. }
    ));
}

#[test]
fn missing_manifest_fails_bootstrap() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = write(dir.path(), "dashboard.toml", "[dashboard]\nplugins = [\"gone.toml\"]\n");
    let err = DashboardConfig::load_from(&config_path).unwrap().bootstrap().unwrap_err();
    assert!(matches!(err, ExtensionError::ManifestRead { .. }));
}
