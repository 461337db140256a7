//! Project-level setup: custom packs from `.restyle/patterns/`, pack filters
//! and the classifier switch in `restyle.toml`.

use std::fs;
use std::path::Path;

use restyle_core::config::RestyleConfig;
use restyle_core::types::{ComponentType, PatchValue, Property, ResolutionPath, StyleContext};
use restyle_engine::{CommandRegistry, EditingSession, PatternLibrary};

const BRAND_PACK: &str = r##"
[processor]
id = "color"
name = "Brand colours"

[[patterns]]
id = "brand/primary"
property = "backgroundColor"
action = "set"
output = "color"
priority = 100
match = 'use the brand colou?r'
value = "#0055ff"
examples = ["use the brand color"]
"##;

fn write_pack(root: &Path, name: &str, body: &str) {
    let dir = root.join(".restyle/patterns");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join(name), body).unwrap();
}

#[tokio::test]
async fn test_custom_pack_extends_builtin_domain() {
    let dir = tempfile::tempdir().unwrap();
    write_pack(dir.path(), "brand.toml", BRAND_PACK);

    let registry = CommandRegistry::from_config(dir.path(), &RestyleConfig::default());
    assert!(registry.classifier().is_none());
    let color = registry.processor("color").unwrap();
    assert!(color.patterns().iter().any(|p| p.id() == "brand/primary"));

    let mut session = EditingSession::new();
    let resolution = registry
        .resolve("Use the brand colour!", &StyleContext::new(ComponentType::Container), &mut session)
        .await
        .unwrap();
    assert_eq!(resolution.path, ResolutionPath::DirectPattern);
    assert_eq!(
        resolution.patch().unwrap().value_of(Property::BackgroundColor),
        Some(&PatchValue::Color("#0055ff".into()))
    );
}

#[test]
fn test_bad_custom_packs_are_skipped() {
    let dir = tempfile::tempdir().unwrap();
    write_pack(dir.path(), "a_unknown.toml", "[processor]\nid = \"typography\"\n");
    write_pack(dir.path(), "b_broken.toml", "[processor\nid=");
    write_pack(dir.path(), "c_brand.toml", BRAND_PACK);
    write_pack(dir.path(), "notes.txt", "not a pack");

    let library = PatternLibrary::from_config(dir.path(), &RestyleConfig::default());
    let diag = library.diagnostics();
    assert_eq!(diag.custom_packs_loaded, 1);
    assert_eq!(diag.custom_packs_skipped, 2);
    assert_eq!(library.packs().len(), 8);
}

#[test]
fn test_custom_pattern_cannot_shadow_builtin_id() {
    let dir = tempfile::tempdir().unwrap();
    let clash = BRAND_PACK.replace("brand/primary", "color/css-background");
    write_pack(dir.path(), "clash.toml", &clash);

    let library = PatternLibrary::from_config(dir.path(), &RestyleConfig::default());
    let builtin = PatternLibrary::with_builtins();
    assert_eq!(library.pattern_count(), builtin.pattern_count());
}

#[test]
fn test_pack_filters_limit_processors() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("restyle.toml"),
        "[patterns]\nenabled_only = [\"spacing\", \"shadow\"]\n",
    )
    .unwrap();
    let config = RestyleConfig::load_with(dir.path(), None, |_| None).unwrap();

    let registry = CommandRegistry::from_config(dir.path(), &config);
    let mut ids: Vec<&str> = registry.processors().iter().map(|p| p.id()).collect();
    ids.sort_unstable();
    assert_eq!(ids, ["shadow", "spacing"]);
}

#[test]
fn test_enabled_classifier_is_attached() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("restyle.toml"),
        "[classifier]\nenabled = true\nendpoint = \"http://127.0.0.1:9/classify\"\n",
    )
    .unwrap();
    let config = RestyleConfig::load_with(dir.path(), None, |_| None).unwrap();

    let registry = CommandRegistry::from_config(dir.path(), &config);
    let classifier = registry.classifier().expect("classifier attached");
    assert_eq!(classifier.classifier().endpoint(), "http://127.0.0.1:9/classify");
}
