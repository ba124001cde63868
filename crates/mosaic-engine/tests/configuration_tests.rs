//! Integration tests for composite object configurations
//!
//! Tests cover:
//! - Deep cloning of nested configurations
//! - Lazy child materialization
//! - Serialization round-trips and type drift
//! - Resource traversal

use mosaic_engine::{
    ChildObject, CustomObjectConfiguration, ObjectConfiguration, Project, PropertyDescriptor,
    PropertyType, ResourceCollector, ResourceKind, ResourceRenamer, ResourceWalker,
    TypeDefinition,
};
use serde_json::json;
use std::path::PathBuf;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

fn platformer() -> Project {
    Project::from_path(fixtures_dir().join("platformer.json")).expect("fixture loads")
}

fn property_value(config: &CustomObjectConfiguration, project: &Project, name: &str) -> String {
    config
        .properties(project)
        .get(name)
        .map(|p| p.value().to_string())
        .unwrap_or_default()
}

fn custom_mut<'a>(
    config: &'a mut CustomObjectConfiguration,
    project: &Project,
    child: &str,
) -> &'a mut CustomObjectConfiguration {
    config
        .child_configuration_mut(project, child)
        .unwrap()
        .as_custom_mut()
        .unwrap()
}

/// Three nested types, each with exactly one image property
fn chain_project() -> Project {
    let image = |value: &str| {
        PropertyDescriptor::new("art", PropertyType::Resource)
            .with_value(value)
            .with_extra_info("image")
    };

    let mut project = Project::new();
    project
        .insert_type(
            "Chain",
            TypeDefinition::new("Top")
                .with_property(image("top.png"))
                .with_child(ChildObject::new(
                    "middle",
                    ObjectConfiguration::custom("Chain::Middle"),
                )),
        )
        .unwrap();
    project
        .insert_type(
            "Chain",
            TypeDefinition::new("Middle")
                .with_property(image("middle.png"))
                .with_child(ChildObject::new(
                    "bottom",
                    ObjectConfiguration::custom("Chain::Bottom"),
                )),
        )
        .unwrap();
    project
        .insert_type("Chain", TypeDefinition::new("Bottom").with_property(image("bottom.png")))
        .unwrap();
    project
}

// =============================================================================
// CLONING
// =============================================================================

#[test]
fn test_clone_does_not_alias_nested_children() {
    let project = platformer();
    let mut original = CustomObjectConfiguration::new("Platformer::Hero");
    let inventory = custom_mut(&mut original, &project, "inventory");
    let coin = custom_mut(inventory, &project, "coin");
    assert!(coin.update_property(&project, "sparkle", "gold.png"));

    let mut copy = original.clone();

    let copy_coin = custom_mut(custom_mut(&mut copy, &project, "inventory"), &project, "coin");
    assert!(copy_coin.update_property(&project, "sparkle", "silver.png"));

    let original_inventory = custom_mut(&mut original, &project, "inventory");
    let original_coin = custom_mut(original_inventory, &project, "coin");
    assert_eq!(property_value(original_coin, &project, "sparkle"), "gold.png");

    // And the other way around
    original_coin.update_property(&project, "sparkle", "bronze.png");
    let copy_coin = custom_mut(custom_mut(&mut copy, &project, "inventory"), &project, "coin");
    assert_eq!(property_value(copy_coin, &project, "sparkle"), "silver.png");
}

#[test]
fn test_clone_keeps_unmaterialized_children_absent() {
    let project = platformer();
    let mut original = CustomObjectConfiguration::new("Platformer::Hero");
    original.child_configuration_mut(&project, "body").unwrap();

    let copy = original.clone();
    assert_eq!(copy.materialized_children().collect::<Vec<_>>(), vec!["body"]);
}

// =============================================================================
// LAZY MATERIALIZATION
// =============================================================================

#[test]
fn test_lookup_is_idempotent() {
    let project = platformer();
    let mut config = CustomObjectConfiguration::new("Platformer::Hero");

    let first: *const ObjectConfiguration =
        config.child_configuration_mut(&project, "inventory").unwrap();
    let second: *const ObjectConfiguration =
        config.child_configuration_mut(&project, "inventory").unwrap();
    assert!(std::ptr::eq(first, second));
    assert_eq!(config.materialized_children().count(), 1);
}

#[test]
fn test_inventory_materializes_on_first_access() {
    let project = platformer();
    let mut config = CustomObjectConfiguration::new("Platformer::Hero");
    config.deserialize(&project, &json!({})).unwrap();

    assert!(config.serialize()["childrenContent"].get("inventory").is_none());

    let inventory = config
        .child_configuration_mut(&project, "inventory")
        .unwrap()
        .as_custom()
        .unwrap();
    assert_eq!(inventory.content().get("slots"), Some("8"));

    let tree = config.serialize();
    assert_eq!(
        tree["childrenContent"]["inventory"],
        json!({ "content": { "slots": "8" }, "childrenContent": {} })
    );
    assert_eq!(tree["childrenContent"].as_object().unwrap().len(), 1);
}

#[test]
fn test_opaque_child_uses_declared_default() {
    let project = platformer();
    let mut config = CustomObjectConfiguration::new("Platformer::Hero");

    let body = config.child_configuration_mut(&project, "body").unwrap();
    assert_eq!(body.type_name(), "Sprite");
    assert_eq!(
        body.serialize(),
        json!({ "animations": [{ "name": "idle" }], "updateIfNotVisible": false })
    );
}

// =============================================================================
// PROPERTIES
// =============================================================================

#[test]
fn test_speed_and_label_updates() {
    let mut project = Project::new();
    project
        .insert_type(
            "Game",
            TypeDefinition::new("Runner")
                .with_property(
                    PropertyDescriptor::new("speed", PropertyType::Number).with_value("100"),
                )
                .with_property(
                    PropertyDescriptor::new("label", PropertyType::String).with_value("hero"),
                ),
        )
        .unwrap();

    let mut config = CustomObjectConfiguration::new("Game::Runner");
    assert!(config.update_property(&project, "speed", "42"));

    let properties = config.properties(&project);
    assert_eq!(properties["speed"].value(), "42");
    assert_eq!(properties["label"].value(), "hero");

    let before = config.content().clone();
    assert!(!config.update_property(&project, "missing", "x"));
    assert_eq!(config.content(), &before);
}

#[test]
fn test_values_are_stored_without_coercion() {
    let project = platformer();
    let mut config = CustomObjectConfiguration::new("Platformer::Hero");

    assert!(config.update_property(&project, "speed", "not a number"));
    assert_eq!(config.content().get("speed"), Some("not a number"));
}

// =============================================================================
// SERIALIZATION
// =============================================================================

#[test]
fn test_round_trip_preserves_nested_values() {
    let project = platformer();
    let mut config = CustomObjectConfiguration::new("Platformer::Hero");
    config.update_property(&project, "label", "knight");
    let inventory = custom_mut(&mut config, &project, "inventory");
    inventory.update_property(&project, "slots", "12");
    custom_mut(inventory, &project, "coin").update_property(&project, "sparkle", "gem.png");

    let tree = config.serialize();
    let mut loaded = CustomObjectConfiguration::new("Platformer::Hero");
    loaded.deserialize(&project, &tree).unwrap();

    assert_eq!(loaded.serialize(), tree);
    assert_eq!(property_value(&loaded, &project, "label"), "knight");
    let inventory = custom_mut(&mut loaded, &project, "inventory");
    assert_eq!(property_value(inventory, &project, "slots"), "12");
    let coin = custom_mut(inventory, &project, "coin");
    assert_eq!(property_value(coin, &project, "sparkle"), "gem.png");
}

#[test]
fn test_legacy_scalar_values_load_as_text() {
    let project = platformer();
    let mut config = CustomObjectConfiguration::new("Platformer::Hero");
    config
        .deserialize(&project, &json!({ "content": { "speed": 250, "debug": false } }))
        .unwrap();

    assert_eq!(config.content().get("speed"), Some("250"));
    assert_eq!(config.content().get("debug"), Some("false"));
}

#[test]
fn test_removed_child_subtree_is_ignored() {
    let mut project = platformer();
    let tree = json!({
        "content": {},
        "childrenContent": {
            "inventory": { "content": { "slots": "2" }, "childrenContent": {} },
            "healthBar": { "content": { "max": "3" }, "childrenContent": {} }
        }
    });
    project
        .get_type_mut("Platformer::Hero")
        .unwrap()
        .remove_child("healthBar");

    let mut config = CustomObjectConfiguration::new("Platformer::Hero");
    config.deserialize(&project, &tree).unwrap();

    assert_eq!(config.materialized_children().collect::<Vec<_>>(), vec!["inventory"]);
    assert!(config.serialize()["childrenContent"].get("healthBar").is_none());
}

#[test]
fn test_stale_children_heal_once_type_resolves() {
    let project = platformer();
    let tree = json!({
        "content": { "label": "ghost" },
        "childrenContent": {
            "inventory": { "content": { "slots": "99" }, "childrenContent": {} }
        }
    });

    let missing = Project::new();
    let mut config = CustomObjectConfiguration::new("Platformer::Hero");
    config.deserialize(&missing, &tree).unwrap();

    assert_eq!(config.materialized_children().count(), 0);
    assert_eq!(config.stale_children().collect::<Vec<_>>(), vec!["inventory"]);
    assert_eq!(config.serialize(), tree);

    let inventory = custom_mut(&mut config, &project, "inventory");
    assert_eq!(inventory.content().get("slots"), Some("99"));
    assert_eq!(config.stale_children().count(), 0);
    assert_eq!(config.serialize(), tree);
}

#[test]
fn test_clone_with_stale_children_is_independent() {
    let project = platformer();
    let tree = json!({
        "content": {},
        "childrenContent": {
            "inventory": { "content": { "slots": "99" }, "childrenContent": {} }
        }
    });

    let mut original = CustomObjectConfiguration::new("Platformer::Hero");
    original.deserialize(&Project::new(), &tree).unwrap();
    let mut copy = original.clone();
    assert_eq!(copy.serialize(), tree);

    let inventory = custom_mut(&mut copy, &project, "inventory");
    assert!(inventory.update_property(&project, "slots", "1"));
    assert_eq!(copy.stale_children().count(), 0);
    assert_eq!(
        copy.serialize()["childrenContent"]["inventory"]["content"],
        json!({ "slots": "1" })
    );

    assert_eq!(original.stale_children().collect::<Vec<_>>(), vec!["inventory"]);
    assert_eq!(original.serialize(), tree);
    let inventory = custom_mut(&mut original, &project, "inventory");
    assert_eq!(inventory.content().get("slots"), Some("99"));
}

#[test]
fn test_unknown_nested_and_null_content_is_kept() {
    let project = platformer();
    let tree = json!({
        "content": { "speed": "5", "futureThing": { "x": 1 }, "label": null },
        "childrenContent": {}
    });

    let mut config = CustomObjectConfiguration::new("Platformer::Hero");
    config.deserialize(&project, &tree).unwrap();

    assert_eq!(property_value(&config, &project, "speed"), "5");
    assert_eq!(property_value(&config, &project, "label"), "hero");
    assert_eq!(config.serialize(), tree);

    assert!(config.update_property(&project, "label", "knight"));
    assert_eq!(
        config.serialize()["content"],
        json!({ "speed": "5", "futureThing": { "x": 1 }, "label": "knight" })
    );
}

#[test]
fn test_malformed_child_tree_leaves_configuration_untouched() {
    let project = platformer();
    let mut config = CustomObjectConfiguration::new("Platformer::Hero");
    config.update_property(&project, "label", "old");
    let before = config.serialize();

    let result = config.deserialize(
        &project,
        &json!({
            "content": { "label": "new" },
            "childrenContent": {
                "healthBar": { "content": { "max": "3" }, "childrenContent": {} },
                "inventory": { "content": ["bad"] }
            }
        }),
    );

    assert!(result.is_err());
    assert_eq!(property_value(&config, &project, "label"), "old");
    assert_eq!(config.materialized_children().count(), 0);
    assert_eq!(config.serialize(), before);
}

// =============================================================================
// RESOURCES
// =============================================================================

#[derive(Default)]
struct PrefixingWalker {
    images: usize,
    others: usize,
}

impl ResourceWalker for PrefixingWalker {
    fn expose_image(&mut self, name: &str) -> String {
        self.images += 1;
        format!("packed/{}", name)
    }

    fn expose_audio(&mut self, name: &str) -> String {
        self.others += 1;
        name.to_string()
    }
}

#[test]
fn test_every_node_visited_once() {
    let project = chain_project();
    let mut config = CustomObjectConfiguration::new("Chain::Top");
    let mut walker = PrefixingWalker::default();

    config.expose_resources(&project, &mut walker);

    assert_eq!(walker.images, 3);
    assert_eq!(walker.others, 0);

    assert_eq!(property_value(&config, &project, "art"), "packed/top.png");
    let middle = custom_mut(&mut config, &project, "middle");
    assert_eq!(property_value(middle, &project, "art"), "packed/middle.png");
    let bottom = custom_mut(middle, &project, "bottom");
    assert_eq!(property_value(bottom, &project, "art"), "packed/bottom.png");
}

#[test]
fn test_traversal_after_partial_materialization() {
    let project = chain_project();
    let mut config = CustomObjectConfiguration::new("Chain::Top");
    config.child_configuration_mut(&project, "middle").unwrap();

    let mut walker = PrefixingWalker::default();
    config.expose_resources(&project, &mut walker);
    assert_eq!(walker.images, 3);
}

#[test]
fn test_collector_over_fixture() {
    let project = platformer();
    let mut config = CustomObjectConfiguration::new("Platformer::Hero");
    let mut collector = ResourceCollector::new();

    config.expose_resources(&project, &mut collector);

    assert_eq!(
        collector.resources(ResourceKind::Image),
        ["hero.png", "bag.png", "coin.png"]
    );
    assert_eq!(collector.resources(ResourceKind::Audio), ["jump.wav"]);
    assert_eq!(collector.resources(ResourceKind::Font), ["pixel.ttf"]);
    assert_eq!(collector.visits(), 5);
}

#[test]
fn test_renamer_rewrites_nested_resources() {
    let project = platformer();
    let mut config = CustomObjectConfiguration::new("Platformer::Hero");
    let mut renamer = ResourceRenamer::new([("coin.png", "coin@2x.png"), ("jump.wav", "jump.ogg")]);

    config.expose_resources(&project, &mut renamer);

    assert_eq!(renamer.rewritten(), 2);
    assert_eq!(property_value(&config, &project, "jumpSound"), "jump.ogg");
    assert_eq!(property_value(&config, &project, "skin"), "hero.png");
    let tree = config.serialize();
    assert_eq!(
        tree["childrenContent"]["inventory"]["childrenContent"]["coin"]["content"]["sparkle"],
        "coin@2x.png"
    );
}
