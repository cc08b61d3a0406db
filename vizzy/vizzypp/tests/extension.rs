#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Installing the extension and merging its toolbox.

use pretty_assertions::assert_eq;
use vizzy_eval::host::Constant;
use vizzy_eval::nodes::{Continue, Split};
use vizzy_ir::{Element, NodeOrigin, NodeType};
use vizzy_registry::{register_host_nodes, NodeCreator, NodeRegistry, SharedMutableRegistry};
use vizzy_toolbox::{Category, MemoryResources, Toolbox, ToolboxNode};
use vizzypp::{BundledResources, Extension, ExtensionConfig, TOOLBOX_RESOURCE, VIZZY_INTERFACE_ID};

fn host_registry() -> SharedMutableRegistry {
    let mut registry = NodeRegistry::new();
    register_host_nodes(&mut registry);
    SharedMutableRegistry::new(registry)
}

fn install() -> Extension {
    Extension::bootstrap(ExtensionConfig::default(), host_registry(), BundledResources)
}

fn host_toolbox() -> Toolbox {
    let mut toolbox = Toolbox::new();
    toolbox.categories.push(
        Category::new("Operators").with_node(ToolboxNode::new(
            Element::new("BinaryOp").with_attribute("style", "op-math"),
        )),
    );
    toolbox.categories.push(Category::new("Program Flow"));
    toolbox
}

#[test]
fn bootstrap_registers_every_extension_tag() {
    let extension = install();
    let registry = extension.registry().read();

    assert_eq!(registry.len(), 8 + 12);
    for tag in [
        "NumericConstant",
        "OrbitalElement",
        "AdvancedOrbitalElement",
        "CartesianStateVector",
        "GetCraftId",
        "TargetCraftId",
        "AdvancedPlanetInformation",
        "StringComparison",
        "UnaryStringTransform",
        "Split",
        "AdvancedUnaryMath",
        "Continue",
    ] {
        assert!(registry.contains(tag), "{tag} missing");
    }
}

#[test]
fn bootstrap_twice_is_harmless() {
    let registry = host_registry();
    Extension::bootstrap(ExtensionConfig::default(), registry.clone(), BundledResources);
    Extension::bootstrap(ExtensionConfig::default(), registry.clone(), BundledResources);
    assert_eq!(registry.read().len(), 20);
}

#[test]
fn extension_tags_replace_host_nodes() {
    let registry = host_registry();
    registry
        .write()
        .register("Continue", NodeCreator::expression::<Constant>());
    registry
        .write()
        .register("Split", NodeCreator::expression::<Constant>());

    Extension::bootstrap(ExtensionConfig::default(), registry.clone(), BundledResources);

    let registry = registry.read();
    assert_eq!(registry.len(), 20);
    let cont = registry.creator("Continue").unwrap();
    assert_eq!(cont.node_type(), NodeType::of::<Continue>());
    assert_eq!(cont.origin(), NodeOrigin::Extension);
    let split = registry.creator("Split").unwrap();
    assert_eq!(split.node_type(), NodeType::of::<Split>());
    assert_eq!(registry.xml_name_for(NodeType::of::<Constant>()), Some("Constant"));
}

#[test]
fn bundled_toolbox_only_offers_registered_nodes() {
    let extension = install();
    let toolbox = extension.toolbox().expect("bundled toolbox");
    let registry = extension.registry().read();

    assert!(!toolbox.categories.is_empty());
    for category in &toolbox.categories {
        for node in &category.nodes {
            assert!(registry.contains(node.element.name()), "{}", node.element.name());
            assert!(toolbox.styles.contains_key(&node.style), "{}", node.style);
        }
    }
}

#[test]
fn editor_load_merges_toolbox() {
    let extension = install();
    let mut host = host_toolbox();

    let report = extension
        .on_user_interface_loading(VIZZY_INTERFACE_ID, Some(&mut host))
        .expect("merged");

    assert_eq!(report.categories_added, 2);
    let operators = host.category("operators").unwrap();
    assert_eq!(operators.nodes[0].style, "op-math");
    assert!(operators.has_style("vpp-numeric-constant"));
    assert!(host.category("Program Flow").unwrap().has_style("vpp-continue"));
    assert!(host.category("Text").is_some());
    assert!(host.styles.contains_key("vpp-split"));
}

#[test]
fn other_interfaces_are_ignored() {
    let extension = install();
    let mut host = host_toolbox();
    let before = host.clone();

    assert_eq!(extension.on_user_interface_loading("Designer", Some(&mut host)), None);
    assert_eq!(host, before);
}

#[test]
fn unloaded_host_toolbox_is_skipped() {
    let extension = install();
    assert_eq!(extension.on_user_interface_loading(VIZZY_INTERFACE_ID, None), None);
}

#[test]
fn missing_toolbox_resource_skips_merge() {
    let extension = Extension::bootstrap(
        ExtensionConfig::default().with_toolbox_resource("Missing/Toolbox"),
        host_registry(),
        BundledResources,
    );
    let mut host = host_toolbox();

    assert_eq!(extension.on_user_interface_loading(VIZZY_INTERFACE_ID, Some(&mut host)), None);
    assert_eq!(host, host_toolbox());
}

#[test]
fn toolbox_comes_from_the_given_resources() {
    let resources = MemoryResources::new().with(
        TOOLBOX_RESOURCE,
        r#"<Toolbox><Colors /><Styles /><Categories><Category name="Mine" /></Categories></Toolbox>"#,
    );
    let extension = Extension::bootstrap(ExtensionConfig::default(), host_registry(), resources);

    let toolbox = extension.toolbox().unwrap();
    assert_eq!(toolbox.categories.len(), 1);
    assert_eq!(toolbox.categories[0].name, "Mine");
}

#[test]
fn legacy_tag_is_rewritten_on_save() {
    let extension = install();
    let program = extension
        .deserialize_program(
            r#"<Program name="Old"><Expressions><TargetCraftId /></Expressions></Program>"#,
        )
        .unwrap();

    let saved = Element::parse(&extension.serialize_program(&program).unwrap()).unwrap();
    let node = &saved.child("Expressions").unwrap().children()[0];
    assert_eq!(node.name(), "GetCraftId");
    assert_eq!(node.attribute("type"), Some("target"));
}
