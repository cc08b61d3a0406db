//! Registration table for the extension's node types.

use tracing::info;
use vizzy_eval::nodes::{
    AdvancedOrbitalElement, AdvancedPlanetInformation, AdvancedUnaryMath, CartesianStateVector,
    Continue, GetCraftId, NumericConstant, OrbitalElement, Split, StringComparison,
    UnaryStringTransform, GET_CRAFT_ID_TAG, LEGACY_TARGET_CRAFT_ID_TAG,
};
use vizzy_registry::{NodeCreator, NodeRegistry};

/// Every extension tag with its creator, in registration order.
///
/// The legacy `TargetCraftId` tag comes after `GetCraftId`, so the shared
/// type maps to it and `GetCraftId` renames the element when writing.
pub fn extension_nodes() -> Vec<(&'static str, NodeCreator)> {
    vec![
        ("NumericConstant", NodeCreator::expression::<NumericConstant>()),
        ("OrbitalElement", NodeCreator::expression::<OrbitalElement>()),
        ("AdvancedOrbitalElement", NodeCreator::expression::<AdvancedOrbitalElement>()),
        ("CartesianStateVector", NodeCreator::expression::<CartesianStateVector>()),
        (GET_CRAFT_ID_TAG, NodeCreator::expression::<GetCraftId>()),
        (LEGACY_TARGET_CRAFT_ID_TAG, NodeCreator::expression::<GetCraftId>()),
        ("AdvancedPlanetInformation", NodeCreator::expression::<AdvancedPlanetInformation>()),
        ("StringComparison", NodeCreator::expression::<StringComparison>()),
        ("UnaryStringTransform", NodeCreator::expression::<UnaryStringTransform>()),
        ("Split", NodeCreator::expression::<Split>()),
        ("AdvancedUnaryMath", NodeCreator::expression::<AdvancedUnaryMath>()),
        ("Continue", NodeCreator::instruction::<Continue>()),
    ]
}

/// Register every extension node, replacing any existing tags.
#[tracing::instrument(level = "debug", skip_all)]
pub fn register_extension_nodes(registry: &mut NodeRegistry) {
    let nodes = extension_nodes();
    let count = nodes.len();
    for (tag, creator) in nodes {
        registry.register(tag, creator);
    }
    info!(count, "registered extension nodes");
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use vizzy_ir::{NodeOrigin, NodeType};
    use vizzy_registry::NodeKind;

    #[test]
    fn test_all_tags_are_extension_origin() {
        let mut registry = NodeRegistry::new();
        register_extension_nodes(&mut registry);

        assert_eq!(registry.len(), 12);
        for (tag, _) in extension_nodes() {
            let creator = registry.creator(tag);
            assert_eq!(creator.map(NodeCreator::origin), Some(NodeOrigin::Extension), "{tag}");
        }
        assert_eq!(
            registry.creator("Continue").map(NodeCreator::kind),
            Some(NodeKind::Instruction)
        );
    }

    #[test]
    fn test_legacy_tag_owns_the_type_table() {
        let mut registry = NodeRegistry::new();
        register_extension_nodes(&mut registry);
        assert_eq!(
            registry.xml_name_for(NodeType::of::<GetCraftId>()),
            Some(LEGACY_TARGET_CRAFT_ID_TAG)
        );
    }
}
