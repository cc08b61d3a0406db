//! Tag-name registry for program nodes.
//!
//! Two tables are kept in step: tag name → creator (used when reading a
//! program) and node type → tag name (used when writing one). Several tags
//! may share one node type; the type table then holds whichever was
//! registered last, and the node normalizes the tag in `on_serialized`.

use std::any::TypeId;
use std::fmt;

use rustc_hash::FxHashMap;
use tracing::{debug, warn};
use vizzy_eval::{ProgramExpression, ProgramInstruction};
use vizzy_ir::{NodeOrigin, NodeType, ProgramNode};

/// Which node family a tag produces.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Expression,
    Instruction,
}

/// A freshly constructed node.
#[derive(Debug)]
pub enum NodeInstance {
    Expression(Box<dyn ProgramExpression>),
    Instruction(Box<dyn ProgramInstruction>),
}

impl NodeInstance {
    pub fn kind(&self) -> NodeKind {
        match self {
            NodeInstance::Expression(_) => NodeKind::Expression,
            NodeInstance::Instruction(_) => NodeKind::Instruction,
        }
    }
}

/// How to build one node type.
#[derive(Copy, Clone)]
pub struct NodeCreator {
    node_type: NodeType,
    origin: NodeOrigin,
    kind: NodeKind,
    construct: fn() -> NodeInstance,
}

fn make_expression<T: ProgramExpression + Default>() -> NodeInstance {
    NodeInstance::Expression(Box::new(T::default()))
}

fn make_instruction<T: ProgramInstruction + Default>() -> NodeInstance {
    NodeInstance::Instruction(Box::new(T::default()))
}

impl NodeCreator {
    /// Creator for expression type `T`, built with `T::default()`.
    pub fn expression<T: ProgramExpression + Default>() -> Self {
        NodeCreator {
            node_type: NodeType::of::<T>(),
            origin: T::default().origin(),
            kind: NodeKind::Expression,
            construct: make_expression::<T>,
        }
    }

    /// Creator for instruction type `T`, built with `T::default()`.
    pub fn instruction<T: ProgramInstruction + Default>() -> Self {
        NodeCreator {
            node_type: NodeType::of::<T>(),
            origin: T::default().origin(),
            kind: NodeKind::Instruction,
            construct: make_instruction::<T>,
        }
    }

    pub fn node_type(&self) -> NodeType {
        self.node_type
    }

    pub fn origin(&self) -> NodeOrigin {
        self.origin
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    /// Build a node with default configuration.
    pub fn create(&self) -> NodeInstance {
        (self.construct)()
    }
}

impl fmt::Debug for NodeCreator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeCreator")
            .field("node_type", &self.node_type.name)
            .field("origin", &self.origin)
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

/// Registry of every node type a program may contain.
#[derive(Debug, Default)]
pub struct NodeRegistry {
    by_name: FxHashMap<String, NodeCreator>,
    by_type: FxHashMap<TypeId, String>,
}

impl NodeRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        NodeRegistry::default()
    }

    /// Register `creator` under `xml_name`.
    ///
    /// Re-registering a tag replaces the previous creator (last wins).
    pub fn register(&mut self, xml_name: &str, creator: NodeCreator) {
        debug!(xml_name, node_type = creator.node_type.name, "registering program node");
        if let Some(previous) = self.by_name.insert(xml_name.to_string(), creator) {
            warn!(
                xml_name,
                previous = previous.node_type.name,
                replacement = creator.node_type.name,
                "program node registered twice, replacing"
            );
            // Repoint the old type's reverse entry at another of its tags.
            if previous.node_type.id != creator.node_type.id
                && self.by_type.get(&previous.node_type.id).map(String::as_str) == Some(xml_name)
            {
                match self
                    .by_name
                    .iter()
                    .find(|(_, c)| c.node_type.id == previous.node_type.id)
                {
                    Some((other, _)) => {
                        self.by_type.insert(previous.node_type.id, other.clone());
                    }
                    None => {
                        self.by_type.remove(&previous.node_type.id);
                    }
                }
            }
        }
        self.by_type
            .insert(creator.node_type.id, xml_name.to_string());
    }

    /// Construct a node for `xml_name`.
    pub fn create(&self, xml_name: &str) -> Option<NodeInstance> {
        self.by_name.get(xml_name).map(NodeCreator::create)
    }

    pub fn creator(&self, xml_name: &str) -> Option<&NodeCreator> {
        self.by_name.get(xml_name)
    }

    /// The creator registered for a node type, with its tag name.
    pub fn creator_for_type(&self, type_id: TypeId) -> Option<(&str, &NodeCreator)> {
        let name = self.by_type.get(&type_id)?;
        let creator = self.by_name.get(name)?;
        Some((name.as_str(), creator))
    }

    /// The tag name an in-memory node is written under.
    pub fn xml_name_for(&self, node_type: NodeType) -> Option<&str> {
        self.by_type.get(&node_type.id).map(String::as_str)
    }

    pub fn contains(&self, xml_name: &str) -> bool {
        self.by_name.contains_key(xml_name)
    }

    /// Registered tag names, in no particular order.
    pub fn xml_names(&self) -> impl Iterator<Item = &str> {
        self.by_name.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use vizzy_eval::host::{Constant, Log, Variable};
    use vizzy_eval::nodes::{GetCraftId, NumericConstant};

    #[test]
    fn test_register_writes_both_tables() {
        let mut registry = NodeRegistry::new();
        registry.register("NumericConstant", NodeCreator::expression::<NumericConstant>());

        assert!(registry.contains("NumericConstant"));
        assert_eq!(
            registry.xml_name_for(NodeType::of::<NumericConstant>()),
            Some("NumericConstant")
        );
        let (name, creator) = registry
            .creator_for_type(TypeId::of::<NumericConstant>())
            .unwrap();
        assert_eq!(name, "NumericConstant");
        assert_eq!(creator.origin(), NodeOrigin::Extension);
        assert_eq!(creator.kind(), NodeKind::Expression);
    }

    #[test]
    fn test_create_builds_registered_type() {
        let mut registry = NodeRegistry::new();
        registry.register("Log", NodeCreator::instruction::<Log>());

        let Some(NodeInstance::Instruction(node)) = registry.create("Log") else {
            panic!("expected an instruction");
        };
        assert_eq!(node.node_type(), NodeType::of::<Log>());
        assert!(registry.create("Missing").is_none());
    }

    #[test]
    fn test_reregistration_last_wins() {
        let mut registry = NodeRegistry::new();
        registry.register("Value", NodeCreator::expression::<Constant>());
        registry.register("Value", NodeCreator::expression::<Variable>());

        assert_eq!(registry.len(), 1);
        let Some(NodeInstance::Expression(node)) = registry.create("Value") else {
            panic!("expected an expression");
        };
        assert_eq!(node.node_type(), NodeType::of::<Variable>());
        assert_eq!(registry.xml_name_for(NodeType::of::<Constant>()), None);
        assert_eq!(registry.xml_name_for(NodeType::of::<Variable>()), Some("Value"));
    }

    #[test]
    fn test_alias_shares_type() {
        let mut registry = NodeRegistry::new();
        registry.register("GetCraftId", NodeCreator::expression::<GetCraftId>());
        registry.register("TargetCraftId", NodeCreator::expression::<GetCraftId>());

        assert_eq!(registry.len(), 2);
        assert!(matches!(
            registry.create("TargetCraftId"),
            Some(NodeInstance::Expression(_))
        ));
        assert_eq!(
            registry.xml_name_for(NodeType::of::<GetCraftId>()),
            Some("TargetCraftId")
        );
    }

    #[test]
    fn test_replaced_alias_falls_back_to_remaining_tag() {
        let mut registry = NodeRegistry::new();
        registry.register("Constant", NodeCreator::expression::<Constant>());
        registry.register("Split", NodeCreator::expression::<Constant>());
        assert_eq!(registry.xml_name_for(NodeType::of::<Constant>()), Some("Split"));

        registry.register("Split", NodeCreator::expression::<Variable>());

        assert_eq!(registry.xml_name_for(NodeType::of::<Constant>()), Some("Constant"));
        assert_eq!(registry.xml_name_for(NodeType::of::<Variable>()), Some("Split"));
    }
}
