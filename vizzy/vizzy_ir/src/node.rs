//! The configuration protocol shared by every program node.
//!
//! Expression and instruction nodes both implement `ProgramNode`. The
//! protocol covers:
//! - list-driven configuration (`list_items` / `list_value` / `set_list_value`)
//! - two-way binding with the persisted element (`on_deserialized` /
//!   `on_serialized`)
//! - provenance (`origin`), used to detect programs that depend on the
//!   extension
//!
//! # Derived enums
//!
//! Nodes keep the raw configuration key (so unknown keys survive a
//! load/save cycle) next to a parsed enum used for O(1) dispatch during
//! evaluation. `set_list_value` and `on_deserialized` must both refresh the
//! parsed enum so a node loaded from disk behaves exactly like one
//! configured interactively.

use std::any::TypeId;
use std::fmt;

use crate::{Element, ListItemInfo};

/// Which registry namespace a node type belongs to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum NodeOrigin {
    /// Supplied by the host language.
    #[default]
    Host,
    /// Supplied by the Vizzy++ extension.
    Extension,
}

/// Runtime identity of a node type.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct NodeType {
    pub id: TypeId,
    pub name: &'static str,
}

impl NodeType {
    /// Identity of `T`.
    pub fn of<T: ?Sized + 'static>() -> Self {
        NodeType {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }
}

/// Configuration protocol implemented by every program node.
pub trait ProgramNode: fmt::Debug + Send + Sync + 'static {
    /// Identity of the concrete node type, used by the registry to map an
    /// in-memory node back to its tag name.
    fn node_type(&self) -> NodeType {
        NodeType::of::<Self>()
    }

    /// Namespace this node type was registered from.
    fn origin(&self) -> NodeOrigin {
        NodeOrigin::Host
    }

    /// Legal values for the named list. Static: independent of the current
    /// selection.
    fn list_items(&self, _list_id: &str) -> Vec<ListItemInfo> {
        Vec::new()
    }

    /// Currently selected key for the named list.
    fn list_value(&self, _list_id: &str) -> Option<&str> {
        None
    }

    /// Select a key for the named list and refresh any derived state.
    fn set_list_value(&mut self, _list_id: &str, _value: &str) {}

    /// Restore configuration from the persisted element.
    fn on_deserialized(&mut self, _element: &Element) {}

    /// Write configuration to the element created for this node.
    ///
    /// The element arrives already named after the registered tag; nodes
    /// that were read under a legacy tag rename it here.
    fn on_serialized(&self, _element: &mut Element) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Marker;

    impl ProgramNode for Marker {}

    #[test]
    fn test_node_type_resolves_concrete_type_through_dyn() {
        let node: Box<dyn ProgramNode> = Box::new(Marker);
        assert_eq!(node.node_type(), NodeType::of::<Marker>());
        assert_ne!(node.node_type(), NodeType::of::<dyn ProgramNode>());
    }

    #[test]
    fn test_defaults() {
        let mut node = Marker;
        assert_eq!(node.origin(), NodeOrigin::Host);
        assert!(node.list_items("op").is_empty());
        node.set_list_value("op", "x");
        assert_eq!(node.list_value("op"), None);
    }
}
