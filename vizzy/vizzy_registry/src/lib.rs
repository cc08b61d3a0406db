//! Vizzy Registry - tag resolution and program persistence.
//!
//! - `NodeRegistry`: maps persisted tag names to node constructors, and node
//!   types back to tag names
//! - `SharedMutableRegistry`: the registry shared by the host and its
//!   extensions
//! - `ProgramSerializer`: converts between element trees and `Program`
//!   arenas
//! - `register_host_nodes`: registers the reference host node set

mod host;
mod registry;
mod serializer;
mod shared;

pub use host::register_host_nodes;
pub use registry::{NodeCreator, NodeInstance, NodeKind, NodeRegistry};
pub use serializer::{ProgramSerializer, SerializeError};
pub use shared::SharedMutableRegistry;
