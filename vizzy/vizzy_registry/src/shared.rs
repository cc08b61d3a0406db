//! The process-wide tag table.
//!
//! The host builds its `NodeRegistry` at startup and hands a
//! `SharedMutableRegistry` to everything that resolves tags: the editor,
//! the program loader and extensions, which register their nodes into the
//! same table after the host has already shared it.

use std::fmt;
use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::NodeRegistry;

/// A `NodeRegistry` shared between the host and its extensions.
///
/// Clones see each other's registrations. Loading and saving programs take
/// the read lock; registering nodes takes the write lock.
#[derive(Clone, Default)]
pub struct SharedMutableRegistry(Arc<RwLock<NodeRegistry>>);

impl SharedMutableRegistry {
    pub fn new(registry: NodeRegistry) -> Self {
        SharedMutableRegistry(Arc::new(RwLock::new(registry)))
    }

    /// Lock the table for tag lookups.
    pub fn read(&self) -> RwLockReadGuard<'_, NodeRegistry> {
        self.0.read()
    }

    /// Lock the table to register nodes.
    pub fn write(&self) -> RwLockWriteGuard<'_, NodeRegistry> {
        self.0.write()
    }
}

impl From<NodeRegistry> for SharedMutableRegistry {
    fn from(registry: NodeRegistry) -> Self {
        SharedMutableRegistry::new(registry)
    }
}

impl fmt::Debug for SharedMutableRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedMutableRegistry")
            .field("tags", &self.0.read().len())
            .finish()
    }
}
