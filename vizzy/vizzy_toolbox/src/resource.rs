//! Toolbox resources and the lazily loaded extension palette.

use std::sync::OnceLock;

use rustc_hash::FxHashMap;
use tracing::{debug, warn};

use crate::Toolbox;

/// A store of named text resources.
pub trait ResourceDatabase: Send + Sync {
    fn text_resource(&self, name: &str) -> Option<&str>;
}

/// A resource database held in memory.
#[derive(Clone, Debug, Default)]
pub struct MemoryResources {
    entries: FxHashMap<String, String>,
}

impl MemoryResources {
    pub fn new() -> Self {
        MemoryResources::default()
    }

    #[must_use]
    pub fn with(mut self, name: &str, text: impl Into<String>) -> Self {
        self.insert(name, text);
        self
    }

    pub fn insert(&mut self, name: &str, text: impl Into<String>) {
        self.entries.insert(name.to_string(), text.into());
    }
}

impl ResourceDatabase for MemoryResources {
    fn text_resource(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }
}

/// A toolbox read from a named resource on first successful access.
///
/// A missing or malformed resource is logged and reported as `None`; the
/// next access tries again.
#[derive(Debug)]
pub struct LazyToolbox {
    resource: String,
    cell: OnceLock<Toolbox>,
}

impl LazyToolbox {
    pub fn new(resource: impl Into<String>) -> Self {
        LazyToolbox {
            resource: resource.into(),
            cell: OnceLock::new(),
        }
    }

    pub fn resource(&self) -> &str {
        &self.resource
    }

    pub fn is_loaded(&self) -> bool {
        self.cell.get().is_some()
    }

    /// The toolbox, loading it from `resources` if needed.
    pub fn get(&self, resources: &dyn ResourceDatabase) -> Option<&Toolbox> {
        if let Some(toolbox) = self.cell.get() {
            return Some(toolbox);
        }

        let Some(text) = resources.text_resource(&self.resource) else {
            warn!(resource = self.resource.as_str(), "toolbox resource not found");
            return None;
        };
        match Toolbox::parse(text) {
            Ok(toolbox) => {
                debug!(resource = self.resource.as_str(), "toolbox resource loaded");
                Some(self.cell.get_or_init(|| toolbox))
            }
            Err(err) => {
                warn!(resource = self.resource.as_str(), %err, "toolbox resource is malformed");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    const NAME: &str = "Mod/Toolbox";

    #[test]
    fn test_missing_resource_retries() {
        let lazy = LazyToolbox::new(NAME);
        assert!(lazy.get(&MemoryResources::new()).is_none());
        assert!(!lazy.is_loaded());

        let resources = MemoryResources::new()
            .with(NAME, "<Toolbox><Colors /><Styles /><Categories /></Toolbox>");
        assert!(lazy.get(&resources).is_some());
        assert!(lazy.is_loaded());
    }

    #[test]
    fn test_loaded_once() {
        let lazy = LazyToolbox::new(NAME);
        let first = MemoryResources::new().with(
            NAME,
            r#"<Toolbox><Colors /><Styles /><Categories><Category name="A" /></Categories></Toolbox>"#,
        );
        let second = MemoryResources::new()
            .with(NAME, "<Toolbox><Colors /><Styles /><Categories /></Toolbox>");

        assert_eq!(lazy.get(&first).unwrap().categories.len(), 1);
        assert_eq!(lazy.get(&second).unwrap().categories.len(), 1);
    }

    #[test]
    fn test_malformed_resource() {
        let lazy = LazyToolbox::new(NAME);
        let resources = MemoryResources::new().with(NAME, "<Toolbox><Colors /></Toolbox>");
        assert!(lazy.get(&resources).is_none());
    }
}
