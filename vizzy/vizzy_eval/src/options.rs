//! List-driven configuration slots.
//!
//! A configurable node stores the raw key it was given (so keys written by a
//! newer version survive a load/save cycle) next to the parsed enum used for
//! dispatch. `ListSlot` keeps the two in sync; `OptionTable` describes the
//! legal keys of one enum.

use std::fmt;

use vizzy_ir::{Element, ListItemInfo, ListItemKind};

/// One legal key of an option table.
#[derive(Clone, Debug, PartialEq)]
pub struct ListOption<T> {
    pub value: T,
    pub info: ListItemInfo,
}

impl<T> ListOption<T> {
    pub const fn new(
        value: T,
        id: &'static str,
        display_name: &'static str,
        description: &'static str,
        kind: ListItemKind,
    ) -> Self {
        ListOption {
            value,
            info: ListItemInfo::new(id, display_name, description, kind),
        }
    }
}

/// An enum selectable through a node's list configuration.
pub trait OptionTable: Copy + PartialEq + fmt::Debug + Send + Sync + 'static {
    /// All options in editor order.
    const OPTIONS: &'static [ListOption<Self>];

    /// Parse a key, ignoring ASCII case and surrounding whitespace.
    fn parse(key: &str) -> Option<Self> {
        let key = key.trim();
        Self::OPTIONS
            .iter()
            .find(|option| option.info.id.eq_ignore_ascii_case(key))
            .map(|option| option.value)
    }

    /// The canonical key for this value.
    fn key(self) -> &'static str {
        Self::OPTIONS
            .iter()
            .find(|option| option.value == self)
            .map_or("", |option| option.info.id)
    }

    /// Option metadata for the editor.
    fn list_items() -> Vec<ListItemInfo> {
        Self::OPTIONS.iter().map(|option| option.info.clone()).collect()
    }
}

/// A raw configuration key plus its parsed value.
#[derive(Clone, Debug, PartialEq)]
pub struct ListSlot<T> {
    raw: Option<String>,
    parsed: Option<T>,
}

impl<T: OptionTable> ListSlot<T> {
    /// An unset slot.
    pub const fn unset() -> Self {
        ListSlot {
            raw: None,
            parsed: None,
        }
    }

    /// A slot preset to `key`.
    pub fn with_key(key: &str) -> Self {
        let mut slot = Self::unset();
        slot.set(key);
        slot
    }

    /// The raw key as given, if any.
    pub fn key(&self) -> Option<&str> {
        self.raw.as_deref()
    }

    /// The parsed value. `None` when unset or the key is unknown.
    #[inline]
    pub fn get(&self) -> Option<T> {
        self.parsed
    }

    /// Store `key` and recompute the parsed value.
    pub fn set(&mut self, key: &str) {
        self.parsed = T::parse(key);
        self.raw = Some(key.to_string());
    }

    /// Restore from `attribute` of `element`. A missing attribute keeps the
    /// current key and still refreshes the parsed value.
    pub fn load(&mut self, element: &Element, attribute: &str) {
        if let Some(key) = element.attribute(attribute) {
            self.raw = Some(key.to_string());
        }
        self.parsed = self.raw.as_deref().and_then(T::parse);
    }

    /// Write the raw key to `attribute`; an unset slot removes it.
    pub fn store(&self, element: &mut Element, attribute: &str) {
        element.set_optional_attribute(attribute, self.raw.as_deref());
    }
}

impl<T: OptionTable> Default for ListSlot<T> {
    fn default() -> Self {
        Self::unset()
    }
}

impl<T> fmt::Display for ListSlot<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.raw.as_deref().unwrap_or("<unset>"))
    }
}
