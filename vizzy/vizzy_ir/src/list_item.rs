//! Option tables for list-driven node configuration.

/// The kind of result a list option produces.
///
/// The editor uses this to label the option (degrees, radians, ...) and to
/// decide which sockets an expression may plug into.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum ListItemKind {
    /// No particular result kind (booleans, selectors).
    #[default]
    None,
    Number,
    Text,
    Degrees,
    Radians,
    Vector,
    List,
}

/// One legal value for a configuration slot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListItemInfo {
    /// Key stored in the node and persisted as an attribute.
    pub id: &'static str,
    /// Label shown in the editor.
    pub display_name: &'static str,
    /// Tooltip text.
    pub description: &'static str,
    pub kind: ListItemKind,
}

impl ListItemInfo {
    pub const fn new(
        id: &'static str,
        display_name: &'static str,
        description: &'static str,
        kind: ListItemKind,
    ) -> Self {
        ListItemInfo {
            id,
            display_name,
            description,
            kind,
        }
    }
}
