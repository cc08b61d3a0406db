//! Craft id lookups.
//!
//! Older programs persisted a target-only block as `<TargetCraftId />`. The
//! registry maps that tag onto `GetCraftId`; a missing `type` reads as
//! `target`, and the element is always written back under the new tag.

use tracing::{debug, info, warn};
use vizzy_ir::{Element, ExprId, ListItemInfo, ListItemKind, NodeOrigin, ProgramNode, Value};

use crate::options::{ListOption, ListSlot, OptionTable};
use crate::{ProgramExpression, ThreadContext};

/// Tag the node is written under.
pub const GET_CRAFT_ID_TAG: &str = "GetCraftId";

/// Tag older programs used for the target craft lookup.
pub const LEGACY_TARGET_CRAFT_ID_TAG: &str = "TargetCraftId";

/// Result when there is no such craft.
pub const NO_CRAFT: f64 = -1.0;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CraftKind {
    Current,
    Target,
    Active,
}

impl OptionTable for CraftKind {
    const OPTIONS: &'static [ListOption<Self>] = &[
        ListOption::new(
            Self::Current,
            "current",
            "Current",
            "Gets the ID of the craft that is currently running this program.",
            ListItemKind::None,
        ),
        ListOption::new(
            Self::Target,
            "target",
            "Target",
            "Gets the target craft ID if a craft is currently targeted (returns -1 if no craft is targeted).",
            ListItemKind::None,
        ),
        ListOption::new(
            Self::Active,
            "active",
            "Active",
            "Gets the ID of the craft that is currently controlled by the player.",
            ListItemKind::None,
        ),
    ];
}

/// `<GetCraftId type="…" />`
#[derive(Clone, Debug, Default)]
pub struct GetCraftId {
    kind: ListSlot<CraftKind>,
}

impl GetCraftId {
    pub fn new(key: &str) -> Self {
        GetCraftId {
            kind: ListSlot::with_key(key),
        }
    }

    pub fn kind(&self) -> Option<CraftKind> {
        self.kind.get()
    }
}

impl ProgramNode for GetCraftId {
    fn origin(&self) -> NodeOrigin {
        NodeOrigin::Extension
    }

    fn list_items(&self, _list_id: &str) -> Vec<ListItemInfo> {
        CraftKind::list_items()
    }

    fn list_value(&self, _list_id: &str) -> Option<&str> {
        self.kind.key()
    }

    fn set_list_value(&mut self, _list_id: &str, value: &str) {
        self.kind.set(value);
    }

    fn on_deserialized(&mut self, element: &Element) {
        self.kind.load(element, "type");
        if self.kind.key().is_none() {
            self.kind.set(CraftKind::Target.key());
        }
    }

    fn on_serialized(&self, element: &mut Element) {
        self.kind.store(element, "type");
        element.set_name(GET_CRAFT_ID_TAG);
    }
}

impl ProgramExpression for GetCraftId {
    fn evaluate(&self, _children: &[ExprId], ctx: &mut ThreadContext<'_>) -> Value {
        let craft = ctx.craft();
        let id = match self.kind.get() {
            Some(CraftKind::Current) => craft.executing_craft().map(|node| node.node_id()),
            Some(CraftKind::Target) => craft.target_craft_id(),
            Some(CraftKind::Active) => {
                let id = craft.active_craft_id();
                if id.is_none() {
                    info!("active craft id is only available in the flight scene");
                }
                id
            }
            None => {
                warn!(kind = %self.kind, "unrecognized craft type");
                None
            }
        };
        debug!(kind = %self.kind, ?id, "craft id");
        Value::Number(id.map_or(NO_CRAFT, f64::from))
    }
}
