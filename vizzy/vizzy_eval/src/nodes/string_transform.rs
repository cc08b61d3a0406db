//! Single-argument text transforms.

use tracing::warn;
use vizzy_ir::{Element, ExprId, ListItemInfo, ListItemKind, NodeOrigin, ProgramNode, Value};

use crate::options::{ListOption, ListSlot, OptionTable};
use crate::{ProgramExpression, ThreadContext};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Transform {
    ToLower,
    ToUpper,
    Trim,
    TrimStart,
    TrimEnd,
    IsBlank,
}

impl OptionTable for Transform {
    const OPTIONS: &'static [ListOption<Self>] = &[
        ListOption::new(Self::ToLower, "to-lower", "Lowercase", "Convert text to lowercase.", ListItemKind::Text),
        ListOption::new(Self::ToUpper, "to-upper", "Uppercase", "Convert text to uppercase.", ListItemKind::Text),
        ListOption::new(Self::Trim, "trim", "Trim", "Trim leading and trailing whitespace.", ListItemKind::Text),
        ListOption::new(Self::TrimStart, "trim-start", "Trim Start", "Trim leading whitespace.", ListItemKind::Text),
        ListOption::new(Self::TrimEnd, "trim-end", "Trim End", "Trim trailing whitespace.", ListItemKind::Text),
        ListOption::new(
            Self::IsBlank,
            "is-blank",
            "Is Blank?",
            "Checks if a text value is empty or only whitespace.",
            ListItemKind::None,
        ),
    ];
}

/// `<UnaryStringTransform op="…">`
#[derive(Clone, Debug)]
pub struct UnaryStringTransform {
    op: ListSlot<Transform>,
}

impl UnaryStringTransform {
    pub fn new(key: &str) -> Self {
        UnaryStringTransform {
            op: ListSlot::with_key(key),
        }
    }

    pub fn transform(&self) -> Option<Transform> {
        self.op.get()
    }
}

impl Default for UnaryStringTransform {
    fn default() -> Self {
        UnaryStringTransform::new("to-lower")
    }
}

impl ProgramNode for UnaryStringTransform {
    fn origin(&self) -> NodeOrigin {
        NodeOrigin::Extension
    }

    fn list_items(&self, _list_id: &str) -> Vec<ListItemInfo> {
        Transform::list_items()
    }

    fn list_value(&self, _list_id: &str) -> Option<&str> {
        self.op.key()
    }

    fn set_list_value(&mut self, _list_id: &str, value: &str) {
        self.op.set(value);
    }

    fn on_deserialized(&mut self, element: &Element) {
        self.op.load(element, "op");
    }

    fn on_serialized(&self, element: &mut Element) {
        self.op.store(element, "op");
    }
}

impl ProgramExpression for UnaryStringTransform {
    fn is_boolean(&self) -> bool {
        self.op.get() == Some(Transform::IsBlank)
    }

    fn evaluate(&self, children: &[ExprId], ctx: &mut ThreadContext<'_>) -> Value {
        let input = ctx.evaluate_child(children, 0);
        let text = input.text_value();
        match self.op.get() {
            Some(Transform::ToLower) => Value::Text(text.to_lowercase()),
            Some(Transform::ToUpper) => Value::Text(text.to_uppercase()),
            Some(Transform::Trim) => Value::text(text.trim()),
            Some(Transform::TrimStart) => Value::text(text.trim_start()),
            Some(Transform::TrimEnd) => Value::text(text.trim_end()),
            Some(Transform::IsBlank) => Value::Bool(text.trim().is_empty()),
            None => {
                warn!(op = %self.op, "unknown string transform operator");
                Value::text("")
            }
        }
    }
}
