//! Text splitting into a list.

use vizzy_ir::{ExprId, NodeOrigin, ProgramNode, Value};

use crate::{ProgramExpression, ThreadContext};

/// `<Split>`: splits child 0 on any character of child 1.
///
/// An empty separator splits on whitespace. Empty pieces are kept, so
/// `"a,,b"` split on `","` has three items.
#[derive(Clone, Debug, Default)]
pub struct Split;

impl ProgramNode for Split {
    fn origin(&self) -> NodeOrigin {
        NodeOrigin::Extension
    }
}

impl ProgramExpression for Split {
    fn evaluate(&self, children: &[ExprId], ctx: &mut ThreadContext<'_>) -> Value {
        let text = ctx.evaluate_child(children, 0);
        let separators = ctx.evaluate_child(children, 1);
        let (text, separators) = (text.text_value(), separators.text_value());

        if separators.is_empty() {
            Value::list(text.split(char::is_whitespace))
        } else {
            Value::list(text.split(|c: char| separators.contains(c)))
        }
    }
}
