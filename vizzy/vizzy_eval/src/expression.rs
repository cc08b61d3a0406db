//! Expression nodes.

use vizzy_ir::{ExprId, ProgramNode, Value};

use crate::ThreadContext;

/// A node that produces a `Value`.
///
/// Evaluation is infallible: configuration and lookup misses resolve to a
/// neutral value and are logged, since the visual language has no exception
/// value to raise.
pub trait ProgramExpression: ProgramNode {
    /// Whether this expression produces `Value::Bool`. A pure function of
    /// the node's configuration; the editor uses it to pick socket shapes.
    fn is_boolean(&self) -> bool {
        false
    }

    /// Evaluate against the running thread.
    ///
    /// `children` are this node's child expression ids in order. Use
    /// [`ThreadContext::evaluate_child`] to evaluate them.
    fn evaluate(&self, children: &[ExprId], ctx: &mut ThreadContext<'_>) -> Value;
}
