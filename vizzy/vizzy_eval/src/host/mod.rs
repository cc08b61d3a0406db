//! Reference host nodes.
//!
//! A small slice of the host language: literals, variables, arithmetic and
//! comparison, assignment, logging, conditionals and loops. These are enough
//! to build and run real programs around the extension nodes, and they
//! report `NodeOrigin::Host` so the usage scanner can tell the two apart.

mod expressions;
mod statements;

pub use expressions::{BinaryOp, BinaryOperator, Constant, Variable};
pub use statements::{Break, If, Log, SetVariable, While};

/// Attribute naming the variable read or written by a node.
pub const VARIABLE_NAME_ATTRIBUTE: &str = "variableName";
