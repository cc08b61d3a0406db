//! Registration of the reference host node set.

use vizzy_eval::host::{BinaryOp, Break, Constant, If, Log, SetVariable, Variable, While};

use crate::{NodeCreator, NodeRegistry};

/// Register the host language's nodes under their tag names.
#[tracing::instrument(level = "debug", skip_all)]
pub fn register_host_nodes(registry: &mut NodeRegistry) {
    registry.register("Constant", NodeCreator::expression::<Constant>());
    registry.register("Variable", NodeCreator::expression::<Variable>());
    registry.register("BinaryOp", NodeCreator::expression::<BinaryOp>());
    registry.register("SetVariable", NodeCreator::instruction::<SetVariable>());
    registry.register("Log", NodeCreator::instruction::<Log>());
    registry.register("If", NodeCreator::instruction::<If>());
    registry.register("While", NodeCreator::instruction::<While>());
    registry.register("Break", NodeCreator::instruction::<Break>());
}
