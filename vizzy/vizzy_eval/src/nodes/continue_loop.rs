//! Loop continuation.

use vizzy_ir::{InstrId, NodeOrigin, ProgramNode};

use crate::{InstructionLinks, ProgramInstruction, ThreadContext};

/// `<Continue />`: jump back to the top of the closest enclosing loop.
///
/// Pops frames until it pops one whose return instruction stops break
/// propagation (the loop itself) or the stack runs out, and resumes at that
/// frame's return instruction. The loop re-checks its condition from there.
#[derive(Clone, Debug, Default)]
pub struct Continue;

impl ProgramNode for Continue {
    fn origin(&self) -> NodeOrigin {
        NodeOrigin::Extension
    }
}

impl ProgramInstruction for Continue {
    fn execute(&self, _links: &InstructionLinks, ctx: &mut ThreadContext<'_>) -> Option<InstrId> {
        let mut frame = ctx.pop_frame();
        while ctx.call_stack_size() > 0 && !frame.is_some_and(|f| f.is_loop_boundary()) {
            frame = ctx.pop_frame();
        }
        frame.and_then(|f| f.return_instruction)
    }
}
