//! Instruction nodes.

use vizzy_ir::{InstrId, ProgramNode};

use crate::{InstructionLinks, ThreadContext};

/// A node that performs an effect and selects the next instruction.
pub trait ProgramInstruction: ProgramNode {
    /// Whether this node owns a nested instruction body (`first_child`).
    fn supports_children(&self) -> bool {
        false
    }

    /// Whether frames returning to this node stop `break`/`continue`
    /// unwinding. Loops return `true`.
    fn stop_break_propagation(&self) -> bool {
        false
    }

    /// Execute and return the instruction to run next.
    ///
    /// `None` means "this scope is finished": the host pops a frame and
    /// resumes at its return instruction, or ends the thread when the stack
    /// is empty. The default is plain sequencing.
    fn execute(&self, links: &InstructionLinks, _ctx: &mut ThreadContext<'_>) -> Option<InstrId> {
        links.next
    }
}
