//! Vizzy Scan - does a program depend on extension nodes?
//!
//! Programs can be arbitrarily long and deeply nested, so both walks use an
//! explicit stack instead of recursion. Instruction chains push `next` and,
//! for container nodes, `first_child`; expressions push their children in
//! reverse so they are visited left to right.

use tracing::trace;
use vizzy_eval::Program;
use vizzy_ir::{ExprId, InstrId, NodeOrigin, ProgramNode};

/// The first extension node a scan found.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExtensionNode {
    Expression(ExprId),
    Instruction(InstrId),
}

/// Whether any node reachable from the given roots is an extension node.
pub fn scan_for_extension_usage(
    program: &Program,
    root_instructions: &[InstrId],
    root_expressions: &[ExprId],
    custom_expressions: &[ExprId],
    custom_instructions: &[InstrId],
) -> bool {
    let mut scanner = Scanner::new(program);
    scanner.instructions(root_instructions).is_some()
        || scanner.expressions(root_expressions).is_some()
        || scanner.expressions(custom_expressions).is_some()
        || scanner.instructions(custom_instructions).is_some()
}

/// Scan all four root sets of `program`.
#[tracing::instrument(level = "debug", skip_all, fields(program = program.name()))]
pub fn program_uses_extension(program: &Program) -> bool {
    find_extension_node(program).is_some()
}

/// Locate the first extension node of `program`, in scan order.
pub fn find_extension_node(program: &Program) -> Option<ExtensionNode> {
    let mut scanner = Scanner::new(program);
    scanner
        .instructions(program.root_instructions())
        .or_else(|| scanner.expressions(program.root_expressions()))
        .or_else(|| scanner.expressions(program.custom_expressions()))
        .or_else(|| scanner.instructions(program.custom_instructions()))
}

struct Scanner<'p> {
    program: &'p Program,
    instruction_stack: Vec<InstrId>,
    expression_stack: Vec<ExprId>,
}

impl<'p> Scanner<'p> {
    fn new(program: &'p Program) -> Self {
        Scanner {
            program,
            instruction_stack: Vec::new(),
            expression_stack: Vec::new(),
        }
    }

    fn instructions(&mut self, roots: &[InstrId]) -> Option<ExtensionNode> {
        self.instruction_stack.clear();
        self.instruction_stack.extend(roots.iter().rev());

        let program = self.program;
        while let Some(id) = self.instruction_stack.pop() {
            let slot = program.instruction(id);
            trace!(?id, node = ?slot.node, "scan instruction");
            if slot.node.origin() == NodeOrigin::Extension {
                return Some(ExtensionNode::Instruction(id));
            }
            if let Some(found) = self.expressions(&slot.links.expressions) {
                return Some(found);
            }
            if let Some(next) = slot.links.next {
                self.instruction_stack.push(next);
            }
            if slot.node.supports_children() {
                if let Some(first) = slot.links.first_child {
                    self.instruction_stack.push(first);
                }
            }
        }
        None
    }

    fn expressions(&mut self, roots: &[ExprId]) -> Option<ExtensionNode> {
        self.expression_stack.clear();
        self.expression_stack.extend(roots.iter().rev());

        let program = self.program;
        while let Some(id) = self.expression_stack.pop() {
            let slot = program.expression(id);
            if slot.node.origin() == NodeOrigin::Extension {
                return Some(ExtensionNode::Expression(id));
            }
            self.expression_stack.extend(slot.children.iter().rev());
        }
        None
    }
}
