//! Flat program arena.
//!
//! A program owns every node in two arenas: one for expressions and one for
//! instructions. Nodes refer to each other by `ExprId` / `InstrId`; the graph
//! structure (child expressions, `next`, `first_child`) lives in the slots,
//! not in the nodes, so node types only carry their configuration.
//!
//! # Roots
//!
//! - `root_instructions`: the first instruction of each top-level thread
//!   (event handlers in the editor)
//! - `root_expressions`: free-floating expressions
//! - `custom_instructions`: bodies of user-defined instructions
//! - `custom_expressions`: bodies of user-defined expressions

use smallvec::SmallVec;
use vizzy_ir::{ExprId, InstrId};

use crate::{ProgramExpression, ProgramInstruction};

/// Ordered child expressions of a node. Most nodes take at most two.
pub type ChildList = SmallVec<[ExprId; 2]>;

/// An expression node plus its ordered children.
#[derive(Debug)]
pub struct ExpressionSlot {
    pub node: Box<dyn ProgramExpression>,
    pub children: ChildList,
}

/// Graph links of an instruction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InstructionLinks {
    /// The instruction's own id.
    pub id: InstrId,
    /// Child expressions, evaluated by the instruction on demand.
    pub expressions: ChildList,
    /// Sequential successor.
    pub next: Option<InstrId>,
    /// First instruction of the nested body. Only meaningful when the node
    /// supports children.
    pub first_child: Option<InstrId>,
}

/// An instruction node plus its links.
#[derive(Debug)]
pub struct InstructionSlot {
    pub node: Box<dyn ProgramInstruction>,
    pub links: InstructionLinks,
}

/// A program: named node arenas plus the four root sets.
#[derive(Debug, Default)]
pub struct Program {
    name: String,
    expressions: Vec<ExpressionSlot>,
    instructions: Vec<InstructionSlot>,
    root_instructions: Vec<InstrId>,
    root_expressions: Vec<ExprId>,
    custom_instructions: Vec<InstrId>,
    custom_expressions: Vec<ExprId>,
}

impl Program {
    pub fn new(name: impl Into<String>) -> Self {
        Program {
            name: name.into(),
            ..Program::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Allocate an expression.
    pub fn add_expression(
        &mut self,
        node: impl ProgramExpression,
        children: impl IntoIterator<Item = ExprId>,
    ) -> ExprId {
        self.add_boxed_expression(Box::new(node), children)
    }

    /// Allocate an already boxed expression (as produced by a registry).
    pub fn add_boxed_expression(
        &mut self,
        node: Box<dyn ProgramExpression>,
        children: impl IntoIterator<Item = ExprId>,
    ) -> ExprId {
        let id = ExprId::new(self.expressions.len() as u32);
        self.expressions.push(ExpressionSlot {
            node,
            children: children.into_iter().collect(),
        });
        id
    }

    /// Allocate an unlinked instruction.
    pub fn add_instruction(
        &mut self,
        node: impl ProgramInstruction,
        expressions: impl IntoIterator<Item = ExprId>,
    ) -> InstrId {
        self.add_boxed_instruction(Box::new(node), expressions)
    }

    /// Allocate an already boxed, unlinked instruction.
    pub fn add_boxed_instruction(
        &mut self,
        node: Box<dyn ProgramInstruction>,
        expressions: impl IntoIterator<Item = ExprId>,
    ) -> InstrId {
        let id = InstrId::new(self.instructions.len() as u32);
        self.instructions.push(InstructionSlot {
            node,
            links: InstructionLinks {
                id,
                expressions: expressions.into_iter().collect(),
                next: None,
                first_child: None,
            },
        });
        id
    }

    pub fn set_next(&mut self, id: InstrId, next: Option<InstrId>) {
        self.instructions[id.index()].links.next = next;
    }

    pub fn set_first_child(&mut self, id: InstrId, first_child: Option<InstrId>) {
        self.instructions[id.index()].links.first_child = first_child;
    }

    /// Link `ids` into a sequential chain and return its head.
    pub fn chain(&mut self, ids: &[InstrId]) -> Option<InstrId> {
        for pair in ids.windows(2) {
            self.set_next(pair[0], Some(pair[1]));
        }
        ids.first().copied()
    }

    #[inline]
    pub fn expression(&self, id: ExprId) -> &ExpressionSlot {
        &self.expressions[id.index()]
    }

    #[inline]
    pub fn instruction(&self, id: InstrId) -> &InstructionSlot {
        &self.instructions[id.index()]
    }

    pub fn expression_count(&self) -> usize {
        self.expressions.len()
    }

    pub fn instruction_count(&self) -> usize {
        self.instructions.len()
    }

    pub fn add_root_instruction(&mut self, head: InstrId) {
        self.root_instructions.push(head);
    }

    pub fn add_root_expression(&mut self, id: ExprId) {
        self.root_expressions.push(id);
    }

    pub fn add_custom_instruction(&mut self, head: InstrId) {
        self.custom_instructions.push(head);
    }

    pub fn add_custom_expression(&mut self, id: ExprId) {
        self.custom_expressions.push(id);
    }

    pub fn root_instructions(&self) -> &[InstrId] {
        &self.root_instructions
    }

    pub fn root_expressions(&self) -> &[ExprId] {
        &self.root_expressions
    }

    pub fn custom_instructions(&self) -> &[InstrId] {
        &self.custom_instructions
    }

    pub fn custom_expressions(&self) -> &[ExprId] {
        &self.custom_expressions
    }
}
