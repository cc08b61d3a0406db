//! Vizzy Eval - the evaluation model for Vizzy++ program nodes.
//!
//! This crate contains:
//! - `ProgramExpression` / `ProgramInstruction`: the two node families
//! - `Program`: the flat arena holding a program's nodes and their links
//! - `ThreadContext`: per-thread state (call stack, variables, output)
//! - `Interpreter`: the host loop that sequences instructions
//! - `CraftContext` and friends: the craft/orbit collaborator
//! - `nodes`: the node types supplied by the extension
//! - `host`: reference host nodes used to build runnable programs
//!
//! # Control flow
//!
//! Instructions return the id of the instruction to run next. Scoped
//! instructions push a `CallFrame` naming where to resume; returning `None`
//! pops back to it. `Continue` and `Break` unwind several frames at once,
//! stopping at frames whose return instruction is a loop.

mod context;
mod craft;
mod expression;
mod instruction;
mod interpreter;
mod program;
mod recursion;
mod stack;

pub mod host;
pub mod nodes;
pub mod options;
pub mod testing;

pub use context::ThreadContext;
pub use craft::{
    CollaboratorError, CraftContext, EmptyWorld, Orbit, OrbitNode, PlanetInfo, SurfaceLocation,
};
pub use expression::ProgramExpression;
pub use instruction::ProgramInstruction;
pub use interpreter::{Interpreter, RunOutcome};
pub use program::{ChildList, ExpressionSlot, InstructionLinks, InstructionSlot, Program};
pub use recursion::ensure_sufficient_stack;
pub use stack::{CallFrame, CallStack, CallStackError};
