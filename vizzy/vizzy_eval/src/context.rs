//! Per-thread execution state.

use rustc_hash::FxHashMap;
use tracing::{debug, warn};
use vizzy_ir::{ExprId, InstrId, Value};

use crate::recursion::ensure_sufficient_stack;
use crate::{CallFrame, CallStack, CallStackError, CraftContext, Program};

/// The running state of one program thread.
///
/// Owns the call stack, the thread's variables and its log output. Borrows
/// the program being executed and the world it executes in.
pub struct ThreadContext<'a> {
    program: &'a Program,
    craft: &'a dyn CraftContext,
    call_stack: CallStack,
    variables: FxHashMap<String, Value>,
    output: Vec<String>,
    fault: Option<CallStackError>,
}

impl<'a> ThreadContext<'a> {
    /// Create a context with an unlimited call stack.
    pub fn new(program: &'a Program, craft: &'a dyn CraftContext) -> Self {
        ThreadContext {
            program,
            craft,
            call_stack: CallStack::default(),
            variables: FxHashMap::default(),
            output: Vec::new(),
            fault: None,
        }
    }

    /// Limit the call stack depth. `None` is unlimited.
    #[must_use]
    pub fn with_max_call_depth(mut self, max_depth: Option<usize>) -> Self {
        self.call_stack = CallStack::new(max_depth);
        self
    }

    #[inline]
    pub fn program(&self) -> &'a Program {
        self.program
    }

    #[inline]
    pub fn craft(&self) -> &'a dyn CraftContext {
        self.craft
    }

    /// Push a frame resuming at `return_instruction`.
    ///
    /// The frame's `stop_break_propagation` flag is read from the return
    /// instruction now, so unwinding never needs to consult the program.
    pub fn push_frame(&mut self, return_instruction: Option<InstrId>) -> Result<(), CallStackError> {
        let stop_break_propagation = return_instruction.is_some_and(|id| {
            self.program
                .instruction(id)
                .node
                .stop_break_propagation()
        });
        self.call_stack
            .push(CallFrame::new(return_instruction, stop_break_propagation))
    }

    /// Push a frame from inside an instruction.
    ///
    /// Instructions cannot return errors, so an overflow is recorded on the
    /// context and the host stops the thread after the current step.
    /// Returns whether the frame was pushed.
    pub fn enter_scope(&mut self, return_instruction: Option<InstrId>) -> bool {
        match self.push_frame(return_instruction) {
            Ok(()) => true,
            Err(err) => {
                warn!(%err, "cannot enter scope");
                self.fault = Some(err);
                false
            }
        }
    }

    /// Pop the most recent frame. `None` on an empty stack.
    pub fn pop_frame(&mut self) -> Option<CallFrame> {
        self.call_stack.pop()
    }

    #[inline]
    pub fn call_stack_size(&self) -> usize {
        self.call_stack.len()
    }

    /// Evaluate the expression `id`.
    pub fn evaluate(&mut self, id: ExprId) -> Value {
        let program = self.program;
        let slot = program.expression(id);
        ensure_sufficient_stack(|| slot.node.evaluate(&slot.children, self))
    }

    /// Evaluate the `index`-th child of a node.
    ///
    /// A missing child evaluates to `Number(0)`.
    pub fn evaluate_child(&mut self, children: &[ExprId], index: usize) -> Value {
        match children.get(index) {
            Some(&id) => self.evaluate(id),
            None => {
                debug!(index, "missing child expression, using 0");
                Value::ZERO
            }
        }
    }

    pub fn variable(&self, name: &str) -> Option<&Value> {
        self.variables.get(name)
    }

    pub fn set_variable(&mut self, name: impl Into<String>, value: Value) {
        self.variables.insert(name.into(), value);
    }

    /// Append a line to the thread's log output.
    pub fn log(&mut self, line: impl Into<String>) {
        self.output.push(line.into());
    }

    pub fn output(&self) -> &[String] {
        &self.output
    }

    pub(crate) fn take_fault(&mut self) -> Option<CallStackError> {
        self.fault.take()
    }
}

impl std::fmt::Debug for ThreadContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThreadContext")
            .field("program", &self.program.name())
            .field("call_stack", &self.call_stack)
            .field("variables", &self.variables)
            .finish_non_exhaustive()
    }
}
