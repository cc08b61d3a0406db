//! The host interpreter loop.
//!
//! Executes one thread of a program instruction by instruction. An
//! instruction returning `None` finishes its scope: one frame is popped and
//! execution resumes at the frame's return instruction. A thread with no
//! frames left ends.

use tracing::{debug, trace};
use vizzy_ir::InstrId;

use crate::{CallStackError, ThreadContext};

/// How a bounded run finished.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    /// The thread ran out of instructions.
    Completed { steps: usize },
    /// The step budget was exhausted first.
    StepLimit { steps: usize },
}

/// Drives one thread.
#[derive(Debug)]
pub struct Interpreter<'a> {
    ctx: ThreadContext<'a>,
    current: Option<InstrId>,
}

impl<'a> Interpreter<'a> {
    /// Start a thread at `start`.
    pub fn new(ctx: ThreadContext<'a>, start: Option<InstrId>) -> Self {
        Interpreter {
            ctx,
            current: start,
        }
    }

    /// The instruction that will execute on the next step.
    pub fn current(&self) -> Option<InstrId> {
        self.current
    }

    pub fn is_finished(&self) -> bool {
        self.current.is_none()
    }

    pub fn context(&self) -> &ThreadContext<'a> {
        &self.ctx
    }

    pub fn into_context(self) -> ThreadContext<'a> {
        self.ctx
    }

    /// Execute one instruction. Returns whether the thread is still running.
    pub fn step(&mut self) -> Result<bool, CallStackError> {
        let Some(id) = self.current else {
            return Ok(false);
        };
        let slot = self.ctx.program().instruction(id);
        trace!(?id, node = ?slot.node, "execute");

        let mut next = slot.node.execute(&slot.links, &mut self.ctx);
        if let Some(err) = self.ctx.take_fault() {
            self.current = None;
            return Err(err);
        }

        while next.is_none() {
            match self.ctx.pop_frame() {
                Some(frame) => next = frame.return_instruction,
                None => break,
            }
        }
        if next.is_none() {
            debug!(thread = self.ctx.program().name(), "thread finished");
        }
        self.current = next;
        Ok(next.is_some())
    }

    /// Step until the thread finishes or `max_steps` instructions ran.
    pub fn run(&mut self, max_steps: usize) -> Result<RunOutcome, CallStackError> {
        let mut steps = 0;
        while !self.is_finished() {
            if steps == max_steps {
                return Ok(RunOutcome::StepLimit { steps });
            }
            self.step()?;
            steps += 1;
        }
        Ok(RunOutcome::Completed { steps })
    }
}
