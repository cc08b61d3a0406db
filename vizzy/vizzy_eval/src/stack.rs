//! Call-frame tracking for executing threads.
//!
//! Scoped instructions (conditionals, loops, custom instruction calls) push
//! a `CallFrame` naming the instruction to resume once their body finishes.
//! When an instruction returns no successor, the host pops one frame and
//! resumes at its return instruction.
//!
//! `Continue` and host `break` unwind several frames at once. They need to
//! know which frames belong to loops, so each frame records whether its
//! return instruction stops break propagation at push time.

use vizzy_ir::InstrId;

/// Error raised when pushing a frame would exceed the configured depth.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("call stack depth limit of {max} frames exceeded")]
pub struct CallStackError {
    pub max: usize,
}

/// A single entry in the call stack.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CallFrame {
    /// Instruction to resume when this frame is popped. `None` ends the
    /// scope without resuming anywhere.
    pub return_instruction: Option<InstrId>,
    /// Copied from the return instruction when the frame was pushed.
    /// `true` marks a loop boundary.
    pub stop_break_propagation: bool,
}

impl CallFrame {
    /// A frame that resumes nowhere.
    pub const DETACHED: CallFrame = CallFrame {
        return_instruction: None,
        stop_break_propagation: false,
    };

    pub const fn new(return_instruction: Option<InstrId>, stop_break_propagation: bool) -> Self {
        CallFrame {
            return_instruction,
            stop_break_propagation,
        }
    }

    /// Whether unwinding should stop at this frame.
    #[inline]
    pub fn is_loop_boundary(&self) -> bool {
        self.return_instruction.is_some() && self.stop_break_propagation
    }
}

/// LIFO stack of call frames owned by one thread context.
///
/// The depth check is integrated into `push()`; `None` means unlimited.
#[derive(Clone, Debug)]
pub struct CallStack {
    frames: Vec<CallFrame>,
    max_depth: Option<usize>,
}

impl CallStack {
    pub fn new(max_depth: Option<usize>) -> Self {
        Self {
            frames: Vec::new(),
            max_depth,
        }
    }

    /// Push a frame, checking the depth limit.
    ///
    /// The frame is NOT pushed on overflow.
    pub fn push(&mut self, frame: CallFrame) -> Result<(), CallStackError> {
        if let Some(max) = self.max_depth {
            if self.frames.len() >= max {
                return Err(CallStackError { max });
            }
        }
        self.frames.push(frame);
        Ok(())
    }

    /// Pop the most recent frame. Popping an empty stack returns `None`.
    pub fn pop(&mut self) -> Option<CallFrame> {
        self.frames.pop()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

impl Default for CallStack {
    /// Creates an unlimited call stack.
    fn default() -> Self {
        Self::new(None)
    }
}
