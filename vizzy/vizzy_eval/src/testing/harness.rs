#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test harness, panics provide clear failure messages"
)]
//! Evaluation helpers for node tests.

use vizzy_ir::{ExprId, Value};

use crate::{CraftContext, Interpreter, Program, RunOutcome, ThreadContext};

/// Build a program with `build`, then evaluate the expression it returns.
pub fn eval_with(world: &dyn CraftContext, build: impl FnOnce(&mut Program) -> ExprId) -> Value {
    let mut program = Program::new("test");
    let root = build(&mut program);
    eval_root(&program, world, root)
}

/// Evaluate `root` of an existing program.
pub fn eval_root(program: &Program, world: &dyn CraftContext, root: ExprId) -> Value {
    let mut ctx = ThreadContext::new(program, world);
    ctx.evaluate(root)
}

/// Run the program's first thread to completion and return its log output.
///
/// Panics if the thread does not finish within `max_steps` or overflows
/// its call stack.
pub fn run_program(program: &Program, world: &dyn CraftContext, max_steps: usize) -> Vec<String> {
    let start = program.root_instructions().first().copied();
    let mut interpreter = Interpreter::new(ThreadContext::new(program, world), start);
    let outcome = interpreter.run(max_steps).expect("call stack overflow");
    assert!(
        matches!(outcome, RunOutcome::Completed { .. }),
        "thread did not finish: {outcome:?}"
    );
    interpreter.into_context().output().to_vec()
}

/// Assert that `value` is a number within 1e-9 of `expected`.
#[track_caller]
pub fn assert_number(value: &Value, expected: f64) {
    match value {
        Value::Number(n) => assert!(
            (n - expected).abs() < 1e-9,
            "expected {expected}, got {n}"
        ),
        other => panic!("expected Number({expected}), got {other:?}"),
    }
}
