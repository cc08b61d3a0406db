use super::*;
use crate::host::Constant;
use crate::testing::eval_root;
use crate::{EmptyWorld, Program};
use pretty_assertions::assert_eq;

fn compare(op: &str, left: &str, right: &str) -> Value {
    let mut program = Program::new("test");
    let l = program.add_expression(Constant::text(left), []);
    let r = program.add_expression(Constant::text(right), []);
    let root = program.add_expression(StringComparison::new(op), [l, r]);
    eval_root(&program, &EmptyWorld, root)
}

#[test]
fn test_ordinal_comparisons() {
    assert_eq!(compare("equals", "abc", "abc"), Value::Bool(true));
    assert_eq!(compare("equals", "abc", "ABC"), Value::Bool(false));
    assert_eq!(compare("less-than", "Zebra", "apple"), Value::Bool(true));
    assert_eq!(compare("less-than-or-equal", "a", "a"), Value::Bool(true));
    assert_eq!(compare("greater-than", "b", "a"), Value::Bool(true));
    assert_eq!(compare("greater-than-or-equal", "a", "b"), Value::Bool(false));
    assert_eq!(compare("starts-with", "Droo Orbit", "Droo"), Value::Bool(true));
    assert_eq!(compare("ends-with", "Droo Orbit", "Droo"), Value::Bool(false));
}

#[test]
fn test_matches() {
    assert_eq!(compare("matches", "abc123", "^[a-z]+\\d+$"), Value::Bool(true));
    assert_eq!(compare("matches", "abc", "^\\d+$"), Value::Bool(false));
}

#[test]
fn test_invalid_pattern_is_false() {
    assert_eq!(compare("matches", "abc", "("), Value::Bool(false));
}

#[test]
fn test_unknown_operator_is_false() {
    assert_eq!(compare("contains", "abc", "b"), Value::Bool(false));
}

#[test]
fn test_regex_is_compiled_once_per_pattern() {
    let mut program = Program::new("test");
    let first = program.add_expression(Constant::text("abc123"), []);
    let second = program.add_expression(Constant::text("xyz"), []);
    let pattern = program.add_expression(Constant::text("^[a-z]+\\d+$"), []);
    let invalid = program.add_expression(Constant::text("("), []);

    let node = StringComparison::new("matches");
    let mut ctx = ThreadContext::new(&program, &EmptyWorld);
    assert_eq!(node.evaluate(&[first, pattern], &mut ctx), Value::Bool(true));
    assert_eq!(node.evaluate(&[second, pattern], &mut ctx), Value::Bool(false));
    assert_eq!(node.evaluate(&[first, pattern], &mut ctx), Value::Bool(true));
    assert_eq!(node.regex_compile_count(), 1);

    assert_eq!(node.evaluate(&[first, invalid], &mut ctx), Value::Bool(false));
    assert_eq!(node.evaluate(&[second, invalid], &mut ctx), Value::Bool(false));
    assert_eq!(node.regex_compile_count(), 2);
}

#[test]
fn test_default_operator_is_equals() {
    let node = StringComparison::default();
    assert_eq!(node.comparison(), Some(Comparison::Equals));
    assert!(node.is_boolean());
}

#[test]
fn test_set_list_value_round_trip() {
    let mut node = StringComparison::default();
    node.set_list_value("op", "Matches");
    assert_eq!(node.list_value("op"), Some("Matches"));
    assert_eq!(node.comparison(), Some(Comparison::Matches));
    assert!(node.is_boolean());
}
