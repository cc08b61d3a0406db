use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_kind_matches_variant() {
    assert_eq!(Value::Number(1.0).kind(), ValueKind::Number);
    assert_eq!(Value::text("a").kind(), ValueKind::Text);
    assert_eq!(Value::Bool(true).kind(), ValueKind::Bool);
    assert_eq!(Value::vector(1.0, 2.0, 3.0).kind(), ValueKind::Vector);
    assert_eq!(Value::list(["a"]).kind(), ValueKind::List);
}

#[test]
fn test_default_is_zero() {
    assert_eq!(Value::default(), Value::Number(0.0));
}

#[test]
fn test_number_reads() {
    assert_eq!(Value::Number(2.5).number_value(), 2.5);
    assert_eq!(Value::Bool(true).number_value(), 1.0);
    assert_eq!(Value::Bool(false).number_value(), 0.0);
    assert_eq!(Value::text(" 42 ").number_value(), 42.0);
    assert_eq!(Value::text("Droo").number_value(), 0.0);
    assert_eq!(Value::vector(1.0, 1.0, 1.0).number_value(), 0.0);
}

#[test]
fn test_text_reads() {
    assert_eq!(Value::text("Droo").text_value(), "Droo");
    assert_eq!(Value::Number(3.0).text_value(), "3");
    assert_eq!(Value::Number(0.5).text_value(), "0.5");
    assert_eq!(Value::Bool(true).text_value(), "true");
    assert_eq!(Value::vector(1.0, 2.0, 3.0).text_value(), "(1, 2, 3)");
    assert_eq!(Value::list(["a", "b"]).text_value(), "a,b");
}

#[test]
fn test_bool_reads() {
    assert!(Value::Bool(true).bool_value());
    assert!(Value::Number(-1.0).bool_value());
    assert!(!Value::Number(0.0).bool_value());
    assert!(Value::text("TRUE").bool_value());
    assert!(!Value::text("yes").bool_value());
}

#[test]
fn test_vector_and_list_reads() {
    assert_eq!(Value::Number(1.0).vector_value(), Vector3d::ZERO);
    assert_eq!(
        Value::vector(0.0, 3.0, 4.0).vector_value(),
        Vector3d::new(0.0, 3.0, 4.0)
    );
    assert_eq!(Value::text("x").list_value().to_vec(), vec!["x".to_string()]);
    assert!(Value::Number(1.0).list_value().is_empty());
}
