#![allow(clippy::unwrap_used, clippy::expect_used)]

use pretty_assertions::assert_eq;
use vizzy_eval::host::{Constant, Log};
use vizzy_eval::nodes::{Continue, GetCraftId, NumericConstant};
use vizzy_eval::testing::{eval_root, run_program, MockWorld};
use vizzy_eval::Program;
use vizzy_ir::{Element, NodeType};

use super::*;
use crate::{register_host_nodes, NodeCreator};

fn registry() -> NodeRegistry {
    let mut registry = NodeRegistry::new();
    register_host_nodes(&mut registry);
    registry.register("NumericConstant", NodeCreator::expression::<NumericConstant>());
    registry.register("Continue", NodeCreator::instruction::<Continue>());
    registry.register("GetCraftId", NodeCreator::expression::<GetCraftId>());
    registry.register("TargetCraftId", NodeCreator::expression::<GetCraftId>());
    registry
}

const COUNTER: &str = r#"
<Program name="Counter">
  <Instructions>
    <SetVariable variableName="i">
      <Constant number="0" />
    </SetVariable>
    <While>
      <BinaryOp op="&lt;">
        <Variable variableName="i" />
        <Constant number="3" />
      </BinaryOp>
      <Instructions>
        <SetVariable variableName="i">
          <BinaryOp op="+">
            <Variable variableName="i" />
            <Constant number="1" />
          </BinaryOp>
        </SetVariable>
        <Log>
          <Variable variableName="i" />
        </Log>
      </Instructions>
    </While>
    <Log>
      <Constant text="done" />
    </Log>
  </Instructions>
  <Expressions>
    <NumericConstant type="pi" />
  </Expressions>
  <CustomInstructions />
  <CustomExpressions />
</Program>
"#;

#[test]
fn test_deserialized_program_runs() {
    let registry = registry();
    let program = ProgramSerializer::new(&registry)
        .deserialize_str(COUNTER)
        .unwrap();

    assert_eq!(program.name(), "Counter");
    assert_eq!(program.root_instructions().len(), 1);
    assert_eq!(program.root_expressions().len(), 1);

    let output = run_program(&program, &MockWorld::new(), 1_000);
    assert_eq!(output, vec!["1", "2", "3", "done"]);
}

#[test]
fn test_serialize_preserves_tree() {
    let registry = registry();
    let serializer = ProgramSerializer::new(&registry);
    let parsed = Element::parse(COUNTER).unwrap();

    let program = serializer.deserialize(&parsed).unwrap();
    let written = serializer.serialize(&program).unwrap();

    assert_eq!(written, parsed);
}

#[test]
fn test_extension_config_survives_reload() {
    let registry = registry();
    let serializer = ProgramSerializer::new(&registry);
    let program = serializer.deserialize_str(COUNTER).unwrap();

    let text = serializer.serialize_to_string(&program).unwrap();
    let reloaded = serializer.deserialize_str(&text).unwrap();

    let root = reloaded.root_expressions()[0];
    let value = eval_root(&reloaded, &MockWorld::new(), root);
    assert_eq!(value.number_value(), std::f64::consts::PI);
}

#[test]
fn test_legacy_tag_normalizes_on_write() {
    let registry = registry();
    let serializer = ProgramSerializer::new(&registry);
    let program = serializer
        .deserialize_str(
            r#"<Program name="Legacy"><Expressions><TargetCraftId /></Expressions></Program>"#,
        )
        .unwrap();

    let root = program.root_expressions()[0];
    assert_eq!(
        program.expression(root).node.node_type(),
        NodeType::of::<GetCraftId>()
    );

    let written = serializer.serialize(&program).unwrap();
    let expressions = written.child("Expressions").unwrap();
    let node = &expressions.children()[0];
    assert_eq!(node.name(), "GetCraftId");
    assert_eq!(node.attribute("type"), Some("target"));
}

#[test]
fn test_custom_sections() {
    let registry = registry();
    let serializer = ProgramSerializer::new(&registry);
    let program = serializer
        .deserialize_str(
            r#"
            <Program name="Custom">
              <Variables><Variable name="ignored" /></Variables>
              <CustomInstructions>
                <Instructions><Log><Constant text="a" /></Log><Continue /></Instructions>
              </CustomInstructions>
              <CustomExpressions><NumericConstant type="c" /></CustomExpressions>
            </Program>
            "#,
        )
        .unwrap();

    assert_eq!(program.custom_instructions().len(), 1);
    assert_eq!(program.custom_expressions().len(), 1);
    let head = program.custom_instructions()[0];
    assert!(program.instruction(head).links.next.is_some());
}

#[test]
fn test_unknown_tag_is_an_error() {
    let registry = registry();
    let err = ProgramSerializer::new(&registry)
        .deserialize_str(r#"<Program><Expressions><Mystery /></Expressions></Program>"#)
        .unwrap_err();
    assert_eq!(err, SerializeError::UnknownNode("Mystery".to_string()));
}

#[test]
fn test_wrong_kind_is_an_error() {
    let registry = registry();
    let err = ProgramSerializer::new(&registry)
        .deserialize_str(r#"<Program><Instructions><Constant number="1" /></Instructions></Program>"#)
        .unwrap_err();
    assert_eq!(
        err,
        SerializeError::WrongKind {
            tag: "Constant".to_string(),
            expected: NodeKind::Instruction,
            found: NodeKind::Expression,
        }
    );
}

#[test]
fn test_body_on_leaf_instruction_is_an_error() {
    let registry = registry();
    let err = ProgramSerializer::new(&registry)
        .deserialize_str(
            r#"<Program><Instructions><Log><Instructions /></Log></Instructions></Program>"#,
        )
        .unwrap_err();
    assert_eq!(err, SerializeError::UnexpectedBody("Log".to_string()));
}

#[test]
fn test_wrong_root_is_an_error() {
    let registry = registry();
    let err = ProgramSerializer::new(&registry)
        .deserialize_str("<Toolbox />")
        .unwrap_err();
    assert!(matches!(err, SerializeError::UnexpectedElement { expected: "Program", .. }));
}

#[test]
fn test_unregistered_node_cannot_be_written() {
    let registry = NodeRegistry::new();
    let mut program = Program::new("p");
    let text = program.add_expression(Constant::text("hi"), []);
    let log = program.add_instruction(Log, [text]);
    program.add_root_instruction(log);

    let err = ProgramSerializer::new(&registry)
        .serialize(&program)
        .unwrap_err();
    assert!(matches!(err, SerializeError::UnregisteredType(_)));
}

#[test]
fn test_long_chain_and_deep_nesting() {
    let registry = registry();
    let serializer = ProgramSerializer::new(&registry);

    let mut text = String::from("<Program name=\"Big\"><Instructions>");
    for _ in 0..10_000 {
        text.push_str("<Log><Constant text=\"x\" /></Log>");
    }
    for _ in 0..2_000 {
        text.push_str("<If><Constant bool=\"false\" /><Instructions>");
    }
    for _ in 0..2_000 {
        text.push_str("</Instructions></If>");
    }
    text.push_str("</Instructions></Program>");

    let program = serializer.deserialize_str(&text).unwrap();
    assert_eq!(program.instruction_count(), 12_000);

    let written = serializer.serialize(&program).unwrap();
    let chain = written.child("Instructions").unwrap();
    assert_eq!(chain.children().len(), 10_001);
}
