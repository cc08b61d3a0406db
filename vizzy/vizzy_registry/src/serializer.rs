//! Program persistence.
//!
//! # Tree shape
//!
//! ```text
//! <Program name="…">
//!   <Instructions>            one chain per top-level thread
//!     <While>
//!       <Constant bool="true" />     child expressions, in order
//!       <Instructions> … </Instructions>   nested body (container nodes only)
//!     </While>
//!   </Instructions>
//!   <Expressions> … </Expressions>
//!   <CustomInstructions>
//!     <Instructions> … </Instructions>
//!   </CustomInstructions>
//!   <CustomExpressions> … </CustomExpressions>
//! </Program>
//! ```
//!
//! Tags resolve through the `NodeRegistry`. Node configuration is restored
//! with `on_deserialized` and written with `on_serialized`, which may rename
//! the element (legacy tags are normalized that way).

use tracing::debug;
use vizzy_eval::{ensure_sufficient_stack, Program};
use vizzy_ir::{Element, ElementError, ExprId, InstrId, NodeType, ProgramNode};

use crate::{NodeInstance, NodeKind, NodeRegistry};

const PROGRAM: &str = "Program";
const INSTRUCTIONS: &str = "Instructions";
const EXPRESSIONS: &str = "Expressions";
const CUSTOM_INSTRUCTIONS: &str = "CustomInstructions";
const CUSTOM_EXPRESSIONS: &str = "CustomExpressions";

/// Error raised while reading or writing a program.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SerializeError {
    #[error(transparent)]
    Element(#[from] ElementError),
    #[error("expected <{expected}>, found <{found}>")]
    UnexpectedElement { expected: &'static str, found: String },
    #[error("unknown program node <{0}>")]
    UnknownNode(String),
    #[error("<{tag}> is an {found:?}, expected an {expected:?}")]
    WrongKind {
        tag: String,
        expected: NodeKind,
        found: NodeKind,
    },
    #[error("<{0}> cannot contain nested instructions")]
    UnexpectedBody(String),
    #[error("node type `{0}` has no registered tag")]
    UnregisteredType(&'static str),
}

/// Reads and writes programs using the tags of one registry.
#[derive(Copy, Clone, Debug)]
pub struct ProgramSerializer<'r> {
    registry: &'r NodeRegistry,
}

impl<'r> ProgramSerializer<'r> {
    pub fn new(registry: &'r NodeRegistry) -> Self {
        ProgramSerializer { registry }
    }

    /// Parse program text.
    pub fn deserialize_str(&self, text: &str) -> Result<Program, SerializeError> {
        let root = Element::parse(text)?;
        self.deserialize(&root)
    }

    /// Build a program from its element tree.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn deserialize(&self, root: &Element) -> Result<Program, SerializeError> {
        expect_name(root, PROGRAM)?;
        let mut program = Program::new(root.attribute("name").unwrap_or_default());

        for section in root.children() {
            match section.name() {
                INSTRUCTIONS => {
                    if let Some(head) = self.read_chain(&mut program, section)? {
                        program.add_root_instruction(head);
                    }
                }
                EXPRESSIONS => {
                    for element in section.children() {
                        let id = self.read_expression(&mut program, element)?;
                        program.add_root_expression(id);
                    }
                }
                CUSTOM_INSTRUCTIONS => {
                    for chain in section.children() {
                        expect_name(chain, INSTRUCTIONS)?;
                        if let Some(head) = self.read_chain(&mut program, chain)? {
                            program.add_custom_instruction(head);
                        }
                    }
                }
                CUSTOM_EXPRESSIONS => {
                    for element in section.children() {
                        let id = self.read_expression(&mut program, element)?;
                        program.add_custom_expression(id);
                    }
                }
                other => debug!(section = other, "skipping program section"),
            }
        }

        debug!(
            expressions = program.expression_count(),
            instructions = program.instruction_count(),
            "program loaded"
        );
        Ok(program)
    }

    /// Write a program as an element tree.
    #[tracing::instrument(level = "debug", skip_all, fields(program = program.name()))]
    pub fn serialize(&self, program: &Program) -> Result<Element, SerializeError> {
        let mut root = Element::new(PROGRAM).with_attribute("name", program.name());

        for &head in program.root_instructions() {
            root.push_child(self.write_chain(program, head)?);
        }

        let mut expressions = Element::new(EXPRESSIONS);
        for &id in program.root_expressions() {
            expressions.push_child(self.write_expression(program, id)?);
        }
        root.push_child(expressions);

        let mut custom_instructions = Element::new(CUSTOM_INSTRUCTIONS);
        for &head in program.custom_instructions() {
            custom_instructions.push_child(self.write_chain(program, head)?);
        }
        root.push_child(custom_instructions);

        let mut custom_expressions = Element::new(CUSTOM_EXPRESSIONS);
        for &id in program.custom_expressions() {
            custom_expressions.push_child(self.write_expression(program, id)?);
        }
        root.push_child(custom_expressions);

        Ok(root)
    }

    /// Write a program as indented text.
    pub fn serialize_to_string(&self, program: &Program) -> Result<String, SerializeError> {
        Ok(self.serialize(program)?.to_xml())
    }

    fn create(&self, tag: &str) -> Result<NodeInstance, SerializeError> {
        self.registry
            .create(tag)
            .ok_or_else(|| SerializeError::UnknownNode(tag.to_string()))
    }

    fn tag_for(&self, node_type: NodeType) -> Result<&'r str, SerializeError> {
        self.registry
            .xml_name_for(node_type)
            .ok_or(SerializeError::UnregisteredType(node_type.name))
    }

    /// Read an `<Instructions>` chain and return its head.
    fn read_chain(
        &self,
        program: &mut Program,
        chain: &Element,
    ) -> Result<Option<InstrId>, SerializeError> {
        let mut ids = Vec::with_capacity(chain.children().len());
        for element in chain.children() {
            ids.push(self.read_instruction(program, element)?);
        }
        Ok(program.chain(&ids))
    }

    fn read_instruction(
        &self,
        program: &mut Program,
        element: &Element,
    ) -> Result<InstrId, SerializeError> {
        ensure_sufficient_stack(|| {
            let mut node = match self.create(element.name())? {
                NodeInstance::Instruction(node) => node,
                other => {
                    return Err(SerializeError::WrongKind {
                        tag: element.name().to_string(),
                        expected: NodeKind::Instruction,
                        found: other.kind(),
                    })
                }
            };
            node.on_deserialized(element);

            let mut expressions = Vec::new();
            let mut body = None;
            for child in element.children() {
                if child.name() == INSTRUCTIONS {
                    if !node.supports_children() {
                        return Err(SerializeError::UnexpectedBody(element.name().to_string()));
                    }
                    body = self.read_chain(program, child)?;
                } else {
                    expressions.push(self.read_expression(program, child)?);
                }
            }

            let id = program.add_boxed_instruction(node, expressions);
            program.set_first_child(id, body);
            Ok(id)
        })
    }

    fn read_expression(
        &self,
        program: &mut Program,
        element: &Element,
    ) -> Result<ExprId, SerializeError> {
        ensure_sufficient_stack(|| {
            let mut node = match self.create(element.name())? {
                NodeInstance::Expression(node) => node,
                other => {
                    return Err(SerializeError::WrongKind {
                        tag: element.name().to_string(),
                        expected: NodeKind::Expression,
                        found: other.kind(),
                    })
                }
            };
            node.on_deserialized(element);

            let mut children = Vec::with_capacity(element.children().len());
            for child in element.children() {
                children.push(self.read_expression(program, child)?);
            }
            Ok(program.add_boxed_expression(node, children))
        })
    }

    fn write_chain(&self, program: &Program, head: InstrId) -> Result<Element, SerializeError> {
        let mut chain = Element::new(INSTRUCTIONS);
        let mut current = Some(head);
        while let Some(id) = current {
            chain.push_child(self.write_instruction(program, id)?);
            current = program.instruction(id).links.next;
        }
        Ok(chain)
    }

    fn write_instruction(&self, program: &Program, id: InstrId) -> Result<Element, SerializeError> {
        ensure_sufficient_stack(|| {
            let slot = program.instruction(id);
            let mut element = Element::new(self.tag_for(slot.node.node_type())?);
            slot.node.on_serialized(&mut element);

            for &child in &slot.links.expressions {
                element.push_child(self.write_expression(program, child)?);
            }
            if let (true, Some(first)) = (slot.node.supports_children(), slot.links.first_child) {
                element.push_child(self.write_chain(program, first)?);
            }
            Ok(element)
        })
    }

    fn write_expression(&self, program: &Program, id: ExprId) -> Result<Element, SerializeError> {
        ensure_sufficient_stack(|| {
            let slot = program.expression(id);
            let mut element = Element::new(self.tag_for(slot.node.node_type())?);
            slot.node.on_serialized(&mut element);

            for &child in &slot.children {
                element.push_child(self.write_expression(program, child)?);
            }
            Ok(element)
        })
    }
}

fn expect_name(element: &Element, expected: &'static str) -> Result<(), SerializeError> {
    if element.name() == expected {
        Ok(())
    } else {
        Err(SerializeError::UnexpectedElement {
            expected,
            found: element.name().to_string(),
        })
    }
}

#[cfg(test)]
mod tests;
