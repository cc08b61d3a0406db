use tracing::debug;
use vizzy_ir::{Element, InstrId, ProgramNode};

use super::VARIABLE_NAME_ATTRIBUTE;
use crate::{InstructionLinks, ProgramInstruction, ThreadContext};

/// `<SetVariable variableName="…">` assigns child 0.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SetVariable {
    name: String,
}

impl SetVariable {
    pub fn new(name: &str) -> Self {
        SetVariable {
            name: name.to_string(),
        }
    }
}

impl ProgramNode for SetVariable {
    fn on_deserialized(&mut self, element: &Element) {
        self.name = element
            .attribute(VARIABLE_NAME_ATTRIBUTE)
            .unwrap_or_default()
            .to_string();
    }

    fn on_serialized(&self, element: &mut Element) {
        element.set_attribute(VARIABLE_NAME_ATTRIBUTE, self.name.as_str());
    }
}

impl ProgramInstruction for SetVariable {
    fn execute(&self, links: &InstructionLinks, ctx: &mut ThreadContext<'_>) -> Option<InstrId> {
        let value = ctx.evaluate_child(&links.expressions, 0);
        ctx.set_variable(self.name.as_str(), value);
        links.next
    }
}

/// `<Log>` appends child 0, as text, to the thread output.
#[derive(Clone, Debug, Default)]
pub struct Log;

impl ProgramNode for Log {}

impl ProgramInstruction for Log {
    fn execute(&self, links: &InstructionLinks, ctx: &mut ThreadContext<'_>) -> Option<InstrId> {
        let value = ctx.evaluate_child(&links.expressions, 0);
        ctx.log(value.text_value());
        links.next
    }
}

/// `<If>` runs its body when child 0 is true, then continues after itself.
#[derive(Clone, Debug, Default)]
pub struct If;

impl ProgramNode for If {}

impl ProgramInstruction for If {
    fn supports_children(&self) -> bool {
        true
    }

    fn execute(&self, links: &InstructionLinks, ctx: &mut ThreadContext<'_>) -> Option<InstrId> {
        let condition = ctx.evaluate_child(&links.expressions, 0).bool_value();
        match links.first_child {
            Some(body) if condition => ctx.enter_scope(links.next).then_some(body),
            _ => links.next,
        }
    }
}

/// `<While>` runs its body while child 0 is true.
///
/// Each pass pushes a frame returning to the loop itself, so the condition
/// is re-checked when the body finishes or a `Continue` unwinds to it.
#[derive(Clone, Debug, Default)]
pub struct While;

impl ProgramNode for While {}

impl ProgramInstruction for While {
    fn supports_children(&self) -> bool {
        true
    }

    fn stop_break_propagation(&self) -> bool {
        true
    }

    fn execute(&self, links: &InstructionLinks, ctx: &mut ThreadContext<'_>) -> Option<InstrId> {
        let condition = ctx.evaluate_child(&links.expressions, 0).bool_value();
        match links.first_child {
            Some(body) if condition => ctx.enter_scope(Some(links.id)).then_some(body),
            _ => links.next,
        }
    }
}

/// `<Break />` leaves the closest enclosing loop.
#[derive(Clone, Debug, Default)]
pub struct Break;

impl ProgramNode for Break {}

impl ProgramInstruction for Break {
    fn execute(&self, _links: &InstructionLinks, ctx: &mut ThreadContext<'_>) -> Option<InstrId> {
        while let Some(frame) = ctx.pop_frame() {
            if let (true, Some(looped)) = (frame.is_loop_boundary(), frame.return_instruction) {
                return ctx.program().instruction(looped).links.next;
            }
        }
        debug!("break outside of a loop ends the thread");
        None
    }
}
