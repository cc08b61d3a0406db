//! Well-known physical and mathematical constants.

use tracing::warn;
use vizzy_ir::{Element, ExprId, ListItemInfo, ListItemKind, NodeOrigin, ProgramNode, Value};

use crate::options::{ListOption, ListSlot, OptionTable};
use crate::{ProgramExpression, ThreadContext};

/// Newton's gravitational constant, m³ kg⁻¹ s⁻².
pub const GRAVITATIONAL_CONSTANT: f64 = 6.6743e-11;

/// Speed of light in vacuum, m/s.
pub const SPEED_OF_LIGHT: f64 = 299_792_458.0;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Constant {
    Pi,
    G,
    E,
    C,
}

impl Constant {
    pub fn value(self) -> f64 {
        match self {
            Constant::Pi => std::f64::consts::PI,
            Constant::G => GRAVITATIONAL_CONSTANT,
            Constant::E => std::f64::consts::E,
            Constant::C => SPEED_OF_LIGHT,
        }
    }
}

impl OptionTable for Constant {
    const OPTIONS: &'static [ListOption<Self>] = &[
        ListOption::new(Constant::Pi, "pi", "π", "The ratio of a circle's circumference to its diameter.", ListItemKind::Number),
        ListOption::new(Constant::G, "g", "G", "The gravitational constant.", ListItemKind::Number),
        ListOption::new(Constant::E, "e", "e", "Euler's number.", ListItemKind::Number),
        ListOption::new(Constant::C, "c", "c", "The speed of light in a vacuum (m/s).", ListItemKind::Number),
    ];
}

/// `<NumericConstant type="…" />`
#[derive(Clone, Debug, Default)]
pub struct NumericConstant {
    constant: ListSlot<Constant>,
}

impl NumericConstant {
    pub fn new(key: &str) -> Self {
        NumericConstant {
            constant: ListSlot::with_key(key),
        }
    }

    pub fn constant(&self) -> Option<Constant> {
        self.constant.get()
    }
}

impl ProgramNode for NumericConstant {
    fn origin(&self) -> NodeOrigin {
        NodeOrigin::Extension
    }

    fn list_items(&self, _list_id: &str) -> Vec<ListItemInfo> {
        Constant::list_items()
    }

    fn list_value(&self, _list_id: &str) -> Option<&str> {
        self.constant.key()
    }

    fn set_list_value(&mut self, _list_id: &str, value: &str) {
        self.constant.set(value);
    }

    fn on_deserialized(&mut self, element: &Element) {
        self.constant.load(element, "type");
    }

    fn on_serialized(&self, element: &mut Element) {
        self.constant.store(element, "type");
    }
}

impl ProgramExpression for NumericConstant {
    fn evaluate(&self, _children: &[ExprId], _ctx: &mut ThreadContext<'_>) -> Value {
        match self.constant.get() {
            Some(constant) => Value::Number(constant.value()),
            None => {
                warn!(constant = %self.constant, "unrecognized numeric constant");
                Value::ZERO
            }
        }
    }
}
