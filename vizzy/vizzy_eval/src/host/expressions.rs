use tracing::{debug, warn};
use vizzy_ir::{Element, ExprId, ListItemInfo, ListItemKind, ProgramNode, Value};

use super::VARIABLE_NAME_ATTRIBUTE;
use crate::options::{ListOption, ListSlot, OptionTable};
use crate::{ProgramExpression, ThreadContext};

/// `<Constant number="…" />`, `<Constant text="…" />` or `<Constant bool="…" />`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Constant {
    value: Value,
}

impl Constant {
    pub fn new(value: Value) -> Self {
        Constant { value }
    }

    pub fn number(n: f64) -> Self {
        Constant::new(Value::Number(n))
    }

    pub fn text(s: &str) -> Self {
        Constant::new(Value::text(s))
    }

    pub fn boolean(b: bool) -> Self {
        Constant::new(Value::Bool(b))
    }

    pub fn value(&self) -> &Value {
        &self.value
    }
}

impl ProgramNode for Constant {
    fn on_deserialized(&mut self, element: &Element) {
        self.value = if let Some(n) = element.attribute("number") {
            Value::Number(n.trim().parse().unwrap_or(0.0))
        } else if let Some(b) = element.attribute("bool") {
            Value::Bool(b.trim().eq_ignore_ascii_case("true"))
        } else {
            Value::text(element.attribute("text").unwrap_or_default())
        };
    }

    fn on_serialized(&self, element: &mut Element) {
        match &self.value {
            Value::Number(n) => element.set_attribute("number", n.to_string()),
            Value::Bool(b) => element.set_attribute("bool", b.to_string()),
            other => element.set_attribute("text", other.text_value()),
        }
    }
}

impl ProgramExpression for Constant {
    fn is_boolean(&self) -> bool {
        matches!(self.value, Value::Bool(_))
    }

    fn evaluate(&self, _children: &[ExprId], _ctx: &mut ThreadContext<'_>) -> Value {
        self.value.clone()
    }
}

/// `<Variable variableName="…" />`
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Variable {
    name: String,
}

impl Variable {
    pub fn new(name: &str) -> Self {
        Variable {
            name: name.to_string(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl ProgramNode for Variable {
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

impl ProgramExpression for Variable {
    fn evaluate(&self, _children: &[ExprId], ctx: &mut ThreadContext<'_>) -> Value {
        if let Some(value) = ctx.variable(&self.name) {
            return value.clone();
        }
        debug!(variable = %self.name, "unset variable, using 0");
        Value::ZERO
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Less,
    LessOrEqual,
    Greater,
    GreaterOrEqual,
    Equal,
    NotEqual,
    And,
    Or,
}

impl BinaryOperator {
    pub fn is_boolean(self) -> bool {
        !matches!(
            self,
            Self::Add | Self::Subtract | Self::Multiply | Self::Divide
        )
    }

    fn apply(self, left: &Value, right: &Value) -> Value {
        let (a, b) = (left.number_value(), right.number_value());
        match self {
            Self::Add => Value::Number(a + b),
            Self::Subtract => Value::Number(a - b),
            Self::Multiply => Value::Number(a * b),
            Self::Divide => Value::Number(a / b),
            Self::Less => Value::Bool(a < b),
            Self::LessOrEqual => Value::Bool(a <= b),
            Self::Greater => Value::Bool(a > b),
            Self::GreaterOrEqual => Value::Bool(a >= b),
            Self::Equal => Value::Bool(loosely_equal(left, right)),
            Self::NotEqual => Value::Bool(!loosely_equal(left, right)),
            Self::And => Value::Bool(left.bool_value() && right.bool_value()),
            Self::Or => Value::Bool(left.bool_value() || right.bool_value()),
        }
    }
}

/// Numbers compare numerically, everything else by text.
fn loosely_equal(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => a == b,
        _ => left.text_value() == right.text_value(),
    }
}

impl OptionTable for BinaryOperator {
    const OPTIONS: &'static [ListOption<Self>] = &[
        ListOption::new(Self::Add, "+", "+", "Addition.", ListItemKind::Number),
        ListOption::new(Self::Subtract, "-", "-", "Subtraction.", ListItemKind::Number),
        ListOption::new(Self::Multiply, "*", "*", "Multiplication.", ListItemKind::Number),
        ListOption::new(Self::Divide, "/", "/", "Division.", ListItemKind::Number),
        ListOption::new(Self::Less, "<", "<", "Less than.", ListItemKind::None),
        ListOption::new(Self::LessOrEqual, "<=", "<=", "Less than or equal.", ListItemKind::None),
        ListOption::new(Self::Greater, ">", ">", "Greater than.", ListItemKind::None),
        ListOption::new(Self::GreaterOrEqual, ">=", ">=", "Greater than or equal.", ListItemKind::None),
        ListOption::new(Self::Equal, "=", "=", "Equal.", ListItemKind::None),
        ListOption::new(Self::NotEqual, "!=", "!=", "Not equal.", ListItemKind::None),
        ListOption::new(Self::And, "and", "and", "Both values are true.", ListItemKind::None),
        ListOption::new(Self::Or, "or", "or", "Either value is true.", ListItemKind::None),
    ];
}

/// `<BinaryOp op="…">` over children 0 and 1.
#[derive(Clone, Debug, Default)]
pub struct BinaryOp {
    op: ListSlot<BinaryOperator>,
}

impl BinaryOp {
    pub fn new(key: &str) -> Self {
        BinaryOp {
            op: ListSlot::with_key(key),
        }
    }
}

impl ProgramNode for BinaryOp {
    fn list_items(&self, _list_id: &str) -> Vec<ListItemInfo> {
        BinaryOperator::list_items()
    }

    fn list_value(&self, _list_id: &str) -> Option<&str> {
        self.op.key()
    }

    fn set_list_value(&mut self, _list_id: &str, value: &str) {
        self.op.set(value);
    }

    fn on_deserialized(&mut self, element: &Element) {
        self.op.load(element, "op");
    }

    fn on_serialized(&self, element: &mut Element) {
        self.op.store(element, "op");
    }
}

impl ProgramExpression for BinaryOp {
    fn is_boolean(&self) -> bool {
        self.op.get().is_some_and(BinaryOperator::is_boolean)
    }

    fn evaluate(&self, children: &[ExprId], ctx: &mut ThreadContext<'_>) -> Value {
        let left = ctx.evaluate_child(children, 0);
        let right = ctx.evaluate_child(children, 1);
        match self.op.get() {
            Some(op) => op.apply(&left, &right),
            None => {
                warn!(op = %self.op, "unknown binary operator");
                Value::ZERO
            }
        }
    }
}
