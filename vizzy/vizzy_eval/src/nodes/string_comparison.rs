//! Ordinal text comparison and regular-expression matching.

use std::sync::atomic::{AtomicUsize, Ordering};

use dashmap::DashMap;
use regex::Regex;
use tracing::{debug, warn};
use vizzy_ir::{Element, ExprId, ListItemInfo, ListItemKind, NodeOrigin, ProgramNode, Value};

use crate::options::{ListOption, ListSlot, OptionTable};
use crate::{ProgramExpression, ThreadContext};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Comparison {
    Equals,
    LessThan,
    LessThanOrEqual,
    GreaterThan,
    GreaterThanOrEqual,
    StartsWith,
    EndsWith,
    Matches,
}

impl OptionTable for Comparison {
    const OPTIONS: &'static [ListOption<Self>] = &[
        ListOption::new(
            Self::Equals,
            "equals",
            "=",
            "Checks whether or not the text values are exactly equal.",
            ListItemKind::None,
        ),
        ListOption::new(
            Self::LessThan,
            "less-than",
            "<",
            "Checks whether or not the first text value comes before the second alphabetically.",
            ListItemKind::None,
        ),
        ListOption::new(
            Self::LessThanOrEqual,
            "less-than-or-equal",
            "<=",
            "Checks whether or not the first text value comes before or is the same as the second alphabetically.",
            ListItemKind::None,
        ),
        ListOption::new(
            Self::GreaterThan,
            "greater-than",
            ">",
            "Checks whether or not the first text value comes after the second alphabetically.",
            ListItemKind::None,
        ),
        ListOption::new(
            Self::GreaterThanOrEqual,
            "greater-than-or-equal",
            ">=",
            "Checks whether or not the first text value comes after or is the same as the second alphabetically.",
            ListItemKind::None,
        ),
        ListOption::new(
            Self::StartsWith,
            "starts-with",
            "Starts With",
            "Checks whether or not the text starts with the specified prefix.",
            ListItemKind::None,
        ),
        ListOption::new(
            Self::EndsWith,
            "ends-with",
            "Ends With",
            "Checks whether or not the text ends with the specified suffix.",
            ListItemKind::None,
        ),
        ListOption::new(
            Self::Matches,
            "matches",
            "Matches",
            "Checks whether or not the text matches the specified regular expression.",
            ListItemKind::None,
        ),
    ];
}

/// `<StringComparison op="…">`; compares child 0 against child 1.
///
/// `matches` treats child 1 as a pattern. Compiled patterns are cached per
/// node for its lifetime, including patterns that failed to compile.
#[derive(Debug)]
pub struct StringComparison {
    op: ListSlot<Comparison>,
    regex_cache: DashMap<String, Option<Regex>>,
    regex_compiles: AtomicUsize,
}

impl StringComparison {
    pub fn new(key: &str) -> Self {
        StringComparison {
            op: ListSlot::with_key(key),
            regex_cache: DashMap::new(),
            regex_compiles: AtomicUsize::new(0),
        }
    }

    pub fn comparison(&self) -> Option<Comparison> {
        self.op.get()
    }

    #[cfg(test)]
    pub(crate) fn regex_compile_count(&self) -> usize {
        self.regex_compiles.load(Ordering::Relaxed)
    }

    /// `None` when `pattern` is not a valid regular expression.
    fn is_match(&self, text: &str, pattern: &str) -> Option<bool> {
        if let Some(cached) = self.regex_cache.get(pattern) {
            return cached.as_ref().map(|regex| regex.is_match(text));
        }
        let entry = self
            .regex_cache
            .entry(pattern.to_string())
            .or_insert_with(|| {
                let compiled = self.regex_compiles.fetch_add(1, Ordering::Relaxed) + 1;
                debug!(pattern, compiled, "compiling pattern");
                match Regex::new(pattern) {
                    Ok(regex) => Some(regex),
                    Err(err) => {
                        warn!(pattern, %err, "invalid regular expression");
                        None
                    }
                }
            });
        entry.as_ref().map(|regex| regex.is_match(text))
    }
}

impl Default for StringComparison {
    fn default() -> Self {
        StringComparison::new("equals")
    }
}

impl ProgramNode for StringComparison {
    fn origin(&self) -> NodeOrigin {
        NodeOrigin::Extension
    }

    fn list_items(&self, _list_id: &str) -> Vec<ListItemInfo> {
        Comparison::list_items()
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

impl ProgramExpression for StringComparison {
    fn is_boolean(&self) -> bool {
        true
    }

    fn evaluate(&self, children: &[ExprId], ctx: &mut ThreadContext<'_>) -> Value {
        let left = ctx.evaluate_child(children, 0);
        let right = ctx.evaluate_child(children, 1);
        let (left, right) = (left.text_value(), right.text_value());

        let result = match self.op.get() {
            Some(Comparison::Equals) => left == right,
            Some(Comparison::LessThan) => left < right,
            Some(Comparison::LessThanOrEqual) => left <= right,
            Some(Comparison::GreaterThan) => left > right,
            Some(Comparison::GreaterThanOrEqual) => left >= right,
            Some(Comparison::StartsWith) => left.starts_with(right.as_ref()),
            Some(Comparison::EndsWith) => left.ends_with(right.as_ref()),
            Some(Comparison::Matches) => self.is_match(&left, &right).unwrap_or(false),
            None => {
                warn!(op = %self.op, "unknown string comparison operator");
                false
            }
        };
        Value::Bool(result)
    }
}

#[cfg(test)]
mod tests;
