//! Owned XML-like element trees.
//!
//! Programs and toolboxes persist as element trees: each program node is an
//! element named after its tag, configuration slots are attributes, and
//! child nodes are child elements. Text content carries no meaning in either
//! format and is dropped on read.

use std::fmt;
use std::str::FromStr;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

/// Error raised while reading an element tree from text.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ElementError {
    #[error("malformed XML: {0}")]
    Xml(String),
    #[error("malformed attribute on <{element}>: {message}")]
    Attribute { element: String, message: String },
    #[error("element name is not valid UTF-8")]
    InvalidName,
    #[error("closing tag </{found}> does not match <{expected}>")]
    MismatchedEnd { expected: String, found: String },
    #[error("element <{0}> is never closed")]
    Unclosed(String),
    #[error("document has no root element")]
    NoRoot,
    #[error("document has more than one root element")]
    MultipleRoots,
}

/// A single element: name, ordered attributes and ordered children.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<Element>,
}

impl Element {
    /// Create an empty element.
    pub fn new(name: impl Into<String>) -> Self {
        Element {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename the element in place (used to normalize legacy tags on write).
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Look up an attribute value.
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Set an attribute, replacing an existing value in place.
    pub fn set_attribute(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        if let Some(slot) = self.attributes.iter_mut().find(|(k, _)| k == key) {
            slot.1 = value;
        } else {
            self.attributes.push((key.to_string(), value));
        }
    }

    /// Set an attribute when `value` is present, remove it otherwise.
    pub fn set_optional_attribute(&mut self, key: &str, value: Option<&str>) {
        match value {
            Some(v) => self.set_attribute(key, v),
            None => self.remove_attribute(key),
        }
    }

    pub fn remove_attribute(&mut self, key: &str) {
        self.attributes.retain(|(k, _)| k != key);
    }

    /// Iterate attributes in document order.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    pub fn push_child(&mut self, child: Element) {
        self.children.push(child);
    }

    /// First child with the given name.
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Builder-style attribute setter.
    #[must_use]
    pub fn with_attribute(mut self, key: &str, value: impl Into<String>) -> Self {
        self.set_attribute(key, value);
        self
    }

    /// Builder-style child appender.
    #[must_use]
    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    /// Parse a document containing exactly one root element.
    pub fn parse(text: &str) -> Result<Element, ElementError> {
        let mut reader = Reader::from_str(text);
        let mut open: Vec<Element> = Vec::new();
        let mut root: Option<Element> = None;

        loop {
            let event = reader
                .read_event()
                .map_err(|e| ElementError::Xml(e.to_string()))?;
            match event {
                Event::Start(start) => open.push(start_element(&start)?),
                Event::Empty(start) => {
                    let element = start_element(&start)?;
                    attach(element, &mut open, &mut root)?;
                }
                Event::End(end) => {
                    let found = std::str::from_utf8(end.name().as_ref())
                        .map_err(|_| ElementError::InvalidName)?
                        .to_string();
                    let Some(element) = open.pop() else {
                        return Err(ElementError::Xml(format!("unexpected </{found}>")));
                    };
                    if element.name != found {
                        return Err(ElementError::MismatchedEnd {
                            expected: element.name.clone(),
                            found,
                        });
                    }
                    attach(element, &mut open, &mut root)?;
                }
                Event::Eof => break,
                // Declarations, comments, text and processing instructions
                // carry no meaning in program or toolbox documents.
                _ => {}
            }
        }

        if let Some(unclosed) = open.pop() {
            return Err(ElementError::Unclosed(unclosed.name.clone()));
        }
        root.ok_or(ElementError::NoRoot)
    }

    /// Render as indented XML text.
    pub fn to_xml(&self) -> String {
        enum Step<'a> {
            Open(&'a Element, usize),
            Close(&'a Element, usize),
        }

        let mut out = String::new();
        let mut stack = vec![Step::Open(self, 0)];
        while let Some(step) = stack.pop() {
            match step {
                Step::Open(element, depth) => {
                    indent(&mut out, depth);
                    out.push('<');
                    out.push_str(&element.name);
                    for (key, value) in &element.attributes {
                        out.push(' ');
                        out.push_str(key);
                        out.push_str("=\"");
                        out.push_str(&quick_xml::escape::escape(value.as_str()));
                        out.push('"');
                    }
                    if element.children.is_empty() {
                        out.push_str(" />\n");
                        continue;
                    }
                    out.push_str(">\n");
                    stack.push(Step::Close(element, depth));
                    // Reversed so the first child is written first.
                    for child in element.children.iter().rev() {
                        stack.push(Step::Open(child, depth + 1));
                    }
                }
                Step::Close(element, depth) => {
                    indent(&mut out, depth);
                    out.push_str("</");
                    out.push_str(&element.name);
                    out.push_str(">\n");
                }
            }
        }
        out
    }
}

impl Drop for Element {
    // Flattened so deep trees drop without recursion.
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut child) = pending.pop() {
            pending.append(&mut child.children);
        }
    }
}

fn indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push_str("  ");
    }
}

fn start_element(start: &BytesStart<'_>) -> Result<Element, ElementError> {
    let name = std::str::from_utf8(start.name().as_ref())
        .map_err(|_| ElementError::InvalidName)?
        .to_string();
    let mut element = Element::new(name);
    for attribute in start.attributes() {
        let attribute = attribute.map_err(|e| ElementError::Attribute {
            element: element.name.clone(),
            message: e.to_string(),
        })?;
        let key = std::str::from_utf8(attribute.key.as_ref())
            .map_err(|_| ElementError::InvalidName)?
            .to_string();
        let value = attribute
            .unescape_value()
            .map_err(|e| ElementError::Attribute {
                element: element.name.clone(),
                message: e.to_string(),
            })?
            .into_owned();
        element.attributes.push((key, value));
    }
    Ok(element)
}

fn attach(
    element: Element,
    open: &mut [Element],
    root: &mut Option<Element>,
) -> Result<(), ElementError> {
    if let Some(parent) = open.last_mut() {
        parent.children.push(element);
        Ok(())
    } else if root.is_some() {
        Err(ElementError::MultipleRoots)
    } else {
        *root = Some(element);
        Ok(())
    }
}

impl FromStr for Element {
    type Err = ElementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Element::parse(s)
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_xml())
    }
}

#[cfg(test)]
mod tests;
