#![allow(clippy::unwrap_used)]

use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_parse_nested_document() {
    let doc = r#"<?xml version="1.0" encoding="utf-8"?>
        <Program name="Orbit Helper">
          <!-- a comment -->
          <Instructions>
            <Continue />
            <Log><Constant text="a &amp; b" /></Log>
          </Instructions>
        </Program>"#;

    let root = Element::parse(doc).unwrap();
    assert_eq!(root.name(), "Program");
    assert_eq!(root.attribute("name"), Some("Orbit Helper"));

    let instructions = root.child("Instructions").unwrap();
    assert_eq!(instructions.children().len(), 2);
    assert_eq!(instructions.children()[0].name(), "Continue");

    let constant = &instructions.children()[1].children()[0];
    assert_eq!(constant.attribute("text"), Some("a & b"));
}

#[test]
fn test_attribute_replace_keeps_position() {
    let mut element = Element::new("NumericConstant")
        .with_attribute("type", "PI")
        .with_attribute("style", "numeric-constant");
    element.set_attribute("type", "g");

    let attrs: Vec<_> = element.attributes().collect();
    assert_eq!(attrs, vec![("type", "g"), ("style", "numeric-constant")]);
}

#[test]
fn test_optional_attribute_removes() {
    let mut element = Element::new("GetCraftId").with_attribute("type", "target");
    element.set_optional_attribute("type", None);
    assert_eq!(element.attribute("type"), None);
    element.set_optional_attribute("type", Some("current"));
    assert_eq!(element.attribute("type"), Some("current"));
}

#[test]
fn test_write_then_parse_preserves_tree() {
    let tree = Element::new("Toolbox").with_child(
        Element::new("Colors").with_child(
            Element::new("Color")
                .with_attribute("id", "Orbit")
                .with_attribute("color", "#5A9BD5"),
        ),
    );
    let text = tree.to_xml();
    assert!(text.contains("<Color id=\"Orbit\" color=\"#5A9BD5\" />"));
    assert_eq!(Element::parse(&text).unwrap(), tree);
}

#[test]
fn test_escapes_attribute_values() {
    let tree = Element::new("Constant").with_attribute("text", "<\"quoted\">");
    let parsed: Element = tree.to_xml().parse().unwrap();
    assert_eq!(parsed.attribute("text"), Some("<\"quoted\">"));
}

#[test]
fn test_parse_errors() {
    assert_eq!(Element::parse(""), Err(ElementError::NoRoot));
    assert_eq!(
        Element::parse("<A /><B />"),
        Err(ElementError::MultipleRoots)
    );
    assert!(Element::parse("<A>").is_err());
    assert!(Element::parse("<A></B>").is_err());
}

#[test]
fn test_deeply_nested_tree_writes_reads_and_drops() {
    const DEPTH: usize = 3_000;

    // A small thread stack makes any per-level recursion overflow.
    let handle = std::thread::Builder::new()
        .stack_size(64 * 1024)
        .spawn(|| {
            let mut tree = Element::new("Log");
            for _ in 0..DEPTH {
                tree = Element::new("If").with_child(tree);
            }

            let text = tree.to_xml();
            let lines: Vec<&str> = text.lines().collect();
            assert_eq!(lines.len(), 2 * DEPTH + 1);
            assert_eq!(lines[0], "<If>");
            assert_eq!(lines[DEPTH].trim_start(), "<Log />");
            assert_eq!(lines[2 * DEPTH], "</If>");

            let parsed = Element::parse(&text).unwrap();
            let mut depth = 0;
            let mut node = &parsed;
            while let [child] = node.children() {
                node = child;
                depth += 1;
            }
            (depth, node.name().to_string())
        })
        .unwrap();

    assert_eq!(handle.join().unwrap(), (DEPTH, "Log".to_string()));
}
