use pretty_assertions::assert_eq;
use vizzy_ir::Element;

use super::*;
use crate::{Category, Color, NodeStyle, ToolboxNode};

fn node(tag: &str, style: &str) -> ToolboxNode {
    ToolboxNode::new(Element::new(tag).with_attribute("style", style))
}

fn styles(category: &Category) -> Vec<&str> {
    category.nodes.iter().map(|n| n.style.as_str()).collect()
}

fn base() -> Toolbox {
    let mut toolbox = Toolbox::new();
    toolbox.colors.insert("Operators".into(), Color::rgb(0, 128, 0));
    toolbox.styles.insert("op-math".into(), NodeStyle::new("op-math"));
    toolbox.categories.push(
        Category::new("Operators")
            .with_node(node("BinaryOp", "op-math"))
            .with_node(node("Variable", "variable")),
    );
    toolbox
}

#[test]
fn test_new_category_is_appended() {
    let mut target = base();
    let mut extension = Toolbox::new();
    let mut strings = Category::new("Strings")
        .with_node(node("Split", "split"))
        .with_node(node("StringComparison", "string-compare"));
    strings.color = Some("Text".into());
    extension.categories.push(strings.clone());

    let report = merge_toolbox(&mut target, &extension);

    assert_eq!(report.categories_added, 1);
    assert_eq!(report.templates_added, 0);
    assert_eq!(target.categories.len(), 2);
    assert_eq!(target.categories.last(), Some(&strings));
}

#[test]
fn test_duplicate_style_is_skipped() {
    let mut target = base();
    let mut extension = Toolbox::new();
    extension.categories.push(
        Category::new("operators")
            .with_node(node("BinaryOp", "op-math"))
            .with_node(node("AdvancedUnaryMath", "op-unary-adv"))
            .with_node(node("NumericConstant", "op-constant")),
    );

    let report = merge_toolbox(&mut target, &extension);

    assert_eq!(
        report,
        MergeReport {
            templates_added: 2,
            duplicates_skipped: 1,
            ..MergeReport::default()
        }
    );
    assert_eq!(target.categories.len(), 1);
    assert_eq!(
        styles(&target.categories[0]),
        vec!["op-math", "variable", "op-unary-adv", "op-constant"]
    );
}

#[test]
fn test_style_match_is_case_sensitive() {
    let mut target = base();
    let mut extension = Toolbox::new();
    extension
        .categories
        .push(Category::new("Operators").with_node(node("BinaryOp", "OP-MATH")));

    let report = merge_toolbox(&mut target, &extension);

    assert_eq!(report.templates_added, 1);
    assert_eq!(styles(&target.categories[0]).len(), 3);
}

#[test]
fn test_colors_and_styles_overwrite() {
    let mut target = base();
    let mut extension = Toolbox::new();
    extension.colors.insert("Operators".into(), Color::rgb(255, 0, 0));
    extension.colors.insert("Orbit".into(), Color::rgb(0, 0, 255));
    let mut style = NodeStyle::new("op-math");
    style.tooltip = Some("Replaced".into());
    extension.styles.insert("op-math".into(), style);

    let report = merge_toolbox(&mut target, &extension);

    assert_eq!((report.colors, report.styles), (2, 1));
    assert_eq!(target.colors["Operators"], Color::rgb(255, 0, 0));
    assert_eq!(target.colors["Orbit"], Color::rgb(0, 0, 255));
    assert_eq!(target.styles["op-math"].tooltip.as_deref(), Some("Replaced"));
}

#[test]
fn test_merging_twice_adds_nothing_new() {
    let mut target = base();
    let mut extension = Toolbox::new();
    extension.categories.push(Category::new("Strings").with_node(node("Split", "split")));
    extension
        .categories
        .push(Category::new("Operators").with_node(node("AdvancedUnaryMath", "op-unary-adv")));

    merge_toolbox(&mut target, &extension);
    let snapshot = target.clone();
    let second = merge_toolbox(&mut target, &extension);

    assert_eq!(target, snapshot);
    assert_eq!(second.templates_added, 0);
    assert_eq!(second.duplicates_skipped, 2);
}
