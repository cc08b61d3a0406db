use super::*;
use crate::host::Constant;
use crate::testing::{assert_number, eval_with, MockCraft, MockPlanet, MockWorld};
use crate::Program;
use pretty_assertions::assert_eq;
use std::f64::consts::PI;

fn orbit(inclination: f64, semi_major_axis: f64) -> Orbit {
    Orbit {
        inclination,
        semi_major_axis,
        position: Vector3d::new(1.0, 2.0, 3.0),
        ..Orbit::default()
    }
}

/// Executing craft 1, craft 7 named "Probe", and a planet and craft that
/// are both named "Droo".
fn world() -> MockWorld {
    MockWorld::new()
        .with_craft(MockCraft::new(1, "Self").with_orbit(orbit(0.0, 1.0)))
        .with_craft(MockCraft::new(7, "Probe").with_orbit(orbit(PI / 2.0, 7.0)))
        .with_craft(MockCraft::new(9, "Droo").with_orbit(orbit(0.0, 9.0)))
        .with_planet(MockPlanet::new("Droo").with_orbit(orbit(PI, 100.0)))
        .executing(1)
}

fn semi_major_axis_of(world: &MockWorld, selector: Constant) -> Value {
    eval_with(world, |p: &mut Program| {
        let target = p.add_expression(selector, []);
        p.add_expression(OrbitalElement::new("semi-major-axis"), [target])
    })
}

#[test]
fn test_number_selects_craft_id() {
    assert_number(&semi_major_axis_of(&world(), Constant::number(7.0)), 7.0);
}

#[test]
fn test_negative_number_selects_executing_craft() {
    assert_number(&semi_major_axis_of(&world(), Constant::number(-1.0)), 1.0);
}

#[test]
fn test_planet_name_wins_over_craft_name() {
    assert_number(&semi_major_axis_of(&world(), Constant::text("Droo")), 100.0);
}

#[test]
fn test_craft_name_then_numeric_text() {
    assert_number(&semi_major_axis_of(&world(), Constant::text("Probe")), 7.0);
    assert_number(&semi_major_axis_of(&world(), Constant::text("7")), 7.0);
    assert_number(&semi_major_axis_of(&world(), Constant::text("-3")), 1.0);
}

#[test]
fn test_empty_text_selects_executing_craft() {
    assert_number(&semi_major_axis_of(&world(), Constant::text("")), 1.0);
}

#[test]
fn test_missing_node_is_neutral() {
    assert_eq!(
        semi_major_axis_of(&world(), Constant::text("Kerbin")),
        Value::Number(0.0)
    );
    assert_eq!(
        semi_major_axis_of(&world(), Constant::number(42.0)),
        Value::Number(0.0)
    );

    let value = eval_with(&world(), |p| {
        let target = p.add_expression(Constant::text("Kerbin"), []);
        p.add_expression(CartesianStateVector::new("position"), [target])
    });
    assert_eq!(value, Value::Vector(Vector3d::ZERO));
}

#[test]
fn test_angles_are_degrees() {
    let value = eval_with(&world(), |p| {
        let target = p.add_expression(Constant::number(7.0), []);
        p.add_expression(OrbitalElement::new("Inclination"), [target])
    });
    assert_number(&value, 90.0);
}

#[test]
fn test_vector_properties() {
    let value = eval_with(&world(), |p| {
        let target = p.add_expression(Constant::text(""), []);
        p.add_expression(CartesianStateVector::new("position"), [target])
    });
    assert_eq!(value, Value::vector(1.0, 2.0, 3.0));

    let value = eval_with(&world(), |p| {
        let target = p.add_expression(Constant::text(""), []);
        p.add_expression(AdvancedOrbitalElement::new("apoapse"), [target])
    });
    assert_eq!(value.kind(), vizzy_ir::ValueKind::Vector);
}

#[test]
fn test_unknown_property_is_neutral() {
    let value = eval_with(&world(), |p| {
        let target = p.add_expression(Constant::number(7.0), []);
        p.add_expression(OrbitalElement::new("altitude"), [target])
    });
    assert_eq!(value, Value::Number(0.0));
}

#[test]
fn test_attribute_names() {
    let mut node = CartesianStateVector::default();
    node.on_deserialized(&Element::new("CartesianStateVector").with_attribute("vector", "Velocity"));
    assert_eq!(node.property(), Some(StateVectorProperty::Velocity));

    let mut node = AdvancedOrbitalElement::default();
    node.set_list_value("element", "mean-motion");
    let mut element = Element::new("AdvancedOrbitalElement");
    node.on_serialized(&mut element);
    assert_eq!(element.attribute("element"), Some("mean-motion"));
}

#[test]
fn test_list_items_match_tables() {
    let node = OrbitalElement::default();
    let ids: Vec<_> = node.list_items("element").iter().map(|i| i.id).collect();
    assert_eq!(
        ids,
        vec![
            "right-ascension",
            "inclination",
            "argument-of-periapsis",
            "true-anomaly",
            "semi-major-axis",
            "eccentricity",
            "period",
        ]
    );
    assert_eq!(AdvancedOrbitalElement::default().list_items("element").len(), 8);
}
