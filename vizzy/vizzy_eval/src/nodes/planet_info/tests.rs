use super::*;
use crate::host::Constant;
use crate::testing::{assert_number, eval_with, MockPlanet, MockWorld};
use pretty_assertions::assert_eq;

fn droo() -> MockPlanet {
    let mut planet = MockPlanet::new("Droo");
    planet.sphere_of_influence = 1.5e9;
    planet.angular_velocity = std::f64::consts::PI / 180.0;
    planet.has_water = true;
    planet.launch_locations = vec![
        SurfaceLocation {
            name: "Default".to_string(),
            latitude: 1.5,
            longitude: -2.25,
            elevation: 30.0,
            heading: Some(90.0),
            location_type: "Launch".to_string(),
        },
        SurfaceLocation {
            name: "Runway".to_string(),
            latitude: 0.5,
            longitude: 0.0,
            elevation: 12.0,
            heading: None,
            location_type: "Runway".to_string(),
        },
    ];
    planet.structures = vec![SurfaceLocation {
        name: "Tower".to_string(),
        latitude: -3.0,
        longitude: 4.5,
        elevation: 120.0,
        heading: Some(180.0),
        location_type: String::new(),
    }];
    planet
}

fn read(world: &MockWorld, planet: &str, info: &str) -> Value {
    eval_with(world, |p| {
        let name = p.add_expression(Constant::text(planet), []);
        p.add_expression(AdvancedPlanetInformation::new(info), [name])
    })
}

#[test]
fn test_numeric_fields() {
    let world = MockWorld::new().with_planet(droo());
    assert_number(&read(&world, "Droo", "soi-distance"), 1.5e9);
    assert_number(&read(&world, "Droo", "angular-velocity"), 1.0);
}

#[test]
fn test_boolean_fields() {
    let world = MockWorld::new().with_planet(droo());
    assert_eq!(read(&world, "Droo", "has-water"), Value::Bool(true));
    assert_eq!(read(&world, "Droo", "is-terrain-data-loaded"), Value::Bool(false));

    assert!(AdvancedPlanetInformation::new("has-water").is_boolean());
    assert!(!AdvancedPlanetInformation::new("sea-level").is_boolean());
    assert!(!AdvancedPlanetInformation::default().is_boolean());
}

#[test]
fn test_launch_location_lists() {
    let world = MockWorld::new().with_planet(droo());
    assert_eq!(
        read(&world, "Droo", "launch-location-names"),
        Value::list(["Default", "Runway"])
    );
    assert_eq!(
        read(&world, "Droo", "launch-locations"),
        Value::list(["(1.5, -2.25, Launch)", "(0.5, 0, Runway)"])
    );
    assert_eq!(
        read(&world, "Droo", "launch-location-headings"),
        Value::list(["90", ""])
    );
}

#[test]
fn test_structure_lists() {
    let world = MockWorld::new().with_planet(droo());
    assert_eq!(read(&world, "Droo", "structure-names"), Value::list(["Tower"]));
    assert_eq!(
        read(&world, "Droo", "structure-locations"),
        Value::list(["(-3, 4.5, 120)"])
    );
    assert_eq!(read(&world, "Droo", "structure-headings"), Value::list(["180"]));
}

#[test]
fn test_collaborator_error_becomes_zero() {
    let world = MockWorld::new()
        .with_planet(droo().failing(CollaboratorError::NotLoaded("Droo".to_string())));
    assert_eq!(read(&world, "Droo", "sea-level"), Value::Number(0.0));
    assert_eq!(read(&world, "Droo", "has-water"), Value::Number(0.0));
}

#[test]
fn test_unknown_planet_or_field() {
    let world = MockWorld::new().with_planet(droo());
    assert_eq!(read(&world, "", "sea-level"), Value::Number(0.0));
    assert_eq!(read(&world, "Kerbin", "sea-level"), Value::Number(0.0));
    assert_eq!(read(&world, "Droo", "gravity"), Value::Number(0.0));
}
