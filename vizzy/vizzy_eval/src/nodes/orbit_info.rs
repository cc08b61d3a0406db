//! Orbital state of a craft or planet.
//!
//! `OrbitalElement`, `AdvancedOrbitalElement` and `CartesianStateVector` share
//! one evaluation template: resolve the node selected by child 0, then read
//! one property of its orbit. The template is `OrbitNodeInformation<P>`; each
//! node is that template instantiated with its property table.
//!
//! # Target resolution
//!
//! Child 0 selects the node:
//! - a number is a craft id; a negative id means the executing craft
//! - non-empty text is tried as a planet name, then a craft name, then an
//!   integer craft id
//! - empty text means the executing craft

use tracing::{info, warn};
use vizzy_ir::{
    Element, ExprId, ListItemInfo, ListItemKind, NodeOrigin, ProgramNode, Value, Vector3d,
};

use super::to_degrees;
use crate::options::{ListOption, ListSlot, OptionTable};
use crate::{CraftContext, Orbit, OrbitNode, ProgramExpression, ThreadContext};

/// A property table readable from an orbit.
pub trait OrbitProperty: OptionTable {
    /// Attribute holding the selected key.
    const ATTRIBUTE: &'static str;

    /// Result when the node cannot be found or the key is unknown.
    fn neutral() -> Value {
        Value::ZERO
    }

    fn read(self, orbit: &Orbit) -> Value;
}

/// Resolve the node selected by `selector`.
pub fn resolve_orbit_node<'a>(craft: &'a dyn CraftContext, selector: &Value) -> Option<&'a dyn OrbitNode> {
    fn by_id(craft: &dyn CraftContext, id: i32) -> Option<&dyn OrbitNode> {
        if id >= 0 {
            craft.craft_node(id)
        } else {
            craft.executing_craft()
        }
    }

    if let Value::Number(n) = selector {
        return by_id(craft, *n as i32);
    }

    let name = selector.text_value();
    if name.is_empty() {
        return craft.executing_craft();
    }
    craft
        .planet_node(&name)
        .or_else(|| craft.craft_node_by_name(&name))
        .or_else(|| {
            name.trim()
                .parse::<i32>()
                .ok()
                .and_then(|id| by_id(craft, id))
        })
}

/// Reads property `P` of the orbit node selected by child 0.
#[derive(Clone, Debug)]
pub struct OrbitNodeInformation<P> {
    property: ListSlot<P>,
}

impl<P: OrbitProperty> Default for OrbitNodeInformation<P> {
    fn default() -> Self {
        OrbitNodeInformation {
            property: ListSlot::unset(),
        }
    }
}

impl<P: OrbitProperty> OrbitNodeInformation<P> {
    pub fn new(key: &str) -> Self {
        OrbitNodeInformation {
            property: ListSlot::with_key(key),
        }
    }

    pub fn property(&self) -> Option<P> {
        self.property.get()
    }
}

impl<P: OrbitProperty> ProgramNode for OrbitNodeInformation<P> {
    fn origin(&self) -> NodeOrigin {
        NodeOrigin::Extension
    }

    fn list_items(&self, _list_id: &str) -> Vec<ListItemInfo> {
        P::list_items()
    }

    fn list_value(&self, _list_id: &str) -> Option<&str> {
        self.property.key()
    }

    fn set_list_value(&mut self, _list_id: &str, value: &str) {
        self.property.set(value);
    }

    fn on_deserialized(&mut self, element: &Element) {
        self.property.load(element, P::ATTRIBUTE);
    }

    fn on_serialized(&self, element: &mut Element) {
        self.property.store(element, P::ATTRIBUTE);
    }
}

impl<P: OrbitProperty> ProgramExpression for OrbitNodeInformation<P> {
    fn evaluate(&self, children: &[ExprId], ctx: &mut ThreadContext<'_>) -> Value {
        let selector = ctx.evaluate_child(children, 0);
        let Some(node) = resolve_orbit_node(ctx.craft(), &selector) else {
            info!(target_node = %selector, "craft or planet not found");
            return P::neutral();
        };
        match self.property.get() {
            Some(property) => property.read(node.orbit()),
            None => {
                warn!(
                    attribute = P::ATTRIBUTE,
                    key = %self.property,
                    "unrecognized orbit property"
                );
                P::neutral()
            }
        }
    }
}

/// `<OrbitalElement element="…">`
pub type OrbitalElement = OrbitNodeInformation<OrbitalElementProperty>;

/// `<AdvancedOrbitalElement element="…">`
pub type AdvancedOrbitalElement = OrbitNodeInformation<AdvancedOrbitalProperty>;

/// `<CartesianStateVector vector="…">`
pub type CartesianStateVector = OrbitNodeInformation<StateVectorProperty>;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum OrbitalElementProperty {
    RightAscension,
    Inclination,
    ArgumentOfPeriapsis,
    TrueAnomaly,
    SemiMajorAxis,
    Eccentricity,
    Period,
}

impl OptionTable for OrbitalElementProperty {
    const OPTIONS: &'static [ListOption<Self>] = &[
        ListOption::new(
            Self::RightAscension,
            "right-ascension",
            "Right Ascension",
            "The angle between the reference direction and the ascending node.",
            ListItemKind::Degrees,
        ),
        ListOption::new(Self::Inclination, "inclination", "Inclination", "The degree of tilt.", ListItemKind::Degrees),
        ListOption::new(
            Self::ArgumentOfPeriapsis,
            "argument-of-periapsis",
            "Argument of Periapsis",
            "The angle between the ascending node and the direction of periapse.",
            ListItemKind::Degrees,
        ),
        ListOption::new(
            Self::TrueAnomaly,
            "true-anomaly",
            "True Anomaly",
            "The angle between the direction of the periapse and the current position from the main focus of the orbital ellipse.",
            ListItemKind::Degrees,
        ),
        ListOption::new(
            Self::SemiMajorAxis,
            "semi-major-axis",
            "Semi-Major Axis",
            "Half of the sum of the apoapse and periapse distances.",
            ListItemKind::Number,
        ),
        ListOption::new(
            Self::Eccentricity,
            "eccentricity",
            "Eccentricity",
            "The shape of the orbit, from circular (0), to parabolic (1), to hyperbolic (>1).",
            ListItemKind::Number,
        ),
        ListOption::new(Self::Period, "period", "Period", "The period of the orbit in seconds.", ListItemKind::Number),
    ];
}

impl OrbitProperty for OrbitalElementProperty {
    const ATTRIBUTE: &'static str = "element";

    fn read(self, orbit: &Orbit) -> Value {
        let n = match self {
            Self::RightAscension => to_degrees(orbit.right_ascension_of_ascending_node),
            Self::Inclination => to_degrees(orbit.inclination),
            Self::ArgumentOfPeriapsis => to_degrees(orbit.periapsis_angle),
            Self::TrueAnomaly => to_degrees(orbit.true_anomaly),
            Self::SemiMajorAxis => orbit.semi_major_axis,
            Self::Eccentricity => orbit.eccentricity,
            Self::Period => orbit.period,
        };
        Value::Number(n)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AdvancedOrbitalProperty {
    AngularMomentum,
    Apoapse,
    Periapse,
    OrbitalPlaneNormal,
    EccentricityVector,
    EccentricAnomaly,
    MeanAnomaly,
    MeanMotion,
}

impl OptionTable for AdvancedOrbitalProperty {
    const OPTIONS: &'static [ListOption<Self>] = &[
        ListOption::new(
            Self::AngularMomentum,
            "angular-momentum",
            "Angular Momentum",
            "A vector representing the body's rate of rotation around its parent.",
            ListItemKind::Vector,
        ),
        ListOption::new(
            Self::Apoapse,
            "apoapse",
            "Apoapse",
            "A vector representing the apoapse of the orbit.",
            ListItemKind::Vector,
        ),
        ListOption::new(
            Self::Periapse,
            "periapse",
            "Periapse",
            "A vector representing the periapse of the orbit.",
            ListItemKind::Vector,
        ),
        ListOption::new(
            Self::OrbitalPlaneNormal,
            "orbital-plane-normal",
            "Orbital Plane Normal",
            "A unit vector perpendicular to the orbital plane.",
            ListItemKind::Vector,
        ),
        ListOption::new(
            Self::EccentricityVector,
            "eccentricity-vector",
            "Eccentricity Vector",
            "A vector pointing toward the periapsis of the orbit with a magnitude equal to the eccentricity.",
            ListItemKind::Vector,
        ),
        ListOption::new(
            Self::EccentricAnomaly,
            "eccentric-anomaly",
            "Eccentric Anomaly",
            "The current eccentric anomaly.",
            ListItemKind::Degrees,
        ),
        ListOption::new(
            Self::MeanAnomaly,
            "mean-anomaly",
            "Mean Anomaly",
            "The fraction of the orbital period elapsed since periapsis, in degrees from 0 to 360.",
            ListItemKind::Degrees,
        ),
        ListOption::new(
            Self::MeanMotion,
            "mean-motion",
            "Mean Motion",
            "The average angular speed of the orbit in degrees.",
            ListItemKind::Degrees,
        ),
    ];
}

impl OrbitProperty for AdvancedOrbitalProperty {
    const ATTRIBUTE: &'static str = "element";

    fn read(self, orbit: &Orbit) -> Value {
        match self {
            Self::AngularMomentum => Value::Vector(orbit.angular_momentum),
            Self::Apoapse => Value::Vector(orbit.apoapsis),
            Self::Periapse => Value::Vector(orbit.periapsis),
            Self::OrbitalPlaneNormal => Value::Vector(orbit.orbital_plane_normal),
            Self::EccentricityVector => Value::Vector(orbit.eccentricity_vector),
            Self::EccentricAnomaly => Value::Number(to_degrees(orbit.eccentric_anomaly)),
            Self::MeanAnomaly => Value::Number(to_degrees(orbit.mean_anomaly)),
            Self::MeanMotion => Value::Number(to_degrees(orbit.mean_motion)),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StateVectorProperty {
    Position,
    Velocity,
}

impl OptionTable for StateVectorProperty {
    const OPTIONS: &'static [ListOption<Self>] = &[
        ListOption::new(Self::Position, "position", "Position", "The body's current position vector.", ListItemKind::Vector),
        ListOption::new(Self::Velocity, "velocity", "Velocity", "The body's current velocity vector.", ListItemKind::Vector),
    ];
}

impl OrbitProperty for StateVectorProperty {
    const ATTRIBUTE: &'static str = "vector";

    fn neutral() -> Value {
        Value::Vector(Vector3d::ZERO)
    }

    fn read(self, orbit: &Orbit) -> Value {
        match self {
            Self::Position => Value::Vector(orbit.position),
            Self::Velocity => Value::Vector(orbit.velocity),
        }
    }
}

#[cfg(test)]
mod tests;
