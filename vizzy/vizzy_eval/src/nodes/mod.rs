//! Node types supplied by the Vizzy++ extension.
//!
//! Every node here reports `NodeOrigin::Extension`, which is how the usage
//! scanner tells whether a program depends on the extension.

mod continue_loop;
mod craft_id;
mod numeric_constant;
mod orbit_info;
mod planet_info;
mod split;
mod string_comparison;
mod string_transform;
mod unary_math;

pub use continue_loop::Continue;
pub use craft_id::{CraftKind, GetCraftId, GET_CRAFT_ID_TAG, LEGACY_TARGET_CRAFT_ID_TAG, NO_CRAFT};
pub use numeric_constant::{Constant, NumericConstant, GRAVITATIONAL_CONSTANT, SPEED_OF_LIGHT};
pub use orbit_info::{
    resolve_orbit_node, AdvancedOrbitalElement, AdvancedOrbitalProperty, CartesianStateVector,
    OrbitNodeInformation, OrbitProperty, OrbitalElement, OrbitalElementProperty,
    StateVectorProperty,
};
pub use planet_info::{AdvancedPlanetInformation, PlanetInformation};
pub use split::Split;
pub use string_comparison::{Comparison, StringComparison};
pub use string_transform::{Transform, UnaryStringTransform};
pub use unary_math::{AdvancedUnaryMath, UnaryMath};

/// Radians to degrees, as the orbit model's consumers expect.
#[inline]
pub fn to_degrees(radians: f64) -> f64 {
    radians / std::f64::consts::PI * 180.0
}
