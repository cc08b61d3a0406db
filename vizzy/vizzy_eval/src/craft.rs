//! The craft/orbit collaborator.
//!
//! Everything the extension knows about the simulated world comes through
//! these traits. Orbital mechanics are computed by the host's orbit model;
//! expressions only read the results and convert units at the boundary.
//!
//! All angles in `Orbit` are radians, as stored by the orbit model.

use vizzy_ir::Vector3d;

/// Error raised by a collaborator read that the host could not satisfy.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CollaboratorError {
    #[error("planet data for '{0}' is not loaded")]
    NotLoaded(String),
    #[error("{0} is not available")]
    Unavailable(&'static str),
    #[error("orbit model failure: {0}")]
    Failure(String),
}

/// Snapshot of an orbit as computed by the host's orbit model.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Orbit {
    pub angular_momentum: Vector3d,
    pub apoapsis: Vector3d,
    pub periapsis: Vector3d,
    pub orbital_plane_normal: Vector3d,
    pub eccentricity_vector: Vector3d,
    /// Radians.
    pub eccentric_anomaly: f64,
    /// Radians.
    pub mean_anomaly: f64,
    /// Radians per second.
    pub mean_motion: f64,
    /// Radians.
    pub right_ascension_of_ascending_node: f64,
    /// Radians.
    pub inclination: f64,
    /// Radians.
    pub periapsis_angle: f64,
    /// Radians.
    pub true_anomaly: f64,
    pub semi_major_axis: f64,
    pub eccentricity: f64,
    /// Seconds.
    pub period: f64,
    pub position: Vector3d,
    pub velocity: Vector3d,
}

/// A craft or planet with orbital state.
pub trait OrbitNode {
    fn node_id(&self) -> i32;
    fn name(&self) -> &str;
    fn orbit(&self) -> &Orbit;
}

/// A named launch site or structure on a planet's surface.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SurfaceLocation {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub elevation: f64,
    /// Heading in degrees, when the site defines one.
    pub heading: Option<f64>,
    /// Host-defined location category (e.g. `Launch`, `Runway`).
    pub location_type: String,
}

/// Planet information reads.
///
/// These go through host data that may not be loaded yet, so every read is
/// fallible. Callers convert failures to neutral values.
pub trait PlanetInfo {
    fn name(&self) -> &str;
    fn sphere_of_influence(&self) -> Result<f64, CollaboratorError>;
    fn sphere_of_influence_exit_distance(&self) -> Result<f64, CollaboratorError>;
    /// Degrees.
    fn rotation_angle(&self) -> Result<f64, CollaboratorError>;
    /// Radians per second.
    fn angular_velocity(&self) -> Result<f64, CollaboratorError>;
    fn terrain_data_loaded(&self) -> Result<bool, CollaboratorError>;
    fn has_water(&self) -> Result<bool, CollaboratorError>;
    fn sea_level(&self) -> Result<f64, CollaboratorError>;
    fn structures(&self) -> Result<Vec<SurfaceLocation>, CollaboratorError>;
    fn launch_locations(&self) -> Result<Vec<SurfaceLocation>, CollaboratorError>;
}

/// World lookups available to an executing program.
pub trait CraftContext {
    /// The craft running the program.
    fn executing_craft(&self) -> Option<&dyn OrbitNode>;
    fn craft_node(&self, id: i32) -> Option<&dyn OrbitNode>;
    fn craft_node_by_name(&self, name: &str) -> Option<&dyn OrbitNode>;
    fn planet_node(&self, name: &str) -> Option<&dyn OrbitNode>;
    fn planet(&self, name: &str) -> Option<&dyn PlanetInfo>;
    /// Id of the craft selected as navigation target, if the target is a craft.
    fn target_craft_id(&self) -> Option<i32>;
    /// Id of the player-controlled craft; `None` outside the flight scene.
    fn active_craft_id(&self) -> Option<i32>;
}

/// A world with nothing in it. Every lookup misses.
#[derive(Clone, Copy, Debug, Default)]
pub struct EmptyWorld;

impl CraftContext for EmptyWorld {
    fn executing_craft(&self) -> Option<&dyn OrbitNode> {
        None
    }

    fn craft_node(&self, _id: i32) -> Option<&dyn OrbitNode> {
        None
    }

    fn craft_node_by_name(&self, _name: &str) -> Option<&dyn OrbitNode> {
        None
    }

    fn planet_node(&self, _name: &str) -> Option<&dyn OrbitNode> {
        None
    }

    fn planet(&self, _name: &str) -> Option<&dyn PlanetInfo> {
        None
    }

    fn target_craft_id(&self) -> Option<i32> {
        None
    }

    fn active_craft_id(&self) -> Option<i32> {
        None
    }
}
