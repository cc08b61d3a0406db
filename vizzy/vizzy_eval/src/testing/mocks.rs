//! An in-memory world for exercising nodes that talk to the craft/orbit
//! collaborator.

use crate::{CollaboratorError, CraftContext, Orbit, OrbitNode, PlanetInfo, SurfaceLocation};

/// A craft (or the orbit part of a planet).
#[derive(Clone, Debug, Default)]
pub struct MockCraft {
    pub id: i32,
    pub name: String,
    pub orbit: Orbit,
}

impl MockCraft {
    pub fn new(id: i32, name: &str) -> Self {
        MockCraft {
            id,
            name: name.to_string(),
            orbit: Orbit::default(),
        }
    }

    #[must_use]
    pub fn with_orbit(mut self, orbit: Orbit) -> Self {
        self.orbit = orbit;
        self
    }
}

impl OrbitNode for MockCraft {
    fn node_id(&self) -> i32 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn orbit(&self) -> &Orbit {
        &self.orbit
    }
}

/// A planet. Every read fails with `failure` when it is set.
#[derive(Clone, Debug, Default)]
pub struct MockPlanet {
    pub node: MockCraft,
    pub sphere_of_influence: f64,
    pub sphere_of_influence_exit_distance: f64,
    pub rotation_angle: f64,
    pub angular_velocity: f64,
    pub terrain_data_loaded: bool,
    pub has_water: bool,
    pub sea_level: f64,
    pub structures: Vec<SurfaceLocation>,
    pub launch_locations: Vec<SurfaceLocation>,
    pub failure: Option<CollaboratorError>,
}

impl MockPlanet {
    pub fn new(name: &str) -> Self {
        MockPlanet {
            node: MockCraft::new(-100, name),
            ..MockPlanet::default()
        }
    }

    #[must_use]
    pub fn with_orbit(mut self, orbit: Orbit) -> Self {
        self.node.orbit = orbit;
        self
    }

    #[must_use]
    pub fn failing(mut self, error: CollaboratorError) -> Self {
        self.failure = Some(error);
        self
    }

    fn read<T: Clone>(&self, value: &T) -> Result<T, CollaboratorError> {
        match &self.failure {
            Some(err) => Err(err.clone()),
            None => Ok(value.clone()),
        }
    }
}

impl PlanetInfo for MockPlanet {
    fn name(&self) -> &str {
        &self.node.name
    }

    fn sphere_of_influence(&self) -> Result<f64, CollaboratorError> {
        self.read(&self.sphere_of_influence)
    }

    fn sphere_of_influence_exit_distance(&self) -> Result<f64, CollaboratorError> {
        self.read(&self.sphere_of_influence_exit_distance)
    }

    fn rotation_angle(&self) -> Result<f64, CollaboratorError> {
        self.read(&self.rotation_angle)
    }

    fn angular_velocity(&self) -> Result<f64, CollaboratorError> {
        self.read(&self.angular_velocity)
    }

    fn terrain_data_loaded(&self) -> Result<bool, CollaboratorError> {
        self.read(&self.terrain_data_loaded)
    }

    fn has_water(&self) -> Result<bool, CollaboratorError> {
        self.read(&self.has_water)
    }

    fn sea_level(&self) -> Result<f64, CollaboratorError> {
        self.read(&self.sea_level)
    }

    fn structures(&self) -> Result<Vec<SurfaceLocation>, CollaboratorError> {
        self.read(&self.structures)
    }

    fn launch_locations(&self) -> Result<Vec<SurfaceLocation>, CollaboratorError> {
        self.read(&self.launch_locations)
    }
}

/// Crafts, planets and the selection state of the flight scene.
#[derive(Clone, Debug, Default)]
pub struct MockWorld {
    pub crafts: Vec<MockCraft>,
    pub planets: Vec<MockPlanet>,
    pub executing: Option<i32>,
    pub target: Option<i32>,
    pub active: Option<i32>,
}

impl MockWorld {
    pub fn new() -> Self {
        MockWorld::default()
    }

    #[must_use]
    pub fn with_craft(mut self, craft: MockCraft) -> Self {
        self.crafts.push(craft);
        self
    }

    #[must_use]
    pub fn with_planet(mut self, planet: MockPlanet) -> Self {
        self.planets.push(planet);
        self
    }

    /// Mark craft `id` as the one running the program.
    #[must_use]
    pub fn executing(mut self, id: i32) -> Self {
        self.executing = Some(id);
        self
    }

    #[must_use]
    pub fn targeting(mut self, id: i32) -> Self {
        self.target = Some(id);
        self
    }

    /// Enter the flight scene with craft `id` under player control.
    #[must_use]
    pub fn controlling(mut self, id: i32) -> Self {
        self.active = Some(id);
        self
    }
}

impl CraftContext for MockWorld {
    fn executing_craft(&self) -> Option<&dyn OrbitNode> {
        self.executing.and_then(|id| self.craft_node(id))
    }

    fn craft_node(&self, id: i32) -> Option<&dyn OrbitNode> {
        self.crafts
            .iter()
            .find(|craft| craft.id == id)
            .map(|craft| craft as &dyn OrbitNode)
    }

    fn craft_node_by_name(&self, name: &str) -> Option<&dyn OrbitNode> {
        self.crafts
            .iter()
            .find(|craft| craft.name == name)
            .map(|craft| craft as &dyn OrbitNode)
    }

    fn planet_node(&self, name: &str) -> Option<&dyn OrbitNode> {
        self.planets
            .iter()
            .find(|planet| planet.node.name == name)
            .map(|planet| &planet.node as &dyn OrbitNode)
    }

    fn planet(&self, name: &str) -> Option<&dyn PlanetInfo> {
        self.planets
            .iter()
            .find(|planet| planet.node.name == name)
            .map(|planet| planet as &dyn PlanetInfo)
    }

    fn target_craft_id(&self) -> Option<i32> {
        self.target
    }

    fn active_craft_id(&self) -> Option<i32> {
        self.active
    }
}
