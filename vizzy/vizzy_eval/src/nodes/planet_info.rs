//! Planet information beyond what the host's planet block exposes.

use tracing::{info, warn};
use vizzy_ir::{Element, ExprId, ListItemInfo, ListItemKind, NodeOrigin, ProgramNode, Value};

use super::to_degrees;
use crate::options::{ListOption, ListSlot, OptionTable};
use crate::{CollaboratorError, PlanetInfo, ProgramExpression, SurfaceLocation, ThreadContext};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PlanetInformation {
    SphereOfInfluenceDistance,
    SphereOfInfluenceExitDistance,
    RotationAngle,
    AngularVelocity,
    IsTerrainDataLoaded,
    HasWater,
    SeaLevel,
    StructureNames,
    StructureLocations,
    StructureHeadings,
    LaunchLocationNames,
    LaunchLocations,
    LaunchLocationHeadings,
}

impl PlanetInformation {
    pub fn is_boolean(self) -> bool {
        matches!(self, Self::IsTerrainDataLoaded | Self::HasWater)
    }

    fn read(self, planet: &dyn PlanetInfo) -> Result<Value, CollaboratorError> {
        let value = match self {
            Self::SphereOfInfluenceDistance => Value::Number(planet.sphere_of_influence()?),
            Self::SphereOfInfluenceExitDistance => {
                Value::Number(planet.sphere_of_influence_exit_distance()?)
            }
            Self::RotationAngle => Value::Number(planet.rotation_angle()?),
            Self::AngularVelocity => Value::Number(to_degrees(planet.angular_velocity()?)),
            Self::IsTerrainDataLoaded => Value::Bool(planet.terrain_data_loaded()?),
            Self::HasWater => Value::Bool(planet.has_water()?),
            Self::SeaLevel => Value::Number(planet.sea_level()?),
            Self::StructureNames => names(&planet.structures()?),
            Self::StructureLocations => structure_locations(&planet.structures()?),
            Self::StructureHeadings => headings(&planet.structures()?),
            Self::LaunchLocationNames => names(&planet.launch_locations()?),
            Self::LaunchLocations => launch_locations(&planet.launch_locations()?),
            Self::LaunchLocationHeadings => headings(&planet.launch_locations()?),
        };
        Ok(value)
    }
}

fn names(sites: &[SurfaceLocation]) -> Value {
    Value::list(sites.iter().map(|site| site.name.clone()))
}

/// `(latitude, longitude, elevation)` per structure.
fn structure_locations(sites: &[SurfaceLocation]) -> Value {
    Value::list(
        sites
            .iter()
            .map(|site| format!("({}, {}, {})", site.latitude, site.longitude, site.elevation)),
    )
}

/// `(latitude, longitude, location type)` per launch site.
fn launch_locations(sites: &[SurfaceLocation]) -> Value {
    Value::list(
        sites
            .iter()
            .map(|site| format!("({}, {}, {})", site.latitude, site.longitude, site.location_type)),
    )
}

/// Heading in degrees per site; empty for sites without one.
fn headings(sites: &[SurfaceLocation]) -> Value {
    Value::list(
        sites
            .iter()
            .map(|site| site.heading.map(|h| h.to_string()).unwrap_or_default()),
    )
}

impl OptionTable for PlanetInformation {
    const OPTIONS: &'static [ListOption<Self>] = &[
        ListOption::new(
            Self::SphereOfInfluenceDistance,
            "soi-distance",
            "Sphere of Influence Distance",
            "The radius at which a body will enter this planet's sphere of influence.",
            ListItemKind::Number,
        ),
        ListOption::new(
            Self::SphereOfInfluenceExitDistance,
            "soi-exit-distance",
            "Sphere of Influence Exit Distance",
            "The radius at which a body will exit this planet's sphere of influence.",
            ListItemKind::Number,
        ),
        ListOption::new(
            Self::RotationAngle,
            "rotation-angle",
            "Rotation Angle",
            "Gets the rotation of the planet in degrees.",
            ListItemKind::Degrees,
        ),
        ListOption::new(
            Self::AngularVelocity,
            "angular-velocity",
            "Angular Velocity",
            "Gets the angular velocity (rotation rate) of the planet in degrees per second.",
            ListItemKind::Degrees,
        ),
        ListOption::new(
            Self::IsTerrainDataLoaded,
            "is-terrain-data-loaded",
            "Is Terrain Data Loaded",
            "Whether or not terrain data has been loaded for the planet.",
            ListItemKind::None,
        ),
        ListOption::new(
            Self::HasWater,
            "has-water",
            "Has Water",
            "Whether or not the planet has water.",
            ListItemKind::None,
        ),
        ListOption::new(
            Self::SeaLevel,
            "sea-level",
            "Sea Level",
            "Gets the mean sea level radius of the planet.",
            ListItemKind::Number,
        ),
        ListOption::new(
            Self::StructureNames,
            "structure-names",
            "Structure Names",
            "Gets a list of structure names.",
            ListItemKind::List,
        ),
        ListOption::new(
            Self::StructureLocations,
            "structure-locations",
            "Structure Locations",
            "Gets a list of structure locations (lat/long/elevation).",
            ListItemKind::List,
        ),
        ListOption::new(
            Self::StructureHeadings,
            "structure-headings",
            "Structure Headings",
            "Gets a list of structure headings (degrees).",
            ListItemKind::List,
        ),
        ListOption::new(
            Self::LaunchLocationNames,
            "launch-location-names",
            "Launch Location Names",
            "Gets a list of names of the default launch locations.",
            ListItemKind::List,
        ),
        ListOption::new(
            Self::LaunchLocations,
            "launch-locations",
            "Launch Locations",
            "Gets a list of locations (lat/long/type) for the default launch locations.",
            ListItemKind::List,
        ),
        ListOption::new(
            Self::LaunchLocationHeadings,
            "launch-location-headings",
            "Launch Location Headings",
            "Gets a list of headings (degrees) for the default launch locations.",
            ListItemKind::List,
        ),
    ];
}

/// `<AdvancedPlanetInformation info="…">`; child 0 is the planet name.
#[derive(Clone, Debug, Default)]
pub struct AdvancedPlanetInformation {
    info: ListSlot<PlanetInformation>,
}

impl AdvancedPlanetInformation {
    pub fn new(key: &str) -> Self {
        AdvancedPlanetInformation {
            info: ListSlot::with_key(key),
        }
    }

    pub fn information(&self) -> Option<PlanetInformation> {
        self.info.get()
    }
}

impl ProgramNode for AdvancedPlanetInformation {
    fn origin(&self) -> NodeOrigin {
        NodeOrigin::Extension
    }

    fn list_items(&self, _list_id: &str) -> Vec<ListItemInfo> {
        PlanetInformation::list_items()
    }

    fn list_value(&self, _list_id: &str) -> Option<&str> {
        self.info.key()
    }

    fn set_list_value(&mut self, _list_id: &str, value: &str) {
        self.info.set(value);
    }

    fn on_deserialized(&mut self, element: &Element) {
        self.info.load(element, "info");
    }

    fn on_serialized(&self, element: &mut Element) {
        self.info.store(element, "info");
    }
}

impl ProgramExpression for AdvancedPlanetInformation {
    fn is_boolean(&self) -> bool {
        self.info.get().is_some_and(PlanetInformation::is_boolean)
    }

    fn evaluate(&self, children: &[ExprId], ctx: &mut ThreadContext<'_>) -> Value {
        let name = ctx.evaluate_child(children, 0);
        let name = name.text_value();
        let planet = if name.is_empty() {
            None
        } else {
            ctx.craft().planet(&name)
        };
        let Some(planet) = planet else {
            info!(planet = %name, "planet not found");
            return Value::ZERO;
        };

        let Some(information) = self.info.get() else {
            warn!(info = %self.info, "unrecognized planet information field");
            return Value::ZERO;
        };
        match information.read(planet) {
            Ok(value) => value,
            Err(err) => {
                warn!(
                    info = %self.info,
                    resolved = ?information,
                    planet = planet.name(),
                    %err,
                    "failed to read planet information"
                );
                Value::ZERO
            }
        }
    }
}

#[cfg(test)]
mod tests;
