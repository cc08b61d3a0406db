//! Saved craft data, as much of it as the craft check reads.

use vizzy_eval::Program;

/// A saved craft.
#[derive(Debug, Default)]
pub struct CraftData {
    pub name: String,
    /// `None` when the craft's part assembly failed to load.
    pub assembly: Option<Assembly>,
}

/// The parts of a craft.
#[derive(Debug, Default)]
pub struct Assembly {
    pub parts: Vec<PartData>,
}

/// One part; only flight computers carry a flight program.
#[derive(Debug, Default)]
pub struct PartData {
    pub name: String,
    pub flight_program: Option<FlightProgramData>,
}

/// A part's flight program, either already loaded or as persisted text.
#[derive(Debug, Default)]
pub struct FlightProgramData {
    pub program: Option<Program>,
    pub program_xml: String,
}

impl CraftData {
    pub fn new(name: &str) -> Self {
        CraftData {
            name: name.to_string(),
            assembly: Some(Assembly::default()),
        }
    }

    /// Add a part to the assembly, creating it if needed.
    #[must_use]
    pub fn with_part(mut self, part: PartData) -> Self {
        self.assembly.get_or_insert_with(Assembly::default).parts.push(part);
        self
    }
}

impl PartData {
    pub fn new(name: &str) -> Self {
        PartData {
            name: name.to_string(),
            flight_program: None,
        }
    }

    /// A flight computer whose program is only available as text.
    pub fn with_program_xml(name: &str, xml: impl Into<String>) -> Self {
        PartData {
            name: name.to_string(),
            flight_program: Some(FlightProgramData {
                program: None,
                program_xml: xml.into(),
            }),
        }
    }

    /// A flight computer with a loaded program.
    pub fn with_program(name: &str, program: Program) -> Self {
        PartData {
            name: name.to_string(),
            flight_program: Some(FlightProgramData {
                program: Some(program),
                program_xml: String::new(),
            }),
        }
    }
}
