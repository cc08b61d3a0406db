use vizzy_toolbox::ResourceDatabase;

/// Resource name of the bundled toolbox.
pub const TOOLBOX_RESOURCE: &str = "VizzyPlusPlus/Vizzy/VizzyPlusPlusToolbox";

const TOOLBOX_XML: &str = include_str!("../resources/VizzyPlusPlusToolbox.xml");

/// Resources shipped inside the extension.
#[derive(Copy, Clone, Debug, Default)]
pub struct BundledResources;

impl ResourceDatabase for BundledResources {
    fn text_resource(&self, name: &str) -> Option<&str> {
        (name == TOOLBOX_RESOURCE).then_some(TOOLBOX_XML)
    }
}
