//! Toolbox data model and its element-tree form.

use rustc_hash::FxHashMap;
use tracing::debug;
use vizzy_ir::Element;

use crate::{Color, ToolboxError};

const TOOLBOX: &str = "Toolbox";
const COLORS: &str = "Colors";
const STYLES: &str = "Styles";
const CATEGORIES: &str = "Categories";

/// Visual style of one block kind. Unrecognized attributes are kept.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NodeStyle {
    pub name: String,
    pub color: Option<String>,
    pub format: Option<String>,
    pub tooltip: Option<String>,
    pub extra: Vec<(String, String)>,
}

impl NodeStyle {
    pub fn new(name: &str) -> Self {
        NodeStyle {
            name: name.to_string(),
            color: None,
            format: None,
            tooltip: None,
            extra: Vec::new(),
        }
    }

    fn from_element(element: &Element) -> Result<Self, ToolboxError> {
        let mut style = NodeStyle::new(required(element, "name")?);
        for (key, value) in element.attributes() {
            match key {
                "name" => {}
                "color" => style.color = Some(value.to_string()),
                "format" => style.format = Some(value.to_string()),
                "tooltip" => style.tooltip = Some(value.to_string()),
                _ => style.extra.push((key.to_string(), value.to_string())),
            }
        }
        Ok(style)
    }

    fn to_element(&self) -> Element {
        let mut element = Element::new("Style").with_attribute("name", self.name.as_str());
        element.set_optional_attribute("color", self.color.as_deref());
        element.set_optional_attribute("format", self.format.as_deref());
        element.set_optional_attribute("tooltip", self.tooltip.as_deref());
        for (key, value) in &self.extra {
            element.set_attribute(key, value.as_str());
        }
        element
    }
}

/// A block template shown in a category: the node's element with its
/// default configuration, keyed by its `style` attribute.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToolboxNode {
    pub style: String,
    pub element: Element,
}

impl ToolboxNode {
    pub fn new(element: Element) -> Self {
        ToolboxNode {
            style: element.attribute("style").unwrap_or_default().to_string(),
            element,
        }
    }
}

/// A named group of block templates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Category {
    pub name: String,
    pub color: Option<String>,
    pub nodes: Vec<ToolboxNode>,
}

impl Category {
    pub fn new(name: &str) -> Self {
        Category {
            name: name.to_string(),
            color: None,
            nodes: Vec::new(),
        }
    }

    pub fn with_node(mut self, node: ToolboxNode) -> Self {
        self.nodes.push(node);
        self
    }

    /// Whether a template with exactly this style key is present.
    pub fn has_style(&self, style: &str) -> bool {
        self.nodes.iter().any(|node| node.style == style)
    }

    fn from_element(element: &Element) -> Result<Self, ToolboxError> {
        Ok(Category {
            name: required(element, "name")?.to_string(),
            color: element.attribute("color").map(str::to_string),
            nodes: element.children().iter().cloned().map(ToolboxNode::new).collect(),
        })
    }

    fn to_element(&self) -> Element {
        let mut element = Element::new("Category").with_attribute("name", self.name.as_str());
        element.set_optional_attribute("color", self.color.as_deref());
        for node in &self.nodes {
            element.push_child(node.element.clone());
        }
        element
    }
}

/// The full block palette.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Toolbox {
    pub colors: FxHashMap<String, Color>,
    pub styles: FxHashMap<String, NodeStyle>,
    pub categories: Vec<Category>,
}

impl Toolbox {
    pub fn new() -> Self {
        Toolbox::default()
    }

    /// Parse toolbox text.
    pub fn parse(text: &str) -> Result<Self, ToolboxError> {
        Toolbox::from_element(&Element::parse(text)?)
    }

    /// Read a `<Toolbox>` element. All three sections must be present.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn from_element(root: &Element) -> Result<Self, ToolboxError> {
        if root.name() != TOOLBOX {
            return Err(ToolboxError::NotAToolbox(root.name().to_string()));
        }
        let section = |name: &'static str| {
            root.child(name).ok_or(ToolboxError::MissingSection(name))
        };

        let mut toolbox = Toolbox::new();
        for element in section(COLORS)?.children() {
            let name = required(element, "name")?;
            let value = required(element, "color")?;
            let color = Color::from_hex(value).ok_or_else(|| ToolboxError::InvalidColor {
                name: name.to_string(),
                value: value.to_string(),
            })?;
            toolbox.colors.insert(name.to_string(), color);
        }
        for element in section(STYLES)?.children() {
            let style = NodeStyle::from_element(element)?;
            toolbox.styles.insert(style.name.clone(), style);
        }
        for element in section(CATEGORIES)?.children() {
            toolbox.categories.push(Category::from_element(element)?);
        }

        debug!(
            colors = toolbox.colors.len(),
            styles = toolbox.styles.len(),
            categories = toolbox.categories.len(),
            "toolbox loaded"
        );
        Ok(toolbox)
    }

    /// Write as a `<Toolbox>` element. Colors and styles are sorted by name.
    pub fn to_element(&self) -> Element {
        let mut colors: Vec<_> = self.colors.iter().collect();
        colors.sort_by(|a, b| a.0.cmp(b.0));
        let mut color_section = Element::new(COLORS);
        for (name, color) in colors {
            color_section.push_child(
                Element::new("Color")
                    .with_attribute("name", name.as_str())
                    .with_attribute("color", color.to_string()),
            );
        }

        let mut styles: Vec<_> = self.styles.values().collect();
        styles.sort_by(|a, b| a.name.cmp(&b.name));
        let mut style_section = Element::new(STYLES);
        for style in styles {
            style_section.push_child(style.to_element());
        }

        let mut category_section = Element::new(CATEGORIES);
        for category in &self.categories {
            category_section.push_child(category.to_element());
        }

        Element::new(TOOLBOX)
            .with_child(color_section)
            .with_child(style_section)
            .with_child(category_section)
    }

    /// Find a category by name, ignoring ASCII case.
    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories
            .iter()
            .find(|category| category.name.eq_ignore_ascii_case(name))
    }

    pub fn category_mut(&mut self, name: &str) -> Option<&mut Category> {
        self.categories
            .iter_mut()
            .find(|category| category.name.eq_ignore_ascii_case(name))
    }
}

fn required<'e>(element: &'e Element, attribute: &'static str) -> Result<&'e str, ToolboxError> {
    element
        .attribute(attribute)
        .ok_or_else(|| ToolboxError::MissingAttribute {
            element: element.name().to_string(),
            attribute,
        })
}
