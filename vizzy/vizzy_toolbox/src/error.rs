use vizzy_ir::ElementError;

/// Error raised while reading a toolbox document.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ToolboxError {
    #[error(transparent)]
    Element(#[from] ElementError),
    #[error("expected <Toolbox> root, found <{0}>")]
    NotAToolbox(String),
    #[error("toolbox is missing its <{0}> section")]
    MissingSection(&'static str),
    #[error("<{element}> is missing required attribute `{attribute}`")]
    MissingAttribute {
        element: String,
        attribute: &'static str,
    },
    #[error("color `{name}` has malformed value `{value}`")]
    InvalidColor { name: String, value: String },
}
