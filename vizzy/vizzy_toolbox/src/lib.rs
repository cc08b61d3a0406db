//! Vizzy Toolbox - the block palette shown by the program editor.
//!
//! - `Toolbox`: colors, node styles and ordered categories of node templates
//! - `merge_toolbox`: folds an extension palette into the host palette
//! - `ResourceDatabase` / `LazyToolbox`: where palettes come from, loaded
//!   once on first use
//!
//! # Document shape
//!
//! ```text
//! <Toolbox>
//!   <Colors>
//!     <Color name="Orbit" color="#3C78D8" />
//!   </Colors>
//!   <Styles>
//!     <Style name="orbital-element" color="Orbit" format="…" tooltip="…" />
//!   </Styles>
//!   <Categories>
//!     <Category name="Craft" color="Orbit">
//!       <OrbitalElement style="orbital-element" type="apoapsis" />
//!     </Category>
//!   </Categories>
//! </Toolbox>
//! ```

mod color;
mod error;
mod merge;
mod model;
mod resource;

pub use color::Color;
pub use error::ToolboxError;
pub use merge::{merge_toolbox, MergeReport};
pub use model::{Category, NodeStyle, Toolbox, ToolboxNode};
pub use resource::{LazyToolbox, MemoryResources, ResourceDatabase};
