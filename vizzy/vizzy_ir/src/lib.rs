//! Vizzy IR - core data types shared by every Vizzy++ crate.
//!
//! This crate contains:
//! - `Value`: the tagged result of evaluating an expression node
//! - `ExprId` / `InstrId`: indices into a flat program arena
//! - `ListItemInfo`: option tables for list-driven node configuration
//! - `Element`: the XML-like tree that programs and toolboxes persist as
//! - `ProgramNode`: the configuration protocol every node type implements
//!
//! # Design Philosophy
//!
//! - **Flatten Everything**: program nodes live in an arena and refer to each
//!   other through `ExprId(u32)` / `InstrId(u32)`, never `Box<Node>`
//! - **Permissive Configuration**: an unknown list key is a logged fallback,
//!   never an error
//! - **Owned Trees**: `Element` is a plain owned structure so serialization
//!   can be tested without any I/O

mod element;
mod ids;
mod list_item;
mod node;
mod value;

pub use element::{Element, ElementError};
pub use ids::{ExprId, InstrId};
pub use list_item::{ListItemInfo, ListItemKind};
pub use node::{NodeOrigin, NodeType, ProgramNode};
pub use value::{Value, ValueKind, Vector3d};
