//! Testing utilities for Vizzy++ node implementations.
//!
//! - **mocks**: an in-memory world (crafts, planets, orbits) implementing the
//!   craft/orbit collaborator
//! - **harness**: evaluation helpers and value assertions
//!
//! # Usage
//!
//! ```ignore
//! use vizzy_eval::testing::{MockWorld, MockCraft, eval_with};
//!
//! let world = MockWorld::new().with_craft(MockCraft::new(7, "Probe")).executing(7);
//! let value = eval_with(&world, |program| { /* build */ });
//! ```

pub mod harness;
pub mod mocks;

pub use harness::{assert_number, eval_root, eval_with, run_program};
pub use mocks::{MockCraft, MockPlanet, MockWorld};
