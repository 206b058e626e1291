//! Component definitions for the ECS simulation.
//!
//! Components are pure data structs attached to entities.
//! They have no behavior beyond small invariant-keeping methods - the
//! per-tick logic lives in systems.

mod agent;
mod common;
mod pickup;

pub use agent::*;
pub use common::*;
pub use pickup::*;
