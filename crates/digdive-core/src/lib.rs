//! DigDive Core - Dig-and-Dive Simulation Engine
//!
//! A headless simulation of a small dig-and-dive game: a player digs through
//! ground tiles, swims the flooded space below the waterline, collects
//! treasure, and fends off zombies that chase along the surface.
//!
//! # Architecture
//!
//! The simulation uses an Entity Component System (ECS) architecture via `hecs`:
//! - **Entities**: The player, zombies, treasures, thrown rocks
//! - **Components**: Pure data attached to entities (Position, Health, Body, etc.)
//! - **Systems**: Logic that queries and updates components once per tick
//!
//! The pure gameplay arithmetic (movement rules, chase rules, dig/fill rules)
//! lives in `digdive-logic`; this crate wires it to entities and the tick
//! ordering.
//!
//! # Example
//!
//! ```rust,no_run
//! use digdive_core::prelude::*;
//! use digdive_logic::config::WorldConfig;
//!
//! let mut engine = GameEngine::new(WorldConfig::default());
//! let input = InputState::default();
//!
//! loop {
//!     engine.update(1.0 / 60.0, input);
//!     for event in engine.drain_events() {
//!         // forward to UI / scene layer
//!     }
//! }
//! ```

pub mod components;
pub mod engine;
pub mod events;
pub mod input;
pub mod systems;

/// Commonly used types for convenient importing
pub mod prelude {
    pub use crate::components::*;
    pub use crate::engine::GameEngine;
    pub use crate::events::GameEvent;
    pub use crate::input::InputState;
}
