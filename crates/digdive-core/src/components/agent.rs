//! Agent components: the player, zombies, and the stats they carry.

use digdive_logic::ai::Motivation;
use digdive_logic::gauge::Gauge;
use digdive_logic::geometry::Vec2;
use serde::{Deserialize, Serialize};

/// Marker component identifying the player entity.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Player;

/// The tool/weapon point trailing the player's facing. Recomputed every tick
/// from Position + Facing; dig, fill, and rock throws all target it.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Tool {
    pub position: Vec2,
}

/// Zombie state: its current motivation and per-zombie attack cooldown.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Zombie {
    pub motivation: Motivation,
    /// Sim time of the last contact hit on the player; `None` until the
    /// first hit so a fresh zombie strikes without waiting out a cooldown.
    pub last_hit_time: Option<f64>,
}

/// Bounded health with a terminal alive flag.
///
/// Once health hits zero the agent is dead for good: further damage is a
/// no-op, and the transition happens at most once so death handling can key
/// off the return value of [`Health::take_damage`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Health {
    gauge: Gauge,
    alive: bool,
}

impl Health {
    pub fn new(max: f32) -> Self {
        Self {
            gauge: Gauge::new(max),
            alive: true,
        }
    }

    pub fn current(&self) -> f32 {
        self.gauge.current()
    }

    pub fn max(&self) -> f32 {
        self.gauge.max()
    }

    pub fn fraction(&self) -> f32 {
        self.gauge.fraction()
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Apply damage. Returns whether the agent is still alive afterwards;
    /// dead agents ignore further damage and keep returning `false`.
    pub fn take_damage(&mut self, amount: f32) -> bool {
        if !self.alive {
            return false;
        }
        self.gauge.drain(amount);
        if self.gauge.is_empty() {
            self.alive = false;
        }
        self.alive
    }
}

/// Player oxygen. Drains while submerged, refills on the surface.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Oxygen {
    pub gauge: Gauge,
}

impl Oxygen {
    pub fn new(max: f32) -> Self {
        Self {
            gauge: Gauge::new(max),
        }
    }
}
