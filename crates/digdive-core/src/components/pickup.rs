//! Pickup and projectile components.

use serde::{Deserialize, Serialize};

/// A collectible treasure resting in the flooded zone.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Treasure {
    pub value: u32,
}

/// A thrown rock. Flies in a straight line until it hits a zombie or its
/// lifetime runs out.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Rock {
    /// Remaining flight time in seconds.
    pub time_left: f32,
}
