//! Surface/Submerged classification against the waterline.
//!
//! Derived, never stored: agents move continuously, so the zone is recomputed
//! from position every tick.

use serde::{Deserialize, Serialize};

use crate::constants::SURFACE_LEVEL_Y;

/// The two vertical zones with different movement and resource rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Zone {
    /// Above the waterline: gravity, jumping, oxygen refill.
    Surface,
    /// Below the waterline: free 4-way swimming, oxygen drain.
    Submerged,
}

/// Classify an agent by the position of its bottom edge. The boundary is
/// inclusive: an agent resting exactly on the waterline is on the surface.
pub fn classify(y: f32, half_height: f32) -> Zone {
    if y + half_height <= SURFACE_LEVEL_Y {
        Zone::Surface
    } else {
        Zone::Submerged
    }
}
